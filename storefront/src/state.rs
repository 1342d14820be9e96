//! Store state container and message-style updates.
//!
//! All UI intents arrive as [`Msg`] values and are applied by
//! [`StoreState::dispatch`], which runs to completion and reports what changed
//! as a [`Transition`]. Nothing here knows about the reactive framework.

use bookstore_commerce::prelude::*;

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Search box changed (every keystroke).
    SetSearchTerm(String),
    /// Category chip clicked.
    SelectCategory(CategoryFilter),
    /// "Add to Cart" clicked on a product card.
    AddToCart(ProductId),
    /// Cart line "+" (1) or "-" (-1).
    UpdateQuantity(ProductId, i64),
    /// Cart button in the header.
    ToggleCart,
    /// Close button or "Continue Shopping" in the cart panel.
    CloseCart,
    /// Hamburger button on narrow screens.
    ToggleMobileMenu,
    /// "Proceed to Checkout". No backend behind it.
    Checkout,
}

/// What a dispatched message did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    FilterChanged { visible: usize },
    LineAdded { product_id: ProductId, quantity: u32 },
    QuantityChanged { product_id: ProductId, change: QuantityChange },
    CartToggled { open: bool },
    MobileMenuToggled { open: bool },
    CheckoutRequested { item_count: u32, total: Money },
    Ignored { reason: String },
}

/// Everything the storefront page owns.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    catalog: Catalog,
    cart: Cart,
    filter: FilterState,
    cart_open: bool,
    mobile_menu_open: bool,
}

impl StoreState {
    /// Fresh state over `catalog`: empty cart, no filters, panels closed.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            filter: FilterState::new(),
            cart_open: false,
            mobile_menu_open: false,
        }
    }

    /// Fresh state over the seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Products visible under the current filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(self.catalog.products())
    }

    /// Apply one message.
    pub fn dispatch(&mut self, msg: Msg) -> Transition {
        match msg {
            Msg::SetSearchTerm(term) => {
                self.filter.search_term = term;
                self.filter_changed()
            }
            Msg::SelectCategory(category) => {
                self.filter.selected_category = category;
                self.filter_changed()
            }
            Msg::AddToCart(product_id) => match self.catalog.require(product_id) {
                Ok(product) => Transition::LineAdded {
                    product_id,
                    quantity: self.cart.add_item(product),
                },
                Err(err) => Transition::Ignored {
                    reason: err.to_string(),
                },
            },
            Msg::UpdateQuantity(product_id, delta) => Transition::QuantityChanged {
                product_id,
                change: self.cart.update_quantity(product_id, delta),
            },
            Msg::ToggleCart => {
                self.cart_open = !self.cart_open;
                Transition::CartToggled {
                    open: self.cart_open,
                }
            }
            Msg::CloseCart => {
                self.cart_open = false;
                Transition::CartToggled { open: false }
            }
            Msg::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                Transition::MobileMenuToggled {
                    open: self.mobile_menu_open,
                }
            }
            Msg::Checkout => {
                if self.cart.is_empty() {
                    return Transition::Ignored {
                        reason: "checkout with an empty cart".to_string(),
                    };
                }
                Transition::CheckoutRequested {
                    item_count: self.cart.item_count(),
                    total: self.cart.total_price(),
                }
            }
        }
    }

    fn filter_changed(&self) -> Transition {
        Transition::FilterChanged {
            visible: self.visible_products().len(),
        }
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::seeded()
    }
}
