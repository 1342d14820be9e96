//! Derived view state.
//!
//! [`StoreView::derive`] is recomputed after every dispatch. Components only
//! read from it; all formatting happens here so it can be tested natively.

use bookstore_commerce::prelude::*;

use crate::config::StorefrontConfig;
use crate::state::StoreState;

pub const NO_RESULTS_MESSAGE: &str = "No products found. Try a different search term or category.";
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// A category chip.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipView {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub selected: bool,
}

/// A product card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub category: &'static str,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// A line in the cart panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRowView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreView {
    pub search_term: String,
    pub chips: Vec<ChipView>,
    pub products: Vec<ProductCardView>,
    /// Show [`NO_RESULTS_MESSAGE`] instead of the grid.
    pub no_results: bool,
    pub cart_rows: Vec<CartRowView>,
    /// Show [`EMPTY_CART_MESSAGE`] instead of the rows.
    pub cart_empty: bool,
    pub item_count: u32,
    /// The header badge is hidden while the cart is empty.
    pub show_badge: bool,
    pub total: String,
    pub cart_open: bool,
    pub mobile_menu_open: bool,
}

impl StoreView {
    pub fn derive(state: &StoreState, config: &StorefrontConfig) -> Self {
        let currency = config.display.currency;
        let placeholder = config.display.placeholder_image.as_str();
        let price = |money: Money| money.in_currency(currency).display();

        let selected = state.filter().selected_category;
        let chips = CategoryFilter::chips()
            .map(|filter| ChipView {
                filter,
                label: filter.label(),
                selected: filter == selected,
            })
            .collect();

        let products: Vec<ProductCardView> = state
            .visible_products()
            .into_iter()
            .map(|p| ProductCardView {
                id: p.id,
                name: p.name.clone(),
                category: p.category.label(),
                description: p.description.clone(),
                price: price(p.price),
                image: p.image_or(placeholder).to_string(),
            })
            .collect();

        let cart = state.cart();
        let cart_rows: Vec<CartRowView> = cart
            .lines()
            .iter()
            .map(|line| CartRowView {
                id: line.product.id,
                name: line.product.name.clone(),
                image: line.product.image_or(placeholder).to_string(),
                unit_price: price(line.product.price),
                quantity: line.quantity,
                subtotal: price(line.line_total()),
            })
            .collect();

        let item_count = cart.item_count();

        Self {
            search_term: state.filter().search_term.clone(),
            chips,
            no_results: products.is_empty(),
            products,
            cart_empty: cart_rows.is_empty(),
            cart_rows,
            item_count,
            show_badge: item_count > 0,
            total: price(cart.total_price()),
            cart_open: state.cart_open(),
            mobile_menu_open: state.mobile_menu_open(),
        }
    }
}
