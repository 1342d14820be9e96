//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityChange {
    /// The line now has this quantity (always at least 1).
    Updated { quantity: u32 },
    /// The quantity reached zero and the line was removed.
    Removed,
    /// No line for that product; the cart is unchanged.
    Missing,
}

/// An in-memory shopping cart.
///
/// Lines keep insertion order and there is at most one line per product.
/// No line ever has a quantity of zero. Products are expected to come from
/// one [`Catalog`](crate::catalog::Catalog), which fixes a single currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line or appends a new line with quantity 1.
    /// Returns the line's new quantity.
    pub fn add_item(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.lines.push(CartLine::new(product.clone()));
        1
    }

    /// Change a line's quantity by `delta`.
    ///
    /// The result is clamped at zero and a zero-quantity line is removed.
    /// Unknown ids leave the cart unchanged.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityChange {
        let Some(index) = self.lines.iter().position(|l| l.product.id == product_id) else {
            return QuantityChange::Missing;
        };

        let current = i64::from(self.lines[index].quantity);
        let next = current.saturating_add(delta).clamp(0, i64::from(u32::MAX));
        if next == 0 {
            self.lines.remove(index);
            return QuantityChange::Removed;
        }

        // Clamped to u32 range above.
        let quantity = next as u32;
        self.lines[index].quantity = quantity;
        QuantityChange::Updated { quantity }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Currency of the cart's prices: that of the first line, or the default
    /// when the cart is empty.
    pub fn currency(&self) -> Currency {
        self.lines
            .first()
            .map(|l| l.product.price.currency)
            .unwrap_or_default()
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Money::zero(self.currency()), |acc, m| acc + m)
    }
}

/// A line in the cart: a copy of the product and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product snapshot taken when the line was created.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use proptest::prelude::*;

    fn midnight_library() -> Product {
        Product::new(1, "The Midnight Library", Money::usd(1699), "", Category::Fiction)
    }

    fn atomic_habits() -> Product {
        Product::new(2, "Atomic Habits", Money::usd(1499), "", Category::SelfHelp)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Money::usd(0));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(&midnight_library()), 1);
        assert_eq!(cart.add_item(&midnight_library()), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&atomic_habits());
        cart.add_item(&midnight_library());
        cart.add_item(&atomic_habits());

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&midnight_library());

        assert_eq!(
            cart.update_quantity(ProductId::new(1), 1),
            QuantityChange::Updated { quantity: 2 }
        );
        assert_eq!(
            cart.update_quantity(ProductId::new(1), -1),
            QuantityChange::Updated { quantity: 1 }
        );
        assert_eq!(
            cart.update_quantity(ProductId::new(1), -1),
            QuantityChange::Removed
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_at_zero() {
        let mut cart = Cart::new();
        cart.add_item(&midnight_library());
        cart.add_item(&midnight_library());

        assert_eq!(
            cart.update_quantity(ProductId::new(1), -10),
            QuantityChange::Removed
        );
        assert!(cart.get_item(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&midnight_library());
        let before = cart.clone();

        assert_eq!(
            cart.update_quantity(ProductId::new(99), -1),
            QuantityChange::Missing
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add_item(&midnight_library());
        cart.add_item(&atomic_habits());
        cart.add_item(&atomic_habits());

        assert_eq!(cart.total_price().amount_cents, 4697);
        assert_eq!(cart.total_price().display(), "$46.97");
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.lines()[1].line_total(), Money::usd(2998));
    }

    #[test]
    fn test_total_uses_line_currency() {
        let catalog = Catalog::new(vec![Product::new(
            1,
            "Book",
            Money::new(1000, Currency::EUR),
            "",
            Category::Fiction,
        )])
        .unwrap();

        let mut cart = Cart::new();
        assert_eq!(cart.currency(), Currency::USD);
        cart.add_item(&catalog.products()[0]);
        cart.add_item(&catalog.products()[0]);

        assert_eq!(cart.currency(), Currency::EUR);
        assert_eq!(cart.total_price(), Money::new(2000, Currency::EUR));
        assert_eq!(cart.total_price().display(), "\u{20ac}20.00");

        cart.update_quantity(ProductId::new(1), -2);
        assert_eq!(cart.total_price(), Money::usd(0));
    }

    proptest! {
        #[test]
        fn prop_no_line_at_or_below_zero(
            ops in prop::collection::vec((0u32..3, -3i64..=3), 0..40)
        ) {
            let products = [midnight_library(), atomic_habits()];
            let mut cart = Cart::new();
            for (index, delta) in ops {
                match products.get(index as usize) {
                    // Index 2 means "add" for a random product.
                    None => { cart.add_item(&products[(delta.unsigned_abs() % 2) as usize]); }
                    Some(product) => { cart.update_quantity(product.id, delta); }
                }
                prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
                prop_assert!(cart.unique_item_count() <= products.len());
                let expected: u32 = cart.lines().iter().map(|l| l.quantity).sum();
                prop_assert_eq!(cart.item_count(), expected);
            }
        }
    }
}
