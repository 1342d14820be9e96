//! Product catalog module.
//!
//! Contains products, categories and the immutable catalog they live in.

mod category;
mod product;
mod seed;

pub use category::{Category, CategoryFilter};
pub use product::Product;
pub use seed::seed_catalog;

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::ProductId;

/// An ordered, immutable list of products.
///
/// All prices share one currency, so cart totals never mix currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids, negative prices and mixed
    /// currencies.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        let currency = products.first().map(|p| p.price.currency);
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
            if product.price.is_negative() {
                return Err(CommerceError::NegativePrice {
                    product_id: product.id,
                    amount_cents: product.price.amount_cents,
                });
            }
            if let Some(expected) = currency.filter(|c| *c != product.price.currency) {
                return Err(CommerceError::MixedCurrency {
                    product_id: product.id,
                    expected,
                    found: product.price.currency,
                });
            }
        }
        Ok(Self { products })
    }

    /// Build from data already known to be valid (the seed list).
    pub(crate) fn from_trusted(products: Vec<Product>) -> Self {
        debug_assert!(Catalog::new(products.clone()).is_ok());
        Self { products }
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing when it is absent.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: u32, cents: i64) -> Product {
        Product::new(id, format!("Book {id}"), Money::usd(cents), "", Category::Fiction)
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![product(1, 100), product(1, 200)]);
        assert_eq!(
            result,
            Err(CommerceError::DuplicateProduct(ProductId::new(1)))
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![product(1, -1)]);
        assert!(matches!(
            result,
            Err(CommerceError::NegativePrice { amount_cents: -1, .. })
        ));
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let euro = Product::new(
            2,
            "Book 2",
            Money::new(1000, Currency::EUR),
            "",
            Category::Fiction,
        );
        let result = Catalog::new(vec![product(1, 100), euro]);
        assert_eq!(
            result,
            Err(CommerceError::MixedCurrency {
                product_id: ProductId::new(2),
                expected: Currency::USD,
                found: Currency::EUR,
            })
        );
    }

    #[test]
    fn test_single_foreign_currency_accepted() {
        let euro = Product::new(
            1,
            "Book 1",
            Money::new(1000, Currency::EUR),
            "",
            Category::Fiction,
        );
        assert_eq!(Catalog::new(vec![euro]).unwrap().len(), 1);
    }

    #[test]
    fn test_lookup() {
        let catalog = seed_catalog();
        assert_eq!(catalog.get(ProductId::new(6)).unwrap().name, "Circe");
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert_eq!(
            catalog.require(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(ProductId::new(99)))
        );
    }
}
