//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Currency;

/// Errors that can occur while building or querying the catalog.
///
/// Cart and filter operations are total and never return these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Catalog prices must not be negative.
    #[error("Negative price for {product_id}: {amount_cents} cents")]
    NegativePrice {
        product_id: ProductId,
        amount_cents: i64,
    },

    /// Every catalog price must share one currency.
    #[error("Product {product_id} is priced in {found}, catalog uses {expected}")]
    MixedCurrency {
        product_id: ProductId,
        expected: Currency,
        found: Currency,
    },

    /// Category label not in the fixed category set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Currency code not supported.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CommerceError::NegativePrice {
            product_id: ProductId::new(7),
            amount_cents: -100,
        };
        assert_eq!(err.to_string(), "Negative price for 7: -100 cents");

        let err = CommerceError::UnknownCategory("Poetry".to_string());
        assert_eq!(err.to_string(), "Unknown category: Poetry");

        let err = CommerceError::MixedCurrency {
            product_id: ProductId::new(2),
            expected: Currency::USD,
            found: Currency::EUR,
        };
        assert_eq!(err.to_string(), "Product 2 is priced in EUR, catalog uses USD");
    }
}
