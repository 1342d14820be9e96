//! Product type.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;

/// A product in the catalog.
///
/// Products are created once when the catalog is built and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price, never negative.
    pub price: Money,
    /// Long description, searched alongside the name.
    pub description: String,
    /// Image URL. `None` renders the storefront's placeholder image.
    pub image_url: Option<String>,
    /// Category the product is listed under.
    pub category: Category,
}

impl Product {
    /// Create a product without an image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            image_url: None,
            category,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Image URL, or `placeholder` when the product has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url.as_deref().unwrap_or(placeholder)
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Product {
        Product::new(
            1,
            "The Midnight Library",
            Money::usd(1699),
            "Between life and death there is a library.",
            Category::Fiction,
        )
    }

    #[test]
    fn test_image_or_placeholder() {
        let product = book();
        assert_eq!(product.image_or("/placeholder.png"), "/placeholder.png");

        let product = product.with_image("https://example.com/cover.jpg");
        assert_eq!(
            product.image_or("/placeholder.png"),
            "https://example.com/cover.jpg"
        );
    }

    #[test]
    fn test_matches_text() {
        let product = book();
        assert!(product.matches_text("midnight"));
        assert!(product.matches_text("death"));
        assert!(!product.matches_text("dragon"));
    }
}
