//! Search filter types.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};

/// A single predicate over products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Keep products in this category.
    Category(Category),
    /// Keep products whose lower-cased name or description contains this
    /// already lower-cased text.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: Category) -> Self {
        Filter::Category(category)
    }

    /// Create a case-insensitive text search filter.
    pub fn text(query: &str) -> Self {
        Filter::Text(query.to_lowercase())
    }

    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => product.category == *category,
            Filter::Text(needle) => product.matches_text(needle),
        }
    }
}
