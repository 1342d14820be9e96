//! Filter state builder.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryFilter, Product};
use crate::search::visible_products;

/// The transient search box and category chip state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterState {
    /// Text typed in the search box, possibly empty.
    pub search_term: String,
    /// The selected category chip.
    pub selected_category: CategoryFilter,
}

impl FilterState {
    /// Empty search, "All" selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the selected category.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.selected_category = category;
        self
    }

    /// Products visible under this state, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        visible_products(catalog, self.selected_category, &self.search_term)
    }
}
