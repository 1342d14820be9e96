//! Catalog, search and cart logic for the Local Bookstore storefront.
//!
//! This crate has no UI and no IO. It provides:
//!
//! - **Catalog**: Products, categories and the compiled-in seed catalog
//! - **Search**: The filter engine that picks the visible products
//! - **Cart**: Line items keyed by product, quantity changes, totals
//!
//! # Example
//!
//! ```rust
//! use bookstore_commerce::prelude::*;
//!
//! let catalog = seed_catalog();
//! let filter = FilterState::new().with_category(CategoryFilter::Only(Category::Fiction));
//! let fiction = filter.apply(catalog.products());
//! assert_eq!(fiction.len(), 2);
//!
//! let mut cart = Cart::new();
//! for product in &fiction {
//!     cart.add_item(product);
//! }
//! assert_eq!(cart.total_price().display(), "$32.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use cart::{Cart, CartLine, QuantityChange};
pub use catalog::{Catalog, Category, CategoryFilter, Product};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{seed_catalog, Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, QuantityChange};

    // Search
    pub use crate::search::{visible_products, Filter, FilterState};
}
