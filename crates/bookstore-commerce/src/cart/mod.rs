//! Shopping cart module.
//!
//! Contains the cart and its lines.

#[allow(clippy::module_inception)]
mod cart;

pub use cart::{Cart, CartLine, QuantityChange};
