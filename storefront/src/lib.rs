//! Local Bookstore storefront.
//!
//! A single client-side rendered page:
//! - Catalog grid with category chips and a live search box
//! - In-memory cart panel with quantity controls and a running total
//! - Checkout button that only logs the request
//!
//! State lives in [`state::StoreState`] and changes only through
//! [`state::Msg`]; the page renders [`view_model::StoreView`], which is
//! derived again after every message.

pub mod app;
pub mod config;
pub mod state;
pub mod telemetry;
pub mod view_model;

pub use app::App;
pub use config::StorefrontConfig;
pub use state::{Msg, StoreState, Transition};
pub use view_model::StoreView;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
