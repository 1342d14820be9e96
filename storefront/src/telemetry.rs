//! Logging glue between the store state and the observability crate.

use bookstore_commerce::QuantityChange;
use bookstore_observability::{LogLevel, LogSink, SessionId, StoreLogger};

use crate::config::LoggingConfig;
use crate::state::Transition;

/// Writes to the browser console (stdout/stderr when not in a browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Trace | LogLevel::Debug | LogLevel::Info => leptos::logging::log!("{}", line),
            LogLevel::Warn => leptos::logging::warn!("{}", line),
            LogLevel::Error => leptos::logging::error!("{}", line),
        }
    }
}

/// Root logger for one page session.
pub fn session_logger(config: &LoggingConfig) -> StoreLogger {
    StoreLogger::new(SessionId::generate())
        .with_component("storefront")
        .with_min_level(config.level)
        .with_format(config.format)
        .with_sink(ConsoleSink)
}

/// Log what a dispatched message did.
pub fn log_transition(logger: &StoreLogger, transition: &Transition) {
    match transition {
        Transition::FilterChanged { visible } => logger
            .debug_builder("filter changed")
            .field_i64("visible", *visible as i64)
            .emit(),
        Transition::LineAdded {
            product_id,
            quantity,
        } => logger
            .info_builder("added to cart")
            .field_i64("product_id", i64::from(product_id.get()))
            .field_i64("quantity", i64::from(*quantity))
            .emit(),
        Transition::QuantityChanged { product_id, change } => {
            let product_id = i64::from(product_id.get());
            match change {
                QuantityChange::Updated { quantity } => logger
                    .info_builder("quantity updated")
                    .field_i64("product_id", product_id)
                    .field_i64("quantity", i64::from(*quantity))
                    .emit(),
                QuantityChange::Removed => logger
                    .info_builder("line removed")
                    .field_i64("product_id", product_id)
                    .emit(),
                QuantityChange::Missing => logger
                    .warn_builder("quantity change for product not in cart")
                    .field_i64("product_id", product_id)
                    .emit(),
            }
        }
        Transition::CartToggled { open } => logger
            .debug_builder("cart panel toggled")
            .field_bool("open", *open)
            .emit(),
        Transition::MobileMenuToggled { open } => logger
            .debug_builder("mobile menu toggled")
            .field_bool("open", *open)
            .emit(),
        Transition::CheckoutRequested { item_count, total } => logger
            .info_builder("checkout requested")
            .field_i64("items", i64::from(*item_count))
            .field("total", total.display())
            .emit(),
        Transition::Ignored { reason } => logger
            .warn_builder("message ignored")
            .field("reason", reason.as_str())
            .emit(),
    }
}
