//! Structured logging for the Local Bookstore storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one page session
//! - `StoreLogger` - Structured logger with session and component context
//! - `LogSink` - Where rendered lines go (stderr, memory, or a host-provided sink)

mod logging;
mod session;
mod sink;

pub use logging::*;
pub use session::*;
pub use sink::*;
