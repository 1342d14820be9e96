//! Page session identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier for one storefront page session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new session ID.
    ///
    /// Uses `chrono` for the clock since `std::time::SystemTime` is not
    /// available in the browser.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default() as u64;
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:04x}", nanos, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
