//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SessionId;
use crate::sink::{LogSink, StderrSink};

/// Log level for structured logs.
///
/// Serializes lowercase and deserializes through [`FromStr`], ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Unrecognised level or format name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log {kind}: {value}")]
pub struct ParseLogSettingError {
    kind: &'static str,
    value: String,
}

impl FromStr for LogLevel {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLogSettingError {
                kind: "level",
                value: s.to_string(),
            }),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogFormat {
    /// JSON format.
    Json,
    /// Human-readable format (for development).
    #[default]
    Human,
}

impl FromStr for LogFormat {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" => Ok(Self::Human),
            _ => Err(ParseLogSettingError {
                kind: "format",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ParseLogSettingError;

    fn try_from(value: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        value.parse()
    }
}

impl TryFrom<String> for LogFormat {
    type Error = ParseLogSettingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Emitting component (e.g., "cart").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Wall-clock time of the entry.
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}]", self.level);

        if let Some(component) = &self.component {
            s.push_str(&format!(" {}:", component));
        }
        s.push(' ');
        s.push_str(&self.message);

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Human => self.to_human(),
        }
    }
}

/// Structured logger with session context.
///
/// Cheap to clone; clones share the sink.
#[derive(Clone)]
pub struct StoreLogger {
    session_id: SessionId,
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for StoreLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreLogger")
            .field("session_id", &self.session_id)
            .field("component", &self.component)
            .field("min_level", &self.min_level)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl StoreLogger {
    /// Create a new logger writing to stderr.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::Human,
            sink: Arc::new(StderrSink),
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the sink.
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// A logger for a sub-component sharing session, level, format and sink.
    pub fn child(&self, component: impl Into<String>) -> Self {
        self.clone().with_component(component)
    }

    /// Whether entries at `level` are emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            fields,
            timestamp: Utc::now(),
        };

        self.sink.write(level, &entry.render(self.format));
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StoreLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StoreLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StoreLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}
