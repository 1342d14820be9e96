//! Log sinks.

use std::sync::{Arc, Mutex};

use crate::logging::LogLevel;

/// Destination for rendered log lines.
pub trait LogSink: Send + Sync {
    /// Write one rendered line.
    fn write(&self, level: LogLevel, line: &str);
}

/// Writes every line to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, oldest first.
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((level, line.to_string()));
    }
}
