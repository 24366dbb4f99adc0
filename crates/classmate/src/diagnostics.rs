//! Injectable diagnostics.
//!
//! Non-fatal problems (an unsupported tag in a variant map, for instance)
//! are reported through a [`DiagnosticSink`] instead of a global logger, so
//! callers decide where warnings go and tests can capture them.

use std::sync::Mutex;

/// Receives non-fatal diagnostics.
pub trait DiagnosticSink {
    /// Reports a warning. Implementations must not panic.
    fn warn(&self, message: &str);
}

/// Default sink: forwards warnings to `tracing` under the `classmate` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "classmate", "{}", message);
    }
}

/// Sink that keeps every warning in memory.
///
/// Useful in tests, or to surface warnings in a developer overlay.
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the warnings recorded so far, oldest first.
    pub fn warnings(&self) -> Vec<String> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, message: &str) {
        let mut guard = match self.warnings.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(message.to_string());
    }
}
