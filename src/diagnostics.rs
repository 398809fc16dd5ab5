//! Non-fatal diagnostics raised while resolving curves.

use std::sync::{Mutex, PoisonError};

use crate::source::CurveId;

/// A recorded warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    /// Curve the warning refers to.
    pub curve: CurveId,
    pub message: String,
}

/// Receives non-fatal diagnostics. Reporting never alters control flow.
pub trait DiagnosticSink: Send + Sync {
    /// Reports a warning about `curve`.
    fn warning(&self, curve: &CurveId, message: &str);
}

/// Forwards diagnostics to `tracing` as `WARN` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warning(&self, curve: &CurveId, message: &str) {
        tracing::warn!(curve = %curve, "{message}");
    }
}

/// Collects diagnostics in memory. Safe to share between threads.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of recorded warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether no warning has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn warning(&self, curve: &CurveId, message: &str) {
        tracing::warn!(curve = %curve, "{message}");
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Warning {
                curve: curve.clone(),
                message: message.to_owned(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_records_in_order() {
        let sink = CollectingSink::new();
        let id = CurveId::new(7, "IfcIndexedPolyCurve");
        sink.warning(&id, "first");
        sink.warning(&id, "second");

        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].message, "first");
        assert_eq!(warnings[1].curve, id);
    }

    #[test]
    fn tracing_sink_does_not_record() {
        TracingSink.warning(&CurveId::default(), "ignored");
    }
}
