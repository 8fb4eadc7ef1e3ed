//! Logging broker backed by `tracing`
//!
//! Critical failures go out at `ERROR` with `severity = "critical"` so log
//! pipelines can page on them; the remaining severities map to their level.

use agora_core::{FoundationError, LoggingBroker};
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoggingBroker;

impl LoggingBroker for TracingLoggingBroker {
    fn log_critical(&self, failure: &FoundationError) {
        error!(
            severity = "critical",
            entity = failure.entity(),
            category = %failure.category(),
            cause = %root_cause(failure),
            "{failure}"
        );
    }

    fn log_error(&self, failure: &FoundationError) {
        error!(
            severity = "error",
            entity = failure.entity(),
            category = %failure.category(),
            cause = %root_cause(failure),
            "{failure}"
        );
    }

    fn log_warning(&self, failure: &FoundationError) {
        warn!(
            severity = "warning",
            entity = failure.entity(),
            category = %failure.category(),
            cause = %root_cause(failure),
            "{failure}"
        );
    }
}

/// Innermost error in the source chain, rendered for the log line
fn root_cause(failure: &FoundationError) -> String {
    let mut current: &dyn std::error::Error = failure;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
