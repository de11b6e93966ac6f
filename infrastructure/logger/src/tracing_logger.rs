use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every business-layer line is emitted under. `info` lines on this
/// target form the audit trail.
pub const AUDIT_TARGET: &str = "inventory";

/// Forwards business-layer log lines to `tracing` under [`AUDIT_TARGET`].
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: AUDIT_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: AUDIT_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: AUDIT_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: AUDIT_TARGET, "{}", message);
    }
}
