mod tracing_logger;

pub use tracing_logger::{AUDIT_TARGET, TracingLogger};
