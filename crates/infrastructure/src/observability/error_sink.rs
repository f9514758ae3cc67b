use mailguard_application::ports::ErrorSink;
use mailguard_domain::DomainError;
use tracing::error;

/// Error sink that reports through the process log stream. Deployments
/// with an external error reporter substitute their own `ErrorSink`;
/// this one keeps degraded-path failures visible without any extra
/// service dependency.
#[derive(Debug, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn capture(&self, context: &str, error: &DomainError) {
        error!(context, error = %error, "Degraded-path failure reported");
    }
}
