use mailguard_domain::DomainError;

/// Fire-and-forget observability hook for degraded-path failures
/// (cache unavailable, blocklist unreadable). Swappable so deployments
/// can wire an external reporter; the default discards everything.
pub trait ErrorSink: Send + Sync {
    fn capture(&self, context: &str, error: &DomainError);
}

/// Default sink: drops every report.
#[derive(Debug, Default)]
pub struct NullErrorSink;

impl ErrorSink for NullErrorSink {
    fn capture(&self, _context: &str, _error: &DomainError) {}
}
