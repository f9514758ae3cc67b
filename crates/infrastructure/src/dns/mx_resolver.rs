use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use mailguard_application::ports::MxLookup;
use mailguard_domain::DomainError;
use std::time::Duration;
use tracing::{debug, info};

/// MX presence lookup over hickory-resolver.
///
/// Every negative outcome (NXDOMAIN, empty answer, timeout, transport
/// failure) maps to `Ok(false)`: the classifier treats MX absence as a
/// heuristic signal and must never fail a request over DNS trouble.
pub struct HickoryMxLookup {
    resolver: TokioAsyncResolver,
}

impl HickoryMxLookup {
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;

        // System resolver config when available, public resolvers otherwise.
        let resolver = match hickory_resolver::system_conf::read_system_conf() {
            Ok((config, _)) => TokioAsyncResolver::tokio(config, opts),
            Err(e) => {
                debug!(error = %e, "System resolver config unavailable, using defaults");
                TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
            }
        };

        info!(timeout_ms = timeout.as_millis() as u64, "MX resolver created");
        Self { resolver }
    }
}

#[async_trait]
impl MxLookup for HickoryMxLookup {
    async fn has_mx(&self, domain: &str) -> Result<bool, DomainError> {
        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) => Ok(lookup.iter().next().is_some()),
            Err(e) => {
                debug!(domain, error = %e, "MX lookup failed, treating as absent");
                Ok(false)
            }
        }
    }
}
