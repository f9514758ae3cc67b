use crate::services::{BlocklistStore, CachedMxResolver, KeywordMatcher};
use chrono::Utc;
use mailguard_domain::scoring::{is_high_entropy, score_signals, SignalSet};
use mailguard_domain::{CheckRequest, DomainError, EmailAddress, Verdict};
use std::sync::Arc;
use tracing::debug;

/// Classifies a single email address.
///
/// Evaluates the four signals (blocklist membership, MX presence,
/// keyword match, local-part entropy), scores them and assembles a
/// fresh `Verdict`. The only caller-visible failure is invalid address
/// syntax; DNS and cache trouble degrade into signal values.
pub struct CheckEmailUseCase {
    blocklist: Arc<BlocklistStore>,
    mx: Arc<CachedMxResolver>,
    keywords: Arc<KeywordMatcher>,
    soft_threshold: f64,
    disposable_threshold: f64,
    result_ttl_seconds: u64,
    version: String,
}

impl CheckEmailUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        blocklist: Arc<BlocklistStore>,
        mx: Arc<CachedMxResolver>,
        keywords: Arc<KeywordMatcher>,
        soft_threshold: f64,
        disposable_threshold: f64,
        result_ttl_seconds: u64,
        version: String,
    ) -> Self {
        Self {
            blocklist,
            mx,
            keywords,
            soft_threshold,
            disposable_threshold,
            result_ttl_seconds,
            version,
        }
    }

    pub async fn execute(&self, request: &CheckRequest) -> Result<Verdict, DomainError> {
        let email = EmailAddress::parse(&request.email)?;
        self.classify(&email).await
    }

    pub(crate) async fn classify(&self, email: &EmailAddress) -> Result<Verdict, DomainError> {
        let domain = email.domain();
        let local_part = email.local_part();

        let signals = SignalSet {
            blocklisted: self.blocklist.contains(domain),
            has_mx: self.mx.has_mx(domain).await,
            keyword_match: self.keywords.matches(local_part, domain),
            high_entropy: is_high_entropy(local_part),
        };

        let scored = score_signals(signals, self.soft_threshold, self.disposable_threshold);

        debug!(
            email = %email,
            domain,
            classification = %scored.classification,
            score = scored.score,
            "Email classified"
        );

        Ok(Verdict {
            email: email.as_str().to_string(),
            domain: domain.to_string(),
            classification: scored.classification,
            score: scored.score,
            reasons: scored.reasons,
            ttl_seconds: self.result_ttl_seconds,
            checked_at: Utc::now(),
            version: self.version.clone(),
        })
    }
}
