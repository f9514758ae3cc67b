use super::CheckEmailUseCase;
use futures::future::join_all;
use mailguard_domain::{BatchMetrics, CheckRequest, DomainError, EmailAddress, Verdict};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub results: Vec<Verdict>,
    pub metrics: BatchMetrics,
}

/// Classifies a bounded list of requests concurrently.
///
/// The batch is validated up front: size bounds and every address's
/// syntax are checked before any classification work starts, so a
/// rejected batch performs no lookups at all. Results preserve input
/// order; per-classification counts are aggregated over the full set.
pub struct CheckBulkUseCase {
    check_email: Arc<CheckEmailUseCase>,
    max_batch: usize,
}

impl CheckBulkUseCase {
    pub fn new(check_email: Arc<CheckEmailUseCase>, max_batch: usize) -> Self {
        Self {
            check_email,
            max_batch,
        }
    }

    pub async fn execute(&self, requests: &[CheckRequest]) -> Result<BatchOutcome, DomainError> {
        if requests.is_empty() {
            return Err(DomainError::EmptyBatch);
        }
        if requests.len() > self.max_batch {
            return Err(DomainError::BatchTooLarge {
                got: requests.len(),
                max: self.max_batch,
            });
        }

        let emails = requests
            .iter()
            .map(|r| EmailAddress::parse(&r.email))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(batch = emails.len(), "Classifying bulk request");

        let futures = emails.iter().map(|email| self.check_email.classify(email));
        let results = join_all(futures)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let mut metrics = BatchMetrics::default();
        for verdict in &results {
            metrics.record(verdict.classification);
        }

        Ok(BatchOutcome { results, metrics })
    }
}
