use super::check::CheckEmailResponse;
use mailguard_domain::{BatchMetrics, CheckRequest};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct BulkCheckRequest {
    pub emails: Vec<CheckRequest>,
}

#[derive(Serialize, Debug)]
pub struct BulkCheckResponse {
    pub results: Vec<CheckEmailResponse>,
    pub metrics: BulkMetricsDto,
}

#[derive(Serialize, Debug)]
pub struct BulkMetricsDto {
    pub total: usize,
    pub ok: usize,
    pub suspect: usize,
    pub disposable: usize,
}

impl From<BatchMetrics> for BulkMetricsDto {
    fn from(metrics: BatchMetrics) -> Self {
        Self {
            total: metrics.total,
            ok: metrics.ok,
            suspect: metrics.suspect,
            disposable: metrics.disposable,
        }
    }
}
