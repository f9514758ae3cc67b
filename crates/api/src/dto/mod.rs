pub mod bulk;
pub mod check;
pub mod health;

pub use bulk::{BulkCheckRequest, BulkCheckResponse, BulkMetricsDto};
pub use check::CheckEmailResponse;
pub use health::HealthResponse;
