pub mod api_key;
pub mod rate_limit;

pub use api_key::{require_api_key, ApiIdentity};
pub use rate_limit::enforce_rate_limit;
