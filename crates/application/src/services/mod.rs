mod blocklist;
mod keywords;
mod mx_cache;
mod rate_limiter;
mod usage;

pub use blocklist::BlocklistStore;
pub use keywords::KeywordMatcher;
pub use mx_cache::CachedMxResolver;
pub use rate_limiter::{RateDecision, RateLimiter, ANONYMOUS_IDENTITY};
pub use usage::UsageRecorder;
