//! Mailguard Infrastructure Layer
//!
//! Concrete adapters behind the application ports: Redis and in-memory
//! key-value caches, hickory-based MX lookups, and the file-backed
//! blocklist source.
pub mod blocklist;
pub mod cache;
pub mod dns;
pub mod observability;

pub use blocklist::FileBlocklistSource;
pub use cache::{MemoryKvCache, RedisKvCache};
pub use dns::HickoryMxLookup;
pub use observability::TracingErrorSink;
