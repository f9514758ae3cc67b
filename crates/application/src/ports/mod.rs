mod blocklist_source;
mod error_sink;
mod kv_cache;
mod mx_lookup;

pub use blocklist_source::BlocklistSource;
pub use error_sink::{ErrorSink, NullErrorSink};
pub use kv_cache::KvCache;
pub use mx_lookup::MxLookup;
