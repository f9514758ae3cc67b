use crate::ports::{BlocklistSource, ErrorSink, NullErrorSink};
use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// In-memory set of blocklisted domains behind an atomically swappable
/// snapshot. Lookups are lock-free; `reload` builds a fresh set and swaps
/// it in, leaving in-flight readers on the old snapshot. Concurrent
/// reloads may race; both produce equivalent sets, so no coordination
/// is needed.
pub struct BlocklistStore {
    source: Arc<dyn BlocklistSource>,
    snapshot: ArcSwap<HashSet<String>>,
    error_sink: Arc<dyn ErrorSink>,
}

impl BlocklistStore {
    pub fn new(source: Arc<dyn BlocklistSource>) -> Self {
        Self {
            source,
            snapshot: ArcSwap::from_pointee(HashSet::new()),
            error_sink: Arc::new(NullErrorSink),
        }
    }

    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = sink;
        self
    }

    /// Read the source and swap in the parsed set. An unreadable source
    /// is logged and leaves an empty set in place, never an error.
    pub async fn load(&self) {
        let domains = match self.source.read().await {
            Ok(text) => parse_blocklist(&text),
            Err(e) => {
                warn!(error = %e, "Blocklist source unreadable, using empty set");
                self.error_sink.capture("blocklist_load", &e);
                HashSet::new()
            }
        };

        info!(domains = domains.len(), "Blocklist snapshot loaded");
        self.snapshot.store(Arc::new(domains));
    }

    pub async fn reload(&self) {
        self.load().await;
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.snapshot.load().contains(domain)
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }
}

/// Parse newline-delimited text: trim, drop blanks and `#` comments,
/// lowercase the rest.
fn parse_blocklist(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
