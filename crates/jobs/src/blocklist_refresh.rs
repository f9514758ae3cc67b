use mailguard_application::services::BlocklistStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Background job that periodically reloads the blocklist snapshot.
///
///   - `Arc<Self>` spawn so the job owns its state across ticks
///   - First tick consumed immediately so no reload happens at startup
///     (the store is loaded during bootstrap)
///   - Default interval: 24 h (86 400 s)
pub struct BlocklistRefreshJob {
    store: Arc<BlocklistStore>,
    interval_secs: u64,
}

impl BlocklistRefreshJob {
    pub fn new(store: Arc<BlocklistStore>) -> Self {
        Self {
            store,
            interval_secs: 86_400,
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting blocklist refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                interval.tick().await;
                info!("BlocklistRefreshJob: reloading blocklist");
                self.store.reload().await;
                info!(
                    domains = self.store.len(),
                    "BlocklistRefreshJob: reload completed"
                );
            }
        });
    }
}
