//! TTL cache over the orchestrator's tool catalog

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{error, info};

use crate::client::Orchestrator;
use crate::config::DEFAULT_CACHE_TTL_MS;
use crate::types::ToolDescriptor;

/// An immutable catalog fetched at a point in time
#[derive(Debug)]
pub struct CatalogSnapshot {
    /// Tools in orchestrator order
    pub tools: Arc<Vec<ToolDescriptor>>,
    /// When the refresh that produced this snapshot started
    pub fetched_at: Instant,
}

impl CatalogSnapshot {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}

/// Caches the last successful tool list for a bounded time
///
/// A failed refresh yields an empty list for that call instead of the last
/// good snapshot. The snapshot is replaced wholesale; the lock is never held
/// across the HTTP round trip, so concurrent stale reads may both refetch.
pub struct ToolCatalog {
    orchestrator: Arc<dyn Orchestrator>,
    ttl: Duration,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl ToolCatalog {
    /// Create a catalog with the default TTL
    pub fn new(orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self::with_ttl(orchestrator, Duration::from_millis(DEFAULT_CACHE_TTL_MS))
    }

    pub fn with_ttl(orchestrator: Arc<dyn Orchestrator>, ttl: Duration) -> Self {
        Self {
            orchestrator,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current snapshot, fresh or not
    pub async fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.snapshot.read().await.clone()
    }

    /// Return the cached tools, refetching once the snapshot is stale
    pub async fn get_tools(&self) -> Arc<Vec<ToolDescriptor>> {
        let now = Instant::now();

        let cached = self.snapshot.read().await.clone();
        if let Some(snapshot) = cached {
            if snapshot.is_fresh(now, self.ttl) {
                return Arc::clone(&snapshot.tools);
            }
        }

        match self.orchestrator.fetch_tool_list().await {
            Ok(tools) => {
                info!("Loaded {} tools from orchestrator", tools.len());
                let snapshot = Arc::new(CatalogSnapshot {
                    tools: Arc::new(tools),
                    fetched_at: now,
                });
                let tools = Arc::clone(&snapshot.tools);
                *self.snapshot.write().await = Some(snapshot);
                tools
            }
            Err(e) => {
                error!("Error fetching tools: {}", e);
                Arc::new(Vec::new())
            }
        }
    }
}
