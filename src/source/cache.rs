use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::{
    network::ZoneGraph,
    source::{self, ZoneGraphSource},
};

/// Loads the graph from the wrapped source on first use and serves the same
/// instance afterwards. Failed loads are not remembered, the next call retries.
pub struct CachedZoneGraph<S> {
    source: S,
    cached: RwLock<Option<Arc<ZoneGraph>>>,
}

impl<S: ZoneGraphSource> CachedZoneGraph<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: RwLock::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cached
            .read()
            .map(|cached| cached.is_some())
            .unwrap_or(false)
    }

    /// Drops the cached graph so the next load goes back to the source.
    pub fn invalidate(&self) {
        if let Ok(mut cached) = self.cached.write() {
            cached.take();
        }
    }

    pub fn inner(&self) -> &S {
        &self.source
    }
}

impl<S: ZoneGraphSource> ZoneGraphSource for CachedZoneGraph<S> {
    fn load_graph(&self) -> Result<Arc<ZoneGraph>, source::Error> {
        if let Some(graph) = self.cached.read().ok().and_then(|cached| cached.as_ref().cloned()) {
            return Ok(graph);
        }

        let mut cached = self
            .cached
            .write()
            .map_err(|_| source::Error::Unavailable("zone graph cache is poisoned".into()))?;
        // Another caller may have filled it while we waited for the lock
        if let Some(graph) = cached.as_ref() {
            return Ok(graph.clone());
        }
        let graph = self.source.load_graph()?;
        debug!("Cached zone graph with {} zones", graph.len());
        *cached = Some(graph.clone());
        Ok(graph)
    }
}
