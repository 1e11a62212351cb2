//! Shared read-only access to the loaded config.
//!
//! Reload never mutates in place: the embedding process builds a brand-new
//! `NodeConfig` through the loader and installs it here; readers holding an
//! older snapshot keep a consistent view until they ask again.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::model::NodeConfig;

/// Atomically-swappable handle to the current configuration.
pub struct ConfigHandle {
    inner: ArcSwap<NodeConfig>,
}

impl ConfigHandle {
    pub fn new(initial: NodeConfig) -> Self {
        ConfigHandle {
            inner: ArcSwap::from_pointee(initial),
        }
    }

    /// Snapshot of the current config.
    pub fn current(&self) -> Arc<NodeConfig> {
        self.inner.load_full()
    }

    /// Replaces the whole config in one atomic step.
    pub fn install(&self, next: NodeConfig) {
        tracing::info!("installing reloaded config");
        self.inner.store(Arc::new(next));
    }
}
