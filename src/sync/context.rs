//! Sync context — central wiring for one browsing surface.

use crate::engine::WebEngine;
use crate::storage::KeyValueStore;
use crate::sync::adapter::CookieStoreAdapter;
use crate::sync::controller::SyncController;
use crate::sync::gate::NavigationGate;
use std::sync::Arc;

/// Fixed key the durable cookie record is stored under.
pub const DEFAULT_RECORD_KEY: &str = "cookies.v1";

/// Configuration options for [`SyncContext`].
#[derive(Debug, Clone)]
pub struct SyncContextConfig {
    /// Key for the durable cookie record in the backing store.
    pub record_key: String,
}

impl Default for SyncContextConfig {
    fn default() -> Self {
        Self {
            record_key: DEFAULT_RECORD_KEY.to_string(),
        }
    }
}

/// Bundles the durable store, rendering engine, controller, and navigation
/// gate for one browsing surface.
///
/// Both mutable stores are owned here with an injected lifecycle: the
/// context is built at application start, passed by reference to callers,
/// and torn down through [`reset`](Self::reset). Nothing is reached as an
/// ambient global, so tests substitute an in-memory store freely.
pub struct SyncContext {
    controller: Arc<SyncController>,
    gate: NavigationGate,
    config: SyncContextConfig,
}

impl SyncContext {
    /// Create a context with default configuration.
    pub fn new(store: Arc<dyn KeyValueStore>, engine: Arc<dyn WebEngine>) -> Self {
        Self::with_config(store, engine, SyncContextConfig::default())
    }

    /// Create a context with custom configuration.
    pub fn with_config(
        store: Arc<dyn KeyValueStore>,
        engine: Arc<dyn WebEngine>,
        config: SyncContextConfig,
    ) -> Self {
        let adapter = CookieStoreAdapter::new(store, engine, config.record_key.clone());
        let controller = Arc::new(SyncController::new(adapter));
        let gate = NavigationGate::new(Arc::clone(&controller));
        Self {
            controller,
            gate,
            config,
        }
    }

    pub fn controller(&self) -> &Arc<SyncController> {
        &self.controller
    }

    pub fn gate(&self) -> &NavigationGate {
        &self.gate
    }

    pub fn config(&self) -> &SyncContextConfig {
        &self.config
    }

    /// Reset hook exposed to the surrounding application: clears all cookie
    /// state, durable and live, and unlinks the shared session identity.
    pub fn reset(&self) {
        self.controller.reset();
    }
}
