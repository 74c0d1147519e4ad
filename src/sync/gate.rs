//! Navigation policy hook binding.

use crate::sync::controller::SyncController;
use std::sync::Arc;
use tokio::sync::oneshot;
use url::Url;

/// Decision delivered to the embedding navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Allow,
    Cancel,
}

/// Binds the sync controller to a host application's navigation policy
/// hooks.
///
/// Decisions arrive through a completion channel rather than a return value;
/// the caller holds the navigation until the decision is delivered, which
/// guarantees cookie sync has fully completed first.
pub struct NavigationGate {
    controller: Arc<SyncController>,
}

impl NavigationGate {
    pub fn new(controller: Arc<SyncController>) -> Self {
        Self { controller }
    }

    /// Policy for a navigation action.
    ///
    /// Cookie sync for the target host runs to completion before `Allow` is
    /// delivered. A URL without a host is allowed immediately, with no sync.
    pub fn decide_action_policy(&self, url: &Url) -> oneshot::Receiver<PolicyDecision> {
        let (tx, rx) = oneshot::channel();

        let Some(host) = url.host_str().map(str::to_owned) else {
            let _ = tx.send(PolicyDecision::Allow);
            return rx;
        };

        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            controller.before_navigation_allowed(&host).await;
            let _ = tx.send(PolicyDecision::Allow);
        });
        rx
    }

    /// Policy for a navigation response.
    ///
    /// The live jar is flushed to durable storage before `Allow` is
    /// delivered.
    pub fn decide_response_policy(&self) -> oneshot::Receiver<PolicyDecision> {
        let (tx, rx) = oneshot::channel();
        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            controller.after_navigation_response().await;
            let _ = tx.send(PolicyDecision::Allow);
        });
        rx
    }
}
