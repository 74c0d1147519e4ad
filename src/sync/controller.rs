//! Navigation-lifecycle sync orchestration.

use crate::cookies::merge::merge;
use crate::engine::all_cookies;
use crate::sync::adapter::CookieStoreAdapter;
use time::OffsetDateTime;

/// Orchestrates cookie synchronization at the two navigation lifecycle
/// points.
///
/// For any single navigation the caller drives the strict sequence
/// `before_navigation_allowed` → navigation → `after_navigation_response`.
/// Nothing serializes the hooks of *different* navigations against each
/// other: overlapping navigations (rapid redirect chains) interleave freely,
/// and the durable record follows last-write-wins on the whole blob.
pub struct SyncController {
    adapter: CookieStoreAdapter,
}

impl SyncController {
    pub fn new(adapter: CookieStoreAdapter) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &CookieStoreAdapter {
        &self.adapter
    }

    /// Runs before a navigation action toward `host` is permitted.
    ///
    /// Merges durable history with the current live session for the host
    /// (live wins every name collision), resolves each merged record's
    /// relative expiry, and installs the results into the live jar. Returns
    /// once every available cookie is installed; cookies that fail to
    /// materialize are skipped, never retried.
    pub async fn before_navigation_allowed(&self, host: &str) {
        let durable = self.adapter.durable_for_host(host);
        let live = self.adapter.fetch_in_memory(host).await;
        let merged = merge(durable, live);

        let now = OffsetDateTime::now_utc();
        let count = merged.len();
        for (_, record) in merged {
            self.adapter.engine().set_cookie(record.into_cookie(now));
        }
        tracing::debug!(host = %host, count, "merged cookies installed before navigation");
    }

    /// Runs before a navigation response is permitted to render.
    ///
    /// Reads the full live cookie set, with no domain filter, and replaces
    /// the durable record with it.
    pub async fn after_navigation_response(&self) {
        let cookies = all_cookies(self.adapter.engine().as_ref()).await;
        tracing::debug!(count = cookies.len(), "flushing live cookies after navigation response");
        self.adapter.save_durable(&cookies);
    }

    /// Clear all cookie state, durable and live, and unlink the shared
    /// session identity.
    pub fn reset(&self) {
        self.adapter.reset_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::canonical_cookie::CanonicalCookie;
    use crate::engine::inprocess::InProcessEngine;
    use crate::engine::WebEngine;
    use crate::storage::memstore::MemoryStore;
    use std::sync::Arc;

    fn controller_with_engine() -> (SyncController, Arc<InProcessEngine>) {
        let engine = Arc::new(InProcessEngine::new());
        let adapter = CookieStoreAdapter::new(
            Arc::new(MemoryStore::new()),
            Arc::clone(&engine) as Arc<dyn WebEngine>,
            "cookies.v1",
        );
        (SyncController::new(adapter), engine)
    }

    fn cookie(name: &str, value: &str, domain: &str) -> CanonicalCookie {
        CanonicalCookie::new(name, value, domain, "/", false, None)
    }

    #[tokio::test]
    async fn test_before_navigation_installs_merged_set() {
        let (controller, engine) = controller_with_engine();
        controller
            .adapter()
            .save_durable(&[cookie("sid", "persisted", "example.com")]);
        engine.set_cookie(cookie("sid", "live", "example.com"));
        engine.set_cookie(cookie("theme", "dark", "example.com"));

        controller.before_navigation_allowed("www.example.com").await;

        let installed = engine.jar().cookies_for_host("example.com");
        let sid = installed.iter().find(|c| c.name == "sid").unwrap();
        assert_eq!(sid.value, "live");
        assert!(installed.iter().any(|c| c.name == "theme"));
    }

    #[tokio::test]
    async fn test_after_navigation_persists_full_live_set() {
        let (controller, engine) = controller_with_engine();
        engine.set_cookie(cookie("sid", "abc", "example.com"));
        engine.set_cookie(cookie("tracker", "x", "cdn.example.org"));

        controller.after_navigation_response().await;

        let persisted = controller.adapter().load_durable().unwrap();
        assert_eq!(persisted.len(), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_both_stores() {
        let (controller, engine) = controller_with_engine();
        engine.set_cookie(cookie("sid", "abc", "example.com"));
        controller.after_navigation_response().await;

        controller.reset();

        assert!(controller.adapter().load_durable().is_none());
        assert!(controller.adapter().fetch_in_memory("example.com").await.is_empty());
    }
}
