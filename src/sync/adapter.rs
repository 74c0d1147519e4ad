//! Access to the two cookie sources.

use crate::cookies::canonical_cookie::{normalize_domain, CanonicalCookie};
use crate::cookies::matching::domain_matches;
use crate::cookies::merge::CookieSet;
use crate::cookies::persistence;
use crate::engine::{all_cookies, WebEngine};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use time::OffsetDateTime;

/// Thin access to the durable cookie record and the engine's live jar.
///
/// Every failure on these paths is absorbed: a missing or unreadable record
/// is no cookies, a failed engine fetch is the empty set, a failed write is
/// logged and dropped. Nothing here surfaces an error to the caller.
pub struct CookieStoreAdapter {
    store: Arc<dyn KeyValueStore>,
    engine: Arc<dyn WebEngine>,
    record_key: String,
}

impl CookieStoreAdapter {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        engine: Arc<dyn WebEngine>,
        record_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            engine,
            record_key: record_key.into(),
        }
    }

    pub fn engine(&self) -> &Arc<dyn WebEngine> {
        &self.engine
    }

    /// Read every persisted cookie, installing each into the live jar so
    /// subsequent live reads include durable history immediately.
    ///
    /// Returns `None` when no record exists or the record is unusable.
    pub fn load_durable(&self) -> Option<Vec<CanonicalCookie>> {
        let cookies = self.read_record()?;
        for cookie in &cookies {
            self.engine.set_cookie(cookie.clone());
        }
        tracing::debug!(count = cookies.len(), "loaded durable cookies into live jar");
        Some(cookies)
    }

    /// Persisted cookies applying to `host`, as merge-boundary records.
    pub fn durable_for_host(&self, host: &str) -> CookieSet {
        let host = normalize_domain(host);
        let now = OffsetDateTime::now_utc();
        let mut set = CookieSet::new();
        for cookie in self.read_record().unwrap_or_default() {
            if !domain_matches(&host, &cookie.domain) {
                continue;
            }
            set.insert(cookie.name.clone(), cookie.to_record(now));
        }
        set
    }

    /// Live cookies applying to `host`, as merge-boundary records.
    ///
    /// Suspends on the engine's cookie read; a fetch the engine abandons
    /// yields the empty set rather than an error.
    pub async fn fetch_in_memory(&self, host: &str) -> CookieSet {
        let host = normalize_domain(host);
        let now = OffsetDateTime::now_utc();
        let mut set = CookieSet::new();
        for cookie in all_cookies(self.engine.as_ref()).await {
            if !domain_matches(&host, &cookie.domain) {
                continue;
            }
            set.insert(cookie.name.clone(), cookie.to_record(now));
        }
        set
    }

    /// Overwrite the whole durable record with `cookies`.
    pub fn save_durable(&self, cookies: &[CanonicalCookie]) {
        let blob = match persistence::encode(cookies) {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(%error, "failed to encode durable cookie record");
                return;
            }
        };
        match self.store.store(&self.record_key, &blob) {
            Ok(()) => {
                tracing::debug!(count = cookies.len(), "durable cookie record replaced");
            }
            Err(error) => {
                tracing::warn!(%error, "durable cookie record write failed");
            }
        }
    }

    /// Clear durable storage, the live jar for every domain, and the shared
    /// session identity. Safe to call at any time; calling twice leaves the
    /// same empty state as calling once.
    pub fn reset_all(&self) {
        self.engine.reset_session();
        self.engine.clear_website_data();
        if let Err(error) = self.store.remove(&self.record_key) {
            tracing::warn!(%error, "durable cookie record removal failed");
        }
        tracing::debug!("cookie state reset");
    }

    fn read_record(&self) -> Option<Vec<CanonicalCookie>> {
        let blob = match self.store.load(&self.record_key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%error, "durable cookie record unreadable, treating as absent");
                return None;
            }
        };
        match persistence::decode(&blob) {
            Ok(cookies) => Some(cookies),
            Err(error) => {
                tracing::warn!(%error, "durable cookie record malformed, treating as absent");
                None
            }
        }
    }
}
