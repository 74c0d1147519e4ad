//! Rendering-engine boundary.
//!
//! The sync core depends on the host web-rendering component for four
//! things: an asynchronous read of every live cookie, a cookie install, a
//! website-data wipe, and a replaceable session identity. [`WebEngine`]
//! captures exactly that surface; [`InProcessEngine`](inprocess::InProcessEngine)
//! is the jar-backed reference implementation.

pub mod inprocess;
pub mod session;

use crate::base::syncerror::SyncError;
use crate::cookies::canonical_cookie::CanonicalCookie;
use tokio::sync::oneshot;

/// Single-shot completion for an engine cookie read.
pub type CookieCallback = Box<dyn FnOnce(Vec<CanonicalCookie>) + Send + 'static>;

/// Surface of the host rendering component.
pub trait WebEngine: Send + Sync {
    /// Asynchronous read of every cookie in the live jar. The completion is
    /// invoked at most once; the read is not cancellable and never retried.
    fn get_all_cookies(&self, completion: CookieCallback);

    /// Install a cookie into the live jar, replacing any cookie with the
    /// same name and path on the same domain.
    fn set_cookie(&self, cookie: CanonicalCookie);

    /// Drop all website data held by the live session.
    fn clear_website_data(&self);

    /// Discard the shared session identity so pooled session state is
    /// unlinked from the next navigation.
    fn reset_session(&self);

    /// Current session identity generation.
    fn session_generation(&self) -> u64;
}

/// Bridge the callback-driven cookie read into a future.
///
/// An engine that drops the completion without invoking it resolves to the
/// empty set, so a failed fetch never blocks navigation. An engine that
/// neither invokes nor drops the completion suspends the caller
/// indefinitely; there is no timeout on this path.
pub async fn all_cookies(engine: &dyn WebEngine) -> Vec<CanonicalCookie> {
    let (tx, rx) = oneshot::channel();
    engine.get_all_cookies(Box::new(move |cookies| {
        let _ = tx.send(cookies);
    }));
    match rx.await {
        Ok(cookies) => cookies,
        Err(_) => {
            tracing::debug!(error = %SyncError::FetchDropped, "substituting empty cookie set");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DroppingEngine;

    impl WebEngine for DroppingEngine {
        fn get_all_cookies(&self, completion: CookieCallback) {
            drop(completion);
        }
        fn set_cookie(&self, _cookie: CanonicalCookie) {}
        fn clear_website_data(&self) {}
        fn reset_session(&self) {}
        fn session_generation(&self) -> u64 {
            0
        }
    }

    #[tokio::test]
    async fn test_dropped_completion_yields_empty_set() {
        let cookies = all_cookies(&DroppingEngine).await;
        assert!(cookies.is_empty());
    }
}
