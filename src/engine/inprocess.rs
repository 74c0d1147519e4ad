//! Jar-backed reference engine.

use crate::cookies::canonical_cookie::CanonicalCookie;
use crate::cookies::jar::CookieJar;
use crate::engine::session::SessionPool;
use crate::engine::{CookieCallback, WebEngine};

/// In-process implementation of [`WebEngine`].
///
/// Backs the live cookie store with a [`CookieJar`] and the session identity
/// with a [`SessionPool`]. Used by the test suite and by embedders that have
/// no native rendering component; completions are invoked synchronously
/// since the jar lives in the same process.
#[derive(Default)]
pub struct InProcessEngine {
    jar: CookieJar,
    pool: SessionPool,
}

impl InProcessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct access to the live jar, for seeding and inspection.
    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }
}

impl WebEngine for InProcessEngine {
    fn get_all_cookies(&self, completion: CookieCallback) {
        completion(self.jar.all_cookies());
    }

    fn set_cookie(&self, cookie: CanonicalCookie) {
        self.jar.set(cookie);
    }

    fn clear_website_data(&self) {
        self.jar.clear();
    }

    fn reset_session(&self) {
        self.pool.reset();
    }

    fn session_generation(&self) -> u64 {
        self.pool.generation()
    }
}
