//! In-memory cookie jar for a live rendering session.

use crate::cookies::canonical_cookie::{normalize_domain, CanonicalCookie};
use crate::cookies::matching::domain_matches;
use dashmap::DashMap;
use std::sync::Arc;
use time::OffsetDateTime;

/// Cookie jar scoped to the current rendering session.
///
/// Backs the in-process engine; its contents are lost when the session is
/// reset. Cookies are keyed by domain, with name+path uniqueness inside a
/// domain.
pub struct CookieJar {
    // Store: Map<Domain, List<Cookie>>
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
        }
    }

    /// Install a cookie, replacing any existing cookie with the same name and
    /// path on the same domain.
    pub fn set(&self, cookie: CanonicalCookie) {
        let mut entry = self.store.entry(cookie.domain.clone()).or_default();
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);
        entry.push(cookie);
    }

    /// Cookies applying to `host`, with expired entries dropped.
    ///
    /// The jar is scanned whole: the bidirectional suffix rule relates a host
    /// to cookie domains both above and below it, so a parent-domain walk
    /// cannot enumerate the candidates.
    pub fn cookies_for_host(&self, host: &str) -> Vec<CanonicalCookie> {
        let host = normalize_domain(host);
        let now = OffsetDateTime::now_utc();
        let mut result = Vec::new();

        for entry in self.store.iter() {
            if !domain_matches(&host, entry.key()) {
                continue;
            }
            for cookie in entry.value() {
                if cookie.is_expired(now) {
                    continue;
                }
                result.push(cookie.clone());
            }
        }

        result
    }

    /// Every cookie in the jar, expired entries included.
    pub fn all_cookies(&self) -> Vec<CanonicalCookie> {
        self.store
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect()
    }

    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    /// Drop every cookie for every domain.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Ingest a `Set-Cookie` header line against `host`.
    ///
    /// `Max-Age` takes precedence over `Expires`; a cookie without either
    /// becomes a session cookie. Unparseable lines are dropped.
    pub fn parse_and_set(&self, host: &str, set_cookie_line: &str) {
        let parsed = match cookie::Cookie::parse(set_cookie_line) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::debug!(%error, line = %set_cookie_line, "failed to parse cookie line");
                return;
            }
        };

        let domain = parsed
            .domain()
            .map(normalize_domain)
            .unwrap_or_else(|| normalize_domain(host));
        let path = parsed.path().unwrap_or("/").to_string();

        let expires = match parsed.max_age() {
            Some(age) => Some(OffsetDateTime::now_utc() + age),
            None => parsed.expires().and_then(|e| e.datetime()),
        };

        self.set(CanonicalCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path,
            secure: parsed.secure().unwrap_or(false),
            expires,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn make_test_cookie(name: &str, domain: &str) -> CanonicalCookie {
        CanonicalCookie::new(
            name,
            "test_value",
            domain,
            "/",
            false,
            Some(OffsetDateTime::now_utc() + Duration::days(30)),
        )
    }

    #[test]
    fn test_set_replaces_same_name_and_path() {
        let jar = CookieJar::new();
        jar.set(make_test_cookie("sid", "example.com"));

        let mut updated = make_test_cookie("sid", "example.com");
        updated.value = "updated".to_string();
        jar.set(updated);

        let cookies = jar.cookies_for_host("example.com");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].value, "updated");
    }

    #[test]
    fn test_distinct_paths_coexist() {
        let jar = CookieJar::new();
        jar.set(make_test_cookie("sid", "example.com"));
        let mut scoped = make_test_cookie("sid", "example.com");
        scoped.path = "/account".to_string();
        jar.set(scoped);

        assert_eq!(jar.cookies_for_host("example.com").len(), 2);
    }

    #[test]
    fn test_host_filtering_uses_suffix_rule() {
        let jar = CookieJar::new();
        jar.set(make_test_cookie("parent", "example.com"));
        jar.set(make_test_cookie("child", "www.example.com"));
        jar.set(make_test_cookie("other", "example.org"));

        let cookies = jar.cookies_for_host("www.example.com");
        let mut names: Vec<&str> = cookies.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["child", "parent"]);
    }

    #[test]
    fn test_expired_cookies_are_dropped_on_read() {
        let jar = CookieJar::new();
        let mut stale = make_test_cookie("old", "example.com");
        stale.expires = Some(OffsetDateTime::now_utc() - Duration::hours(1));
        jar.set(stale);
        jar.set(make_test_cookie("fresh", "example.com"));

        let cookies = jar.cookies_for_host("example.com");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "fresh");
        // Still in the jar until cleared, just invisible to reads.
        assert_eq!(jar.total_cookie_count(), 2);
    }

    #[test]
    fn test_clear_empties_every_domain() {
        let jar = CookieJar::new();
        jar.set(make_test_cookie("a", "example.com"));
        jar.set(make_test_cookie("b", "example.org"));

        jar.clear();
        assert_eq!(jar.total_cookie_count(), 0);
    }

    #[test]
    fn test_parse_and_set_basic() {
        let jar = CookieJar::new();
        jar.parse_and_set("example.com", "theme=dark; Path=/; Secure");

        let cookies = jar.cookies_for_host("example.com");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "theme");
        assert_eq!(cookies[0].value, "dark");
        assert!(cookies[0].secure);
        assert!(cookies[0].is_session());
    }

    #[test]
    fn test_parse_and_set_max_age_sets_expiry() {
        let jar = CookieJar::new();
        jar.parse_and_set("example.com", "sid=abc; Max-Age=600");

        let cookies = jar.cookies_for_host("example.com");
        assert!(!cookies[0].is_session());
        assert!(!cookies[0].is_expired(OffsetDateTime::now_utc()));
    }

    #[test]
    fn test_parse_and_set_explicit_domain() {
        let jar = CookieJar::new();
        jar.parse_and_set("www.example.com", "sid=abc; Domain=.Example.com");

        let cookies = jar.cookies_for_host("example.com");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].domain, "example.com");
    }

    #[test]
    fn test_parse_and_set_rejects_garbage() {
        let jar = CookieJar::new();
        jar.parse_and_set("example.com", "not a cookie line");
        assert_eq!(jar.total_cookie_count(), 0);
    }
}
