use time::{Duration, OffsetDateTime};

/// Represents a cookie as installed in a cookie store.
///
/// This is the strict record replacing the loosely-typed property
/// dictionaries the host engine traffics in: every field is validated at the
/// store boundary, and `expires == None` means the cookie is session-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub secure: bool,
    pub expires: Option<OffsetDateTime>,
}

impl CanonicalCookie {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: &str,
        path: impl Into<String>,
        secure: bool,
        expires: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: normalize_domain(domain),
            path: path.into(),
            secure,
            expires,
        }
    }

    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expires {
            Some(expiry) => expiry < current_time,
            None => false,
        }
    }

    /// Session cookies live exactly as long as the rendering session.
    pub fn is_session(&self) -> bool {
        self.expires.is_none()
    }

    /// Project into the merge-boundary representation, carrying expiry as
    /// seconds remaining relative to `now`.
    pub fn to_record(&self, now: OffsetDateTime) -> CookieRecord {
        CookieRecord {
            name: self.name.clone(),
            value: self.value.clone(),
            domain: self.domain.clone(),
            path: self.path.clone(),
            secure: self.secure,
            expires_in_secs: self.expires.map(|e| (e - now).as_seconds_f64()),
        }
    }
}

/// Raw cookie fields as exchanged between the two stores during a merge.
///
/// Expiry is a relative "seconds from now" field; a missing field yields a
/// session cookie when the record is made concrete again.
#[derive(Debug, Clone, PartialEq)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub secure: bool,
    pub expires_in_secs: Option<f64>,
}

impl CookieRecord {
    /// Reconstruct a concrete cookie, resolving the relative expiry against
    /// `now`.
    pub fn into_cookie(self, now: OffsetDateTime) -> CanonicalCookie {
        CanonicalCookie {
            name: self.name,
            value: self.value,
            domain: self.domain,
            path: self.path,
            secure: self.secure,
            expires: self
                .expires_in_secs
                .map(|secs| now + Duration::seconds_f64(secs)),
        }
    }
}

/// Cookie domains are compared lowercased with any leading dot stripped.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim_start_matches('.').to_lowercase()
}
