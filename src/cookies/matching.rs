//! Domain matching for cookie applicability.

/// Decide whether a cookie stored for `cookie_domain` applies to
/// `target_domain`.
///
/// The rule is a bidirectional suffix check: exact match, the cookie domain
/// being a suffix of the target (`example.com` applies to `www.example.com`),
/// or the target being a suffix of the cookie domain. This is a heuristic,
/// not RFC 6265 matching: there is no public-suffix awareness and no dot
/// boundary check, so unrelated hosts sharing a raw suffix
/// (`badexample.com` / `example.com`) are treated as related. Callers are
/// expected to pass domains already normalized by
/// [`normalize_domain`](crate::cookies::canonical_cookie::normalize_domain).
pub fn domain_matches(target_domain: &str, cookie_domain: &str) -> bool {
    target_domain == cookie_domain
        || target_domain.ends_with(cookie_domain)
        || cookie_domain.ends_with(target_domain)
}
