//! Cookie data model, matching, merging, and persistence.
//!
//! This module carries everything that operates on cookies themselves:
//!
//! - **Model**: [`CanonicalCookie`](canonical_cookie::CanonicalCookie), the
//!   strict per-cookie record, and
//!   [`CookieRecord`](canonical_cookie::CookieRecord), its merge-boundary
//!   projection with a relative expiry.
//! - **Matching**: [`matching::domain_matches`], the bidirectional suffix
//!   rule deciding which stored cookies apply to a host.
//! - **Merging**: [`merge::merge`], the fixed-priority union of the durable
//!   and live sets.
//! - **Jar**: [`CookieJar`](jar::CookieJar), the session-scoped in-memory
//!   store backing the in-process engine.
//! - **Persistence**: [`persistence`], the whole-record JSON codec for the
//!   durable blob.

pub mod canonical_cookie;
pub mod jar;
pub mod matching;
pub mod merge;
pub mod persistence;
