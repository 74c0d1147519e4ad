//! Merging cookie sets from the durable and live stores.

use crate::cookies::canonical_cookie::CookieRecord;
use std::collections::HashMap;

/// Mapping from cookie name to its raw fields. Built fresh for every merge
/// operation and discarded once the result has been applied.
pub type CookieSet = HashMap<String, CookieRecord>;

/// Combine the durable and live cookie sets for one host.
///
/// Starts from the durable set and insert-or-replaces every live entry, so
/// the result is the union of both key sets and the live session wins every
/// name collision unconditionally. No timestamp is consulted: the live
/// browsing session is authoritative over previously persisted state.
pub fn merge(durable: CookieSet, live: CookieSet) -> CookieSet {
    let mut merged = durable;
    for (name, record) in live {
        merged.insert(name, record);
    }
    merged
}
