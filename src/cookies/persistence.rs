//! Durable cookie record codec.
//!
//! The durable record is a single JSON document holding every persisted
//! cookie. Saves replace the whole document; there is no partial update.

use crate::base::syncerror::SyncError;
use crate::cookies::canonical_cookie::CanonicalCookie;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Serializable representation of a cookie for persistence.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PersistedCookie {
    name: String,
    value: String,
    domain: String,
    path: String,
    secure: bool,
    expires_unix_secs: Option<i64>,
}

/// Encode a cookie list into the durable record format.
pub fn encode(cookies: &[CanonicalCookie]) -> Result<String, SyncError> {
    let persisted: Vec<PersistedCookie> = cookies
        .iter()
        .map(|cookie| PersistedCookie {
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            secure: cookie.secure,
            expires_unix_secs: cookie.expires.map(|t| t.unix_timestamp()),
        })
        .collect();

    serde_json::to_string_pretty(&persisted).map_err(|e| SyncError::store_write(e.to_string()))
}

/// Decode a durable record back into cookies.
///
/// A record that is not a JSON list fails as [`SyncError::MalformedRecord`].
/// Individual entries are decoded independently: an undecodable entry is
/// skipped and never fails the batch.
pub fn decode(blob: &str) -> Result<Vec<CanonicalCookie>, SyncError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(blob).map_err(|_| SyncError::MalformedRecord)?;

    let mut cookies = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<PersistedCookie>(entry) {
            Ok(persisted) => cookies.push(CanonicalCookie {
                name: persisted.name,
                value: persisted.value,
                domain: persisted.domain,
                path: persisted.path,
                secure: persisted.secure,
                expires: persisted
                    .expires_unix_secs
                    .and_then(|s| OffsetDateTime::from_unix_timestamp(s).ok()),
            }),
            Err(error) => {
                let error = SyncError::malformed_entry(error.to_string());
                tracing::debug!(%error, "skipping undecodable cookie entry");
            }
        }
    }

    Ok(cookies)
}
