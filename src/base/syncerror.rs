use thiserror::Error;

/// Error taxonomy for cookie synchronization.
///
/// Every variant here is recoverable: the adapter and controller absorb these
/// locally and degrade to "no cookies" rather than surfacing a failure to the
/// embedding surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Durable store read failed: {message}")]
    StoreRead { message: String },
    #[error("Durable store write failed: {message}")]
    StoreWrite { message: String },
    #[error("Durable cookie record is not a valid cookie list")]
    MalformedRecord,
    #[error("Cookie entry is malformed: {reason}")]
    MalformedEntry { reason: String },
    #[error("Rendering engine dropped the cookie fetch completion")]
    FetchDropped,
}

impl SyncError {
    pub fn store_read(message: impl Into<String>) -> Self {
        SyncError::StoreRead {
            message: message.into(),
        }
    }

    pub fn store_write(message: impl Into<String>) -> Self {
        SyncError::StoreWrite {
            message: message.into(),
        }
    }

    pub fn malformed_entry(reason: impl Into<String>) -> Self {
        SyncError::MalformedEntry {
            reason: reason.into(),
        }
    }
}
