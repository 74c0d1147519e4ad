//! Base types and error handling.
//!
//! Provides [`SyncError`](syncerror::SyncError), the crate-wide error
//! taxonomy for synchronization failures.

pub mod syncerror;
