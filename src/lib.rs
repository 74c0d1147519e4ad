//! # cookiesync
//!
//! A cookie synchronization core for embedded web views.
//!
//! `cookiesync` mirrors cookies between a web-rendering engine's in-memory
//! jar (scoped to the live session) and a durable key-value record (scoped
//! to the installation), driven at two navigation lifecycle points: before a
//! navigation action is permitted, and before a navigation response is
//! allowed to render.
//!
//! ## Behavior
//!
//! - **Before navigation**: durable cookies for the target host are merged
//!   with the live session's cookies for that host — the live value wins
//!   every name collision — and the merged set is installed back into the
//!   live jar before the navigation proceeds.
//! - **After a response**: the full live cookie set is flushed into the
//!   durable record, replacing it whole.
//! - **Reset**: one operation clears both stores and replaces the engine's
//!   shared session identity.
//!
//! Sync is best-effort and invisible: missing records, malformed entries,
//! and abandoned engine fetches all degrade to "no cookies" rather than
//! surfacing errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cookiesync::engine::inprocess::InProcessEngine;
//! use cookiesync::storage::memstore::MemoryStore;
//! use cookiesync::sync::context::SyncContext;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = SyncContext::new(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(InProcessEngine::new()),
//!     );
//!
//!     ctx.controller().before_navigation_allowed("www.example.com").await;
//!     // ... navigation happens ...
//!     ctx.controller().after_navigation_response().await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy
//! - [`cookies`] - Cookie model, matching, merging, jar, persistence codec
//! - [`engine`] - Rendering-engine boundary and in-process reference engine
//! - [`storage`] - Durable key-value storage
//! - [`sync`] - Store adapter, sync controller, navigation gate, context
//!
//! ## Caveats
//!
//! Domain applicability is a permissive bidirectional suffix heuristic, not
//! RFC 6265 matching; see [`cookies::matching`]. The engine cookie read has
//! no timeout: an engine that never completes a fetch stalls the pending
//! navigation.

pub mod base;
pub mod cookies;
pub mod engine;
pub mod storage;
pub mod sync;
