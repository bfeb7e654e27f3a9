// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! treecast-core: scoped broadcast for component trees
//!
//! This crate provides:
//! - An ordered, per-scope listener registry (`Broadcaster`)
//! - Registration handles with identity-based removal (`Unsubscribe`)
//! - A scope tree that hosts and discovers broadcasters, and tears down
//!   listeners when a scope is destroyed (`Scope`, `Channel`)
//! - Opaque channel tokens for provider lookup (`BroadcastKey`)
//!
//! Everything is single-threaded and synchronous: registration,
//! removal, and dispatch run to completion on the calling thread, the
//! way a UI event loop drives them.

pub mod error;
pub mod id;

pub mod broadcast;
pub mod scope;

// Re-exports
pub use broadcast::{Broadcaster, Handler, ReceiveOptions, Unsubscribe};
pub use error::HandlerError;
pub use id::{ScopeId, ScopeIdGen};
pub use scope::{default_key, global_key, BroadcastKey, Channel, Scope};
