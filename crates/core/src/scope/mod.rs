// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scope tree wiring around the broadcast registry
//!
//! This module provides:
//! - `Scope` - component-tree nodes that host and discover broadcasters
//! - `Channel` - hosting handle returned by `Scope::provide`
//! - `BroadcastKey` - opaque channel tokens, with well-known
//!   `default_key()` and `global_key()` instances

mod key;
mod scope;

pub use key::{default_key, global_key, BroadcastKey};
pub use scope::{Channel, Scope};
