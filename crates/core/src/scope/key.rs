// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel tokens for provider lookup

use std::sync::OnceLock;
use uuid::Uuid;

/// Opaque token naming one provider channel in a scope tree.
///
/// Every `new` key is distinct; parts of an application that should
/// share a channel must share the key value. The label only shows up in
/// diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BroadcastKey {
    label: &'static str,
    id: Uuid,
}

impl BroadcastKey {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            id: Uuid::new_v4(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

static DEFAULT_KEY: OnceLock<BroadcastKey> = OnceLock::new();
static GLOBAL_KEY: OnceLock<BroadcastKey> = OnceLock::new();

/// Well-known key for ordinary tree-local channels
pub fn default_key() -> BroadcastKey {
    *DEFAULT_KEY.get_or_init(|| BroadcastKey::new("default"))
}

/// Well-known key for application-wide channels, kept separate from the
/// default family so the two never cross-deliver
pub fn global_key() -> BroadcastKey {
    *GLOBAL_KEY.get_or_init(|| BroadcastKey::new("global"))
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
