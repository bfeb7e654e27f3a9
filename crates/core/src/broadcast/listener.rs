// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener records and registration options

use crate::error::HandlerError;
use crate::id::ScopeId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

/// A broadcast handler.
///
/// Handlers are compared by reference identity (`Rc::ptr_eq`):
/// registering the same handler clone twice for one event type is a
/// no-op, and removal finds the record through the same comparison.
pub type Handler = Rc<dyn Fn(&Value) -> Result<(), HandlerError>>;

/// Options accepted when registering a listener
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiveOptions {
    /// Remove the listener after its first invocation
    pub once: bool,
    /// Skip broadcasts originating from the registering scope
    pub exclude_self: bool,
}

impl ReceiveOptions {
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    pub fn exclude_self(mut self) -> Self {
        self.exclude_self = true;
        self
    }
}

/// One registered listener for an event type
pub(crate) struct ListenerEntry {
    pub(crate) handler: Handler,
    pub(crate) once: bool,
    pub(crate) exclude_self: bool,
    pub(crate) origin: Option<ScopeId>,
    /// Set when a `once` listener is claimed by a dispatch pass. Shared
    /// across snapshots so recursive dispatch cannot fire it twice.
    pub(crate) spent: Cell<bool>,
}

impl ListenerEntry {
    pub(crate) fn new(handler: Handler, options: ReceiveOptions, origin: Option<ScopeId>) -> Self {
        Self {
            handler,
            once: options.once,
            exclude_self: options.exclude_self,
            origin,
            spent: Cell::new(false),
        }
    }

    /// True when a broadcast from `origin` must be hidden from this
    /// listener. Requires both origin ids to be present and equal.
    pub(crate) fn excludes(&self, origin: Option<ScopeId>) -> bool {
        match (self.exclude_self, self.origin, origin) {
            (true, Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
