// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener registry with ordered, snapshot-based dispatch

use super::listener::{Handler, ListenerEntry, ReceiveOptions};
use crate::id::ScopeId;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Per-scope listener registry.
///
/// Maps event types to ordered listener lists; dispatch order is
/// registration order. Event keys are created lazily on first
/// registration and removed when their list empties.
///
/// ### Properties
/// - **Cloneable**: clones are cheap and share state.
/// - **Reentrant**: dispatch iterates a snapshot, so handlers may
///   register, remove, or publish during a pass.
/// - **Single-threaded**: intended to live on a UI/event loop thread;
///   no locking is provided or needed.
pub struct Broadcaster {
    listeners: Rc<RefCell<HashMap<String, Vec<Rc<ListenerEntry>>>>>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Register a handler for an event type.
    ///
    /// Registering a handler that is already present for `event` is a
    /// no-op; the returned [`Unsubscribe`] is valid either way.
    /// Registration cannot fail.
    pub fn subscribe(
        &self,
        event: &str,
        handler: Handler,
        options: ReceiveOptions,
        origin: Option<ScopeId>,
    ) -> Unsubscribe {
        if options.exclude_self && origin.is_none() {
            tracing::warn!(event, "exclude_self requested without an origin id; filter will never match");
        }

        {
            let mut listeners = self.listeners.borrow_mut();
            let entries = listeners.entry(event.to_string()).or_default();
            if entries
                .iter()
                .any(|entry| Rc::ptr_eq(&entry.handler, &handler))
            {
                tracing::debug!(event, "duplicate handler ignored");
            } else {
                entries.push(Rc::new(ListenerEntry::new(handler.clone(), options, origin)));
            }
        }

        Unsubscribe::new(self.clone(), event, handler)
    }

    /// Remove a handler by identity.
    ///
    /// Unknown event types and unregistered handlers are no-ops. The
    /// event key is deleted when its listener list empties.
    pub fn unsubscribe(&self, event: &str, handler: &Handler) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(entries) = listeners.get_mut(event) else {
            return;
        };
        if let Some(index) = entries
            .iter()
            .position(|entry| Rc::ptr_eq(&entry.handler, handler))
        {
            entries.remove(index);
        }
        if entries.is_empty() {
            listeners.remove(event);
        }
    }

    /// Dispatch `data` to every listener registered for `event`.
    ///
    /// Iterates a snapshot taken before the first invocation, so
    /// listeners added or removed by a handler do not affect this pass.
    /// A failing handler is logged and the pass continues; nothing is
    /// returned or raised to the caller.
    pub fn publish(&self, event: &str, data: &Value, origin: Option<ScopeId>) {
        let snapshot = match self.listeners.borrow().get(event) {
            Some(entries) => entries.clone(),
            None => return,
        };

        for entry in snapshot {
            if entry.excludes(origin) {
                continue;
            }
            // A once listener is claimed before invocation so that a
            // recursive publish running over its own snapshot cannot
            // fire it a second time.
            if entry.once && entry.spent.replace(true) {
                continue;
            }
            if let Err(error) = (entry.handler)(data) {
                tracing::warn!(event, %error, "broadcast handler failed");
            }
            if entry.once {
                self.unsubscribe(event, &entry.handler);
            }
        }
    }

    /// Number of listeners currently registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.borrow().get(event).map_or(0, Vec::len)
    }

    /// Event types with at least one registered listener
    pub fn event_types(&self) -> Vec<String> {
        self.listeners.borrow().keys().cloned().collect()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Broadcaster {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

/// Handle that removes one registration when invoked.
///
/// Clones refer to the same registration; removal through any clone is
/// idempotent, and removal of a registration that is already gone is a
/// no-op.
#[derive(Clone)]
pub struct Unsubscribe {
    target: Option<Target>,
}

#[derive(Clone)]
struct Target {
    broadcaster: Broadcaster,
    event: String,
    handler: Handler,
}

impl Unsubscribe {
    fn new(broadcaster: Broadcaster, event: &str, handler: Handler) -> Self {
        Self {
            target: Some(Target {
                broadcaster,
                event: event.to_string(),
                handler,
            }),
        }
    }

    /// Handle that does nothing, for registrations that never happened
    pub(crate) fn noop() -> Self {
        Self { target: None }
    }

    /// Remove the registration
    pub fn unsubscribe(self) {
        if let Some(target) = self.target {
            target.broadcaster.unsubscribe(&target.event, &target.handler);
        }
    }
}

#[cfg(test)]
#[path = "broadcaster_tests.rs"]
mod tests;
