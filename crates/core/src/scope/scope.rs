// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scope tree: provider discovery and listener teardown

use super::key::BroadcastKey;
use crate::broadcast::{Broadcaster, Handler, ReceiveOptions, Unsubscribe};
use crate::id::{ScopeId, ScopeIdGen};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One node in a component tree.
///
/// A scope owns the broadcasters it provides and the teardown actions
/// for every listener registered through it. Descendants reach an
/// ancestor's broadcaster by key through the parent chain; the nearest
/// provider wins. A provider is visible to descendants, not to the
/// providing scope's own lookup - the hosting scope talks to its
/// broadcaster through the [`Channel`] returned by [`Scope::provide`].
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    id: ScopeId,
    parent: Option<Rc<ScopeInner>>,
    ids: ScopeIdGen,
    providers: RefCell<HashMap<BroadcastKey, Broadcaster>>,
    cleanups: RefCell<Vec<Unsubscribe>>,
}

impl Scope {
    /// Create the root of a new scope tree
    pub fn root() -> Self {
        let ids = ScopeIdGen::new();
        let id = ids.next();
        Self {
            inner: Rc::new(ScopeInner {
                id,
                parent: None,
                ids,
                providers: RefCell::new(HashMap::new()),
                cleanups: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Create a child scope; ids stay unique across the whole tree
    pub fn child(&self) -> Self {
        let ids = self.inner.ids.clone();
        let id = ids.next();
        Self {
            inner: Rc::new(ScopeInner {
                id,
                parent: Some(Rc::clone(&self.inner)),
                ids,
                providers: RefCell::new(HashMap::new()),
                cleanups: RefCell::new(Vec::new()),
            }),
        }
    }

    /// This scope's identity, carried as the origin id on its broadcasts
    pub fn id(&self) -> ScopeId {
        self.inner.id
    }

    /// Host a fresh broadcaster under `key`, discoverable by descendants.
    ///
    /// Providing the same key again replaces the earlier broadcaster for
    /// future lookups; existing registrations stay on the old one.
    pub fn provide(&self, key: &BroadcastKey) -> Channel {
        let broadcaster = Broadcaster::new();
        self.inner
            .providers
            .borrow_mut()
            .insert(*key, broadcaster.clone());
        Channel {
            broadcaster,
            scope: Rc::clone(&self.inner),
        }
    }

    /// Listen on the nearest ancestor broadcaster for `key`.
    ///
    /// Teardown is registered with this scope, so disposal removes the
    /// listener; the returned handle can remove it earlier. Without a
    /// reachable provider this warns and returns an inert handle.
    pub fn receive(
        &self,
        key: &BroadcastKey,
        event: &str,
        handler: Handler,
        options: ReceiveOptions,
    ) -> Unsubscribe {
        let Some(broadcaster) = self.lookup(key) else {
            tracing::warn!(
                key = key.label(),
                event,
                "no broadcast provider in scope; listener not registered"
            );
            return Unsubscribe::noop();
        };
        let unsubscribe = broadcaster.subscribe(event, handler, options, Some(self.inner.id));
        self.inner.cleanups.borrow_mut().push(unsubscribe.clone());
        unsubscribe
    }

    /// Broadcast on the nearest ancestor broadcaster for `key`, with
    /// this scope's id as the origin. Without a reachable provider this
    /// warns and drops the broadcast.
    pub fn broadcast(&self, key: &BroadcastKey, event: &str, data: &Value) {
        match self.lookup(key) {
            Some(broadcaster) => broadcaster.publish(event, data, Some(self.inner.id)),
            None => tracing::warn!(
                key = key.label(),
                event,
                "no broadcast provider in scope; broadcast dropped"
            ),
        }
    }

    /// Remove every listener registered through this scope and forget
    /// its providers. Idempotent; also runs when the scope is dropped.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    fn lookup(&self, key: &BroadcastKey) -> Option<Broadcaster> {
        let mut current = self.inner.parent.clone();
        while let Some(scope) = current {
            if let Some(broadcaster) = scope.providers.borrow().get(key) {
                return Some(broadcaster.clone());
            }
            current = scope.parent.clone();
        }
        None
    }
}

impl ScopeInner {
    fn dispose(&self) {
        // Drain first so a second dispose (or the drop backstop) sees an
        // empty list.
        let cleanups: Vec<Unsubscribe> = self.cleanups.borrow_mut().drain(..).collect();
        for unsubscribe in cleanups {
            unsubscribe.unsubscribe();
        }
        self.providers.borrow_mut().clear();
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Hosting handle for a provided broadcaster.
///
/// Broadcasts carry the hosting scope's origin id, so a receive with
/// `exclude_self` on the same channel skips them while still observing
/// descendants' broadcasts.
pub struct Channel {
    broadcaster: Broadcaster,
    scope: Rc<ScopeInner>,
}

impl Channel {
    /// Broadcast to listeners on this channel
    pub fn broadcast(&self, event: &str, data: &Value) {
        self.broadcaster.publish(event, data, Some(self.scope.id));
    }

    /// Listen on this channel; teardown is tied to the hosting scope
    pub fn receive(&self, event: &str, handler: Handler, options: ReceiveOptions) -> Unsubscribe {
        let unsubscribe =
            self.broadcaster
                .subscribe(event, handler, options, Some(self.scope.id));
        self.scope.cleanups.borrow_mut().push(unsubscribe.clone());
        unsubscribe
    }

    /// Direct access to the underlying registry
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
