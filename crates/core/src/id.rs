// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scope identity generation

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Identity of one scope in a component tree.
///
/// Carried on broadcasts and listener registrations, and used only for
/// self-exclusion: a listener registered with `exclude_self` is skipped
/// when a broadcast arrives with the same origin id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeId(pub u64);

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ScopeId {
    fn from(n: u64) -> Self {
        ScopeId(n)
    }
}

/// Sequential scope id generator, shared down one scope tree
#[derive(Clone, Debug)]
pub struct ScopeIdGen {
    counter: Rc<Cell<u64>>,
}

impl ScopeIdGen {
    pub fn new() -> Self {
        Self {
            counter: Rc::new(Cell::new(1)),
        }
    }

    pub fn next(&self) -> ScopeId {
        let n = self.counter.get();
        self.counter.set(n + 1);
        ScopeId(n)
    }
}

impl Default for ScopeIdGen {
    fn default() -> Self {
        Self::new()
    }
}
