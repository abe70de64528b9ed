// SPDX-License-Identifier: MPL-2.0
//! Identifier-to-handle mapping populated as icon widgets mount.

use super::IconId;
use crate::animation::{SharedHandle, WeakHandle};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Non-owning handle references keyed by icon.
///
/// Entries are never removed. A handle whose widget has been dropped simply
/// stops resolving, so every lookup doubles as a presence check.
#[derive(Default)]
pub struct HandleRegistry {
    entries: HashMap<IconId, WeakHandle>,
}

impl HandleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handle` under `id`, replacing any previous entry.
    ///
    /// `None` (a widget tearing down) is a no-op. Returns whether an entry
    /// was written.
    pub fn register(&mut self, id: IconId, handle: Option<&SharedHandle>) -> bool {
        match handle {
            Some(handle) => {
                self.entries.insert(id, Rc::downgrade(handle));
                true
            }
            None => false,
        }
    }

    /// Resolves the live handle for `id`, if registered and still alive.
    #[must_use]
    pub fn get(&self, id: IconId) -> Option<SharedHandle> {
        self.entries.get(&id).and_then(WeakHandle::upgrade)
    }

    /// Whether `id` currently resolves to a live handle.
    #[must_use]
    pub fn contains(&self, id: IconId) -> bool {
        self.get(id).is_some()
    }

    /// Number of registered entries, live or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for HandleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.entries.keys().map(|id| id.as_str()).collect();
        ids.sort_unstable();
        f.debug_struct("HandleRegistry").field("ids", &ids).finish()
    }
}
