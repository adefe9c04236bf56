// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LIFO stack of undo entries.

use crate::error::{Error, Result};

use super::UndoEntry;

/// Last-in first-out store of [`UndoEntry`] values.
///
/// Popping is destructive: an entry is handed out once and never comes back,
/// whether or not reversing it succeeds.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
}

impl UndoStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an entry on top of the stack.
    pub fn push(&mut self, entry: UndoEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the most recent entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if there is nothing to undo.
    pub fn pop(&mut self) -> Result<UndoEntry> {
        self.entries.pop().ok_or(Error::EmptyStack)
    }

    /// Returns the most recent entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
