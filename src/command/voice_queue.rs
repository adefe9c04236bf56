// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FIFO buffer of raw voice commands.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};

/// A raw voice instruction as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCommand(String);

impl VoiceCommand {
    /// Wraps a raw command string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Queue decoupling command submission from execution.
///
/// Commands come out in exactly the order they went in.
///
/// # Examples
///
/// ```
/// use smarthome_console::command::VoiceCommandQueue;
///
/// let mut queue = VoiceCommandQueue::new();
/// queue.enqueue("turn on fan");
/// queue.enqueue("turn off tv");
///
/// assert_eq!(queue.dequeue().unwrap().as_str(), "turn on fan");
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VoiceCommandQueue {
    pending: VecDeque<VoiceCommand>,
}

impl VoiceCommandQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command at the back.
    pub fn enqueue(&mut self, raw: impl Into<String>) {
        let command = VoiceCommand::new(raw);
        tracing::debug!(command = %command, depth = self.pending.len() + 1, "Voice command queued");
        self.pending.push_back(command);
    }

    /// Removes and returns the oldest command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if nothing is queued.
    pub fn dequeue(&mut self) -> Result<VoiceCommand> {
        self.pending.pop_front().ok_or(Error::EmptyQueue)
    }

    /// Returns the number of queued commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates over queued commands, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &VoiceCommand> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_on_empty_fails() {
        let mut queue = VoiceCommandQueue::new();
        assert!(matches!(queue.dequeue(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = VoiceCommandQueue::new();
        for raw in ["one", "two", "three"] {
            queue.enqueue(raw);
        }
        let drained: Vec<String> = std::iter::from_fn(|| queue.dequeue().ok())
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(drained, ["one", "two", "three"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn iter_does_not_consume() {
        let mut queue = VoiceCommandQueue::new();
        queue.enqueue("turn on fan");
        assert_eq!(queue.iter().count(), 1);
        assert_eq!(queue.len(), 1);
    }
}
