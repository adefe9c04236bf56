// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reversal record for a single toggle.

use crate::device::DeviceKey;
use crate::types::PowerState;

/// Everything needed to reverse one toggle.
///
/// `restore` is the state the device was in *before* the toggle, so undoing
/// means switching the device back to it.
///
/// # Examples
///
/// ```
/// use smarthome_console::state::UndoEntry;
/// use smarthome_console::types::PowerState;
///
/// // The fan was just turned on; undo turns it off again.
/// let entry = UndoEntry::after_toggle("Fan", PowerState::On);
/// assert_eq!(entry.restore(), PowerState::Off);
/// assert_eq!(entry.key().as_str(), "fan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoEntry {
    key: DeviceKey,
    restore: PowerState,
}

impl UndoEntry {
    /// Creates an entry restoring `key` to `restore`.
    #[must_use]
    pub fn new(key: impl Into<DeviceKey>, restore: PowerState) -> Self {
        Self {
            key: key.into(),
            restore,
        }
    }

    /// Creates the entry for a toggle that just switched `key` to `new_state`.
    #[must_use]
    pub fn after_toggle(key: impl Into<DeviceKey>, new_state: PowerState) -> Self {
        Self::new(key, !new_state)
    }

    /// Returns the key of the device to restore.
    #[must_use]
    pub fn key(&self) -> &DeviceKey {
        &self.key
    }

    /// Returns the state to restore.
    #[must_use]
    pub fn restore(&self) -> PowerState {
        self.restore
    }
}
