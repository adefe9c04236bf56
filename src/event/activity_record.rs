// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single history line.

use std::fmt;

use crate::device::DeviceKey;
use crate::types::PowerState;

/// Human-readable description of one completed action.
///
/// Records are immutable once created. They are persisted as one text line
/// each, so a record never contains a line break.
///
/// # Examples
///
/// ```
/// use smarthome_console::event::ActivityRecord;
/// use smarthome_console::types::PowerState;
///
/// let record = ActivityRecord::power_changed("Fan", PowerState::On);
/// assert_eq!(record.as_str(), "Turned ON: Fan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityRecord(String);

impl ActivityRecord {
    /// Creates a record from free text.
    ///
    /// Line breaks are replaced by spaces.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.contains(['\n', '\r']) {
            Self(text.replace(['\n', '\r'], " "))
        } else {
            Self(text)
        }
    }

    /// Records that a device was added.
    #[must_use]
    pub fn device_added(name: &str) -> Self {
        Self::new(format!("Added new device: {name}"))
    }

    /// Records that a device was deleted.
    #[must_use]
    pub fn device_deleted(key: &DeviceKey) -> Self {
        Self::new(format!("Deleted device: {key}"))
    }

    /// Records that a device was switched to `state`.
    #[must_use]
    pub fn power_changed(name: &str, state: PowerState) -> Self {
        Self::new(format!("Turned {state}: {name}"))
    }

    /// Returns the record text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ActivityRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
