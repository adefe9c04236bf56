// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Case-insensitive device identifier.

use std::borrow::Borrow;
use std::fmt;

/// Lookup key of a device: its display name, trimmed and lowercased.
///
/// Two names that differ only in case map to the same key, which is what
/// makes `"Fan"`, `"fan"` and `"FAN"` the same device.
///
/// # Examples
///
/// ```
/// use smarthome_console::device::DeviceKey;
///
/// let key = DeviceKey::new("Living Room Lamp");
/// assert_eq!(key.as_str(), "living room lamp");
/// assert_eq!(key, DeviceKey::new("LIVING ROOM LAMP "));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DeviceKey(String);

impl DeviceKey {
    /// Derives the key for a display name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceKey({:?})", self.0)
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for DeviceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_case_and_padding() {
        assert_eq!(DeviceKey::new("  TV"), DeviceKey::new("tv"));
        assert_eq!(DeviceKey::new("AC").as_str(), "ac");
    }

    #[test]
    fn keys_order_lexicographically() {
        let mut keys = vec![DeviceKey::new("tv"), DeviceKey::new("AC"), DeviceKey::new("Light")];
        keys.sort();
        let sorted: Vec<&str> = keys.iter().map(DeviceKey::as_str).collect();
        assert_eq!(sorted, ["ac", "light", "tv"]);
    }

    #[test]
    fn blank_name_gives_empty_key() {
        assert!(DeviceKey::new("   ").is_empty());
    }
}
