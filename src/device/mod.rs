// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device records held by the registry.
//!
//! A [`Device`] is an appliance with a display name, an on/off state and an
//! integer setting whose meaning depends on its [`DeviceCategory`]. Its
//! [`DeviceKey`] is derived from the name once and never changes.
//!
//! # Examples
//!
//! ```
//! use smarthome_console::device::Device;
//! use smarthome_console::types::DeviceCategory;
//!
//! let ac = Device::new("AC", DeviceCategory::Climate);
//! assert_eq!(ac.to_string(), "AC: OFF");
//! assert_eq!(ac.setting(), 22);
//!
//! let ac = Device::with_state("AC", DeviceCategory::Climate, true, 24);
//! assert_eq!(ac.to_string(), "AC: ON (24°C)");
//! ```

mod device_key;

use std::fmt;

pub use device_key::DeviceKey;

use crate::types::{DeviceCategory, PowerState};

/// An appliance managed by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    key: DeviceKey,
    name: String,
    category: DeviceCategory,
    is_on: bool,
    setting: i32,
}

impl Device {
    /// Creates a switched-off device with the category's default setting.
    #[must_use]
    pub fn new(name: impl Into<String>, category: DeviceCategory) -> Self {
        let setting = category.default_setting();
        Self::with_state(name, category, false, setting)
    }

    /// Creates a device with an explicit state, as restored from a snapshot.
    #[must_use]
    pub fn with_state(
        name: impl Into<String>,
        category: DeviceCategory,
        is_on: bool,
        setting: i32,
    ) -> Self {
        let name = name.into();
        Self {
            key: DeviceKey::new(&name),
            name,
            category,
            is_on,
            setting,
        }
    }

    /// Returns the lookup key.
    #[must_use]
    pub fn key(&self) -> &DeviceKey {
        &self.key
    }

    /// Returns the display name, case preserved.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category fixed at creation.
    #[must_use]
    pub fn category(&self) -> DeviceCategory {
        self.category
    }

    /// Returns `true` if the device is switched on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        PowerState::from(self.is_on)
    }

    /// Returns the integer setting.
    #[must_use]
    pub fn setting(&self) -> i32 {
        self.setting
    }

    pub(crate) fn set_power(&mut self, on: bool) {
        self.is_on = on;
    }

    pub(crate) fn set_setting(&mut self, setting: i32) {
        self.setting = setting;
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on {
            return write!(f, "{}: OFF", self.name);
        }
        match self.category.setting_kind() {
            Some(kind) => write!(f, "{}: ON ({})", self.name, kind.describe(self.setting)),
            None => write!(f, "{}: ON", self.name),
        }
    }
}
