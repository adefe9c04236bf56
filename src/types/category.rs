// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device categories and the settings they carry.
//!
//! The category is fixed when a device is created. It decides the default
//! value of the integer setting and whether turning the device on asks the
//! setting provider for a new value.

use std::fmt;
use std::ops::RangeInclusive;

/// Kind of appliance a device represents.
///
/// # Examples
///
/// ```
/// use smarthome_console::types::{DeviceCategory, SettingKind};
///
/// assert_eq!(DeviceCategory::infer("Heater"), DeviceCategory::Climate);
/// assert_eq!(DeviceCategory::Climate.default_setting(), 22);
/// assert_eq!(DeviceCategory::Fan.setting_kind(), Some(SettingKind::Speed));
/// assert_eq!(DeviceCategory::infer("TV").setting_kind(), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    /// Air conditioners and heaters; the setting is a temperature in °C.
    Climate,
    /// Fans; the setting is a speed level.
    Fan,
    /// Anything else; the setting is unused.
    #[default]
    Appliance,
}

impl DeviceCategory {
    /// Default temperature for climate devices, in °C.
    pub const DEFAULT_TEMPERATURE: i32 = 22;

    /// Guesses the category from a device name.
    ///
    /// Matching is case-insensitive and exact: `"AC"` and `"heater"` are
    /// climate devices, `"Fan"` is a fan, `"Ceiling Fan"` is not.
    #[must_use]
    pub fn infer(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "ac" | "heater" => Self::Climate,
            "fan" => Self::Fan,
            _ => Self::Appliance,
        }
    }

    /// Returns the setting a freshly added device of this category starts with.
    #[must_use]
    pub const fn default_setting(&self) -> i32 {
        match self {
            Self::Climate => Self::DEFAULT_TEMPERATURE,
            Self::Fan | Self::Appliance => 0,
        }
    }

    /// Returns the kind of setting requested when the device is turned on.
    #[must_use]
    pub const fn setting_kind(&self) -> Option<SettingKind> {
        match self {
            Self::Climate => Some(SettingKind::Temperature),
            Self::Fan => Some(SettingKind::Speed),
            Self::Appliance => None,
        }
    }

    /// Returns the lowercase label used in configuration and snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Fan => "fan",
            Self::Appliance => "appliance",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The meaning of a device's integer setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    /// Target temperature in °C.
    Temperature,
    /// Fan speed level.
    Speed,
}

impl SettingKind {
    /// Valid fan speed levels.
    pub const SPEED_RANGE: RangeInclusive<i32> = 1..=5;

    /// Returns the question shown to the user when a value is needed.
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        match self {
            Self::Temperature => "Set temperature: ",
            Self::Speed => "Set speed (1-5): ",
        }
    }

    /// Returns the accepted range of values, if the kind restricts it.
    #[must_use]
    pub const fn valid_range(&self) -> Option<RangeInclusive<i32>> {
        match self {
            Self::Temperature => None,
            Self::Speed => Some(Self::SPEED_RANGE),
        }
    }

    /// Formats a value of this kind for display, e.g. `24°C` or `Speed 3`.
    #[must_use]
    pub fn describe(&self, value: i32) -> String {
        match self {
            Self::Temperature => format!("{value}°C"),
            Self::Speed => format!("Speed {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_is_case_insensitive_and_exact() {
        assert_eq!(DeviceCategory::infer("ac"), DeviceCategory::Climate);
        assert_eq!(DeviceCategory::infer("HEATER"), DeviceCategory::Climate);
        assert_eq!(DeviceCategory::infer("fAn"), DeviceCategory::Fan);
        assert_eq!(DeviceCategory::infer("Ceiling Fan"), DeviceCategory::Appliance);
        assert_eq!(DeviceCategory::infer("Light"), DeviceCategory::Appliance);
    }

    #[test]
    fn default_settings() {
        assert_eq!(DeviceCategory::Climate.default_setting(), 22);
        assert_eq!(DeviceCategory::Fan.default_setting(), 0);
        assert_eq!(DeviceCategory::Appliance.default_setting(), 0);
    }

    #[test]
    fn setting_kind_describe() {
        assert_eq!(SettingKind::Temperature.describe(24), "24°C");
        assert_eq!(SettingKind::Speed.describe(3), "Speed 3");
        assert!(SettingKind::Speed.valid_range().unwrap().contains(&5));
        assert!(SettingKind::Temperature.valid_range().is_none());
    }
}
