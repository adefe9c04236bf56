// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry: the owner of every device record.

use std::collections::{BTreeSet, HashMap};

use crate::device::{Device, DeviceKey};
use crate::error::{Error, Result};
use crate::event::{ActivityLog, ActivityRecord};
use crate::state::{UndoEntry, UndoStack};
use crate::types::{DeviceCategory, PowerState};

use super::SettingProvider;

/// Devices created when the console starts with an empty registry.
const DEFAULT_DEVICES: [(&str, DeviceCategory, i32); 5] = [
    ("Light", DeviceCategory::Appliance, 0),
    ("Fan", DeviceCategory::Fan, 0),
    ("TV", DeviceCategory::Appliance, 0),
    ("AC", DeviceCategory::Climate, 24),
    ("Heater", DeviceCategory::Climate, 22),
];

/// Result of a toggle that changed a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Key of the toggled device.
    pub key: DeviceKey,
    /// Display name of the toggled device.
    pub name: String,
    /// The state the device is now in.
    pub state: PowerState,
    /// The new setting, if one was requested from the provider.
    pub setting: Option<i32>,
}

/// Owner of all devices, keyed case-insensitively by name.
///
/// The registry performs every device mutation. Mutations append to the
/// [`ActivityLog`] they are given, and toggles push an [`UndoEntry`] when an
/// [`UndoStack`] is supplied. All checks run before anything is changed, so a
/// failed operation leaves the registry, log and stack untouched.
///
/// # Examples
///
/// ```
/// use smarthome_console::event::ActivityLog;
/// use smarthome_console::registry::{DeviceRegistry, KeepCurrent};
/// use smarthome_console::state::UndoStack;
/// use smarthome_console::types::PowerState;
///
/// let mut registry = DeviceRegistry::new();
/// let mut log = ActivityLog::new();
/// let mut undo = UndoStack::new();
///
/// registry.add("Lamp", None, &mut log).unwrap();
/// registry
///     .toggle("lamp", PowerState::On, &mut KeepCurrent, &mut log, Some(&mut undo))
///     .unwrap();
///
/// assert!(registry.lookup("LAMP").unwrap().is_on());
/// assert_eq!(log.len(), 2);
/// assert_eq!(undo.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: HashMap<DeviceKey, Device>,
    used: BTreeSet<DeviceKey>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Device Management
    // =========================================================================

    /// Adds a new, switched-off device.
    ///
    /// When `category_hint` is `None` the category is inferred from the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] for blank or multi-line names and
    /// [`Error::DuplicateDevice`] if a device with the same key exists.
    pub fn add(
        &mut self,
        name: &str,
        category_hint: Option<DeviceCategory>,
        log: &mut ActivityLog,
    ) -> Result<&Device> {
        let name = validate_name(name)?;
        let category = category_hint.unwrap_or_else(|| DeviceCategory::infer(name));
        let device = Device::new(name, category);
        let key = device.key().clone();

        self.insert(device)?;
        log.append(ActivityRecord::device_added(name));
        tracing::debug!(device = %key, %category, "Device added");

        self.lookup_key(&key)
            .ok_or_else(|| Error::DeviceNotFound(key.to_string()))
    }

    /// Deletes a device and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if no device matches `name`.
    pub fn remove(&mut self, name: &str, log: &mut ActivityLog) -> Result<Device> {
        let key = DeviceKey::new(name);
        let device = self
            .devices
            .remove(&key)
            .ok_or_else(|| Error::DeviceNotFound(name.trim().to_string()))?;

        self.used.remove(&key);
        log.append(ActivityRecord::device_deleted(&key));
        tracing::debug!(device = %key, "Device removed");

        Ok(device)
    }

    /// Finds a device by name, ignoring case.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Device> {
        self.lookup_key(&DeviceKey::new(name))
    }

    /// Finds a device by key.
    #[must_use]
    pub fn lookup_key(&self, key: &DeviceKey) -> Option<&Device> {
        self.devices.get(key)
    }

    /// Returns all devices ordered by key.
    #[must_use]
    pub fn list_sorted(&self) -> Vec<&Device> {
        let mut devices: Vec<&Device> = self.devices.values().collect();
        devices.sort_by(|a, b| a.key().cmp(b.key()));
        devices
    }

    /// Returns the number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if no device is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns the keys of devices that have been toggled, in key order.
    #[must_use]
    pub fn used_devices(&self) -> Vec<&DeviceKey> {
        self.used.iter().collect()
    }

    /// Inserts restored devices, replacing any device with the same key.
    ///
    /// Devices already registered under other keys are kept. Restoring is not
    /// an activity and writes nothing to the log.
    ///
    /// Returns the number of devices that replaced an existing one.
    pub fn restore(&mut self, devices: impl IntoIterator<Item = Device>) -> usize {
        let mut replaced = 0;
        for device in devices {
            if let Some(previous) = self.devices.insert(device.key().clone(), device) {
                tracing::debug!(device = %previous.key(), "Device replaced by snapshot");
                replaced += 1;
            }
        }
        replaced
    }

    /// Populates the built-in device set if the registry is empty.
    ///
    /// Seeding is not an activity and writes nothing to the log.
    ///
    /// Returns `true` if devices were added.
    pub fn seed_defaults(&mut self) -> bool {
        if !self.is_empty() {
            return false;
        }
        for (name, category, setting) in DEFAULT_DEVICES {
            let device = Device::with_state(name, category, false, setting);
            self.devices.insert(device.key().clone(), device);
        }
        tracing::debug!(count = self.len(), "Seeded default devices");
        true
    }

    // =========================================================================
    // Power Control
    // =========================================================================

    /// Switches a device on or off.
    ///
    /// Turning on a device whose category carries a setting asks `settings`
    /// for the new value. On success the change is logged and, if `undo` is
    /// given, the previous state is pushed onto it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if no device matches `name`, and
    /// [`Error::NoOpStateChange`] if the device is already in `target`.
    pub fn toggle(
        &mut self,
        name: &str,
        target: PowerState,
        settings: &mut dyn SettingProvider,
        log: &mut ActivityLog,
        undo: Option<&mut UndoStack>,
    ) -> Result<ToggleOutcome> {
        let key = DeviceKey::new(name);
        let device = self
            .devices
            .get_mut(&key)
            .ok_or_else(|| Error::DeviceNotFound(name.trim().to_string()))?;

        if device.power() == target {
            tracing::debug!(device = %key, state = %target, "Device already in requested state");
            return Err(Error::NoOpStateChange {
                name: device.name().to_string(),
                state: target,
            });
        }

        let setting = match (target, device.category().setting_kind()) {
            (PowerState::On, Some(kind)) => Some(settings.provide(device, kind)),
            _ => None,
        };

        device.set_power(target.is_on());
        if let Some(value) = setting {
            device.set_setting(value);
        }

        if let Some(undo) = undo {
            undo.push(UndoEntry::after_toggle(key.clone(), target));
        }
        self.used.insert(key.clone());
        log.append(ActivityRecord::power_changed(device.name(), target));
        tracing::debug!(device = %key, state = %target, ?setting, "Device toggled");

        Ok(ToggleOutcome {
            name: device.name().to_string(),
            key,
            state: target,
            setting,
        })
    }

    fn insert(&mut self, device: Device) -> Result<()> {
        if self.devices.contains_key(device.key()) {
            return Err(Error::DuplicateDevice(device.name().to_string()));
        }
        self.devices.insert(device.key().clone(), device);
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(['\n', '\r']) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::KeepCurrent;
    use crate::types::SettingKind;

    fn registry_with(names: &[&str]) -> (DeviceRegistry, ActivityLog) {
        let mut registry = DeviceRegistry::new();
        let mut log = ActivityLog::new();
        for name in names {
            registry.add(name, None, &mut log).unwrap();
        }
        (registry, log)
    }

    #[test]
    fn add_then_lookup_returns_default_device() {
        let (registry, log) = registry_with(&["Heater", "Lamp"]);

        let heater = registry.lookup("heater").unwrap();
        assert!(!heater.is_on());
        assert_eq!(heater.setting(), 22);
        assert_eq!(heater.category(), DeviceCategory::Climate);

        let lamp = registry.lookup("LAMP").unwrap();
        assert_eq!(lamp.setting(), 0);
        assert_eq!(log.all()[1].as_str(), "Added new device: Lamp");
    }

    #[test]
    fn add_uses_category_hint() {
        let mut registry = DeviceRegistry::new();
        let mut log = ActivityLog::new();
        let device = registry
            .add("Bedroom Heater", Some(DeviceCategory::Climate), &mut log)
            .unwrap();
        assert_eq!(device.setting(), 22);
    }

    #[test]
    fn add_duplicate_in_any_case_fails() {
        let (mut registry, mut log) = registry_with(&["Fan"]);

        let err = registry.add("FAN", None, &mut log).unwrap_err();
        assert!(matches!(err, Error::DuplicateDevice(_)));
        assert_eq!(registry.len(), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut registry = DeviceRegistry::new();
        let mut log = ActivityLog::new();
        assert!(matches!(
            registry.add("   ", None, &mut log),
            Err(Error::InvalidName(_))
        ));
        assert!(matches!(
            registry.add("two\nlines", None, &mut log),
            Err(Error::InvalidName(_))
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn add_trims_display_name() {
        let (registry, _) = registry_with(&["  Porch Light "]);
        assert_eq!(registry.lookup("porch light").unwrap().name(), "Porch Light");
    }

    #[test]
    fn remove_missing_fails_without_logging() {
        let (mut registry, mut log) = registry_with(&["Fan"]);
        assert!(matches!(
            registry.remove("lamp", &mut log),
            Err(Error::DeviceNotFound(_))
        ));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn remove_logs_key() {
        let (mut registry, mut log) = registry_with(&["Fan"]);
        let removed = registry.remove("FAN", &mut log).unwrap();
        assert_eq!(removed.name(), "Fan");
        assert!(registry.is_empty());
        assert_eq!(log.all()[1].as_str(), "Deleted device: fan");
    }

    #[test]
    fn list_sorted_orders_by_key() {
        let (registry, _) = registry_with(&["tv", "ac", "light"]);
        let keys: Vec<&str> = registry
            .list_sorted()
            .into_iter()
            .map(|d| d.key().as_str())
            .collect();
        assert_eq!(keys, ["ac", "light", "tv"]);
    }

    #[test]
    fn toggle_to_current_state_is_no_op() {
        let (mut registry, mut log) = registry_with(&["Lamp"]);
        let mut undo = UndoStack::new();

        let err = registry
            .toggle("lamp", PowerState::Off, &mut KeepCurrent, &mut log, Some(&mut undo))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::NoOpStateChange {
                state: PowerState::Off,
                ..
            }
        ));
        assert!(undo.is_empty());
        assert_eq!(log.len(), 1);
        assert!(registry.used_devices().is_empty());
    }

    #[test]
    fn toggle_on_asks_for_setting() {
        let (mut registry, mut log) = registry_with(&["AC", "TV"]);
        let mut asked = Vec::new();
        let mut provider = |device: &Device, kind: SettingKind| {
            asked.push((device.name().to_string(), kind));
            18
        };

        let outcome = registry
            .toggle("ac", PowerState::On, &mut provider, &mut log, None)
            .unwrap();
        assert_eq!(outcome.setting, Some(18));
        assert_eq!(outcome.name, "AC");

        let outcome = registry
            .toggle("tv", PowerState::On, &mut provider, &mut log, None)
            .unwrap();
        assert_eq!(outcome.setting, None);

        assert_eq!(asked, [("AC".to_string(), SettingKind::Temperature)]);
        assert_eq!(registry.lookup("ac").unwrap().setting(), 18);
    }

    #[test]
    fn toggle_off_keeps_setting() {
        let mut registry = DeviceRegistry::new();
        registry.restore([Device::with_state("Fan", DeviceCategory::Fan, true, 4)]);
        let mut log = ActivityLog::new();
        let mut never = |_: &Device, _: SettingKind| -> i32 { panic!("must not be asked") };

        registry
            .toggle("fan", PowerState::Off, &mut never, &mut log, None)
            .unwrap();

        let fan = registry.lookup("fan").unwrap();
        assert!(!fan.is_on());
        assert_eq!(fan.setting(), 4);
    }

    #[test]
    fn toggle_records_previous_state_and_usage() {
        let (mut registry, mut log) = registry_with(&["Lamp"]);
        let mut undo = UndoStack::new();

        registry
            .toggle("Lamp", PowerState::On, &mut KeepCurrent, &mut log, Some(&mut undo))
            .unwrap();

        let entry = undo.peek().unwrap();
        assert_eq!(entry.key().as_str(), "lamp");
        assert_eq!(entry.restore(), PowerState::Off);
        assert_eq!(log.all()[1].as_str(), "Turned ON: Lamp");
        assert_eq!(registry.used_devices(), [&DeviceKey::new("lamp")]);
    }

    #[test]
    fn toggle_missing_device_fails() {
        let mut registry = DeviceRegistry::new();
        let mut log = ActivityLog::new();
        assert!(matches!(
            registry.toggle("ghost", PowerState::On, &mut KeepCurrent, &mut log, None),
            Err(Error::DeviceNotFound(_))
        ));
    }

    #[test]
    fn seed_defaults_only_when_empty() {
        let mut registry = DeviceRegistry::new();
        assert!(registry.seed_defaults());
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.lookup("ac").unwrap().setting(), 24);
        assert_eq!(registry.lookup("heater").unwrap().setting(), 22);
        assert_eq!(registry.lookup("fan").unwrap().category(), DeviceCategory::Fan);
        assert!(!registry.seed_defaults());
    }

    #[test]
    fn restore_overwrites_by_key_and_keeps_others() {
        let (mut registry, log) = registry_with(&["Lamp", "Fan"]);

        let replaced = registry.restore([
            Device::with_state("FAN", DeviceCategory::Fan, true, 3),
            Device::with_state("TV", DeviceCategory::Appliance, false, 0),
        ]);

        assert_eq!(replaced, 1);
        assert_eq!(registry.len(), 3);
        assert!(registry.lookup("lamp").is_some());
        assert_eq!(registry.lookup("fan").unwrap().to_string(), "FAN: ON (Speed 3)");
        assert_eq!(log.len(), 2);
    }
}
