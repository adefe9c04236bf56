// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Source of new setting values when a device is switched on.

use crate::device::Device;
use crate::types::SettingKind;

/// Supplies the setting for a device that is being turned on.
///
/// Only devices whose category has a [`SettingKind`] are asked. The console
/// binary implements this with an interactive prompt; tests usually pass a
/// closure.
///
/// # Examples
///
/// ```
/// use smarthome_console::device::Device;
/// use smarthome_console::registry::SettingProvider;
/// use smarthome_console::types::{DeviceCategory, SettingKind};
///
/// let mut always_three = |_: &Device, _: SettingKind| 3;
/// let fan = Device::new("Fan", DeviceCategory::Fan);
/// assert_eq!(always_three.provide(&fan, SettingKind::Speed), 3);
/// ```
pub trait SettingProvider {
    /// Returns the new setting for `device`.
    ///
    /// `device` is passed in its state before the toggle.
    fn provide(&mut self, device: &Device, kind: SettingKind) -> i32;
}

impl<F> SettingProvider for F
where
    F: FnMut(&Device, SettingKind) -> i32,
{
    fn provide(&mut self, device: &Device, kind: SettingKind) -> i32 {
        self(device, kind)
    }
}

/// Provider that keeps whatever setting the device already has.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepCurrent;

impl SettingProvider for KeepCurrent {
    fn provide(&mut self, device: &Device, _kind: SettingKind) -> i32 {
        device.setting()
    }
}
