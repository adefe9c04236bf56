// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry and the toggle path.
//!
//! The [`DeviceRegistry`] owns every [`Device`](crate::device::Device) and is
//! the only component that mutates one. Manual toggles, voice commands and
//! undo all end up in [`DeviceRegistry::toggle`].
//!
//! Per device the state machine has two states, `OFF` and `ON`. Requesting
//! the state a device is already in is reported as
//! [`Error::NoOpStateChange`](crate::Error::NoOpStateChange) and changes
//! nothing.

mod device_registry;
mod setting;

pub use device_registry::{DeviceRegistry, ToggleOutcome};
pub use setting::{KeepCurrent, SettingProvider};
