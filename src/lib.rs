// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart Home Console - the state engine behind a home-automation console.
//!
//! A small set of named appliances, each with an on/off state and an integer
//! setting, is driven by manual toggles, queued voice commands and undo.
//!
//! # Features
//!
//! - **Device registry**: case-insensitive names, sorted listing, default
//!   settings per [`DeviceCategory`]
//! - **Undo**: every toggle can be reversed, newest first
//! - **Voice commands**: a FIFO queue of `turn on/off <device>` phrases
//! - **Activity history**: an append-only log of completed actions
//! - **Snapshots**: devices and history saved to JSON and plain text
//!
//! # Quick Start
//!
//! ```
//! use smarthome_console::{Device, HomeConsole, PowerState, SettingKind};
//!
//! let mut console = HomeConsole::default();
//! console.add("AC", None)?;
//!
//! // Climate devices ask for a temperature when switched on.
//! let mut thermostat = |_: &Device, _: SettingKind| 21;
//! console.toggle("ac", PowerState::On, &mut thermostat)?;
//! assert_eq!(console.lookup("AC").unwrap().to_string(), "AC: ON (21°C)");
//!
//! // Voice commands go through the same toggle path.
//! console.enqueue_voice("turn off ac");
//! console.process_voice(&mut thermostat)?;
//!
//! // And undo switches the AC back on.
//! console.undo(&mut thermostat)?;
//! assert!(console.lookup("ac").unwrap().is_on());
//! # Ok::<(), smarthome_console::Error>(())
//! ```

pub mod command;
pub mod config;
mod console;
pub mod device;
pub mod error;
pub mod event;
pub mod persistence;
pub mod registry;
pub mod state;
pub mod types;

pub use command::{VoiceCommand, VoiceCommandQueue, VoiceIntent};
pub use config::{ConfigError, ConsoleConfig, LogLevel};
pub use console::HomeConsole;
pub use device::{Device, DeviceKey};
pub use error::{Error, PersistenceError, Result};
pub use event::{ActivityLog, ActivityRecord};
pub use persistence::{Snapshot, SnapshotStore};
pub use registry::{DeviceRegistry, KeepCurrent, SettingProvider, ToggleOutcome};
pub use state::{UndoEntry, UndoStack};
pub use types::{DeviceCategory, PowerState, SettingKind};
