// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The console: one owner for all core state.

use crate::command::{self, VoiceCommand, VoiceCommandQueue};
use crate::config::ConsoleConfig;
use crate::device::{Device, DeviceKey};
use crate::error::Result;
use crate::event::{ActivityLog, ActivityRecord};
use crate::persistence::SnapshotStore;
use crate::registry::{DeviceRegistry, SettingProvider, ToggleOutcome};
use crate::state::{UndoEntry, UndoStack};
use crate::types::{DeviceCategory, PowerState};

/// Home automation console.
///
/// `HomeConsole` owns the device registry, the activity log, the undo stack
/// and the voice command queue, and exposes every operation the text menu
/// needs. Each operation runs to completion before the next one starts.
///
/// # Examples
///
/// ```
/// use smarthome_console::HomeConsole;
/// use smarthome_console::registry::KeepCurrent;
/// use smarthome_console::types::PowerState;
///
/// let mut console = HomeConsole::default();
/// console.add("Lamp", None).unwrap();
///
/// console.toggle("lamp", PowerState::On, &mut KeepCurrent).unwrap();
/// assert!(console.lookup("Lamp").unwrap().is_on());
///
/// console.undo(&mut KeepCurrent).unwrap();
/// assert!(!console.lookup("Lamp").unwrap().is_on());
///
/// console.enqueue_voice("turn on lamp");
/// console.process_voice(&mut KeepCurrent).unwrap();
/// assert!(console.lookup("Lamp").unwrap().is_on());
/// ```
#[derive(Debug, Default)]
pub struct HomeConsole {
    registry: DeviceRegistry,
    history: ActivityLog,
    undo: UndoStack,
    voice: VoiceCommandQueue,
    store: SnapshotStore,
}

impl HomeConsole {
    /// Creates an empty console persisting to `store`.
    #[must_use]
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Creates a console from configuration and restores its snapshot.
    ///
    /// If nothing was restored and `seed_defaults` is set, the built-in
    /// devices are added.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing snapshot cannot be read.
    pub fn open(config: &ConsoleConfig) -> Result<Self> {
        let mut console = Self::new(config.snapshot_store());
        console.load()?;
        if config.seed_defaults && console.registry.seed_defaults() {
            tracing::info!("No devices restored, using the default set");
        }
        Ok(console)
    }

    // =========================================================================
    // Devices
    // =========================================================================

    /// Returns the device registry.
    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Returns all devices ordered by key.
    #[must_use]
    pub fn devices(&self) -> Vec<&Device> {
        self.registry.list_sorted()
    }

    /// Finds a device by name, ignoring case.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Device> {
        self.registry.lookup(name)
    }

    /// Adds a device. See [`DeviceRegistry::add`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`](crate::Error::InvalidName) or
    /// [`Error::DuplicateDevice`](crate::Error::DuplicateDevice).
    pub fn add(&mut self, name: &str, category: Option<DeviceCategory>) -> Result<&Device> {
        self.registry.add(name, category, &mut self.history)
    }

    /// Deletes a device. See [`DeviceRegistry::remove`].
    ///
    /// Undo entries for the device stay on the stack and fail when popped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`](crate::Error::DeviceNotFound) if no
    /// device matches `name`.
    pub fn remove(&mut self, name: &str) -> Result<Device> {
        self.registry.remove(name, &mut self.history)
    }

    /// Switches a device on or off and records the change for undo.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`](crate::Error::DeviceNotFound) or
    /// [`Error::NoOpStateChange`](crate::Error::NoOpStateChange).
    pub fn toggle(
        &mut self,
        name: &str,
        state: PowerState,
        settings: &mut dyn SettingProvider,
    ) -> Result<ToggleOutcome> {
        self.registry
            .toggle(name, state, settings, &mut self.history, Some(&mut self.undo))
    }

    /// Returns the keys of devices toggled during this session.
    #[must_use]
    pub fn used_devices(&self) -> Vec<&DeviceKey> {
        self.registry.used_devices()
    }

    // =========================================================================
    // Voice Commands
    // =========================================================================

    /// Queues a raw voice command for later processing.
    pub fn enqueue_voice(&mut self, raw: impl Into<String>) {
        self.voice.enqueue(raw);
    }

    /// Returns the command [`process_voice`](Self::process_voice) will take next.
    #[must_use]
    pub fn next_voice(&self) -> Option<&VoiceCommand> {
        self.voice.iter().next()
    }

    /// Returns the number of queued voice commands.
    #[must_use]
    pub fn pending_voice(&self) -> usize {
        self.voice.len()
    }

    /// Takes the oldest voice command and executes it.
    ///
    /// The command is consumed whatever the outcome; invalid commands are not
    /// queued again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`](crate::Error::EmptyQueue) if nothing is
    /// queued, [`Error::InvalidCommand`](crate::Error::InvalidCommand) if the
    /// command is not understood, or any toggle error.
    pub fn process_voice(&mut self, settings: &mut dyn SettingProvider) -> Result<ToggleOutcome> {
        let next = self.voice.dequeue()?;
        command::execute(
            next.as_str(),
            &mut self.registry,
            settings,
            &mut self.history,
            &mut self.undo,
        )
    }

    // =========================================================================
    // Undo
    // =========================================================================

    /// Reverses the most recent toggle.
    ///
    /// The entry is consumed even when reversing fails, and the reversal is
    /// not itself recorded, so undo cannot be undone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`](crate::Error::EmptyStack) if there is
    /// nothing to undo, [`Error::DeviceNotFound`](crate::Error::DeviceNotFound)
    /// if the device was deleted since, or
    /// [`Error::NoOpStateChange`](crate::Error::NoOpStateChange) if it is
    /// already in the restored state.
    pub fn undo(&mut self, settings: &mut dyn SettingProvider) -> Result<ToggleOutcome> {
        let entry = self.undo.pop()?;
        tracing::debug!(device = %entry.key(), restore = %entry.restore(), "Undoing last toggle");

        self.registry
            .toggle(
                entry.key().as_str(),
                entry.restore(),
                settings,
                &mut self.history,
                None,
            )
            .inspect_err(|e| tracing::warn!(device = %entry.key(), error = %e, "Undo failed"))
    }

    /// Returns the entry the next [`undo`](Self::undo) will reverse.
    #[must_use]
    pub fn last_undo(&self) -> Option<&UndoEntry> {
        self.undo.peek()
    }

    /// Returns the number of toggles that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Returns the full activity history in order.
    #[must_use]
    pub fn history(&self) -> &[ActivityRecord] {
        self.history.all()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Returns the snapshot store.
    #[must_use]
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Writes the devices and history to the snapshot store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) if writing
    /// fails.
    pub fn save(&self) -> Result<()> {
        self.store.save(self.registry.list_sorted(), &self.history)?;
        Ok(())
    }

    /// Merges the stored snapshot into the console.
    ///
    /// Stored history lines are appended after the records already in memory,
    /// in their original order. Stored devices are inserted by key, replacing
    /// a device with the same key and leaving the others alone. Missing files
    /// restore nothing. The undo stack is cleared because its entries may
    /// describe states the snapshot overwrote. Queued voice commands are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) if a file
    /// cannot be read or parsed. The console is unchanged in that case.
    pub fn load(&mut self) -> Result<()> {
        let snapshot = self.store.load()?;

        let replaced = self.registry.restore(snapshot.devices);
        self.history.extend(snapshot.history);
        self.undo.clear();

        tracing::debug!(replaced, devices = self.registry.len(), "Snapshot merged");
        Ok(())
    }
}
