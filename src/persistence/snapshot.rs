// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File-backed snapshot store.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceKey};
use crate::error::PersistenceError;
use crate::event::ActivityLog;
use crate::types::DeviceCategory;

/// Default name of the device file.
pub const DEFAULT_DEVICES_FILE: &str = "devices.json";

/// Default name of the history file.
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Persisted form of one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DeviceRecord {
    name: String,
    is_on: bool,
    setting: i32,
    /// Only present when it differs from the category inferred from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<DeviceCategory>,
}

impl From<&Device> for DeviceRecord {
    fn from(device: &Device) -> Self {
        let category = device.category();
        Self {
            name: device.name().to_string(),
            is_on: device.is_on(),
            setting: device.setting(),
            category: (category != DeviceCategory::infer(device.name())).then_some(category),
        }
    }
}

impl From<DeviceRecord> for Device {
    fn from(record: DeviceRecord) -> Self {
        let category = record
            .category
            .unwrap_or_else(|| DeviceCategory::infer(&record.name));
        Device::with_state(record.name, category, record.is_on, record.setting)
    }
}

/// Contents restored from disk.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Devices in key order.
    pub devices: Vec<Device>,
    /// Activity history in its original order.
    pub history: ActivityLog,
}

/// Reads and writes the device file and the history file.
///
/// The device file is a JSON object mapping each device key to
/// `{"name", "is_on", "setting"}`. The history file holds one activity record
/// per line. Either file may be missing, which restores nothing.
///
/// # Examples
///
/// ```no_run
/// use smarthome_console::persistence::SnapshotStore;
///
/// # fn main() -> Result<(), smarthome_console::PersistenceError> {
/// let store = SnapshotStore::in_dir("/var/lib/smarthome");
/// let snapshot = store.load()?;
/// println!("{} devices restored", snapshot.devices.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    devices_path: PathBuf,
    history_path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store using explicit file paths.
    #[must_use]
    pub fn new(devices_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            devices_path: devices_path.into(),
            history_path: history_path.into(),
        }
    }

    /// Creates a store using the default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_DEVICES_FILE), dir.join(DEFAULT_HISTORY_FILE))
    }

    /// Returns the path of the device file.
    #[must_use]
    pub fn devices_path(&self) -> &Path {
        &self.devices_path
    }

    /// Returns the path of the history file.
    #[must_use]
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Writes the devices and the history, replacing earlier snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn save<'a>(
        &self,
        devices: impl IntoIterator<Item = &'a Device>,
        history: &ActivityLog,
    ) -> Result<(), PersistenceError> {
        let records: BTreeMap<String, DeviceRecord> = devices
            .into_iter()
            .map(|device| (device.key().to_string(), DeviceRecord::from(device)))
            .collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| PersistenceError::json(&self.devices_path, e))?;

        let mut lines = String::new();
        for record in history {
            // Writing to a String cannot fail.
            let _ = writeln!(lines, "{record}");
        }

        replace_file(&self.devices_path, &json)?;
        replace_file(&self.history_path, &lines)?;

        tracing::info!(
            devices = records.len(),
            history = history.len(),
            path = %self.devices_path.display(),
            "Snapshot saved"
        );
        Ok(())
    }

    /// Reads the devices and the history.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed, or if
    /// two device entries resolve to the same key.
    pub fn load(&self) -> Result<Snapshot, PersistenceError> {
        let devices = match read_optional(&self.devices_path)? {
            Some(json) => self.parse_devices(&json)?,
            None => {
                tracing::info!(path = %self.devices_path.display(), "No device file, starting empty");
                Vec::new()
            }
        };

        let history = match read_optional(&self.history_path)? {
            Some(text) => ActivityLog::from_lines(text.lines()),
            None => ActivityLog::new(),
        };

        tracing::info!(devices = devices.len(), history = history.len(), "Snapshot loaded");
        Ok(Snapshot { devices, history })
    }

    fn parse_devices(&self, json: &str) -> Result<Vec<Device>, PersistenceError> {
        let records: BTreeMap<String, DeviceRecord> =
            serde_json::from_str(json).map_err(|e| PersistenceError::json(&self.devices_path, e))?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut devices = Vec::with_capacity(records.len());
        for (stored_key, record) in records {
            let device = Device::from(record);
            if device.key() != &DeviceKey::new(&stored_key) {
                tracing::warn!(
                    stored = %stored_key,
                    derived = %device.key(),
                    "Device file key does not match name, using name"
                );
            }
            if !seen.insert(device.key().clone()) {
                return Err(PersistenceError::DuplicateKey {
                    path: self.devices_path.clone(),
                    key: device.key().to_string(),
                });
            }
            devices.push(device);
        }
        Ok(devices)
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Returns the file contents, or `None` if it does not exist.
fn read_optional(path: &Path) -> Result<Option<String>, PersistenceError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PersistenceError::io(path, e)),
    }
}

/// Writes `contents` to a sibling temporary file and renames it over `path`.
fn replace_file(path: &Path, contents: &str) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents).map_err(|e| PersistenceError::io(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| PersistenceError::io(path, e))
}
