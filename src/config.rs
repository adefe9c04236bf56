// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Console configuration.
//!
//! Configuration is read from an optional TOML file. Every key has a
//! default, so an empty file (or no file) is valid:
//!
//! ```toml
//! data_dir = "/var/lib/smarthome"
//! devices_file = "devices.json"
//! history_file = "history.txt"
//! seed_defaults = true
//! log_level = "warn"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::persistence::{DEFAULT_DEVICES_FILE, DEFAULT_HISTORY_FILE, SnapshotStore};

/// Errors raised while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// The configuration file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("invalid config {path}: {source}")]
    Toml {
        /// The configuration file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: toml::de::Error,
    },
}

/// Verbosity of diagnostic logging.
#[derive(
    Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including each activity record.
    Trace,
    /// Every state mutation.
    Debug,
    /// Snapshot saves and loads.
    Info,
    /// Rejected or suspicious operations.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Returns the lowercase name, as accepted by `RUST_LOG`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Settings of a console session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Directory holding the snapshot files.
    pub data_dir: PathBuf,
    /// File name of the device snapshot, relative to `data_dir`.
    pub devices_file: String,
    /// File name of the history snapshot, relative to `data_dir`.
    pub history_file: String,
    /// Populate the built-in devices when nothing was restored.
    pub seed_defaults: bool,
    /// Diagnostic log level.
    pub log_level: LogLevel,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            devices_file: DEFAULT_DEVICES_FILE.to_string(),
            history_file: DEFAULT_HISTORY_FILE.to_string(),
            seed_defaults: true,
            log_level: LogLevel::default(),
        }
    }
}

impl ConsoleConfig {
    /// Reads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses the configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Returns the snapshot store described by this configuration.
    #[must_use]
    pub fn snapshot_store(&self) -> SnapshotStore {
        SnapshotStore::new(
            self.data_dir.join(&self.devices_file),
            self.data_dir.join(&self.history_file),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert!(config.seed_defaults);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config = ConsoleConfig::from_toml(
            r#"
            data_dir = "/srv/home"
            seed_defaults = false
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/home"));
        assert!(!config.seed_defaults);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.devices_file, "devices.json");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConsoleConfig::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn snapshot_store_joins_paths() {
        let config = ConsoleConfig {
            data_dir: PathBuf::from("/srv/home"),
            history_file: "log.txt".to_string(),
            ..ConsoleConfig::default()
        };
        let store = config.snapshot_store();
        assert_eq!(store.devices_path(), Path::new("/srv/home/devices.json"));
        assert_eq!(store.history_path(), Path::new("/srv/home/log.txt"));
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ConsoleConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
