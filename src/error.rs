// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the console core.
//!
//! Every operation of the core returns one of these outcomes instead of
//! terminating the process. The menu decides how to present them and then
//! keeps looping.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::PowerState;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A device with the same key is already registered.
    #[error("device '{0}' already exists")]
    DuplicateDevice(String),

    /// No device is registered under the requested key.
    #[error("device '{0}' not found")]
    DeviceNotFound(String),

    /// The device is already in the requested power state.
    #[error("{name} is already {state}")]
    NoOpStateChange {
        /// Display name of the device.
        name: String,
        /// The state the device is already in.
        state: PowerState,
    },

    /// There is nothing left to undo.
    #[error("nothing to undo")]
    EmptyStack,

    /// The voice command queue has no pending commands.
    #[error("no voice commands queued")]
    EmptyQueue,

    /// A voice command could not be understood.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A typed value could not be parsed.
    #[error("invalid {kind}: {value:?}")]
    InvalidValue {
        /// What was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A device name was empty or spanned several lines.
    #[error("invalid device name: {0:?}")]
    InvalidName(String),

    /// Saving or loading a snapshot failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Errors raised while reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem access failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The device file is not valid JSON or has the wrong shape.
    #[error("malformed device file {path}: {source}")]
    Json {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Two entries of the device file resolve to the same key.
    #[error("device file {path} lists '{key}' more than once")]
    DuplicateKey {
        /// The file being parsed.
        path: PathBuf,
        /// The colliding key.
        key: String,
    },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
