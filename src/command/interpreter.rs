// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keyword interpreter for voice commands.

use crate::error::{Error, Result};
use crate::event::ActivityLog;
use crate::registry::{DeviceRegistry, SettingProvider, ToggleOutcome};
use crate::state::UndoStack;
use crate::types::PowerState;

/// Number of leading tokens taken by the `turn on` / `turn off` keywords.
const KEYWORD_TOKENS: usize = 2;

/// A recognised voice command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceIntent {
    /// Requested power state.
    pub state: PowerState,
    /// Device name extracted from the command, lowercased.
    pub device: String,
}

/// Parses a raw voice command.
///
/// The text is lowercased and split on whitespace. It means "turn on" if the
/// tokens contain both `turn` and `on`, otherwise "turn off" if they contain
/// both `turn` and `off`. The device name is always the tokens from the third
/// one onwards, so only commands shaped like `turn on <device>` name the
/// device correctly. `"on turn fan"` is still understood as turning on `fan`,
/// while `"please turn on fan"` targets a device called `"on fan"`.
///
/// # Errors
///
/// Returns [`Error::InvalidCommand`] if neither intent is present.
///
/// # Examples
///
/// ```
/// use smarthome_console::command::parse;
/// use smarthome_console::types::PowerState;
///
/// let intent = parse("Turn ON Living Room Lamp").unwrap();
/// assert_eq!(intent.state, PowerState::On);
/// assert_eq!(intent.device, "living room lamp");
///
/// assert!(parse("please do something").is_err());
/// ```
pub fn parse(raw: &str) -> Result<VoiceIntent> {
    let lowered = raw.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let has = |word: &str| tokens.contains(&word);

    let state = if has("turn") && has("on") {
        PowerState::On
    } else if has("turn") && has("off") {
        PowerState::Off
    } else {
        return Err(Error::InvalidCommand(raw.to_string()));
    };

    let device = tokens
        .get(KEYWORD_TOKENS..)
        .map(|rest| rest.join(" "))
        .unwrap_or_default();

    Ok(VoiceIntent { state, device })
}

/// Parses `raw` and drives the registry's toggle path with the result.
///
/// Errors from the toggle itself are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidCommand`] for unparseable text, in which case the
/// registry is not touched, or any error of [`DeviceRegistry::toggle`].
pub fn execute(
    raw: &str,
    registry: &mut DeviceRegistry,
    settings: &mut dyn SettingProvider,
    log: &mut ActivityLog,
    undo: &mut UndoStack,
) -> Result<ToggleOutcome> {
    let intent = parse(raw).inspect_err(|_| {
        tracing::warn!(command = raw, "Voice command not understood");
    })?;
    tracing::debug!(device = %intent.device, state = %intent.state, "Voice command parsed");
    registry.toggle(&intent.device, intent.state, settings, log, Some(undo))
}
