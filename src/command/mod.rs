// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Voice commands.
//!
//! Raw command strings are buffered in a [`VoiceCommandQueue`] and later
//! drained one at a time. Each drained command is [`parse`]d into a
//! [`VoiceIntent`] and [`execute`]d through the registry's toggle path, so a
//! voice command behaves exactly like the equivalent manual toggle.
//!
//! # Known limitation
//!
//! Matching is keyword based and the device name is positional (everything
//! after the second token). Phrasings other than `turn on <device>` and
//! `turn off <device>` may select the wrong device name.

mod interpreter;
mod voice_queue;

pub use interpreter::{VoiceIntent, execute, parse};
pub use voice_queue::{VoiceCommand, VoiceCommandQueue};
