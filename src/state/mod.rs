// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Undo support.
//!
//! Each successful toggle pushes an [`UndoEntry`] recording the state the
//! device had before. Undo pops the newest entry and switches the device back.
//!
//! # Examples
//!
//! ```
//! use smarthome_console::state::{UndoEntry, UndoStack};
//! use smarthome_console::types::PowerState;
//!
//! let mut stack = UndoStack::new();
//! stack.push(UndoEntry::after_toggle("TV", PowerState::On));
//!
//! let entry = stack.pop().unwrap();
//! assert_eq!(entry.restore(), PowerState::Off);
//! assert!(stack.pop().is_err());
//! ```

mod undo_entry;
mod undo_stack;

pub use undo_entry::UndoEntry;
pub use undo_stack::UndoStack;
