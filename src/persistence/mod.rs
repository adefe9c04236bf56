// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Saving and restoring console state.
//!
//! Two artifacts make up a snapshot:
//!
//! - the **device file**, a JSON object keyed by device key:
//!
//!   ```json
//!   {
//!     "ac": { "name": "AC", "is_on": true, "setting": 24 },
//!     "tv": { "name": "TV", "is_on": false, "setting": 0 }
//!   }
//!   ```
//!
//! - the **history file**, one activity record per line in append order.
//!
//! Loading a freshly saved snapshot reproduces every device attribute and
//! the exact sequence of history lines.

mod snapshot;

pub use snapshot::{DEFAULT_DEVICES_FILE, DEFAULT_HISTORY_FILE, Snapshot, SnapshotStore};
