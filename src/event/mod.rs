// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Activity history.
//!
//! Every completed action (adding or deleting a device, switching one on or
//! off) appends an [`ActivityRecord`] to the [`ActivityLog`]. The log is
//! read-only for everything but the registry and snapshot restore.

mod activity_log;
mod activity_record;

pub use activity_log::ActivityLog;
pub use activity_record::ActivityRecord;
