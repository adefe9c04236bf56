// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Append-only activity history.

use super::ActivityRecord;

/// Ordered, append-only record of completed actions.
///
/// Records are never edited or removed while the console runs. Restoring a
/// snapshot appends its records after the existing ones.
///
/// # Examples
///
/// ```
/// use smarthome_console::event::{ActivityLog, ActivityRecord};
///
/// let mut log = ActivityLog::new();
/// log.append(ActivityRecord::device_added("Lamp"));
/// log.append(ActivityRecord::new("custom note"));
///
/// let lines: Vec<&str> = log.iter().map(ActivityRecord::as_str).collect();
/// assert_eq!(lines, ["Added new device: Lamp", "custom note"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    records: Vec<ActivityRecord>,
}

impl ActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end.
    pub fn append(&mut self, record: ActivityRecord) {
        tracing::trace!(record = %record, "Activity recorded");
        self.records.push(record);
    }

    /// Returns every record in append order.
    #[must_use]
    pub fn all(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Iterates over the records in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, ActivityRecord> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rebuilds a log by replaying persisted lines in order.
    pub(crate) fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: lines.into_iter().map(ActivityRecord::new).collect(),
        }
    }
}

impl Extend<ActivityRecord> for ActivityLog {
    fn extend<I: IntoIterator<Item = ActivityRecord>>(&mut self, records: I) {
        for record in records {
            self.append(record);
        }
    }
}

impl IntoIterator for ActivityLog {
    type Item = ActivityRecord;
    type IntoIter = std::vec::IntoIter<ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = &'a ActivityRecord;
    type IntoIter = std::slice::Iter<'a, ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerState;

    #[test]
    fn new_log_is_empty() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert!(log.all().is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let mut log = ActivityLog::new();
        log.append(ActivityRecord::power_changed("Fan", PowerState::On));
        log.append(ActivityRecord::power_changed("Fan", PowerState::Off));
        log.append(ActivityRecord::device_added("Lamp"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.all()[0].as_str(), "Turned ON: Fan");
        assert_eq!(log.all()[2].as_str(), "Added new device: Lamp");
    }

    #[test]
    fn extend_appends_after_existing_records() {
        let mut log = ActivityLog::new();
        log.append(ActivityRecord::device_added("Lamp"));

        log.extend(ActivityLog::from_lines(["Turned ON: Fan", "Turned OFF: Fan"]));

        let lines: Vec<&str> = log.iter().map(ActivityRecord::as_str).collect();
        assert_eq!(lines, ["Added new device: Lamp", "Turned ON: Fan", "Turned OFF: Fan"]);
    }

    #[test]
    fn from_lines_keeps_blank_lines() {
        let log = ActivityLog::from_lines(["a", "", "b"]);
        let lines: Vec<&str> = log.iter().map(ActivityRecord::as_str).collect();
        assert_eq!(lines, ["a", "", "b"]);
    }
}
