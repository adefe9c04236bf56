// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end behaviour of the console through its public API.

use smarthome_console::{
    Device, DeviceCategory, Error, HomeConsole, KeepCurrent, PowerState, SettingKind,
};

fn console_with(names: &[&str]) -> HomeConsole {
    let mut console = HomeConsole::default();
    for name in names {
        console.add(name, None).unwrap();
    }
    console
}

// ============================================================================
// Registry
// ============================================================================

mod registry {
    use super::*;

    #[test]
    fn listing_is_sorted_by_key_regardless_of_insertion() {
        let console = console_with(&["tv", "Zed Lamp", "AC", "bedroom fan"]);
        let keys: Vec<&str> = console.devices().iter().map(|d| d.key().as_str()).collect();
        assert_eq!(keys, ["ac", "bedroom fan", "tv", "zed lamp"]);
    }

    #[test]
    fn names_are_case_insensitive_everywhere() {
        let mut console = console_with(&["Desk Lamp"]);

        assert!(matches!(
            console.add("DESK LAMP", None),
            Err(Error::DuplicateDevice(_))
        ));
        console
            .toggle("desk LAMP", PowerState::On, &mut KeepCurrent)
            .unwrap();
        assert!(console.lookup("desk lamp").unwrap().is_on());
        console.remove("Desk lamp").unwrap();
        assert!(console.lookup("desk lamp").is_none());
    }

    #[test]
    fn category_hint_overrides_inference() {
        let mut console = HomeConsole::default();
        console
            .add("Ceiling", Some(DeviceCategory::Fan))
            .unwrap();

        let mut asked = None;
        let mut settings = |_: &Device, kind: SettingKind| {
            asked = Some(kind);
            2
        };
        console
            .toggle("ceiling", PowerState::On, &mut settings)
            .unwrap();

        assert_eq!(asked, Some(SettingKind::Speed));
        assert_eq!(
            console.lookup("ceiling").unwrap().to_string(),
            "Ceiling: ON (Speed 2)"
        );
    }

    #[test]
    fn plain_devices_are_never_asked_for_a_setting() {
        let mut console = console_with(&["TV"]);
        let mut settings = |_: &Device, _: SettingKind| -> i32 {
            panic!("TV has no setting");
        };
        console.toggle("tv", PowerState::On, &mut settings).unwrap();
        assert_eq!(console.lookup("tv").unwrap().to_string(), "TV: ON");
    }

    #[test]
    fn redundant_toggle_is_rejected_without_side_effects() {
        let mut console = console_with(&["Lamp"]);
        let history_before = console.history().len();

        let err = console
            .toggle("lamp", PowerState::Off, &mut KeepCurrent)
            .unwrap_err();

        assert_eq!(err.to_string(), "Lamp is already OFF");
        assert_eq!(console.history().len(), history_before);
        assert_eq!(console.undo_depth(), 0);
        assert!(console.used_devices().is_empty());
    }
}

// ============================================================================
// Voice Commands
// ============================================================================

mod voice {
    use super::*;

    #[test]
    fn commands_run_in_arrival_order() {
        let mut console = console_with(&["Lamp", "TV"]);
        console.enqueue_voice("turn on tv");
        console.enqueue_voice("Turn On Lamp");
        console.enqueue_voice("turn off tv");

        let names: Vec<String> = (0..3)
            .map(|_| console.process_voice(&mut KeepCurrent).unwrap().name)
            .collect();

        assert_eq!(names, ["TV", "Lamp", "TV"]);
        assert!(!console.lookup("tv").unwrap().is_on());
        assert!(console.lookup("lamp").unwrap().is_on());
    }

    #[test]
    fn multi_word_device_names_are_understood() {
        let mut console = console_with(&["Living Room Light"]);
        console.enqueue_voice("turn on living room light");
        console.process_voice(&mut KeepCurrent).unwrap();
        assert!(console.lookup("living room light").unwrap().is_on());
    }

    #[test]
    fn unknown_device_is_consumed_with_error() {
        let mut console = console_with(&["Lamp"]);
        console.enqueue_voice("turn on toaster");

        assert!(matches!(
            console.process_voice(&mut KeepCurrent),
            Err(Error::DeviceNotFound(_))
        ));
        assert_eq!(console.pending_voice(), 0);
    }

    #[test]
    fn voice_setting_is_requested_for_climate() {
        let mut console = console_with(&["Heater"]);
        console.enqueue_voice("turn on heater");
        let mut settings = |_: &Device, _: SettingKind| 27;

        let outcome = console.process_voice(&mut settings).unwrap();
        assert_eq!(outcome.setting, Some(27));
        assert_eq!(
            console.lookup("heater").unwrap().to_string(),
            "Heater: ON (27°C)"
        );
    }
}

// ============================================================================
// Undo
// ============================================================================

mod undo {
    use super::*;

    #[test]
    fn undo_reverses_mixed_manual_and_voice_toggles() {
        let mut console = console_with(&["Lamp", "TV"]);
        console
            .toggle("lamp", PowerState::On, &mut KeepCurrent)
            .unwrap();
        console.enqueue_voice("turn on tv");
        console.process_voice(&mut KeepCurrent).unwrap();
        assert_eq!(console.undo_depth(), 2);

        assert_eq!(console.last_undo().unwrap().key().as_str(), "tv");
        console.undo(&mut KeepCurrent).unwrap();
        console.undo(&mut KeepCurrent).unwrap();

        assert!(!console.lookup("lamp").unwrap().is_on());
        assert!(!console.lookup("tv").unwrap().is_on());
        assert!(matches!(
            console.undo(&mut KeepCurrent),
            Err(Error::EmptyStack)
        ));
    }

    #[test]
    fn undo_fails_when_state_was_already_restored() {
        let mut console = console_with(&["Lamp"]);
        console
            .toggle("lamp", PowerState::On, &mut KeepCurrent)
            .unwrap();
        console
            .toggle("lamp", PowerState::Off, &mut KeepCurrent)
            .unwrap();

        // Newest entry restores ON, then the older one restores OFF.
        console.undo(&mut KeepCurrent).unwrap();
        console.undo(&mut KeepCurrent).unwrap();
        assert!(!console.lookup("lamp").unwrap().is_on());
    }

    #[test]
    fn undo_is_logged_like_any_toggle() {
        let mut console = console_with(&["Fan"]);
        console
            .toggle("fan", PowerState::On, &mut KeepCurrent)
            .unwrap();
        console.undo(&mut KeepCurrent).unwrap();

        let last = console.history().last().unwrap();
        assert_eq!(last.as_str(), "Turned OFF: Fan");
    }
}
