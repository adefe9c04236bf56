// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interactive text menu.

use std::io::{self, BufRead, Write};

use smarthome_console::{
    Device, Error, HomeConsole, PowerState, SettingKind, SettingProvider, ToggleOutcome,
};

const MENU: &str = "\
Menu:
1. Turn ON/OFF Device
2. Add New Device
3. Delete Device
4. Add Voice Command
5. Process Voice Command
6. Undo Last Action
7. Show History
8. Save Data
9. Exit";

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Asks the user for a setting until an acceptable integer is entered.
struct SettingPrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> SettingProvider for SettingPrompt<'_, R, W> {
    fn provide(&mut self, device: &Device, kind: SettingKind) -> i32 {
        loop {
            let line = match read_line(&mut *self.input, &mut *self.output, kind.prompt()) {
                Ok(Some(line)) => line,
                Ok(None) => return fallback_setting(device, kind),
                Err(e) => {
                    tracing::warn!(device = %device.key(), error = %e, "Setting prompt failed");
                    return fallback_setting(device, kind);
                }
            };
            match line.trim().parse::<i32>() {
                Ok(value) if kind.valid_range().is_none_or(|range| range.contains(&value)) => {
                    return value;
                }
                _ => {
                    if let Err(e) = writeln!(self.output, "Please enter a valid number.") {
                        tracing::warn!(device = %device.key(), error = %e, "Setting prompt failed");
                        return fallback_setting(device, kind);
                    }
                }
            }
        }
    }
}

/// Value used when no setting could be read: the current one, moved into range.
fn fallback_setting(device: &Device, kind: SettingKind) -> i32 {
    let value = kind
        .valid_range()
        .map_or(device.setting(), |range| {
            device.setting().clamp(*range.start(), *range.end())
        });
    tracing::warn!(device = %device.key(), value, "No setting entered, using fallback");
    value
}

/// Text menu driving a [`HomeConsole`].
pub struct Menu<'c, R, W> {
    console: &'c mut HomeConsole,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> Menu<'c, R, W> {
    pub fn new(console: &'c mut HomeConsole, input: R, output: W) -> Self {
        Self {
            console,
            input,
            output,
        }
    }

    /// Runs until the user exits or input ends. Both paths save first.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nSMART HOME AUTOMATION SYSTEM\n")?;
        loop {
            self.show_devices()?;
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.ask("Select option: ")? else {
                self.save()?;
                break;
            };

            match choice.trim() {
                "1" => self.toggle()?,
                "2" => self.add()?,
                "3" => self.delete()?,
                "4" => self.add_voice()?,
                "5" => self.process_voice()?,
                "6" => self.undo()?,
                "7" => self.show_history()?,
                "8" => self.save()?,
                "9" => {
                    self.save()?;
                    writeln!(self.output, "Exiting system...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option.\n")?,
            }
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        read_line(&mut self.input, &mut self.output, prompt)
    }

    fn show_devices(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nDEVICE STATUS")?;
        let devices = self.console.devices();
        if devices.is_empty() {
            writeln!(self.output, "No devices found.")?;
            return Ok(());
        }
        for device in devices {
            writeln!(self.output, "{device}")?;
        }
        writeln!(self.output)
    }

    fn toggle(&mut self) -> io::Result<()> {
        let Some(name) = self.ask("Device name: ")? else {
            return Ok(());
        };
        let Some(action) = self.ask("ON or OFF: ")? else {
            return Ok(());
        };
        let state = match action.parse::<PowerState>() {
            Ok(state) => state,
            Err(_) => return writeln!(self.output, "Please answer ON or OFF.\n"),
        };

        let mut prompt = SettingPrompt {
            input: &mut self.input,
            output: &mut self.output,
        };
        let result = self.console.toggle(&name, state, &mut prompt);
        self.report_toggle(result)
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(name) = self.ask("Enter device name: ")? else {
            return Ok(());
        };
        match self.console.add(&name, None) {
            Ok(device) => {
                let name = device.name().to_string();
                writeln!(self.output, "✓ {name} successfully added.\n")
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(name) = self.ask("Enter device name to delete: ")? else {
            return Ok(());
        };
        match self.console.remove(&name) {
            Ok(device) => writeln!(self.output, "✓ {} deleted.\n", device.key()),
            Err(e) => self.report_error(&e),
        }
    }

    fn add_voice(&mut self) -> io::Result<()> {
        let Some(command) = self.ask("Voice Command: ")? else {
            return Ok(());
        };
        self.console.enqueue_voice(command);
        writeln!(
            self.output,
            "✓ Voice command added ({} pending).\n",
            self.console.pending_voice()
        )
    }

    fn process_voice(&mut self) -> io::Result<()> {
        if let Some(next) = self.console.next_voice() {
            let text = next.to_string();
            writeln!(self.output, "Processing: {text}")?;
        }
        let mut prompt = SettingPrompt {
            input: &mut self.input,
            output: &mut self.output,
        };
        let result = self.console.process_voice(&mut prompt);
        self.report_toggle(result)
    }

    fn undo(&mut self) -> io::Result<()> {
        if let Some(entry) = self.console.last_undo() {
            let name = self
                .console
                .lookup(entry.key().as_str())
                .map_or(entry.key().as_str(), Device::name);
            let line = format!("Undoing last action -> {} {name}", entry.restore());
            writeln!(self.output, "{line}")?;
        }
        let mut prompt = SettingPrompt {
            input: &mut self.input,
            output: &mut self.output,
        };
        let result = self.console.undo(&mut prompt);
        self.report_toggle(result)
    }

    fn show_history(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nActivity History:")?;
        for record in self.console.history() {
            writeln!(self.output, " - {record}")?;
        }
        writeln!(self.output)
    }

    fn save(&mut self) -> io::Result<()> {
        match self.console.save() {
            Ok(()) => writeln!(self.output, "✓ Data saved successfully.\n"),
            Err(e) => {
                tracing::error!(error = %e, "Save failed");
                self.report_error(&e)
            }
        }
    }

    fn report_toggle(&mut self, result: smarthome_console::Result<ToggleOutcome>) -> io::Result<()> {
        match result {
            Ok(outcome) => writeln!(self.output, "✓ {} is now {}.\n", outcome.name, outcome.state),
            Err(e) => self.report_error(&e),
        }
    }

    fn report_error(&mut self, error: &Error) -> io::Result<()> {
        let message = match error {
            Error::DuplicateDevice(_) => "Device already exists.".to_string(),
            Error::DeviceNotFound(_) => "Device not found.".to_string(),
            Error::NoOpStateChange { name, state } => format!("{name} is already {state}."),
            Error::EmptyStack => "Nothing to undo.".to_string(),
            Error::EmptyQueue => "No voice commands.".to_string(),
            Error::InvalidCommand(_) => "Invalid command.".to_string(),
            other => format!("Error: {other}"),
        };
        writeln!(self.output, "{message}\n")
    }
}
