// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `smarthome` - interactive home-automation console.

mod menu;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use smarthome_console::{ConsoleConfig, HomeConsole, LogLevel};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use menu::Menu;

/// Command line options. Flags override values from the config file.
#[derive(Debug, Parser)]
#[command(name = "smarthome", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding devices.json and history.txt.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Diagnostic log level (RUST_LOG takes precedence).
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,

    /// Do not create the built-in devices when none were restored.
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    fn into_config(self) -> Result<ConsoleConfig, smarthome_console::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConsoleConfig::from_file(path)?,
            None => ConsoleConfig::default(),
        };
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.no_seed {
            config.seed_defaults = false;
        }
        Ok(config)
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;
    init_tracing(config.log_level);

    tracing::info!(
        data_dir = %config.data_dir.display(),
        level = config.log_level.as_str(),
        "smarthome starting"
    );

    let mut console = HomeConsole::open(&config)?;
    Menu::new(&mut console, io::stdin().lock(), io::stdout().lock()).run()?;

    Ok(())
}
