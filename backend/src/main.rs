//! `hr-panel` entry-point: loads configuration, initializes tracing and runs
//! one command against the persisted stores.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use hr_panel::config::PanelSettings;
use hr_panel::inbound::cli::{self, Cli};
use hr_panel::telemetry;
use ortho_config::OrthoConfig;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match PanelSettings::load_from_iter([OsString::from("hr-panel")]) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("hr-panel: failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(settings.json_logs);

    let mut stdout = io::stdout().lock();
    match cli::run(cli, &settings, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("hr-panel: {err}");
            ExitCode::FAILURE
        }
    }
}
