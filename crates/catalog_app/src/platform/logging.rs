//! Logger setup driven by `catalog_settings.ron`.
//!
//! Terminal output goes to stderr; stdout belongs to the console screens.

use std::fs::File;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use super::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Only the log file named in the settings.
    #[default]
    File,
    Terminal,
    Both,
}

impl LogDestination {
    fn writes_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

pub(crate) fn initialize(settings: &Settings) {
    let loggers = build_loggers(settings);
    if loggers.is_empty() {
        return;
    }
    if let Err(err) = CombinedLogger::init(loggers) {
        eprintln!("Warning: logging already initialized: {err}");
    }
}

fn build_loggers(settings: &Settings) -> Vec<Box<dyn SharedLogger>> {
    let level = if settings.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = log_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if settings.log_destination.writes_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if settings.log_destination.writes_file() {
        match File::create(&settings.log_file) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!(
                "Warning: could not create log file {}: {err}",
                settings.log_file.display()
            ),
        }
    }
    loggers
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
