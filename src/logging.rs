//! This module provides functionality for setting up logging

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Maps the number of `-v` flags to a log level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Where log records go: the given file if it can be created, stderr otherwise.
pub fn log_target(log_output: Option<&Path>) -> Target {
    let Some(path) = log_output else {
        return Target::Stderr;
    };
    File::create(path).map_or_else(
        |e| {
            eprintln!("Could not create log file at {} ({}). Defaulting to stderr.", path.display(), e);
            Target::Stderr
        },
        |file| Target::Pipe(Box::new(file)),
    )
}

/// Sets up the logger. Elapsed-time reports are logged at info level,
/// so they show from `-v` on.
pub fn setup_logger(verbosity: u8, log_output: Option<&Path>) {
    Builder::from_default_env()
        .format_timestamp(None)
        .filter_level(level_for(verbosity))
        .target(log_target(log_output))
        .init();
}
