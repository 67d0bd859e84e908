//! This module defines the command line interface (CLI) for the application.

use categorical::demos::{Backend, Demo, Settings};
use categorical::TimeUnit;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Identity, composition, Kleisli arrows and memoization demos", long_about = None)]
pub struct Args {
    #[arg(value_name = "DEMO", value_enum, default_value = "all", help = "Which demo to run")]
    pub demo: Demo,

    #[arg(
        short = 'n',
        long = "number",
        default_value_t = 20,
        help = "Argument of the memoized factorial"
    )]
    pub number: u32,

    #[arg(short = 's', long = "seed", default_value_t = 1, help = "Seed of the random generator")]
    pub seed: u64,

    #[arg(
        short = 'u',
        long = "unit",
        value_enum,
        default_value = "nanoseconds",
        help = "Unit of the reported elapsed times"
    )]
    pub unit: TimeUnit,

    #[arg(
        short = 'b',
        long = "backend",
        value_enum,
        default_value = "memoizer",
        help = "Memoization backend of the factorial demo"
    )]
    pub backend: Backend,

    #[arg(
           short = 'v',
           long = "verbose",
           action = clap::ArgAction::Count,
           help = "Increase verbosity level"
       )]
    pub verbosity: u8,

    #[arg(
        long,
        short = 'l',
        value_name = "LOG_FILE",
        help = "Optional path to the log file. Defaults to stderr if not specified."
    )]
    pub log_output: Option<PathBuf>,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            number: self.number,
            seed: self.seed,
            unit: self.unit,
            backend: self.backend,
        }
    }
}
