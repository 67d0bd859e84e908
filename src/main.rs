use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use std::process;

use categorical::demos;

mod cli;
mod logging;

pub fn main() {
    // parse CLI arguments
    let args = cli::Args::parse();

    // set up logging
    logging::setup_logger(args.verbosity, args.log_output.as_deref());

    let settings = args.settings();
    info!("running {:?} demo", args.demo);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = demos::run(&mut out, args.demo, &settings).and_then(|_| out.flush());

    if let Err(e) = result {
        error!("could not write the demo output: {}", e);
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }
}
