use std::process::ExitCode;

use clap::Parser;
use tinyls::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    logging::init(config.verbosity);

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tinyls: {e}");
            ExitCode::FAILURE
        }
    }
}
