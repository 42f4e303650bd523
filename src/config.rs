// src/config.rs
use std::path::PathBuf;

use tinyls_domain::ListingOptions;

use crate::cli::Args;

/// Target listed when none is given on the command line.
pub const DEFAULT_TARGET: &str = "./";

/// Immutable run configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub targets: Vec<PathBuf>,
    pub options: ListingOptions,
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let targets = if args.paths.is_empty() { vec![PathBuf::from(DEFAULT_TARGET)] } else { args.paths };
        let options = ListingOptions {
            show_details: args.long,
            sort_by_size: args.sort_by_size,
            human_readable: args.human_readable,
            reverse: args.reverse,
        };
        Self { targets, options, verbosity: args.verbose }
    }
}
