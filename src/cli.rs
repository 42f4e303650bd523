// src/cli.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
///
/// `-h` selects human readable sizes, so help is only reachable as `--help`.
#[derive(Parser, Debug)]
#[command(
    name = "tinyls",
    version = crate::VERSION,
    about = "List files and directories, optionally sorted by size",
    disable_help_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Sort by file size, largest first
    #[arg(short = 'S')]
    pub sort_by_size: bool,

    /// Show details (name and size, one entry per line)
    #[arg(short = 'l')]
    pub long: bool,

    /// Print sizes in human readable form (K, M, G, T)
    #[arg(short = 'h')]
    pub human_readable: bool,

    /// Reverse the listing order
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Files or directories to list (defaults to the current directory)
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}
