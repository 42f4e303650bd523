// src/logging.rs
//! stderr logging through `env_logger`.
//!
//! Messages are printed as `[level] message`. The base level comes from the
//! number of `-v` flags on top of `warn`; `TINYLS_LOG` accepts the usual
//! `env_logger` directives (`debug`, `tinyls_infra=trace`, `off`, ...) and
//! takes precedence over it.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

pub const ENV_VAR: &str = "TINYLS_LOG";

/// Maps `-v` occurrences onto a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger configuration for `verbosity`, with directives read from `env` layered on top.
pub fn builder(verbosity: u8, env: Env<'_>) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .parse_env(env)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level().as_str().to_ascii_lowercase(), record.args())
        });
    builder
}

/// Installs the logger. A second call leaves the first logger in place.
pub fn init(verbosity: u8) {
    let _ = builder(verbosity, Env::new().filter(ENV_VAR)).try_init();
}
