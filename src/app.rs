// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use tinyls_infra::OsFileSystem;
use tinyls_ports::filesystem::FileSystem;
use tinyls_usecase::ListTargets;

use crate::config::Config;

/// Builds the report for `config` against the given filesystem.
pub fn build_report(config: &Config, filesystem: &dyn FileSystem) -> Result<String> {
    let report = ListTargets::new(filesystem, config.options).run(config.targets.as_slice())?;
    Ok(report)
}

/// Lists the configured targets from the real filesystem and writes the report to stdout.
pub fn run(config: &Config) -> Result<()> {
    info!("tinyls v{} · {} target(s)", crate::VERSION, config.targets.len());
    let report = build_report(config, &OsFileSystem::new())?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{report}").context("failed to write report")?;
    stdout.flush().context("failed to flush report")?;
    Ok(())
}
