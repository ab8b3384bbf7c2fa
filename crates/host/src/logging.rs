//! Logger setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! log records go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Install `env_logger` writing to `path` (filter from `RUST_LOG`, default `info`).
///
/// Returns false and installs nothing when `path` is `None`.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;

    Ok(true)
}
