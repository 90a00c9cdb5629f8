//! Logger setup.
//!
//! The interactive game owns the terminal in raw mode, so records only go to a
//! file (`LANE_DODGE_LOG_PATH`). Headless runs may log to stderr instead, since
//! stdout carries the trace.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::RunConfig;

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Disabled,
    File,
    Stderr,
}

/// Install the global logger for this process.
///
/// With no log path configured, `allow_stderr` decides between stderr and no
/// logging at all.
pub fn init(config: &RunConfig, allow_stderr: bool) -> Result<LogSink> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_millis();

    let sink = match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
            LogSink::File
        }
        None if allow_stderr => {
            builder.target(Target::Stderr);
            LogSink::Stderr
        }
        None => return Ok(LogSink::Disabled),
    };

    builder.try_init().context("installing logger")?;
    Ok(sink)
}
