//! Log output setup
//!
//! Filtering follows `RUST_LOG` and defaults to `warn`. The TUI owns the
//! terminal, so it only logs when a file is given.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick the target for a run: a file when given, otherwise stderr unless
    /// the terminal is taken over by the TUI
    #[must_use]
    pub const fn choose(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match (log_file, owns_terminal) {
            (Some(path), _) => Self::File(path),
            (None, false) => Self::Stderr,
            (None, true) => Self::Disabled,
        }
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(target: LogTarget<'_>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer)
                .try_init()?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .compact()
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer)
                .try_init()?;
        }
        LogTarget::Disabled => {}
    }

    Ok(())
}
