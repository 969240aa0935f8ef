//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! # Log Levels
//!
//! - `warn`: default, nothing is logged during normal play
//! - `info` (`-v`): games started or restarted, words accepted, word lists loaded
//! - `debug` (`-vv`): rejected words
//! - `trace` (`-vvv`): everything
//!
//! `RUST_LOG` overrides the level chosen on the command line.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop all output; used by the TUI when no log file is given
    Discard,
}

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            target: LogTarget::Stderr,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }
}

/// Initialize the global tracing subscriber
///
/// Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.target {
        LogTarget::Stderr => init_with_writer(config.level, io::stderr, true),
        LogTarget::Discard => init_with_writer(config.level, io::sink, false),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_with_writer(config.level, Mutex::new(file), false);
        }
    }
    Ok(())
}

fn init_with_writer<W>(level: Level, writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // External crates stay at warn level to reduce noise
        EnvFilter::new(format!(
            "warn,word_scramble={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}
