// Rust guideline compliant 2026-10-16

//! Tracing setup for hook processes.
//!
//! Hooks write diagnostics to stderr so stdout carries only user-facing
//! messages. With a log file configured, records go there as JSON instead.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Logging options for a hook process.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Logging level.
    pub level: String,
    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LogOptions {
    /// Reads `HOOKKIT_LOG_LEVEL` and `HOOKKIT_LOG_FILE`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: std::env::var("HOOKKIT_LOG_LEVEL").unwrap_or(defaults.level),
            file: std::env::var_os("HOOKKIT_LOG_FILE").map(PathBuf::from),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// # Returns
///
/// The worker guard when logging to a file; it must be held until exit so
/// buffered records are flushed.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(options: &LogOptions) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&options.level)?;

    if let Some(path) = &options.file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a level name.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
