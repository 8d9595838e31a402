//! Logging setup
//!
//! `log` records from the client go through a tracing-subscriber sink filtered
//! by `RUST_LOG`. Headless commands log to stderr, keeping stdout for their
//! results. The dashboard owns the terminal, so it logs to a file next to the
//! config instead.

pub use crate::error_classifier::LogLevel;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

static DISPLAY_THRESHOLD: OnceLock<LogLevel> = OnceLock::new();

/// Where diagnostic output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to install global log subscriber: {0}")]
    SetGlobal(#[from] TryInitError),
}

/// Installs the global subscriber. Also routes `log` macros into it.
///
/// Callers may carry on without logging when this fails.
pub fn init(sink: LogSink) -> Result<(), LoggingError> {
    let (stderr_layer, file_layer) = match sink {
        LogSink::Stderr => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogSink::File(path) => {
            let file = open_log_file(&path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (None, Some(layer))
        }
    };

    Registry::default()
        .with(build_env_filter())
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open = || {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| LoggingError::OpenFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Most verbose level the filter lets through, as an activity log level.
fn threshold_from_filter(filter: &EnvFilter) -> LogLevel {
    let hint = Layer::<Registry>::max_level_hint(filter).unwrap_or(LevelFilter::INFO);
    if hint == LevelFilter::TRACE {
        LogLevel::Trace
    } else if hint == LevelFilter::DEBUG {
        LogLevel::Debug
    } else if hint == LevelFilter::INFO {
        LogLevel::Info
    } else if hint == LevelFilter::WARN {
        LogLevel::Warn
    } else {
        LogLevel::Error
    }
}

/// Activity log threshold, read once from `RUST_LOG`.
pub fn display_threshold() -> LogLevel {
    *DISPLAY_THRESHOLD.get_or_init(|| threshold_from_filter(&build_env_filter()))
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Whether an activity event of this level passes the `RUST_LOG` threshold.
pub fn is_displayed(event_level: LogLevel) -> bool {
    should_log(event_level, display_threshold())
}
