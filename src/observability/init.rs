//! Tracing initialization and subscriber setup.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::{FileWriter, LogHandle};
use crate::infrastructure::{expand_tilde, get_data_dir};
use crate::Config;

/// Log file name inside the data directory.
const LOG_FILE_NAME: &str = "regexhub.log";

/// Resolves the log file path: `config.log_file` if set, else the data directory.
#[must_use]
pub fn log_path(config: &Config) -> PathBuf {
    config
        .log_file
        .as_deref()
        .map_or_else(|| get_data_dir().join(LOG_FILE_NAME), |p| PathBuf::from(expand_tilde(p)))
}

/// Initializes the tracing subscriber with a rotating log file.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently returns if that fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use regexhub::observability::init_tracing;
/// use regexhub::Config;
///
/// let dir = std::env::temp_dir().join("regexhub-doc");
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: Some(dir.join("doc.log").display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let path = log_path(config);
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = Arc::new(FileWriter::new(path));
    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(move || LogHandle(Arc::clone(&writer)));

    let _ = tracing_subscriber::registry().with(filter).with(file_layer).try_init();
}
