//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → regexhub.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/regexhub/regexhub.log` unless `log_file` is set
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::{init_tracing, log_path};
