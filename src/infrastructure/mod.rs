//! Infrastructure layer for filesystem and environment interactions.
//!
//! Path handling only: where config, logs and seed data live, and how `~` in a
//! configured path is resolved.

pub mod paths;

pub use paths::{expand_tilde, find_config_file, get_config_dir, get_data_dir};
