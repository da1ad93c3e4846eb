//! RegexHub: client session layer for a regex-sharing platform.
//!
//! RegexHub lets a signed-in user browse, search, create and inspect
//! community-submitted regular expressions. This crate is the part between the
//! remote content service and the screen:
//! - Turning API records into list rows
//! - Keeping the active search and refreshing what the user sees
//! - Checking connectivity before every remote call
//! - Opening detail and profile windows from list rows
//! - Creating posts and signing out

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive Runtime (main.rs)                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Window states
//! │  - Event handling                                   │  ← Session logic
//! │  - Availability guard                               │
//! │  - Navigation and refresh policy                    │
//! └─────────────────────────────────────────────────────┘
//!         │                                         │
//! ┌───────────────────────┐           ┌───────────────────────┐
//! │ UI Layer (ui/)        │           │ API Layer (api/)      │
//! │ - Record formatter    │           │ - RegexApi trait      │
//! │ - List view models    │           │ - In-memory backend   │
//! └───────────────────────┘           └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types and notices (domain/error)           │
//! │  - Content records (domain/record)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: Remote content service seam and the in-memory backend
//! - [`app`]: Window states, event handlers and actions
//! - [`domain`]: Records, create outcomes, errors
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Record formatting and list view models
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! The binary reads a TOML file from `$REGEXHUB_CONFIG` or
//! `~/.config/regexhub/config.toml`:
//!
//! ```toml
//! data_file = "~/.local/share/regexhub/seed.json"
//! refresh_policy = "consistent"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use regexhub::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! for event in [Event::Load, Event::SetInput("^a+$".into()), Event::Create] {
//!     let (_redraw, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//! #   let _ = actions;
//! }
//! # Ok::<(), regexhub::RegexHubError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, RefreshPolicy};
pub use domain::{ContentRecord, Notice, RegexHubError, Result};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::api::{ApiHandle, MemoryApi};

/// Application configuration.
///
/// Every field has a default, so an empty file or map is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON seed document for the in-memory backend.
    ///
    /// A leading `~` expands to `$HOME`. When unset the backend starts empty.
    pub data_file: Option<String>,

    /// Whether opening a detail view refreshes the list it came from.
    ///
    /// Options: `consistent`, `listing-only`. Default: `consistent`
    pub refresh_policy: RefreshPolicy,

    /// Tracing level when `RUST_LOG` is not set.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Defaults to `regexhub.log` in the data directory.
    pub log_file: Option<String>,
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_file`, `trace_level`, `log_file`: taken as is, blank values ignored
    /// - `refresh_policy`: falls back to `consistent` on parse error
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use regexhub::{Config, RefreshPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("refresh_policy".to_string(), "listing-only".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.refresh_policy, RefreshPolicy::ListingOnly);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let refresh_policy = config
            .get("refresh_policy")
            .and_then(|s| {
                s.parse::<RefreshPolicy>()
                    .map_err(|e| tracing::debug!(error = %e, "invalid refresh policy, using default"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            data_file: text("data_file"),
            refresh_policy,
            trace_level: text("trace_level"),
            log_file: text("log_file"),
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the document is not valid TOML or has a field of the
    /// wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| RegexHubError::Config(format!("failed to parse config: {e}")))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or `Config` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Seed file path with `~` expanded.
    #[must_use]
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file
            .as_deref()
            .map(|p| PathBuf::from(infrastructure::expand_tilde(p)))
    }
}

/// Builds the API backend described by `config`.
///
/// # Errors
///
/// Returns an error if the seed file cannot be read or parsed.
pub fn connect(config: &Config) -> Result<ApiHandle> {
    let api = match config.data_path() {
        Some(path) => MemoryApi::from_file(&path)?,
        None => {
            tracing::debug!("no data file configured, starting empty");
            MemoryApi::new()
        }
    };
    Ok(Arc::new(api))
}

/// Creates the main window state.
///
/// The lists stay empty until the runtime sends [`Event::Load`].
///
/// # Errors
///
/// Returns an error if the configured seed file cannot be loaded.
///
/// # Example
///
/// ```rust
/// use regexhub::{initialize, Config};
///
/// let state = initialize(&Config::default())?;
/// assert!(state.lists.listing.is_empty());
/// # Ok::<(), regexhub::RegexHubError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(policy = ?config.refresh_policy, "initializing regexhub");
    let api = connect(config)?;
    Ok(AppState::new(api, config.refresh_policy))
}
