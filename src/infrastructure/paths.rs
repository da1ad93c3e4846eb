//! Platform path helpers.
//!
//! Resolves the data and config directories from the XDG variables with the usual
//! `$HOME` fallbacks, and expands `~` in user-supplied paths.

use std::path::PathBuf;

const APP_DIR: &str = "regexhub";

fn home() -> Option<PathBuf> {
    std::env::var_os("HOME").filter(|h| !h.is_empty()).map(PathBuf::from)
}

fn xdg_dir(var: &str, fallback: &str) -> PathBuf {
    std::env::var_os(var)
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| home().map(|h| h.join(fallback)))
        .unwrap_or_else(|| PathBuf::from(".").join(fallback))
        .join(APP_DIR)
}

/// Returns the data directory for logs and seed files.
///
/// `$XDG_DATA_HOME/regexhub`, else `~/.local/share/regexhub`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

/// Returns the config directory.
///
/// `$XDG_CONFIG_HOME/regexhub`, else `~/.config/regexhub`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Locates the config file to load, if any.
///
/// `$REGEXHUB_CONFIG` wins when set; otherwise `config.toml` in the config
/// directory is used if it exists.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("REGEXHUB_CONFIG").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(explicit));
    }

    let default = get_config_dir().join("config.toml");
    default.exists().then_some(default)
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading tilde, and all paths when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use regexhub::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home() else {
        return path.to_string();
    };

    if path == "~" {
        home.display().to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).display().to_string()
    } else {
        path.to_string()
    }
}
