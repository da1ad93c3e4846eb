//! Focus and policy enums shared by the window states.
//!
//! - [`ListKind`] / [`ProfileListKind`]: which panel of a window has keyboard focus
//!   or received a click
//! - [`RefreshPolicy`]: whether opening a detail view refreshes the list it was
//!   opened from

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::RegexHubError;

/// Panels of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// All posts, or the current search results.
    Listing,
    /// The user's view history in compact form.
    History,
}

/// Panels of the profile window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileListKind {
    /// Posts authored by the user.
    Posts,
    /// Posts the user has viewed.
    History,
}

/// Refresh behaviour after a detail view is opened from a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Every list a detail view is opened from is refreshed, in any window.
    #[default]
    Consistent,

    /// Only the main listing is refreshed. Detail views opened from the
    /// history panel or the profile window leave their list as is.
    ListingOnly,
}

impl FromStr for RefreshPolicy {
    type Err = RegexHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "consistent" => Ok(Self::Consistent),
            "listing-only" => Ok(Self::ListingOnly),
            other => Err(RegexHubError::Config(format!("unknown refresh policy: {other}"))),
        }
    }
}
