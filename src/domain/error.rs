//! Error types for the regexhub client.
//!
//! This module defines the centralized error type [`RegexHubError`] and a type alias
//! [`Result`] used throughout the crate. Every variant that can reach the user has a
//! matching [`Notice`] so window handlers can surface it without inspecting strings.

use thiserror::Error;

/// Maximum expression length accepted by the post-creation flow.
pub const MAX_EXPRESSION_LEN: usize = 255;

/// The main error type for regexhub operations.
///
/// Empty input to search or create is deliberately absent: those paths are
/// silent no-ops rather than errors.
#[derive(Debug, Error)]
pub enum RegexHubError {
    /// The remote service failed its reachability check.
    ///
    /// Always recoverable. Raised by the availability guard before any fetch
    /// or mutation is attempted.
    #[error("remote service is unreachable")]
    Connectivity,

    /// Expression submitted for creation exceeds [`MAX_EXPRESSION_LEN`].
    ///
    /// Detected locally; no request is sent.
    #[error("expression is {len} characters long, limit is {max}")]
    LengthExceeded {
        /// Length of the rejected input in characters.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// The server refused the expression because it does not compile.
    #[error("expression is not a valid regular expression")]
    InvalidExpression,

    /// The server refused the expression because it already exists.
    #[error("expression already exists")]
    DuplicateExpression,

    /// No record with the requested id exists.
    #[error("record {0} not found")]
    NotFound(i64),

    /// Remote API returned an error or an unexpected response.
    #[error("API error: {0}")]
    Api(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A user-visible, blocking notice.
///
/// Produced from errors by [`RegexHubError::notice`] and emitted by handlers as
/// [`crate::app::Action::ShowNotice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short dialog title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl RegexHubError {
    /// Builds the notice shown to the user for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use regexhub::RegexHubError;
    ///
    /// let notice = RegexHubError::Connectivity.notice();
    /// assert_eq!(notice.title, "Internet Connection");
    /// assert_eq!(notice.message, "There is no internet connection.");
    /// ```
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Connectivity => Notice::new("Internet Connection", "There is no internet connection."),
            Self::LengthExceeded { max, .. } => Notice::new("Regex", format!("Maximum length limit - {max}.")),
            Self::InvalidExpression => Notice::new("Regex", "Incorrect expression."),
            Self::DuplicateExpression => Notice::new("Regex", "Expression already exists."),
            other => Notice::new("Error", other.to_string()),
        }
    }
}

/// A specialized `Result` type for regexhub operations.
pub type Result<T> = std::result::Result<T, RegexHubError>;
