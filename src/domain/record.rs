//! Content records served by the remote API.
//!
//! A [`ContentRecord`] is one community-submitted regular expression. The client
//! never mutates records; it only re-fetches them.

use serde::{Deserialize, Serialize};

use super::error::{RegexHubError, Result};

/// A community-submitted regular expression with its metadata.
///
/// Identity is `id`. Field names follow the API's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: i64,
    pub expression: String,
    pub views: i64,
    pub avg_mark: f64,
    pub created_date: String,
}

impl ContentRecord {
    #[must_use]
    pub fn new(id: i64, expression: impl Into<String>, views: i64, avg_mark: f64, created_date: impl Into<String>) -> Self {
        Self {
            id,
            expression: expression.into(),
            views,
            avg_mark,
            created_date: created_date.into(),
        }
    }
}

/// The authenticated user as exposed by the API handle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserIdentity {
    pub username: String,
    pub email: String,
}

/// Result of a creation request.
///
/// Replaces the wire-level `0 | 1 | 2` code so callers match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreateOutcome {
    /// The expression was stored; the accompanying record is the new post.
    Created,
    /// The expression does not compile.
    InvalidExpression,
    /// An identical expression already exists.
    DuplicateExpression,
}

impl CreateOutcome {
    /// Decodes the API's numeric result code.
    ///
    /// # Errors
    ///
    /// Returns [`RegexHubError::Api`] for any code other than 0, 1 or 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use regexhub::domain::CreateOutcome;
    ///
    /// assert_eq!(CreateOutcome::from_code(1).unwrap(), CreateOutcome::Created);
    /// assert!(CreateOutcome::from_code(5).is_err());
    /// ```
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::InvalidExpression),
            1 => Ok(Self::Created),
            2 => Ok(Self::DuplicateExpression),
            other => Err(RegexHubError::Api(format!("unknown creation result code {other}"))),
        }
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidExpression => 0,
            Self::Created => 1,
            Self::DuplicateExpression => 2,
        }
    }
}
