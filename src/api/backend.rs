//! Remote API abstraction.
//!
//! This module defines the [`RegexApi`] trait, the only way the session layer talks
//! to the content service. Window states receive an [`ApiHandle`] at construction
//! instead of reaching for a global client.
//!
//! # Design Philosophy
//!
//! The trait mirrors the operations the windows actually need and nothing more.
//! Implementations own their transport, authentication and expression validation.

use std::sync::Arc;

use crate::domain::{ContentRecord, CreateOutcome, Result, UserIdentity};

/// Shared, injectable handle to the remote API.
pub type ApiHandle = Arc<dyn RegexApi>;

/// Operations offered by the regex-sharing service.
///
/// All methods take `&self`; implementations needing mutation use interior
/// mutability. Every call is synchronous from the caller's perspective.
///
/// # Implementations
///
/// - [`MemoryApi`](crate::api::MemoryApi): in-process backend seeded from JSON
///
/// # Examples
///
/// ```
/// use regexhub::api::{MemoryApi, RegexApi};
///
/// let api = MemoryApi::new();
/// assert!(api.check_availability());
/// let posts = api.get_all_posts()?;
/// assert!(posts.is_empty());
/// # Ok::<(), regexhub::RegexHubError>(())
/// ```
pub trait RegexApi: Send + Sync {
    /// Liveness check. `false` means every other call should be skipped.
    fn check_availability(&self) -> bool;

    /// Returns every published expression, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn get_all_posts(&self) -> Result<Vec<ContentRecord>>;

    /// Returns expressions matching `query`, best match first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn search_posts(&self, query: &str) -> Result<Vec<ContentRecord>>;

    /// Returns the records the current user has opened, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is not authenticated.
    fn user_views_history(&self) -> Result<Vec<ContentRecord>>;

    /// Returns the records authored by the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is not authenticated.
    fn author_posts(&self) -> Result<Vec<ContentRecord>>;

    /// Loads a single record for a detail view. Counts as a view.
    ///
    /// # Errors
    ///
    /// Returns [`RegexHubError::NotFound`](crate::RegexHubError::NotFound) for an
    /// unknown id, or an error if the request fails.
    fn get_post(&self, id: i64) -> Result<ContentRecord>;

    /// Submits a new expression.
    ///
    /// The record is meaningful only when the outcome is
    /// [`CreateOutcome::Created`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. Server-side rejections are
    /// reported through the outcome, not as errors.
    fn create_regex(&self, text: &str) -> Result<(ContentRecord, CreateOutcome)>;

    /// Invalidates the authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn exit_user(&self) -> Result<()>;

    /// The authenticated user's name and email.
    fn identity(&self) -> UserIdentity;
}
