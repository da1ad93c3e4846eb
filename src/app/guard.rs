//! Availability guard for remote-API entry points.
//!
//! Every fetching or state-changing action runs through [`guard`]. The check is
//! repeated on each call; there is no cached "online" flag because connectivity can
//! change between two user actions.

use crate::api::RegexApi;
use crate::domain::{RegexHubError, Result};

/// Runs `action` only if the remote service answers its liveness check.
///
/// # Errors
///
/// Returns [`RegexHubError::Connectivity`] without invoking `action` when the
/// service is unreachable. Otherwise returns whatever `action` returns.
///
/// # Examples
///
/// ```
/// use regexhub::api::MemoryApi;
/// use regexhub::app::guard;
/// use regexhub::RegexHubError;
///
/// let api = MemoryApi::new();
/// api.set_available(false);
///
/// let mut ran = false;
/// let result = guard(&api, "refresh", || {
///     ran = true;
///     Ok(())
/// });
/// assert!(matches!(result, Err(RegexHubError::Connectivity)));
/// assert!(!ran);
/// ```
pub fn guard<A, T, F>(api: &A, operation: &str, action: F) -> Result<T>
where
    A: RegexApi + ?Sized,
    F: FnOnce() -> Result<T>,
{
    if !api.check_availability() {
        tracing::warn!(operation = %operation, "remote service unreachable, action aborted");
        return Err(RegexHubError::Connectivity);
    }

    tracing::trace!(operation = %operation, "availability confirmed");
    action()
}
