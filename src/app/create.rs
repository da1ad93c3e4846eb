//! Post-creation flow.
//!
//! Local checks run first and never touch the API: empty input is ignored and input
//! over [`MAX_EXPRESSION_LEN`] characters is rejected. Only then is the availability
//! check issued and the expression submitted.

use crate::api::RegexApi;
use crate::app::guard::guard;
use crate::domain::{ContentRecord, CreateOutcome, RegexHubError, Result, MAX_EXPRESSION_LEN};

/// Submits `text` as a new expression.
///
/// # Returns
///
/// - `Ok(None)` for empty input (no request, no notice)
/// - `Ok(Some(record))` when the server created the post
///
/// # Errors
///
/// - [`RegexHubError::LengthExceeded`] for input over the limit, without any request
/// - [`RegexHubError::Connectivity`] if the service is unreachable
/// - [`RegexHubError::InvalidExpression`] / [`RegexHubError::DuplicateExpression`]
///   when the server rejects the expression
/// - any transport error from the API
///
/// # Examples
///
/// ```
/// use regexhub::api::MemoryApi;
/// use regexhub::app::create::submit;
///
/// let api = MemoryApi::new();
/// assert!(submit(&api, "")?.is_none());
/// let created = submit(&api, "^ab+c$")?.expect("created");
/// assert_eq!(created.expression, "^ab+c$");
/// # Ok::<(), regexhub::RegexHubError>(())
/// ```
pub fn submit<A: RegexApi + ?Sized>(api: &A, text: &str) -> Result<Option<ContentRecord>> {
    let _span = tracing::debug_span!("create_submit", len = text.len()).entered();

    if text.is_empty() {
        tracing::debug!("empty expression, create skipped");
        return Ok(None);
    }

    let len = text.chars().count();
    if len > MAX_EXPRESSION_LEN {
        tracing::debug!(len, max = MAX_EXPRESSION_LEN, "expression too long");
        return Err(RegexHubError::LengthExceeded {
            len,
            max: MAX_EXPRESSION_LEN,
        });
    }

    guard(api, "create", || {
        let (record, outcome) = api.create_regex(text)?;
        tracing::debug!(outcome = ?outcome, record_id = record.id, "create answered");

        match outcome {
            CreateOutcome::Created => Ok(Some(record)),
            CreateOutcome::InvalidExpression => Err(RegexHubError::InvalidExpression),
            CreateOutcome::DuplicateExpression => Err(RegexHubError::DuplicateExpression),
        }
    })
}
