//! Domain layer for the regexhub client.
//!
//! Core types shared by every other layer, independent of the API transport and
//! of any window.
//!
//! # Organization
//!
//! - [`error`]: Error types, user notices and result aliases
//! - [`record`]: Content records, user identity and creation outcomes
//!
//! # Examples
//!
//! ```
//! use regexhub::domain::{ContentRecord, Result};
//!
//! fn sample() -> Result<ContentRecord> {
//!     Ok(ContentRecord::new(1, "^a+$", 0, 0.0, "2024-05-01"))
//! }
//! ```

pub mod error;
pub mod record;

pub use error::{Notice, RegexHubError, Result, MAX_EXPRESSION_LEN};
pub use record::{ContentRecord, CreateOutcome, UserIdentity};
