//! Presentation data layer.
//!
//! Converts API records into the rows a window binds to. No rendering happens
//! here; the runtime decides how rows reach the screen.
//!
//! ```text
//! ContentRecord → format_row → DisplayRow → ListViewModel → window
//! ```
//!
//! # Modules
//!
//! - [`format`]: Record formatter and row layouts
//! - [`viewmodel`]: Display rows, list view models and fetch tickets

pub mod format;
pub mod viewmodel;

pub use format::{format_mark, format_record, format_row, format_rows, ViewKind};
pub use viewmodel::{DisplayRow, FetchTicket, ListViewModel};
