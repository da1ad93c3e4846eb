//! Navigation from list rows to secondary windows.
//!
//! The [`Navigator`] turns a selected row into a [`DetailRequest`] carrying the
//! record id, so the detail window never has to parse row text. It also owns the
//! [`RefreshPolicy`] that says whether the originating list is refreshed afterwards.

use crate::app::modes::RefreshPolicy;
use crate::domain::ContentRecord;
use crate::ui::{format_record, DisplayRow, ListViewModel, ViewKind};

/// Where a detail view was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Main window listing (all posts or search results).
    Listing,
    /// Main window history panel.
    History,
    /// Profile window, authored posts.
    ProfilePosts,
    /// Profile window, view history.
    ProfileHistory,
    /// Opened automatically after a successful create.
    Created,
}

/// Everything a detail window needs to load its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub record_id: i64,
    /// Window title.
    pub title: String,
    pub origin: Origin,
}

impl DetailRequest {
    /// Request for a clicked row. The row text becomes the window title.
    #[must_use]
    pub fn from_row(row: &DisplayRow, origin: Origin) -> Self {
        Self {
            record_id: row.record_id,
            title: row.text.clone(),
            origin,
        }
    }

    /// Request for a record returned directly by the API.
    #[must_use]
    pub fn for_record(record: &ContentRecord, origin: Origin) -> Self {
        Self {
            record_id: record.id,
            title: format_record(record, ViewKind::Listing),
            origin,
        }
    }
}

/// Opens detail views and decides on follow-up refreshes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    policy: RefreshPolicy,
}

impl Navigator {
    #[must_use]
    pub const fn new(policy: RefreshPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Consumes the highlighted row of `list` and builds the detail request.
    ///
    /// The highlight is cleared whether or not a row was selected.
    pub fn open_detail(&self, list: &mut ListViewModel, origin: Origin) -> Option<DetailRequest> {
        let Some(row) = list.take_selection() else {
            tracing::debug!(list = %list.name(), "no row selected");
            return None;
        };

        tracing::debug!(record_id = row.record_id, origin = ?origin, "opening detail view");
        Some(DetailRequest::from_row(&row, origin))
    }

    /// Whether the list a detail view came from should be refreshed.
    #[must_use]
    pub const fn refreshes_origin(&self, origin: Origin) -> bool {
        match (self.policy, origin) {
            (_, Origin::Created) => false,
            (RefreshPolicy::Consistent, _) | (RefreshPolicy::ListingOnly, Origin::Listing) => true,
            (RefreshPolicy::ListingOnly, _) => false,
        }
    }
}
