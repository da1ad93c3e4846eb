//! Detail window state.
//!
//! A detail window is built from a [`DetailRequest`] and loads its record by id.
//! Loading counts as a view on the server, so the list it came from is refreshed
//! only after [`DetailState::open`] has returned.

use crate::api::ApiHandle;
use crate::app::guard::guard;
use crate::app::navigation::DetailRequest;
use crate::domain::{ContentRecord, Result};
use crate::ui::{format_record, ViewKind};

/// State of one detail window.
#[derive(Clone)]
pub struct DetailState {
    api: ApiHandle,
    request: DetailRequest,
    record: Option<ContentRecord>,
}

impl std::fmt::Debug for DetailState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailState")
            .field("request", &self.request)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl PartialEq for DetailState {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request && self.record == other.record
    }
}

impl DetailState {
    /// Builds a detail window and loads its record.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load). No window exists on error.
    pub fn open(api: ApiHandle, request: DetailRequest) -> Result<Self> {
        let mut detail = Self::new(api, request);
        detail.load()?;
        Ok(detail)
    }

    #[must_use]
    pub fn new(api: ApiHandle, request: DetailRequest) -> Self {
        Self {
            api,
            request,
            record: None,
        }
    }

    #[must_use]
    pub fn request(&self) -> &DetailRequest {
        &self.request
    }

    /// The loaded record, `None` until [`load`](Self::load) succeeds.
    #[must_use]
    pub fn record(&self) -> Option<&ContentRecord> {
        self.record.as_ref()
    }

    /// Window title. Uses the fresh record once loaded, the row text before that.
    #[must_use]
    pub fn title(&self) -> String {
        self.record
            .as_ref()
            .map_or_else(|| self.request.title.clone(), |r| format_record(r, ViewKind::Listing))
    }

    /// Multi-line body shown in the window.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.record.as_ref().map(|r| {
            format!(
                "Expression: {}\nViews: {}\nMark: {}\nCreated: {}",
                r.expression,
                r.views,
                crate::ui::format_mark(r.avg_mark),
                r.created_date
            )
        })
    }

    /// Fetches the record named by the request.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` if the service is unreachable, `NotFound` if the
    /// record no longer exists, or any other fetch error. A previously loaded
    /// record is kept on error.
    pub fn load(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("detail_load", record_id = self.request.record_id).entered();
        let api = self.api.clone();
        let id = self.request.record_id;

        let record = guard(api.as_ref(), "detail_load", || api.get_post(id))?;
        tracing::debug!(views = record.views, "detail loaded");
        self.record = Some(record);
        Ok(())
    }
}
