//! Main window state.
//!
//! [`AppState`] is the single source of truth for the main window: its two lists,
//! the search session, the text input, keyboard focus and the injected API handle.
//! It is mutated only by [`handle_event`](crate::app::handle_event).
//!
//! # State Components
//!
//! - **Lists**: the listing (all posts or search results) and the history panel
//! - **Search Session**: active query, empty while browsing
//! - **Input**: text box shared by search and create
//! - **Focus**: which list receives keyboard navigation
//! - **Navigator**: detail-view opening and refresh policy
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use regexhub::api::MemoryApi;
//! use regexhub::app::{AppState, RefreshPolicy};
//!
//! let state = AppState::new(Arc::new(MemoryApi::new()), RefreshPolicy::default());
//! assert!(state.session.is_browsing());
//! ```

use crate::api::ApiHandle;
use crate::app::modes::{ListKind, RefreshPolicy};
use crate::app::navigation::{Navigator, Origin};
use crate::app::search::{MainLists, SearchSession};
use crate::domain::UserIdentity;
use crate::ui::ListViewModel;

/// Main window state container.
pub struct AppState {
    api: ApiHandle,

    /// Listing and history view models.
    pub lists: MainLists,

    /// Active search query.
    pub session: SearchSession,

    /// Current contents of the search/create input box.
    pub input: String,

    /// List receiving `KeyDown`/`KeyUp`/`Activate`.
    pub focus: ListKind,

    pub navigator: Navigator,

    /// Whether the "return to browsing" affordance is offered.
    pub return_enabled: bool,

    /// Set after a successful logout; the window accepts no further work.
    pub closed: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("lists", &self.lists)
            .field("session", &self.session)
            .field("input", &self.input)
            .field("focus", &self.focus)
            .field("return_enabled", &self.return_enabled)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates an empty main window bound to `api`.
    ///
    /// Nothing is fetched until the `Load` event is handled.
    #[must_use]
    pub fn new(api: ApiHandle, policy: RefreshPolicy) -> Self {
        Self {
            api,
            lists: MainLists::default(),
            session: SearchSession::new(),
            input: String::new(),
            focus: ListKind::Listing,
            navigator: Navigator::new(policy),
            return_enabled: false,
            closed: false,
        }
    }

    /// The injected API handle, for windows opened from this one.
    #[must_use]
    pub fn api(&self) -> &ApiHandle {
        &self.api
    }

    /// Username and email shown in the window header.
    #[must_use]
    pub fn identity(&self) -> UserIdentity {
        self.api.identity()
    }

    #[must_use]
    pub fn list(&self, kind: ListKind) -> &ListViewModel {
        match kind {
            ListKind::Listing => &self.lists.listing,
            ListKind::History => &self.lists.history,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut ListViewModel {
        match kind {
            ListKind::Listing => &mut self.lists.listing,
            ListKind::History => &mut self.lists.history,
        }
    }

    /// Moves the highlight in the focused list down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let focus = self.focus;
        self.list_mut(focus).move_selection_down();
    }

    /// Moves the highlight in the focused list up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let focus = self.focus;
        self.list_mut(focus).move_selection_up();
    }
}

impl From<ListKind> for Origin {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Listing => Self::Listing,
            ListKind::History => Self::History,
        }
    }
}
