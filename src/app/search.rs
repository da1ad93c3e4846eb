//! Search session for the main window.
//!
//! [`SearchSession`] remembers the active query and decides which fetch fills the
//! main listing. An empty query means "browsing all posts".
//!
//! # State Transitions
//!
//! ```text
//!            search(q), q non-empty
//! Browsing ───────────────────────────▶ Searching(q)
//!    ▲                                       │
//!    └──────────── clear_search() ───────────┘
//! ```
//!
//! `refresh()` never changes the state; it re-issues the fetch that matches it.

use crate::api::RegexApi;
use crate::app::guard::guard;
use crate::domain::Result;
use crate::ui::{format_rows, ListViewModel, ViewKind};

/// The two lists owned by the main window.
#[derive(Debug, Clone)]
pub struct MainLists {
    /// All posts or search results, full metadata.
    pub listing: ListViewModel,
    /// The user's view history, compact rows.
    pub history: ListViewModel,
}

impl Default for MainLists {
    fn default() -> Self {
        Self {
            listing: ListViewModel::new("Posts"),
            history: ListViewModel::new("History"),
        }
    }
}

/// Active query of the main window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    active_query: String,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    /// `true` when no search filter is active.
    #[must_use]
    pub fn is_browsing(&self) -> bool {
        self.active_query.is_empty()
    }

    /// Initial load: all posts into the listing and the view history into the
    /// history panel.
    ///
    /// Both fetches complete before either list is replaced.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` if the service is unreachable, or any fetch error.
    /// Lists are unchanged on error.
    pub fn load_all<A: RegexApi + ?Sized>(&self, api: &A, lists: &mut MainLists) -> Result<()> {
        let _span = tracing::debug_span!("load_all").entered();
        guard(api, "load", || Self::fetch_unfiltered(api, lists))
    }

    /// Runs a search and shows its results in the listing.
    ///
    /// Returns `Ok(false)` without touching anything (not even the availability
    /// check) when `query` is empty.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` if the service is unreachable, or the fetch error.
    /// The active query and the listing are unchanged on error.
    pub fn search<A: RegexApi + ?Sized>(&mut self, api: &A, query: &str, lists: &mut MainLists) -> Result<bool> {
        let _span = tracing::debug_span!("search", query = %query).entered();

        if query.is_empty() {
            tracing::debug!("empty query, search skipped");
            return Ok(false);
        }

        guard(api, "search", || {
            Self::fetch_search(api, query, &mut lists.listing)?;
            self.active_query = query.to_string();
            tracing::debug!(rows = lists.listing.len(), "search results applied");
            Ok(true)
        })
    }

    /// Re-issues whichever fetch matches the current state.
    ///
    /// Browsing reloads both lists like the initial load; searching re-runs the
    /// active query against the listing only.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` if the service is unreachable, or any fetch error.
    pub fn refresh<A: RegexApi + ?Sized>(&self, api: &A, lists: &mut MainLists) -> Result<()> {
        let _span = tracing::debug_span!("refresh", query = %self.active_query).entered();

        guard(api, "refresh", || {
            if self.is_browsing() {
                Self::fetch_unfiltered(api, lists)
            } else {
                Self::fetch_search(api, &self.active_query, &mut lists.listing)
            }
        })
    }

    /// Reloads only the history panel.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` if the service is unreachable, or the fetch error.
    pub fn refresh_history<A: RegexApi + ?Sized>(&self, api: &A, lists: &mut MainLists) -> Result<()> {
        guard(api, "refresh_history", || {
            let ticket = lists.history.begin_fetch();
            let history = api.user_views_history()?;
            lists.history.apply(ticket, format_rows(&history, ViewKind::HistoryCompact));
            Ok(())
        })
    }

    /// Drops the active query and reloads the unfiltered listing.
    ///
    /// The query is cleared even if the reload then fails.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` if the service is unreachable, or any fetch error.
    pub fn clear_search<A: RegexApi + ?Sized>(&mut self, api: &A, lists: &mut MainLists) -> Result<()> {
        tracing::debug!(previous = %self.active_query, "returning to browse");
        self.active_query.clear();
        self.load_all(api, lists)
    }

    fn fetch_unfiltered<A: RegexApi + ?Sized>(api: &A, lists: &mut MainLists) -> Result<()> {
        let listing_ticket = lists.listing.begin_fetch();
        let history_ticket = lists.history.begin_fetch();

        let posts = api.get_all_posts()?;
        let history = api.user_views_history()?;

        lists.listing.apply(listing_ticket, format_rows(&posts, ViewKind::Listing));
        lists.history.apply(history_ticket, format_rows(&history, ViewKind::HistoryCompact));
        Ok(())
    }

    fn fetch_search<A: RegexApi + ?Sized>(api: &A, query: &str, listing: &mut ListViewModel) -> Result<()> {
        let ticket = listing.begin_fetch();
        let results = api.search_posts(query)?;
        listing.apply(ticket, format_rows(&results, ViewKind::Listing));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MemoryApi, SeedData};
    use crate::domain::{ContentRecord, RegexHubError};

    fn api() -> MemoryApi {
        MemoryApi::from_seed(SeedData {
            posts: vec![
                ContentRecord::new(1, "cat|dog", 1, 4.0, "2024-01-01"),
                ContentRecord::new(2, "[0-9]+", 2, 3.5, "2024-01-02"),
                ContentRecord::new(3, "category", 0, 0.0, "2024-01-03"),
            ],
            history: vec![2],
            ..SeedData::default()
        })
    }

    #[test]
    fn load_all_fills_both_lists() {
        let api = api();
        let mut lists = MainLists::default();
        SearchSession::new().load_all(&api, &mut lists).unwrap();

        assert_eq!(lists.listing.len(), 3);
        assert_eq!(lists.history.rows()[0].text, "2 | [0-9]+ | 2024-01-02");
    }

    #[test]
    fn empty_search_is_a_no_op() {
        let api = api();
        api.set_available(false);
        let mut session = SearchSession::new();
        let mut lists = MainLists::default();

        assert!(!session.search(&api, "", &mut lists).unwrap());
        assert!(session.is_browsing());
    }

    #[test]
    fn search_then_refresh_is_idempotent() {
        let api = api();
        let mut session = SearchSession::new();
        let mut lists = MainLists::default();

        assert!(session.search(&api, "cat", &mut lists).unwrap());
        let after_search = lists.listing.rows().to_vec();
        session.refresh(&api, &mut lists).unwrap();

        assert_eq!(session.active_query(), "cat");
        assert_eq!(lists.listing.rows(), after_search.as_slice());
    }

    #[test]
    fn failed_search_keeps_previous_state() {
        let api = api();
        let mut session = SearchSession::new();
        let mut lists = MainLists::default();
        session.load_all(&api, &mut lists).unwrap();
        let before = lists.listing.rows().to_vec();

        api.set_available(false);
        let result = session.search(&api, "cat", &mut lists);

        assert!(matches!(result, Err(RegexHubError::Connectivity)));
        assert!(session.is_browsing());
        assert_eq!(lists.listing.rows(), before.as_slice());
    }

    #[test]
    fn clear_search_always_resets_query() {
        let api = api();
        let mut session = SearchSession::new();
        let mut lists = MainLists::default();
        session.search(&api, "cat", &mut lists).unwrap();

        api.set_available(false);
        assert!(session.clear_search(&api, &mut lists).is_err());
        assert!(session.is_browsing());

        api.set_available(true);
        session.clear_search(&api, &mut lists).unwrap();
        assert_eq!(lists.listing.len(), 3);
    }
}
