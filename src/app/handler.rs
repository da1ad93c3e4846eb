//! Main window event handling.
//!
//! [`handle_event`] maps one UI event to state changes on [`AppState`] plus a list
//! of [`Action`]s. Each event runs to completion before the next is processed, so a
//! list never sees two overlapping requests.
//!
//! # Error Surfacing
//!
//! Operation errors are not propagated. They become a single
//! [`Action::ShowNotice`] and the state is left as it was before the event. Empty
//! input to search or create produces neither a notice nor any request.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use regexhub::api::MemoryApi;
//! use regexhub::app::{handle_event, AppState, Event, RefreshPolicy};
//!
//! let mut state = AppState::new(Arc::new(MemoryApi::new()), RefreshPolicy::default());
//! let (redraw, actions) = handle_event(&mut state, &Event::Load)?;
//! assert!(redraw);
//! assert!(actions.is_empty());
//! # Ok::<(), regexhub::RegexHubError>(())
//! ```

use crate::app::create;
use crate::app::guard::guard;
use crate::app::modes::ListKind;
use crate::app::navigation::{DetailRequest, Origin};
use crate::app::{Action, AppState, DetailState};
use crate::domain::{RegexHubError, Result};

/// Events delivered to the main window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Initial population of both lists.
    Load,
    /// Appends a character to the input box.
    Char(char),
    /// Removes the last character from the input box.
    Backspace,
    /// Replaces the input box contents.
    SetInput(String),
    /// Searches for the input box contents.
    Search,
    /// Drops the active query and shows all posts again.
    ReturnToBrowse,
    /// Re-fetches whatever the listing currently shows.
    Refresh,
    /// Submits the input box contents as a new expression.
    Create,
    /// Ends the authenticated session.
    Logout,
    /// Opens the signed-in user's profile window.
    OpenProfile,
    /// Gives keyboard focus to a list.
    FocusList(ListKind),
    /// Moves the highlight in the focused list down.
    KeyDown,
    /// Moves the highlight in the focused list up.
    KeyUp,
    /// Opens the highlighted row of the focused list.
    Activate,
    /// Click on a row: highlights it and opens it.
    SelectRow {
        list: ListKind,
        index: usize,
    },
}

fn notice(error: &RegexHubError) -> Action {
    match error {
        RegexHubError::Connectivity => {}
        RegexHubError::LengthExceeded { .. }
        | RegexHubError::InvalidExpression
        | RegexHubError::DuplicateExpression => tracing::debug!(error = %error, "request rejected"),
        _ => tracing::error!(error = %error, "request failed"),
    }
    Action::ShowNotice(error.notice())
}

fn redraw_or_notice(result: Result<()>) -> (bool, Vec<Action>) {
    match result {
        Ok(()) => (true, vec![]),
        Err(e) => (false, vec![notice(&e)]),
    }
}

/// Processes an event, mutates the main window state and returns actions.
///
/// # Returns
///
/// `(redraw, actions)`: whether the window should be redrawn and the side effects
/// to execute in order.
///
/// # Errors
///
/// User-facing failures are reported as [`Action::ShowNotice`], not as errors.
/// The `Result` is kept for runtime-level failures.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    if state.closed {
        tracing::debug!("window closed, event ignored");
        return Ok((false, vec![]));
    }

    let api = state.api().clone();

    match event {
        Event::Load => Ok(redraw_or_notice(state.session.load_all(api.as_ref(), &mut state.lists))),
        Event::Char(c) => {
            state.input.push(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.input.pop().is_some(), vec![])),
        Event::SetInput(text) => {
            state.input.clone_from(text);
            Ok((true, vec![]))
        }
        Event::Search => {
            let query = state.input.clone();
            match state.session.search(api.as_ref(), &query, &mut state.lists) {
                Ok(false) => Ok((false, vec![])),
                Ok(true) => {
                    state.return_enabled = true;
                    state.input.clear();
                    Ok((true, vec![]))
                }
                Err(e) => Ok((false, vec![notice(&e)])),
            }
        }
        Event::ReturnToBrowse => {
            if !state.return_enabled {
                tracing::debug!("already browsing, return ignored");
                return Ok((false, vec![]));
            }
            state.return_enabled = false;
            let result = state.session.clear_search(api.as_ref(), &mut state.lists);
            match result {
                Ok(()) => Ok((true, vec![])),
                Err(e) => Ok((true, vec![notice(&e)])),
            }
        }
        Event::Refresh => {
            let result = state.session.refresh(api.as_ref(), &mut state.lists);
            if result.is_ok() && !state.session.is_browsing() {
                state.input.clear();
            }
            Ok(redraw_or_notice(result))
        }
        Event::Create => {
            let text = state.input.clone();
            match create::submit(api.as_ref(), &text) {
                Ok(None) => Ok((false, vec![])),
                Ok(Some(record)) => {
                    let request = DetailRequest::for_record(&record, Origin::Created);
                    let mut actions = vec![match DetailState::open(api.clone(), request) {
                        Ok(detail) => Action::OpenDetail(detail),
                        Err(e) => notice(&e),
                    }];
                    if let Err(e) = state.session.refresh(api.as_ref(), &mut state.lists) {
                        actions.push(notice(&e));
                    }
                    state.input.clear();
                    Ok((true, actions))
                }
                Err(e) => Ok((false, vec![notice(&e)])),
            }
        }
        Event::Logout => match guard(api.as_ref(), "logout", || api.exit_user()) {
            Ok(()) => {
                tracing::debug!("logged out, handing over to welcome screen");
                state.closed = true;
                Ok((false, vec![Action::OpenWelcome, Action::CloseWindow]))
            }
            Err(e) => Ok((false, vec![notice(&e)])),
        },
        Event::OpenProfile => {
            let username = api.identity().username;
            tracing::debug!(username = %username, "opening profile");
            Ok((false, vec![Action::OpenProfile { username }]))
        }
        Event::FocusList(kind) => {
            state.focus = *kind;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Activate => {
            let focus = state.focus;
            Ok(open_selected(state, focus))
        }
        Event::SelectRow { list, index } => {
            state.list_mut(*list).select(*index);
            Ok(open_selected(state, *list))
        }
    }
}

/// Opens the highlighted row of `kind` and refreshes its list if the policy asks for it.
///
/// The detail record is loaded first, so the refresh sees the view it counted. A
/// failed load opens nothing and skips the refresh.
fn open_selected(state: &mut AppState, kind: ListKind) -> (bool, Vec<Action>) {
    let origin = Origin::from(kind);
    let navigator = state.navigator;
    let api = state.api().clone();

    let Some(request) = navigator.open_detail(state.list_mut(kind), origin) else {
        return (true, vec![]);
    };

    let detail = match DetailState::open(api.clone(), request) {
        Ok(detail) => detail,
        Err(e) => return (true, vec![notice(&e)]),
    };
    let mut actions = vec![Action::OpenDetail(detail)];

    if navigator.refreshes_origin(origin) {
        let result = match kind {
            ListKind::Listing => state.session.refresh(api.as_ref(), &mut state.lists),
            ListKind::History => state.session.refresh_history(api.as_ref(), &mut state.lists),
        };
        if let Err(e) = result {
            actions.push(notice(&e));
        }
    }

    (true, actions)
}
