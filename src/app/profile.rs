//! Profile window state.
//!
//! The profile window shows two lists for the signed-in user: posts they authored
//! and posts they viewed. Both use the full listing layout and are labelled with
//! their row count. Detail views opened here follow the same [`Navigator`] policy
//! as the main window.

use crate::api::ApiHandle;
use crate::app::guard::guard;
use crate::app::modes::{ProfileListKind, RefreshPolicy};
use crate::app::navigation::{Navigator, Origin};
use crate::app::{Action, DetailState};
use crate::domain::{Result, UserIdentity};
use crate::ui::{format_rows, ListViewModel, ViewKind};

/// Events delivered to a profile window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    Load,
    FocusList(ProfileListKind),
    KeyDown,
    KeyUp,
    Activate,
    SelectRow { list: ProfileListKind, index: usize },
}

/// State of one profile window.
pub struct ProfileState {
    api: ApiHandle,
    identity: UserIdentity,
    pub posts: ListViewModel,
    pub history: ListViewModel,
    pub focus: ProfileListKind,
    navigator: Navigator,
}

impl std::fmt::Debug for ProfileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileState")
            .field("identity", &self.identity)
            .field("posts", &self.posts)
            .field("history", &self.history)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl ProfileState {
    /// Creates a profile window for whoever `api` is signed in as.
    ///
    /// The identity is captured once; the lists stay empty until [`load`](Self::load).
    #[must_use]
    pub fn new(api: ApiHandle, policy: RefreshPolicy) -> Self {
        let identity = api.identity();
        Self {
            api,
            identity,
            posts: ListViewModel::new("Posts"),
            history: ListViewModel::new("History"),
            focus: ProfileListKind::Posts,
            navigator: Navigator::new(policy),
        }
    }

    /// Window title.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.identity.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.identity.email
    }

    #[must_use]
    pub fn list(&self, kind: ProfileListKind) -> &ListViewModel {
        match kind {
            ProfileListKind::Posts => &self.posts,
            ProfileListKind::History => &self.history,
        }
    }

    pub fn list_mut(&mut self, kind: ProfileListKind) -> &mut ListViewModel {
        match kind {
            ProfileListKind::Posts => &mut self.posts,
            ProfileListKind::History => &mut self.history,
        }
    }

    /// Fetches authored posts and view history.
    ///
    /// Both fetches complete before either list is replaced.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` if the service is unreachable, or any fetch error.
    /// Lists are unchanged on error.
    pub fn load(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("profile_load", username = %self.identity.username).entered();
        let api = self.api.clone();

        guard(api.as_ref(), "profile_load", || {
            let posts_ticket = self.posts.begin_fetch();
            let history_ticket = self.history.begin_fetch();

            let authored = api.author_posts()?;
            let viewed = api.user_views_history()?;

            self.posts.apply(posts_ticket, format_rows(&authored, ViewKind::Listing));
            self.history.apply(history_ticket, format_rows(&viewed, ViewKind::Listing));

            tracing::debug!(posts = %self.posts.label(), history = %self.history.label(), "profile loaded");
            Ok(())
        })
    }

    /// Processes a profile window event.
    ///
    /// Follows the same `(redraw, actions)` contract as the main window handler;
    /// failures become a single [`Action::ShowNotice`].
    ///
    /// # Errors
    ///
    /// Reserved for runtime-level failures; none are produced today.
    pub fn handle_event(&mut self, event: &ProfileEvent) -> Result<(bool, Vec<Action>)> {
        let _span = tracing::debug_span!("profile_handle_event", event = ?event).entered();

        match event {
            ProfileEvent::Load => Ok(match self.load() {
                Ok(()) => (true, vec![]),
                Err(e) => (false, vec![Action::ShowNotice(e.notice())]),
            }),
            ProfileEvent::FocusList(kind) => {
                self.focus = *kind;
                Ok((true, vec![]))
            }
            ProfileEvent::KeyDown => {
                let focus = self.focus;
                self.list_mut(focus).move_selection_down();
                Ok((true, vec![]))
            }
            ProfileEvent::KeyUp => {
                let focus = self.focus;
                self.list_mut(focus).move_selection_up();
                Ok((true, vec![]))
            }
            ProfileEvent::Activate => {
                let focus = self.focus;
                Ok(self.open_selected(focus))
            }
            ProfileEvent::SelectRow { list, index } => {
                self.list_mut(*list).select(*index);
                Ok(self.open_selected(*list))
            }
        }
    }

    fn open_selected(&mut self, kind: ProfileListKind) -> (bool, Vec<Action>) {
        let origin = match kind {
            ProfileListKind::Posts => Origin::ProfilePosts,
            ProfileListKind::History => Origin::ProfileHistory,
        };
        let navigator = self.navigator;

        let Some(request) = navigator.open_detail(self.list_mut(kind), origin) else {
            return (true, vec![]);
        };

        // The load counts a view, so it has to land before the profile reloads.
        let detail = match DetailState::open(self.api.clone(), request) {
            Ok(detail) => detail,
            Err(e) => return (true, vec![Action::ShowNotice(e.notice())]),
        };
        let mut actions = vec![Action::OpenDetail(detail)];
        if navigator.refreshes_origin(origin) {
            if let Err(e) = self.load() {
                actions.push(Action::ShowNotice(e.notice()));
            }
        } else {
            tracing::debug!(origin = ?origin, "origin list left as is");
        }

        (true, actions)
    }
}
