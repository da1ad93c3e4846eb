//! Application layer coordinating window state, events, and actions.
//!
//! This layer sits between the runtime (main.rs) and the domain/api/ui layers.
//! Each window owns a state struct and an event handler; handlers mutate state and
//! return [`Action`]s for everything that reaches outside the window.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → handler → State Mutations → Actions → Runtime
//!                         │
//!                         └─ guard → RegexApi
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the handlers
//! - [`create`]: Post-creation flow
//! - [`detail`]: Detail window state
//! - [`guard`](mod@guard): Availability check in front of every API call
//! - [`handler`]: Main window event processing
//! - [`modes`]: Focus and refresh policy enums
//! - [`navigation`]: Row-to-detail navigation and refresh policy
//! - [`profile`]: Profile window state and events
//! - [`search`]: Search session and the main window lists
//! - [`state`]: Main window state container
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use regexhub::api::MemoryApi;
//! use regexhub::app::{handle_event, AppState, Event, RefreshPolicy};
//!
//! let mut state = AppState::new(Arc::new(MemoryApi::new()), RefreshPolicy::Consistent);
//! handle_event(&mut state, &Event::Load)?;
//! handle_event(&mut state, &Event::SetInput("^x$".into()))?;
//! let (_, actions) = handle_event(&mut state, &Event::Create)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), regexhub::RegexHubError>(())
//! ```

pub mod actions;
pub mod create;
pub mod detail;
pub mod guard;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod profile;
pub mod search;
pub mod state;

pub use actions::Action;
pub use detail::DetailState;
pub use guard::guard;
pub use handler::{handle_event, Event};
pub use modes::{ListKind, ProfileListKind, RefreshPolicy};
pub use navigation::{DetailRequest, Navigator, Origin};
pub use profile::{ProfileEvent, ProfileState};
pub use search::{MainLists, SearchSession};
pub use state::AppState;
