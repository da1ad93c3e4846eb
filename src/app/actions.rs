//! Actions representing side effects to be executed by the runtime.
//!
//! Window handlers mutate their own state and return a `Vec<Action>` for
//! everything that reaches outside the window: notices, new windows, closing.
//! The runtime executes them in order.
//!
//! # Example
//!
//! ```rust
//! use regexhub::app::Action;
//! use regexhub::domain::Notice;
//!
//! let actions = vec![
//!     Action::ShowNotice(Notice::new("Regex", "Incorrect expression.")),
//! ];
//! ```

use crate::app::detail::DetailState;
use crate::domain::Notice;

/// Commands produced by window handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Shows a blocking notice.
    ShowNotice(Notice),

    /// Shows a detail window whose record is already loaded.
    ///
    /// The handler loads it before refreshing the originating list, so the
    /// refreshed list includes the view the load counted.
    OpenDetail(DetailState),

    /// Opens the profile window of the signed-in user.
    OpenProfile {
        /// Window title.
        username: String,
    },

    /// Shows the unauthenticated entry screen.
    OpenWelcome,

    /// Closes the window that produced this action.
    CloseWindow,
}
