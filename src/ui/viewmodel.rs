//! View model types bound by the windows.
//!
//! A [`ListViewModel`] is an ordered, named collection of [`DisplayRow`]s. Its
//! contents are replaced wholesale on every refresh and never partially edited,
//! so a list always shows exactly one fetch.
//!
//! # Stale Responses
//!
//! Each fetch takes a [`FetchTicket`] before issuing its request. Only the most
//! recently issued ticket may replace the rows; an older response arriving late
//! is discarded.
//!
//! # Example
//!
//! ```rust
//! use regexhub::ui::{DisplayRow, ListViewModel};
//!
//! let mut list = ListViewModel::new("Posts");
//! let ticket = list.begin_fetch();
//! assert!(list.apply(ticket, vec![DisplayRow::new("1 | a | d", 1)]));
//! assert_eq!(list.label(), "Posts (1)");
//! ```

/// One rendered list row plus the id of the record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Formatted text shown to the user.
    pub text: String,

    /// Identifier of the underlying record.
    pub record_id: i64,
}

impl DisplayRow {
    pub fn new(text: impl Into<String>, record_id: i64) -> Self {
        Self {
            text: text.into(),
            record_id,
        }
    }
}

/// Proof that a fetch was started at a given list generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

/// Ordered, named list bound to one on-screen panel.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    name: String,
    rows: Vec<DisplayRow>,

    /// Highlighted row, if any. Cleared whenever rows are replaced.
    selected: Option<usize>,

    /// Incremented by every `begin_fetch`.
    generation: u64,
}

impl ListViewModel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            selected: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&DisplayRow> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Panel caption with the row count, e.g. `"History (3)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.rows.len())
    }

    /// Starts a fetch and returns the ticket that may later apply its result.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Whether `ticket` is the most recent one issued by this list.
    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replaces all rows with a fetch result if `ticket` is still current.
    ///
    /// Returns `false` and leaves the list untouched for a stale ticket.
    pub fn apply(&mut self, ticket: FetchTicket, rows: Vec<DisplayRow>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                list = %self.name,
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        tracing::debug!(list = %self.name, row_count = rows.len(), "list replaced");
        self.rows = rows;
        self.selected = None;
        true
    }

    /// Replaces all rows unconditionally.
    pub fn replace(&mut self, rows: Vec<DisplayRow>) {
        let ticket = self.begin_fetch();
        self.apply(ticket, rows);
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Highlights the row at `index`. Out-of-range indices clear the highlight.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.rows.len()).then_some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves the highlight down by one row, wrapping to the top.
    ///
    /// With nothing highlighted the first row is selected. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % self.rows.len()));
    }

    /// Moves the highlight up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = Some(match self.selected {
            None | Some(0) => last,
            Some(i) => i - 1,
        });
    }

    /// Returns the highlighted row and clears the highlight.
    ///
    /// Selection is transient: activating a row never leaves it highlighted.
    pub fn take_selection(&mut self) -> Option<DisplayRow> {
        let index = self.selected.take()?;
        self.rows.get(index).cloned()
    }
}
