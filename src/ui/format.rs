//! Record formatting for list rows.
//!
//! Turns a [`ContentRecord`] into the single-line text shown in a list. Output is a
//! pure function of the record and the [`ViewKind`]; nothing else is consulted.

use crate::domain::ContentRecord;
use crate::ui::viewmodel::DisplayRow;

/// Significant digits kept when rendering an average mark.
const MARK_SIGNIFICANT_DIGITS: i32 = 6;

/// Which row layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Full metadata: id, expression, views, mark, creation date.
    Listing,
    /// Id, expression and date only. Used by the main window's history panel.
    HistoryCompact,
}

/// Formats one record as display text.
///
/// # Examples
///
/// ```
/// use regexhub::domain::ContentRecord;
/// use regexhub::ui::{format_record, ViewKind};
///
/// let record = ContentRecord::new(7, "^a|b$", 12, 4.5, "2024-02-01");
/// assert_eq!(
///     format_record(&record, ViewKind::Listing),
///     "7 | ^a|b$ | Views: 12 Mark: 4.5 | Created: 2024-02-01"
/// );
/// assert_eq!(format_record(&record, ViewKind::HistoryCompact), "7 | ^a|b$ | 2024-02-01");
/// ```
#[must_use]
pub fn format_record(record: &ContentRecord, kind: ViewKind) -> String {
    match kind {
        ViewKind::Listing => format!(
            "{} | {} | Views: {} Mark: {} | Created: {}",
            record.id,
            record.expression,
            record.views,
            format_mark(record.avg_mark),
            record.created_date
        ),
        ViewKind::HistoryCompact => format!("{} | {} | {}", record.id, record.expression, record.created_date),
    }
}

/// Formats a record into a row that carries its id alongside the text.
#[must_use]
pub fn format_row(record: &ContentRecord, kind: ViewKind) -> DisplayRow {
    DisplayRow {
        text: format_record(record, kind),
        record_id: record.id,
    }
}

/// Formats a whole fetch result, preserving order.
#[must_use]
pub fn format_rows(records: &[ContentRecord], kind: ViewKind) -> Vec<DisplayRow> {
    records.iter().map(|r| format_row(r, kind)).collect()
}

/// Renders an average mark with at most six significant digits and no
/// trailing zeros: `4.0 -> "4"`, `4.5 -> "4.5"`, `10/3 -> "3.33333"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_mark(mark: f64) -> String {
    if !mark.is_finite() {
        return mark.to_string();
    }
    if mark == 0.0 {
        return "0".to_string();
    }

    let magnitude = mark.abs().log10().floor() as i32;
    let decimals = (MARK_SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let fixed = format!("{mark:.decimals$}");

    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
