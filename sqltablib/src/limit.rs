//! Row-limit policy.
//!
//! Decides how many data rows of a result are displayed and, when rows are
//! cut, builds the "too many rows" advisory. The header is never counted
//! against the limit and is always kept.

use tracing::debug;

use crate::config::RenderConfig;
use crate::data::Cell;

/// Smaller of two limits, where zero means "no limit from that source".
///
/// Returns zero only when both are zero.
pub fn min_not_zero(a: usize, b: usize) -> usize {
    match (a, b) {
        (0, b) => b,
        (a, 0) => a,
        (a, b) => a.min(b),
    }
}

/// Effective display limit: the explicit one if given, otherwise the
/// smaller nonzero of `max_rows` and `fetch_size`. Zero means unlimited.
pub fn effective_limit(explicit: Option<usize>, config: &RenderConfig) -> usize {
    explicit.unwrap_or_else(|| min_not_zero(config.max_rows, config.fetch_size))
}

/// Data rows left after applying the limit.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitedRows {
    /// Rows to display
    pub rows: Vec<Vec<Cell>>,
    /// Advisory message, present only when rows were cut and messages are on
    pub message: Option<String>,
    /// Whether any rows were dropped
    pub truncated: bool,
}

/// Build the advisory for a result of `row_count` rows cut down to `limit`.
pub fn too_many_rows_message(limit: usize, row_count: usize, max_rows: usize) -> String {
    let shown = min_not_zero(max_rows, row_count);
    let suffix = if max_rows != 0 && row_count > max_rows {
        "+"
    } else {
        ""
    };
    format!(
        "Too many rows. Only {} from {}{} are shown.",
        limit, shown, suffix
    )
}

/// Apply the row-limit policy to data rows.
pub fn apply_row_limit(
    mut rows: Vec<Vec<Cell>>,
    explicit: Option<usize>,
    config: &RenderConfig,
) -> LimitedRows {
    let limit = effective_limit(explicit, config);
    let row_count = rows.len();

    if limit == 0 || row_count <= limit {
        return LimitedRows {
            rows,
            message: None,
            truncated: false,
        };
    }

    debug!(row_count, limit, "truncating result rows");
    rows.truncate(limit);

    let message = config
        .show_too_many_rows_message
        .then(|| too_many_rows_message(limit, row_count, config.max_rows));

    LimitedRows {
        rows,
        message,
        truncated: true,
    }
}
