//! The finished result of a render.

use serde::{Deserialize, Serialize};

/// Rendered text lines of a result.
///
/// This is the final data structure before printing. `lines()` gives the
/// display order: advisory message and a blank line, header, divider, rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    /// "Too many rows" advisory, when rows were cut
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Header line (absent for rotated results)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Divider rule (absent for rotated results)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider: Option<String>,
    /// One line per displayed row
    pub rows: Vec<String>,
}

impl RenderedTable {
    /// All output lines in display order.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        if let Some(message) = &self.message {
            lines.push(message.as_str());
            lines.push("");
        }
        if let Some(header) = &self.header {
            lines.push(header.as_str());
        }
        if let Some(divider) = &self.divider {
            lines.push(divider.as_str());
        }
        lines.extend(self.rows.iter().map(String::as_str));

        lines
    }

    /// True when there is nothing to print
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.header.is_none() && self.rows.is_empty()
    }
}
