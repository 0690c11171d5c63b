//! Column widths and line formatting.
//!
//! All inputs are final display strings: normalized, and truncated where the
//! shape calls for it. Every cell is left-aligned and padded with spaces to
//! its column's width, measured in terminal columns.

use super::border::Frame;
use crate::text::{display_width, pad_to_width};

/// Width of each column: the longest of its header and every cell.
///
/// The column count comes from the header when present, otherwise from the
/// first row.
pub fn column_widths(header: Option<&[String]>, rows: &[Vec<String>]) -> Vec<usize> {
    let count = header
        .map(<[String]>::len)
        .or_else(|| rows.first().map(Vec::len))
        .unwrap_or(0);

    let mut widths: Vec<usize> = match header {
        Some(header) => header.iter().map(|h| display_width(h)).collect(),
        None => vec![0; count],
    };

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    widths
}

/// Format one row of cells.
///
/// With `pad_last` off the final cell is written as-is, with no trailing
/// padding and no trailer.
pub fn format_row(cells: &[String], widths: &[usize], frame: &Frame, pad_last: bool) -> String {
    let last = cells.len().saturating_sub(1);
    let body = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i == last && !pad_last {
                cell.clone()
            } else {
                pad_to_width(cell, width)
            }
        })
        .collect::<Vec<_>>()
        .join(&frame.divider);

    if pad_last {
        format!("{}{}{}", frame.leader, body, frame.trailer)
    } else {
        format!("{}{}", frame.leader, body)
    }
}

/// Format the divider rule between the header and the data rows.
pub fn format_rule(widths: &[usize], frame: &Frame) -> String {
    let body = widths
        .iter()
        .map(|&width| frame.horizontal.repeat(width))
        .collect::<Vec<_>>()
        .join(&frame.rule_divider);

    format!("{}{}{}", frame.rule_leader, body, frame.rule_trailer)
}
