//! Result rendering.
//!
//! `Renderer` runs the full pipeline for one result:
//!
//! 1. Row limit (may cut rows and produce an advisory)
//! 2. Shape classification (grid, rotated or scalar)
//! 3. Cell text preparation (line breaks, truncation for grids)
//! 4. Layout (widths, header, divider, rows)
//!
//! The renderer owns its `RenderConfig`; changes made through `config_mut`
//! apply to every later render. Per-call settings go through `RenderOptions`
//! and never touch the stored config.

use std::io::Write;

use tracing::trace;

use crate::config::RenderConfig;
use crate::data::{Cell, ResultSet};
use crate::limit::apply_row_limit;
use crate::output::{column_widths, format_row, format_rule, BorderStyle, Frame, RenderedTable};
use crate::shape::{classify, transpose, Shape};
use crate::text::{display_width, flatten_line_breaks, normalize_line_breaks, truncate};
use crate::Result;

/// Per-call overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Explicit row limit, replacing the configured one (0 = unlimited)
    pub limit: Option<usize>,
    /// Outside borders for this call only
    pub outside_borders: Option<bool>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set an explicit row limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: override outside borders for this call
    pub fn outside_borders(mut self, borders: bool) -> Self {
        self.outside_borders = Some(borders);
        self
    }
}

/// Renders result sets as text tables.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Render a result set.
    ///
    /// A result with no data rows renders nothing, not even its header.
    pub fn render(&self, result: &ResultSet, options: RenderOptions) -> RenderedTable {
        if result.is_empty() {
            return RenderedTable::default();
        }

        let config = &self.config;
        let outside_borders = options
            .outside_borders
            .unwrap_or(config.add_outside_borders);
        let frame = Frame::new(
            BorderStyle::from_unicode(config.use_unicode_borders),
            outside_borders,
        );

        let limited = apply_row_limit(result.rows().to_vec(), options.limit, config);
        let shape = classify(limited.rows.len(), result.column_count(), outside_borders);

        let width_limit = if shape.truncates() {
            config.column_width_limit
        } else {
            None
        };

        let mut table = match shape {
            Shape::Grid => render_grid(result.columns(), &limited.rows, &frame, width_limit),
            Shape::Rotated => render_rotated(result.columns(), &limited.rows[0], &frame),
            Shape::Scalar => self.render_scalar(
                &result.columns()[0],
                limited.rows[0].first().unwrap_or(&Cell::Null),
                &frame,
                outside_borders,
            ),
        };
        table.message = limited.message;
        table
    }

    /// Render and write every line, each terminated by the configured line break.
    pub fn write_to<W: Write>(
        &self,
        result: &ResultSet,
        options: RenderOptions,
        out: &mut W,
    ) -> Result<()> {
        let table = self.render(result, options);
        for line in table.lines() {
            write!(out, "{}{}", line, self.config.line_break)?;
        }
        out.flush()?;
        Ok(())
    }

    fn render_scalar(
        &self,
        column: &str,
        cell: &Cell,
        frame: &Frame,
        outside_borders: bool,
    ) -> RenderedTable {
        let line_break = self.config.line_break.as_str();
        let value = match cell {
            Cell::Text(s) => normalize_line_breaks(s, line_break),
            other => other.to_string(),
        };

        let segments: Vec<String> = if outside_borders && cell.is_text() {
            value.split(line_break).map(str::to_string).collect()
        } else {
            vec![value.clone()]
        };

        let width = value
            .split(line_break)
            .map(display_width)
            .fold(display_width(column), usize::max);
        let widths = [width];
        trace!(width, segments = segments.len(), "computed scalar width");

        let header = vec![column.to_string()];
        RenderedTable {
            message: None,
            header: Some(format_row(&header, &widths, frame, true)),
            divider: Some(format_rule(&widths, frame)),
            rows: segments
                .into_iter()
                .map(|segment| format_row(&[segment], &widths, frame, true))
                .collect(),
        }
    }
}

/// Header, divider and one line per row, with headers and cells truncated.
fn render_grid(
    columns: &[String],
    rows: &[Vec<Cell>],
    frame: &Frame,
    width_limit: Option<usize>,
) -> RenderedTable {
    let header: Vec<String> = columns.iter().map(|h| truncate(h, width_limit)).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate(&grid_text(cell), width_limit))
                .collect()
        })
        .collect();

    let widths = column_widths(Some(header.as_slice()), &cells);
    trace!(?widths, "computed grid column widths");

    RenderedTable {
        message: None,
        header: Some(format_row(&header, &widths, frame, true)),
        divider: Some(format_rule(&widths, frame)),
        rows: cells
            .iter()
            .map(|row| format_row(row, &widths, frame, true))
            .collect(),
    }
}

/// Single wide row as name/value lines, with no header or divider.
fn render_rotated(columns: &[String], row: &[Cell], frame: &Frame) -> RenderedTable {
    let mut values: Vec<String> = row.iter().map(grid_text).collect();
    values.resize(columns.len(), String::new());
    let pairs = transpose(&[columns.to_vec(), values]);

    let widths = column_widths(None, &pairs);
    trace!(?widths, "computed rotated column widths");

    RenderedTable {
        message: None,
        header: None,
        divider: None,
        rows: pairs
            .iter()
            .map(|pair| format_row(pair, &widths, frame, false))
            .collect(),
    }
}

/// Cell text for a grid line: line breaks inside strings become spaces.
fn grid_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => flatten_line_breaks(s),
        other => other.to_string(),
    }
}
