//! Output formatting: lay out result rows as text lines.
//!
//! This module handles the final stage of rendering - turning prepared cell
//! strings into aligned lines. It provides:
//!
//! - **BorderStyle / Frame**: glyph lookup and the border strings derived from it
//! - **Layout**: column widths, data rows and the divider rule
//! - **RenderedTable**: the finished lines, ready to print or serialize
//!
//! Nothing here decides *what* is shown; row limits, rotation and truncation
//! have already been applied by the renderer.
//!
//! ## Example
//!
//! ```rust
//! use sqltablib::output::{column_widths, format_row, format_rule, BorderStyle, Frame};
//!
//! let header = vec!["id".to_string(), "name".to_string()];
//! let rows = vec![vec!["1".to_string(), "Alice".to_string()]];
//! let widths = column_widths(Some(header.as_slice()), &rows);
//! let frame = Frame::new(BorderStyle::Ascii, true);
//!
//! assert_eq!(format_row(&header, &widths, &frame, true), "| id | name  |");
//! assert_eq!(format_rule(&widths, &frame), "|----+-------|");
//! ```

pub mod border;
pub mod layout;
pub mod table;

pub use border::{BorderStyle, Frame, Glyphs};
pub use layout::{column_widths, format_row, format_rule};
pub use table::RenderedTable;
