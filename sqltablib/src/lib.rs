//! # sqltablib
//!
//! Render tabular query results as aligned, bordered text for a terminal or
//! text buffer.
//!
//! ## Overview
//!
//! A result (rows of named columns) goes through a small pipeline:
//!
//! - **Row limit**: cut to the configured row count, with a "too many rows" advisory
//! - **Shape**: single cells are shown in full, single wide rows can be
//!   rotated into a name/value listing
//! - **Cell text**: line breaks normalized, long values truncated with `...`
//! - **Layout**: consistent column widths, ASCII or box-drawing borders
//!
//! Rendering returns plain data (`RenderedTable`); printing is up to the caller,
//! or goes through `Renderer::write_to` with any `io::Write` sink.
//!
//! The crate also carries the dispatch boundary for SQL pretty-printing
//! (`SqlPrettyPrinter`), which classifies statements as DML or DDL and hands
//! them to the matching formatter.
//!
//! ## Example
//!
//! ```rust
//! use sqltablib::{Cell, RenderOptions, Renderer, ResultSet};
//!
//! let result = ResultSet::new(
//!     vec!["id".to_string(), "name".to_string()],
//!     vec![
//!         vec![Cell::Int(1), Cell::text("Alice")],
//!         vec![Cell::Int(2), Cell::text("Bob")],
//!     ],
//! );
//!
//! let mut renderer = Renderer::default();
//! let table = renderer.render(&result, RenderOptions::new());
//! assert_eq!(
//!     table.lines(),
//!     vec!["| id | name  |", "|----+-------|", "| 1  | Alice |", "| 2  | Bob   |"]
//! );
//!
//! // Settings persist across renders
//! renderer.config_mut().set_use_unicode_borders(true);
//! let table = renderer.render(&result, RenderOptions::new());
//! assert_eq!(table.header.as_deref(), Some("│ id │ name  │"));
//!
//! // Per-call overrides do not
//! let table = renderer.render(&result, RenderOptions::new().outside_borders(false));
//! assert_eq!(table.rows[0], "1  │ Alice");
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod limit;
pub mod output;
pub mod render;
pub mod shape;
pub mod sql;
pub mod text;

pub use config::RenderConfig;
pub use data::{Cell, ResultSet};
pub use error::SqltabError;
pub use limit::{apply_row_limit, min_not_zero, LimitedRows};
pub use output::{BorderStyle, RenderedTable};
pub use render::{RenderOptions, Renderer};
pub use shape::{classify, transpose, Shape};
pub use sql::{DdlFormatter, DmlFormatter, SqlFormatter, SqlPrettyPrinter, StatementKind};

/// Result type for sqltablib operations
pub type Result<T> = std::result::Result<T, SqltabError>;
