//! Input data: query results as handed over by a data source.
//!
//! - **Cell**: a single printable value
//! - **ResultSet**: header plus data rows, built from positional rows,
//!   keyed records or JSON
//!
//! ## Example
//!
//! ```rust
//! use sqltablib::data::{Cell, ResultSet};
//!
//! let rs = ResultSet::from_rows(vec![
//!     vec![Cell::text("id"), Cell::text("name")],
//!     vec![Cell::Int(1), Cell::text("Alice")],
//! ]);
//! assert_eq!(rs.column_count(), 2);
//! assert_eq!(rs.row_count(), 1);
//! ```

pub mod cell;
pub mod result_set;

pub use cell::Cell;
pub use result_set::ResultSet;
