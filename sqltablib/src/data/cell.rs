//! A single value in a query result.

use serde::Serialize;
use serde_json::Value;

/// A printable cell value.
///
/// Only `Text` is treated as string-typed: line-break handling applies to it
/// and nothing else. `Raw` carries nested structured values (arrays, objects)
/// already stringified, and is printed verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// SQL NULL
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Text(String),
    /// Any other value, pre-rendered
    Raw(String),
}

impl Cell {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Check if this is a string-typed value
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }

    /// Check if this is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Cell::Null => "NULL".to_string(),
            Cell::Bool(v) => v.to_string(),
            Cell::Int(v) => v.to_string(),
            Cell::Float(v) => v.to_string(),
            Cell::Text(v) | Cell::Raw(v) => v.clone(),
        };

        // Respect width from the formatter; cells are always left-aligned
        if let Some(width) = f.width() {
            write!(f, "{:<width$}", s, width = width)
        } else {
            write!(f, "{}", s)
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Cell::Int(i),
                None => n
                    .as_f64()
                    .map(Cell::Float)
                    .unwrap_or_else(|| Cell::Raw(n.to_string())),
            },
            Value::String(s) => Cell::Text(s),
            other => Cell::Raw(other.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Null)
    }
}
