//! Query results in positional form.
//!
//! Data sources hand results over in one of two shapes:
//!
//! - **Positional**: a sequence of sequences where element 0 is the header
//!   (raw query results)
//! - **Mapping**: a sequence of records keyed by column name (metadata listings)
//!
//! Both are normalized into a `ResultSet`: a header plus data rows. All rows
//! are expected to have as many cells as there are columns; this is the data
//! source's responsibility and is not checked here.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::cell::Cell;
use crate::error::SqltabError;
use crate::Result;

/// A fully materialized query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    /// Column names, in display order
    columns: Vec<String>,
    /// Data rows (header excluded)
    rows: Vec<Vec<Cell>>,
}

impl ResultSet {
    /// Create a result set from a header and data rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// Create a result set from positional rows, where the first row is the header.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let mut iter = rows.into_iter();
        let columns = iter
            .next()
            .map(|header| header.iter().map(|c| c.to_string()).collect())
            .unwrap_or_default();

        Self {
            columns,
            rows: iter.collect(),
        }
    }

    /// Create a result set from records keyed by column name.
    ///
    /// Column order comes from `columns` when given, otherwise from the key
    /// order of the first record. Keys missing from a record become `Null`.
    pub fn from_records<I, R, K>(records: I, columns: Option<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, Cell)>,
        K: Into<String>,
    {
        let records: Vec<Vec<(String, Cell)>> = records
            .into_iter()
            .map(|r| r.into_iter().map(|(k, v)| (k.into(), v)).collect())
            .collect();

        let columns = columns.unwrap_or_else(|| {
            records
                .first()
                .map(|first| first.iter().map(|(k, _)| k.clone()).collect())
                .unwrap_or_default()
        });

        let rows = records
            .into_iter()
            .map(|record| {
                let mut by_key: HashMap<String, Cell> = record.into_iter().collect();
                columns
                    .iter()
                    .map(|col| by_key.remove(col).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Create a result set from a JSON document.
    ///
    /// Accepts an array of objects (mapping form) or an array of arrays whose
    /// first element is the header (positional form).
    pub fn from_json(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(SqltabError::InvalidResultSet(format!(
                    "expected an array of rows, found {}",
                    json_kind(&other)
                )))
            }
        };

        match items.first() {
            None => Ok(Self::default()),
            Some(Value::Object(_)) => {
                let records = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| match item {
                        Value::Object(map) => Ok(map
                            .into_iter()
                            .map(|(k, v)| (k, Cell::from(v)))
                            .collect::<Vec<_>>()),
                        other => Err(SqltabError::InvalidResultSet(format!(
                            "row {} is {}, expected an object",
                            i,
                            json_kind(&other)
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::from_records(records, None))
            }
            Some(Value::Array(_)) => {
                let rows = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| match item {
                        Value::Array(cells) => Ok(cells.into_iter().map(Cell::from).collect()),
                        other => Err(SqltabError::InvalidResultSet(format!(
                            "row {} is {}, expected an array",
                            i,
                            json_kind(&other)
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::from_rows(rows))
            }
            Some(other) => Err(SqltabError::InvalidResultSet(format!(
                "rows must be objects or arrays, found {}",
                json_kind(other)
            ))),
        }
    }

    /// Column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows (header excluded)
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when there are no data rows, whatever the header holds
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_rows_splits_header() {
        let rs = ResultSet::from_rows(vec![
            vec![Cell::text("id"), Cell::text("name")],
            vec![Cell::Int(1), Cell::text("Alice")],
        ]);
        assert_eq!(rs.columns(), &["id".to_string(), "name".to_string()]);
        assert_eq!(rs.row_count(), 1);
        assert_eq!(rs.column_count(), 2);
    }

    #[test]
    fn test_from_rows_empty() {
        let rs = ResultSet::from_rows(vec![]);
        assert!(rs.is_empty());
    }

    #[test]
    fn test_from_records_uses_first_key_order() {
        let rs = ResultSet::from_records(
            vec![
                vec![("owner", Cell::text("SYS")), ("table", Cell::text("DUAL"))],
                vec![("table", Cell::text("T1")), ("owner", Cell::text("APP"))],
            ],
            None,
        );
        assert_eq!(rs.columns(), &["owner".to_string(), "table".to_string()]);
        assert_eq!(rs.rows()[1], vec![Cell::text("APP"), Cell::text("T1")]);
    }

    #[test]
    fn test_from_records_explicit_columns() {
        let rs = ResultSet::from_records(
            vec![vec![("a", Cell::Int(1)), ("b", Cell::Int(2))]],
            Some(vec!["b".to_string(), "a".to_string(), "c".to_string()]),
        );
        assert_eq!(rs.rows()[0], vec![Cell::Int(2), Cell::Int(1), Cell::Null]);
    }

    #[test]
    fn test_from_json_objects_preserve_order() {
        let rs = ResultSet::from_json(json!([
            {"name": "Alice", "id": 1},
            {"name": "Bob", "id": 2}
        ]))
        .unwrap();
        assert_eq!(rs.columns(), &["name".to_string(), "id".to_string()]);
        assert_eq!(rs.row_count(), 2);
    }

    #[test]
    fn test_from_json_arrays() {
        let rs = ResultSet::from_json(json!([["id", "name"], [1, "Alice"], [2, null]])).unwrap();
        assert_eq!(rs.columns(), &["id".to_string(), "name".to_string()]);
        assert_eq!(rs.rows()[1], vec![Cell::Int(2), Cell::Null]);
    }

    #[test]
    fn test_header_without_rows_is_empty() {
        let rs = ResultSet::new(vec!["id".to_string()], vec![]);
        assert!(rs.is_empty());
        assert_eq!(rs.column_count(), 1);
    }

    #[test]
    fn test_from_json_empty_array() {
        assert!(ResultSet::from_json(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        assert!(ResultSet::from_json(json!({"a": 1})).is_err());
        assert!(ResultSet::from_json(json!([1, 2])).is_err());
        assert!(ResultSet::from_json(json!([["a"], {"a": 1}])).is_err());
    }
}
