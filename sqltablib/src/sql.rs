//! SQL pretty-printing dispatch.
//!
//! Statements are classified as DML or DDL by their leading keyword and handed
//! to the matching `SqlFormatter`. Statements that already span more than two
//! lines are treated as formatted and returned unchanged.
//!
//! The bundled formatters delegate to `sqlformat`. Other backends plug in
//! through the `SqlFormatter` trait; their errors reach the caller unchanged.

use serde::Serialize;
use sqlformat::{FormatOptions, Indent, QueryParams};
use tracing::debug;

use crate::text::count_line_breaks;
use crate::Result;

/// Leading keywords that make a statement DML
const DML_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "MERGE", "WITH", "VALUES",
];

/// Kind of SQL statement, deciding which formatter handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    /// Data manipulation: queries and row changes
    Dml,
    /// Everything else: schema definitions, grants, procedural blocks
    Ddl,
}

/// Classify a statement by its first keyword, skipping comments and parentheses.
pub fn classify(sql: &str) -> StatementKind {
    let keyword = first_keyword(sql).to_ascii_uppercase();
    if DML_KEYWORDS.contains(&keyword.as_str()) {
        StatementKind::Dml
    } else {
        StatementKind::Ddl
    }
}

fn first_keyword(sql: &str) -> &str {
    let mut rest = sql;
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '(');
        if let Some(after) = rest.strip_prefix("--") {
            rest = after.split_once('\n').map(|(_, r)| r).unwrap_or("");
        } else if let Some(after) = rest.strip_prefix("/*") {
            rest = after.split_once("*/").map(|(_, r)| r).unwrap_or("");
        } else {
            break;
        }
    }
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Formats one kind of SQL statement.
pub trait SqlFormatter {
    fn format(&self, sql: &str) -> Result<String>;
}

/// Queries and row changes: each clause on its own line, clause bodies
/// indented.
#[derive(Debug, Clone, Copy)]
pub struct DmlFormatter {
    /// Spaces per indentation level
    pub indent: u8,
    /// Upper-case reserved words
    pub uppercase: bool,
}

impl Default for DmlFormatter {
    fn default() -> Self {
        Self {
            indent: 2,
            uppercase: false,
        }
    }
}

/// Schema scripts: same layout as DML, with a blank line between statements.
#[derive(Debug, Clone, Copy)]
pub struct DdlFormatter {
    /// Spaces per indentation level
    pub indent: u8,
    /// Upper-case reserved words
    pub uppercase: bool,
}

impl Default for DdlFormatter {
    fn default() -> Self {
        Self {
            indent: 2,
            uppercase: false,
        }
    }
}

fn reflow(sql: &str, indent: u8, uppercase: bool, lines_between_queries: u8) -> String {
    let options = FormatOptions {
        indent: Indent::Spaces(indent),
        uppercase,
        lines_between_queries,
        ..FormatOptions::default()
    };
    sqlformat::format(sql, &QueryParams::None, options)
}

impl SqlFormatter for DmlFormatter {
    fn format(&self, sql: &str) -> Result<String> {
        Ok(reflow(sql, self.indent, self.uppercase, 1))
    }
}

impl SqlFormatter for DdlFormatter {
    fn format(&self, sql: &str) -> Result<String> {
        Ok(reflow(sql, self.indent, self.uppercase, 2))
    }
}

/// Picks the DML or DDL formatter for each statement.
#[derive(Debug, Clone, Default)]
pub struct SqlPrettyPrinter<D = DmlFormatter, F = DdlFormatter> {
    dml: D,
    ddl: F,
}

impl SqlPrettyPrinter {
    /// Printer with the bundled DML and DDL formatters
    pub fn standard() -> Self {
        Self::default()
    }
}

impl<D: SqlFormatter, F: SqlFormatter> SqlPrettyPrinter<D, F> {
    pub fn new(dml: D, ddl: F) -> Self {
        Self { dml, ddl }
    }

    /// Format `sql`, unless it already contains more than one line break.
    pub fn pretty_print(&self, sql: &str) -> Result<String> {
        if count_line_breaks(sql) > 1 {
            debug!("statement already formatted, leaving as-is");
            return Ok(sql.to_string());
        }

        let kind = classify(sql);
        debug!(?kind, "formatting statement");
        match kind {
            StatementKind::Dml => self.dml.format(sql),
            StatementKind::Ddl => self.ddl.format(sql),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqltabError;

    #[test]
    fn test_classify() {
        assert_eq!(classify("select * from dual"), StatementKind::Dml);
        assert_eq!(classify("  INSERT INTO t VALUES (1)"), StatementKind::Dml);
        assert_eq!(classify("with x as (select 1) select * from x"), StatementKind::Dml);
        assert_eq!(classify("(select 1)"), StatementKind::Dml);
        assert_eq!(classify("-- note\nupdate t set a = 1"), StatementKind::Dml);
        assert_eq!(classify("/* hint */ delete from t"), StatementKind::Dml);
        assert_eq!(classify("create table t (a int)"), StatementKind::Ddl);
        assert_eq!(classify("ALTER TABLE t ADD b int"), StatementKind::Ddl);
        assert_eq!(classify(""), StatementKind::Ddl);
    }

    #[test]
    fn test_statement_kind_serializes_lowercase() {
        let value = serde_json::to_value(StatementKind::Ddl).unwrap();
        assert_eq!(value, "ddl");
    }

    #[test]
    fn test_dml_select() {
        let out = DmlFormatter::default()
            .format("select id, name from users where id = 1")
            .unwrap();
        assert_eq!(out, "select\n  id,\n  name\nfrom\n  users\nwhere\n  id = 1");
    }

    #[test]
    fn test_dml_uppercase() {
        let formatter = DmlFormatter {
            uppercase: true,
            ..DmlFormatter::default()
        };
        let out = formatter.format("select a from t").unwrap();
        assert!(out.starts_with("SELECT"));
        assert!(out.contains("FROM"));
    }

    #[test]
    fn test_dml_keeps_quoted_literals() {
        let out = DmlFormatter::default()
            .format("delete from t where a = 'it''s, ok'")
            .unwrap();
        assert!(out.contains("'it''s, ok'"));
        assert!(out.lines().count() > 1);
    }

    #[test]
    fn test_block_comment_with_quote() {
        let out = SqlPrettyPrinter::standard()
            .pretty_print("select /* it's fine */ a from t")
            .unwrap();
        assert!(out.contains("/* it's fine */"));
        assert!(out.contains("from"));
    }

    #[test]
    fn test_ddl_separates_statements() {
        let out = DdlFormatter::default()
            .format("create table a (x int); create table b (y int);")
            .unwrap();
        assert!(out.contains(";\n\n"));
        assert!(out.contains("create table a"));
        assert!(out.contains("create table b"));
    }

    #[test]
    fn test_pretty_print_skips_formatted() {
        let printer = SqlPrettyPrinter::standard();
        let sql = "select a\nfrom t\nwhere b = 1";
        assert_eq!(printer.pretty_print(sql).unwrap(), sql);
    }

    struct Tagged(&'static str);

    impl SqlFormatter for Tagged {
        fn format(&self, _sql: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_pretty_print_custom_formatters() {
        let printer = SqlPrettyPrinter::new(Tagged("dml"), Tagged("ddl"));
        assert_eq!(printer.pretty_print("select 1").unwrap(), "dml");
        assert_eq!(printer.pretty_print("drop table t").unwrap(), "ddl");
        // A single line break does not count as formatted
        assert_eq!(printer.pretty_print("select 1\nfrom dual").unwrap(), "dml");
    }

    struct Failing;

    impl SqlFormatter for Failing {
        fn format(&self, _sql: &str) -> Result<String> {
            Err(SqltabError::Format("unsupported dialect".to_string()))
        }
    }

    #[test]
    fn test_formatter_errors_pass_through() {
        let printer = SqlPrettyPrinter::new(DmlFormatter::default(), Failing);
        assert!(printer.pretty_print("select 1").is_ok());
        match printer.pretty_print("create view v as select 1") {
            Err(SqltabError::Format(msg)) => assert_eq!(msg, "unsupported dialect"),
            other => panic!("expected a format error, got {other:?}"),
        }
    }
}
