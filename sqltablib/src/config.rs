//! Render configuration.
//!
//! `RenderConfig` holds the settings every render reads: row limits, the
//! column width limit, border style and the line-break sequence. It lives on
//! the `Renderer` and persists across renders until a setter changes it.
//!
//! Numeric setters take `Option<i64>` so callers can pass "unset" or raw user
//! input: `None` and negative values both mean unlimited.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SqltabError;
use crate::Result;

/// Default rows requested per fetch
pub const DEFAULT_FETCH_SIZE: usize = 50;
/// Default cap on rows in a result
pub const DEFAULT_MAX_ROWS: usize = 99;
/// Default maximum characters per cell
pub const DEFAULT_COLUMN_WIDTH_LIMIT: usize = 30;

/// Line-break sequence of the current platform.
pub fn platform_line_break() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

/// Settings consulted on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Rows fetched per batch; also the display limit fallback (0 = unlimited)
    pub fetch_size: usize,
    /// Hard cap on rows in a result (0 = unlimited)
    pub max_rows: usize,
    /// Print an advisory when rows were cut
    pub show_too_many_rows_message: bool,
    /// Maximum characters per header/cell (`None` = unlimited)
    pub column_width_limit: Option<usize>,
    /// Use box-drawing characters instead of ASCII
    pub use_unicode_borders: bool,
    /// Frame the table with leading/trailing border glyphs
    pub add_outside_borders: bool,
    /// Sequence that line breaks inside values are normalized to
    pub line_break: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fetch_size: DEFAULT_FETCH_SIZE,
            max_rows: DEFAULT_MAX_ROWS,
            show_too_many_rows_message: true,
            column_width_limit: Some(DEFAULT_COLUMN_WIDTH_LIMIT),
            use_unicode_borders: false,
            add_outside_borders: true,
            line_break: platform_line_break().to_string(),
        }
    }
}

/// Map unset or negative input to 0 (unlimited).
fn non_negative(value: Option<i64>) -> usize {
    value
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(0)
}

impl RenderConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SqltabError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Set the fetch size. `None` or negative means unlimited.
    pub fn set_fetch_size(&mut self, value: Option<i64>) -> &mut Self {
        self.fetch_size = non_negative(value);
        self
    }

    /// Set the maximum row count. `None` or negative means unlimited.
    pub fn set_max_rows(&mut self, value: Option<i64>) -> &mut Self {
        self.max_rows = non_negative(value);
        self
    }

    /// Set the column width limit. `None`, zero or negative disables truncation.
    pub fn set_column_width_limit(&mut self, value: Option<i64>) -> &mut Self {
        self.column_width_limit = match non_negative(value) {
            0 => None,
            n => Some(n),
        };
        self
    }

    pub fn set_show_too_many_rows_message(&mut self, show: bool) -> &mut Self {
        self.show_too_many_rows_message = show;
        self
    }

    pub fn set_use_unicode_borders(&mut self, unicode: bool) -> &mut Self {
        self.use_unicode_borders = unicode;
        self
    }

    pub fn set_add_outside_borders(&mut self, borders: bool) -> &mut Self {
        self.add_outside_borders = borders;
        self
    }

    /// Set the line-break sequence. An empty string resets to the platform default.
    pub fn set_line_break(&mut self, line_break: impl Into<String>) -> &mut Self {
        let line_break = line_break.into();
        self.line_break = if line_break.is_empty() {
            platform_line_break().to_string()
        } else {
            line_break
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.fetch_size, 50);
        assert_eq!(config.max_rows, 99);
        assert!(config.show_too_many_rows_message);
        assert_eq!(config.column_width_limit, Some(30));
        assert!(!config.use_unicode_borders);
        assert!(config.add_outside_borders);
    }

    #[test]
    fn test_negative_limits_mean_unlimited() {
        let mut config = RenderConfig::new();
        config
            .set_fetch_size(Some(-1))
            .set_max_rows(Some(-20))
            .set_column_width_limit(Some(-5));
        assert_eq!(config.fetch_size, 0);
        assert_eq!(config.max_rows, 0);
        assert_eq!(config.column_width_limit, None);
    }

    #[test]
    fn test_unset_limits_mean_unlimited() {
        let mut config = RenderConfig::new();
        config
            .set_fetch_size(None)
            .set_max_rows(None)
            .set_column_width_limit(None);
        assert_eq!(config.fetch_size, 0);
        assert_eq!(config.max_rows, 0);
        assert_eq!(config.column_width_limit, None);
    }

    #[test]
    fn test_setters_store_values() {
        let mut config = RenderConfig::new();
        config
            .set_fetch_size(Some(10))
            .set_max_rows(Some(20))
            .set_column_width_limit(Some(12))
            .set_use_unicode_borders(true)
            .set_show_too_many_rows_message(false);
        assert_eq!(config.fetch_size, 10);
        assert_eq!(config.max_rows, 20);
        assert_eq!(config.column_width_limit, Some(12));
        assert!(config.use_unicode_borders);
        assert!(!config.show_too_many_rows_message);
    }

    #[test]
    fn test_empty_line_break_resets() {
        let mut config = RenderConfig::new();
        config.set_line_break("\r\n");
        assert_eq!(config.line_break, "\r\n");
        config.set_line_break("");
        assert_eq!(config.line_break, platform_line_break());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"max_rows": 10, "use_unicode_borders": true}"#).unwrap();
        assert_eq!(config.max_rows, 10);
        assert!(config.use_unicode_borders);
        assert_eq!(config.fetch_size, DEFAULT_FETCH_SIZE);
    }

    #[test]
    fn test_from_missing_file() {
        let err = RenderConfig::from_file("/nonexistent/sqltab.json").unwrap_err();
        assert!(matches!(err, SqltabError::ConfigRead { .. }));
    }
}
