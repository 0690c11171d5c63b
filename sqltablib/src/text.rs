//! Cell text handling: line-break normalization and width truncation.
//!
//! Truncation limits count characters. Layout measures terminal columns, so
//! wide characters (CJK, emoji) take two cells and combining marks none.

use unicode_width::UnicodeWidthStr;

/// Marker appended to truncated values
pub const ELLIPSIS: &str = "...";

/// Width of a string in characters.
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with trailing spaces to `width` terminal columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(display_width(s))));
    out
}

/// Replace every `\r\n`, `\n` and `\r` in `s` with `line_break`.
pub fn normalize_line_breaks(s: &str, line_break: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(line_break);
            }
            '\n' => out.push_str(line_break),
            other => out.push(other),
        }
    }

    out
}

/// Collapse line breaks to single spaces, for cells shown inside a grid.
pub fn flatten_line_breaks(s: &str) -> String {
    normalize_line_breaks(s, " ")
}

/// Count line breaks in `s`, treating `\r\n` as one.
pub fn count_line_breaks(s: &str) -> usize {
    normalize_line_breaks(s, "\n").matches('\n').count()
}

/// Truncate `s` to `limit` characters, ending with `...`.
///
/// A limit of `None` or zero disables truncation. With limits of three or
/// less the result is the first `limit` characters of the marker.
pub fn truncate(s: &str, limit: Option<usize>) -> String {
    let limit = match limit {
        Some(limit) if limit > 0 => limit,
        _ => return s.to_string(),
    };

    if char_width(s) <= limit {
        return s.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(&ELLIPSIS[..limit.min(ELLIPSIS.len())]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_all_break_styles() {
        assert_eq!(normalize_line_breaks("a\r\nb\nc\rd", "\n"), "a\nb\nc\nd");
        assert_eq!(normalize_line_breaks("a\nb", "\r\n"), "a\r\nb");
        assert_eq!(normalize_line_breaks("a\r\n\r\nb", "|"), "a||b");
    }

    #[test]
    fn test_normalize_trailing_cr() {
        assert_eq!(normalize_line_breaks("a\r", "\n"), "a\n");
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten_line_breaks("line1\r\nline2\nline3"), "line1 line2 line3");
        assert_eq!(flatten_line_breaks("plain"), "plain");
    }

    #[test]
    fn test_count_line_breaks() {
        assert_eq!(count_line_breaks("select 1"), 0);
        assert_eq!(count_line_breaks("a\r\nb"), 1);
        assert_eq!(count_line_breaks("a\nb\rc"), 2);
    }

    #[test]
    fn test_truncate_length_invariant() {
        let long = "abcdefghijklmnopqrstuvwxyz";
        for limit in 4..long.len() {
            let cut = truncate(long, Some(limit));
            assert_eq!(char_width(&cut), limit);
            assert!(cut.ends_with("..."));
        }
    }

    #[test]
    fn test_truncate_keeps_short_values() {
        assert_eq!(truncate("short", Some(10)), "short");
        assert_eq!(truncate("exactly10!", Some(10)), "exactly10!");
    }

    #[test]
    fn test_truncate_disabled() {
        let long = "x".repeat(100);
        assert_eq!(truncate(&long, None), long);
        assert_eq!(truncate(&long, Some(0)), long);
    }

    #[test]
    fn test_truncate_tiny_limits() {
        assert_eq!(truncate("abcdef", Some(3)), "...");
        assert_eq!(truncate("abcdef", Some(2)), "..");
        assert_eq!(truncate("abcdef", Some(1)), ".");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("ñandú añejo", Some(8)), "ñandú...");
        assert_eq!(char_width("ñandú"), 5);
    }

    #[test]
    fn test_display_width_counts_columns() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("ñandú"), 5);
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(char_width("日本語"), 3);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("日本", 6), "日本  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }
}
