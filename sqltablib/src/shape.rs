//! Result shape detection and table rotation.
//!
//! Single-row results get special treatment: a single cell is shown in full
//! (possibly over several lines), and a single wide row without outside
//! borders is rotated into a vertical name/value listing.

use tracing::debug;

/// How a result is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Regular header + divider + rows
    Grid,
    /// One data row with several columns, shown as name/value pairs
    Rotated,
    /// Exactly one row and one column
    Scalar,
}

impl Shape {
    /// Whether cells of this shape are subject to the column width limit.
    ///
    /// Rotated and scalar results always show their full content.
    pub fn truncates(self) -> bool {
        matches!(self, Shape::Grid)
    }
}

/// Classify a (row-limited) result by its dimensions.
///
/// Rotation is only used when outside borders are off.
pub fn classify(row_count: usize, column_count: usize, outside_borders: bool) -> Shape {
    let shape = match (row_count, column_count) {
        (1, 1) => Shape::Scalar,
        (1, n) if n > 1 && !outside_borders => Shape::Rotated,
        _ => Shape::Grid,
    };
    debug!(row_count, column_count, outside_borders, ?shape, "classified result");
    shape
}

/// Transpose a rectangular matrix: `result[i][j] == rows[j][i]`.
///
/// The width of the first row decides the number of output rows.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = rows.first().map(Vec::len).unwrap_or(0);
    (0..width)
        .map(|i| rows.iter().map(|row| row[i].clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scalar() {
        assert_eq!(classify(1, 1, true), Shape::Scalar);
        assert_eq!(classify(1, 1, false), Shape::Scalar);
    }

    #[test]
    fn test_classify_rotated_only_without_borders() {
        assert_eq!(classify(1, 4, false), Shape::Rotated);
        assert_eq!(classify(1, 4, true), Shape::Grid);
    }

    #[test]
    fn test_classify_grid() {
        assert_eq!(classify(2, 1, false), Shape::Grid);
        assert_eq!(classify(3, 5, true), Shape::Grid);
        assert_eq!(classify(0, 3, false), Shape::Grid);
    }

    #[test]
    fn test_truncates() {
        assert!(Shape::Grid.truncates());
        assert!(!Shape::Rotated.truncates());
        assert!(!Shape::Scalar.truncates());
    }

    #[test]
    fn test_transpose_wide_row() {
        let table = vec![vec!["a", "b", "c"], vec!["x", "y", "z"]];
        let rotated = transpose(&table);
        assert_eq!(
            rotated,
            vec![vec!["a", "x"], vec!["b", "y"], vec!["c", "z"]]
        );
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let table = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]];
        assert_eq!(transpose(&transpose(&table)), table);
    }

    #[test]
    fn test_transpose_empty() {
        let table: Vec<Vec<i32>> = vec![];
        assert!(transpose(&table).is_empty());
    }
}
