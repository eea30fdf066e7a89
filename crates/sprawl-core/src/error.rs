//! Error types for grid construction and ingestion.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or from decoding raw category
/// codes supplied by an external grid producer.
///
/// All variants are configuration errors: they are raised before any
/// metric or rule runs, never mid-computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A flat buffer does not hold `rows * cols` cells.
    ShapeMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Number of cells supplied.
        got: usize,
    },
    /// A row-wise input has a row of a different width than the first.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },
    /// A raw code is outside the eight valid land-use categories.
    InvalidCategory {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The invalid code.
        code: u8,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "grid buffer holds {got} cells, expected {expected}")
            }
            Self::RaggedRow { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::InvalidCategory { row, col, code } => {
                write!(
                    f,
                    "cell ({row}, {col}) holds invalid land-use code {code} (valid: 0..=7)"
                )
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_category_names_the_cell() {
        let err = GridError::InvalidCategory {
            row: 3,
            col: 4,
            code: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("(3, 4)"));
        assert!(msg.contains('9'));
    }
}
