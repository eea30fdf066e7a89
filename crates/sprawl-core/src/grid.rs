//! The rectangular [`Grid`] container and the [`LandGrid`] alias.
//!
//! Grids are stored row-major: cell `(row, col)` lives at flat index
//! `row * cols + col`. Dimensions are fixed at construction; every
//! derived field (neighbour counts, masks, distances) is a `Grid` of the
//! same shape as the land-use grid it was computed from.

use crate::category::LandUse;
use crate::error::GridError;
use std::ops::{Index, IndexMut};

/// A fixed-size, row-major 2-D array.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// A grid of land-use categories: the state of the automaton.
pub type LandGrid = Grid<LandUse>;

impl<T: Clone> Grid<T> {
    /// Create a `rows x cols` grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        })
    }

    /// Build a grid from row vectors, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer of exactly `rows * cols` cells.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The geometric center cell, `(rows / 2, cols / 2)`.
    ///
    /// Integer floor division: for even dimensions the center sits on the
    /// lower-right of the two middle cells, so distances measured from it
    /// are slightly larger toward the top-left corner.
    pub fn center(&self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Flat row-major index of `(row, col)`.
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Borrow the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.contains(row, col) {
            self.cells.get(self.flat_index(row, col))
        } else {
            None
        }
    }

    /// Mutably borrow the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if self.contains(row, col) {
            let idx = self.flat_index(row, col);
            self.cells.get_mut(idx)
        } else {
            None
        }
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable row-major view of all cells.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate over `((row, col), &cell)` in row-major order.
    pub fn indexed(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / cols, i % cols), cell))
    }

    /// Build a grid of the same shape by mapping every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Build a grid of the same shape from `(row, col)` alone.
    pub fn map_indexed<U>(&self, mut f: impl FnMut(usize, usize) -> U) -> Grid<U> {
        let cols = self.cols;
        Grid {
            rows: self.rows,
            cols,
            cells: (0..self.cells.len()).map(|i| f(i / cols, i % cols)).collect(),
        }
    }

    /// Combine two grids of the same shape cell by cell.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ. Derived fields are always computed
    /// from the grid they are combined with, so a mismatch is a bug.
    pub fn zip_map<U, V>(&self, other: &Grid<U>, mut f: impl FnMut(&T, &U) -> V) -> Grid<V> {
        assert_eq!(
            self.shape(),
            other.shape(),
            "zip_map requires grids of identical shape"
        );
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(other.cells.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }

    /// Count the cells matching a predicate.
    pub fn count_where(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// Consume the grid and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        let cols = self.cols;
        &mut self.cells[row * cols + col]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl LandGrid {
    /// Decode a row-major buffer of raw category codes.
    ///
    /// Every code is validated before the grid is built; the first
    /// invalid code fails with [`GridError::InvalidCategory`] naming its
    /// cell.
    pub fn from_codes(rows: usize, cols: usize, codes: &[u8]) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if codes.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                expected: rows * cols,
                got: codes.len(),
            });
        }
        let cells = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                LandUse::from_code(code).ok_or(GridError::InvalidCategory {
                    row: i / cols,
                    col: i % cols,
                    code,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_vec(rows, cols, cells)
    }

    /// Decode row vectors of raw category codes.
    pub fn from_code_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut codes = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            codes.extend(row);
        }
        Self::from_codes(n_rows, n_cols, &codes)
    }

    /// Encode the grid as row-major raw category codes.
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.code()).collect()
    }

    /// Boolean mask of cells holding `category`.
    pub fn mask_of(&self, category: LandUse) -> Grid<bool> {
        self.map(|c| *c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimension() {
        assert_eq!(Grid::new(0, 3, 0u8), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(3, 0, 0u8), Err(GridError::EmptyGrid));
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert_eq!(
            Grid::from_vec(2, 3, vec![0u8; 5]),
            Err(GridError::ShapeMismatch {
                expected: 6,
                got: 5
            })
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn row_major_indexing() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g[(1, 0)], 4);
        assert_eq!(g.get(0, 2), Some(&3));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.flat_index(1, 2), 5);
    }

    #[test]
    fn center_uses_floor_division() {
        assert_eq!(Grid::new(5, 5, 0u8).unwrap().center(), (2, 2));
        assert_eq!(Grid::new(4, 6, 0u8).unwrap().center(), (2, 3));
        assert_eq!(Grid::new(1, 1, 0u8).unwrap().center(), (0, 0));
    }

    #[test]
    fn indexed_yields_coordinates() {
        let g = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        let coords: Vec<_> = g.indexed().map(|(rc, v)| (rc, *v)).collect();
        assert_eq!(
            coords,
            vec![((0, 0), 'a'), ((0, 1), 'b'), ((1, 0), 'c'), ((1, 1), 'd')]
        );
    }

    #[test]
    fn zip_map_combines_cellwise() {
        let a = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let c = a.zip_map(&b, |x, keep| if *keep { *x } else { 0 });
        assert_eq!(c.as_slice(), &[1, 0, 0, 4]);
    }

    #[test]
    fn from_codes_validates_every_cell() {
        let err = LandGrid::from_codes(2, 2, &[0, 1, 9, 7]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCategory {
                row: 1,
                col: 0,
                code: 9
            }
        );
    }

    #[test]
    fn codes_round_trip_through_land_grid() {
        let codes = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let g = LandGrid::from_codes(2, 4, &codes).unwrap();
        assert_eq!(g[(1, 3)], LandUse::Road);
        assert_eq!(g.to_codes(), codes.to_vec());
    }

    #[test]
    fn from_code_rows_checks_shape_before_codes() {
        let err = LandGrid::from_code_rows(vec![vec![0, 0], vec![9]]).unwrap_err();
        assert!(matches!(err, GridError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn mask_of_marks_matching_cells() {
        let g = LandGrid::from_codes(1, 3, &[7, 0, 7]).unwrap();
        assert_eq!(g.mask_of(LandUse::Road).as_slice(), &[true, false, true]);
    }
}
