//! 8-connected Moore neighbourhood over a bounded grid.

use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Moore neighbourhood of a `rows x cols` grid with absorbing edges.
///
/// Each cell has coordinate `(row, col)`. Neighbours are the four
/// cardinal cells plus the four diagonals; out-of-bounds neighbours are
/// omitted (corners have 3, edges have 5). Distance is Chebyshev
/// (L-inf), consistent with 8-connected semantics where a diagonal step
/// costs 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Moore {
    rows: usize,
    cols: usize,
}

impl Moore {
    /// Neighbourhood for a grid of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Neighbourhood matching the shape of an existing grid.
    pub fn of<T>(grid: &sprawl_core::Grid<T>) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Resolve `val + delta` along an axis of length `len`.
    /// Returns `None` when the step leaves the grid.
    fn resolve_axis(val: usize, delta: isize, len: usize) -> Option<usize> {
        let moved = val.checked_add_signed(delta)?;
        (moved < len).then_some(moved)
    }

    /// In-bounds Moore neighbours of `(row, col)`.
    pub fn neighbours(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let nr = Self::resolve_axis(row, dr, self.rows);
            let nc = Self::resolve_axis(col, dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push((nr, nc));
            }
        }
        result
    }

    /// Flat row-major indices of the in-bounds neighbours of `(row, col)`.
    pub fn neighbours_flat(&self, row: usize, col: usize) -> SmallVec<[usize; 8]> {
        self.neighbours(row, col)
            .into_iter()
            .map(|(r, c)| r * self.cols + c)
            .collect()
    }

    /// Chebyshev (L-inf) distance between two cells.
    pub fn distance(a: (usize, usize), b: (usize, usize)) -> usize {
        a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn neighbours_interior() {
        let m = Moore::new(5, 5);
        assert_eq!(m.neighbours(2, 2).len(), 8);
    }

    #[test]
    fn neighbours_corner() {
        let m = Moore::new(5, 5);
        let n = m.neighbours(0, 0);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
        assert!(n.contains(&(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let m = Moore::new(5, 5);
        assert_eq!(m.neighbours(0, 2).len(), 5);
        assert_eq!(m.neighbours(4, 2).len(), 5);
    }

    #[test]
    fn far_corner_never_wraps() {
        let m = Moore::new(5, 5);
        let n = m.neighbours(4, 4);
        assert_eq!(n.len(), 3);
        assert!(!n.contains(&(0, 0)));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        assert!(Moore::new(1, 1).neighbours(0, 0).is_empty());
    }

    #[test]
    fn flat_indices_are_row_major() {
        let m = Moore::new(3, 3);
        let mut flat = m.neighbours_flat(0, 0).into_vec();
        flat.sort();
        assert_eq!(flat, vec![1, 3, 4]);
    }

    #[test]
    fn distance_chebyshev() {
        assert_eq!(Moore::distance((0, 0), (1, 1)), 1);
        assert_eq!(Moore::distance((0, 0), (3, 4)), 4);
        assert_eq!(Moore::distance((2, 3), (5, 7)), 4);
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            rows in 1usize..10,
            cols in 1usize..10,
            r in 0usize..10,
            c in 0usize..10,
        ) {
            let r = r % rows;
            let c = c % cols;
            let m = Moore::new(rows, cols);
            for (nr, nc) in m.neighbours(r, c) {
                prop_assert!(
                    m.neighbours(nr, nc).contains(&(r, c)),
                    "neighbour symmetry violated: ({nr},{nc}) in N({r},{c}) but not vice versa",
                );
                prop_assert_eq!(Moore::distance((r, c), (nr, nc)), 1);
            }
        }
    }
}
