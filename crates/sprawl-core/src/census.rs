//! Per-category cell counts.

use crate::category::LandUse;
use crate::grid::LandGrid;

/// Cell counts for each land-use category of a grid.
///
/// Used by drivers to report the composition of the city after each
/// iteration (count and share of each category).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Census {
    counts: [usize; LandUse::COUNT],
    total: usize,
}

impl Census {
    /// Tally the categories of `grid`.
    pub fn of(grid: &LandGrid) -> Self {
        let mut counts = [0usize; LandUse::COUNT];
        for cell in grid {
            counts[cell.code() as usize] += 1;
        }
        Self {
            counts,
            total: grid.len(),
        }
    }

    /// Number of cells holding `category`.
    pub fn count(&self, category: LandUse) -> usize {
        self.counts[category.code() as usize]
    }

    /// Share of cells holding `category`, in `[0.0, 1.0]`.
    pub fn fraction(&self, category: LandUse) -> f64 {
        self.count(category) as f64 / self.total as f64
    }

    /// Total number of cells.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(category, count)` for every category present, in code order.
    pub fn present(&self) -> impl Iterator<Item = (LandUse, usize)> + '_ {
        LandUse::ALL
            .into_iter()
            .map(|c| (c, self.count(c)))
            .filter(|&(_, n)| n > 0)
    }
}
