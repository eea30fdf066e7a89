//! Proximity masks via a breadth-first Chebyshev distance transform.
//!
//! A proximity mask of radius `r` is the set of cells reachable from any
//! target cell in at most `r` Moore steps, i.e. `r` successive one-ring
//! dilations of the target mask. Instead of dilating `r` times, the
//! transform runs a single multi-source BFS from every target cell and
//! thresholds the resulting hop distance. On an unobstructed 8-connected
//! grid, hop distance equals Chebyshev distance.

use crate::moore::Moore;
use sprawl_core::{Grid, LandGrid, LandUse};
use std::collections::VecDeque;

/// Chebyshev distance from every cell to the nearest `target` cell.
///
/// Cells holding `target` have distance 0. If the grid holds no `target`
/// cell at all, every entry is `None`.
pub fn chebyshev_distance_to(grid: &LandGrid, target: LandUse) -> Grid<Option<u32>> {
    let moore = Moore::of(grid);
    let cols = grid.cols();
    let mut dist: Vec<Option<u32>> = vec![None; grid.len()];
    let mut queue = VecDeque::new();

    for (i, cell) in grid.iter().enumerate() {
        if *cell == target {
            dist[i] = Some(0);
            queue.push_back(i);
        }
    }

    while let Some(i) = queue.pop_front() {
        let d = dist[i].unwrap_or(0);
        for nb in moore.neighbours_flat(i / cols, i % cols) {
            if dist[nb].is_none() {
                dist[nb] = Some(d + 1);
                queue.push_back(nb);
            }
        }
    }

    grid.map_indexed(|r, c| dist[r * cols + c])
}

/// Cells within Chebyshev distance `radius` of any `target` cell.
///
/// `radius == 0` yields exactly `grid == target`. The grid border dilates
/// against an implicit all-false boundary.
pub fn proximity_mask(grid: &LandGrid, target: LandUse, radius: u32) -> Grid<bool> {
    chebyshev_distance_to(grid, target).map(|d| d.is_some_and(|d| d <= radius))
}

/// One-ring morphological dilation of a boolean mask.
///
/// A cell is set in the output if it or any of its Moore neighbours is
/// set in the input.
pub fn dilate(mask: &Grid<bool>) -> Grid<bool> {
    let moore = Moore::of(mask);
    let cells = mask.as_slice();
    mask.map_indexed(|r, c| {
        mask[(r, c)]
            || moore
                .neighbours_flat(r, c)
                .into_iter()
                .any(|i| cells[i])
    })
}
