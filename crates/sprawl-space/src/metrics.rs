//! Neighbour counts and distance from the grid center.

use crate::moore::Moore;
use sprawl_core::{CategorySet, Grid, LandGrid, LandUse};

/// Count, for every cell, the Moore neighbours whose category is `value`.
///
/// The cell itself is not counted. Out-of-grid neighbours contribute 0.
pub fn neighbour_count(grid: &LandGrid, value: LandUse) -> Grid<u8> {
    neighbour_count_any(grid, CategorySet::single(value))
}

/// Count, for every cell, the Moore neighbours whose category is in
/// `values`.
///
/// Equal to the sum of [`neighbour_count`] over each member. Each
/// neighbour cell is tested once against the whole set, so it is never
/// counted twice.
pub fn neighbour_count_any(grid: &LandGrid, values: CategorySet) -> Grid<u8> {
    let moore = Moore::of(grid);
    let present = grid.map(|c| values.contains(*c));
    let cells = present.as_slice();
    grid.map_indexed(|r, c| {
        moore
            .neighbours_flat(r, c)
            .into_iter()
            .filter(|&i| cells[i])
            .count() as u8
    })
}

/// Euclidean distance, in cells, of every cell from [`Grid::center`].
///
/// `sqrt((row - rows/2)^2 + (col - cols/2)^2)` with floor-divided center
/// coordinates.
pub fn distance_from_center<T>(grid: &Grid<T>) -> Grid<f64> {
    let (cr, cc) = grid.center();
    grid.map_indexed(|r, c| {
        let dr = r as f64 - cr as f64;
        let dc = c as f64 - cc as f64;
        (dr * dr + dc * dc).sqrt()
    })
}
