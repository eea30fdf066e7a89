//! Industrial periphery: industry settles along outlying roads.
//!
//! Takes no caller parameters. The distance and road radius are fixed in
//! the catalog; builder overrides exist for experiments.

use sprawl_core::LandUse;
use sprawl_rule::{Rule, StepContext};
use sprawl_space::{distance_from_center, proximity_mask};

/// Default minimum distance from the grid center.
pub const MIN_DISTANCE: f64 = 70.0;

/// Default Chebyshev radius for road proximity.
pub const ROAD_RADIUS: u32 = 2;

/// Empty cells strictly further than [`MIN_DISTANCE`] from the center and
/// within [`ROAD_RADIUS`] of a Road become Industrial.
#[derive(Clone, Debug, PartialEq)]
pub struct IndustrialPeriphery {
    min_distance: f64,
    road_radius: u32,
}

impl IndustrialPeriphery {
    /// The catalog configuration.
    pub fn new() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            road_radius: ROAD_RADIUS,
        }
    }

    /// Override the distance threshold.
    pub fn with_min_distance(mut self, distance: f64) -> Self {
        self.min_distance = distance;
        self
    }

    /// Override the road proximity radius.
    pub fn with_road_radius(mut self, radius: u32) -> Self {
        self.road_radius = radius;
        self
    }
}

impl Default for IndustrialPeriphery {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IndustrialPeriphery {
    fn name(&self) -> &str {
        "Industrial Periphery"
    }

    fn destination(&self) -> LandUse {
        LandUse::Industrial
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let dist = distance_from_center(ctx.snapshot());
        let near_road = proximity_mask(ctx.snapshot(), LandUse::Road, self.road_radius);
        let (dist, near) = (dist.as_slice(), near_road.as_slice());
        ctx.transition(
            |c| c == LandUse::Empty,
            |i| dist[i] > self.min_distance && near[i],
            LandUse::Industrial,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_test_utils::grid;

    fn corner_road() -> sprawl_core::LandGrid {
        grid(
            "
            . . . . .
            . . . . .
            . . . . .
            . . . . .
            r . . . .
            ",
        )
    }

    #[test]
    fn outlying_roadside_cells_industrialise() {
        let next = IndustrialPeriphery::new()
            .with_min_distance(1.5)
            .apply(&corner_road());
        let expected = grid(
            "
            . . . . .
            . . . . .
            i . . . .
            i . . . .
            r i i . .
            ",
        );
        assert_eq!(next, expected);
    }

    #[test]
    fn narrower_radius_shrinks_the_belt() {
        let next = IndustrialPeriphery::new()
            .with_min_distance(1.5)
            .with_road_radius(1)
            .apply(&corner_road());
        assert_eq!(next[(3, 0)], LandUse::Industrial);
        assert_eq!(next[(4, 1)], LandUse::Industrial);
        assert_eq!(next[(2, 0)], LandUse::Empty);
        assert_eq!(next[(4, 2)], LandUse::Empty);
    }

    #[test]
    fn default_distance_leaves_small_grids_alone() {
        let g = corner_road();
        assert_eq!(IndustrialPeriphery::default().apply(&g), g);
    }
}
