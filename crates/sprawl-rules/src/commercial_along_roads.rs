//! Commercial development along roads.

use sprawl_core::{CategorySet, LandUse};
use sprawl_rule::{ParamError, ParamKind, ParamSpec, ParamValue, Rule, RuleParams, StepContext};
use sprawl_space::{neighbour_count_any, proximity_mask};

/// Minimum residential neighbours, `commercial_threshold` (default 2).
pub const THRESHOLD: ParamSpec = ParamSpec {
    key: "commercial_threshold",
    kind: ParamKind::Count,
    default: ParamValue::Int(2),
    range: 1.0..=8.0,
    description: "Min. residential neighbours for roadside commercial",
};

/// Chebyshev radius within which a road counts as adjacent.
pub const ROAD_RADIUS: u32 = 1;

/// Empty cells touching a Road (within [`ROAD_RADIUS`]) that have at
/// least `threshold` residential neighbours become Commercial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommercialAlongRoads {
    threshold: u8,
    road_radius: u32,
}

impl CommercialAlongRoads {
    /// Create the rule with an explicit neighbour threshold.
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            road_radius: ROAD_RADIUS,
        }
    }

    /// Build from caller parameters; requires [`THRESHOLD`].
    pub fn from_params(params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(THRESHOLD.count(params)?))
    }

    /// Override the road proximity radius.
    pub fn with_road_radius(mut self, radius: u32) -> Self {
        self.road_radius = radius;
        self
    }

    /// The neighbour threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Default for CommercialAlongRoads {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Rule for CommercialAlongRoads {
    fn name(&self) -> &str {
        "Commercial-Along-Roads"
    }

    fn destination(&self) -> LandUse {
        LandUse::Commercial
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let near_road = proximity_mask(ctx.snapshot(), LandUse::Road, self.road_radius);
        let residential = neighbour_count_any(ctx.snapshot(), CategorySet::RESIDENTIAL);
        let (near, counts) = (near_road.as_slice(), residential.as_slice());
        ctx.transition(
            |c| c == LandUse::Empty,
            |i| near[i] && counts[i] >= self.threshold,
            LandUse::Commercial,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_test_utils::grid;

    #[test]
    fn lone_road_without_housing_changes_nothing() {
        let g = grid(
            "
            . . . . .
            . . . . .
            . . r . .
            . . . . .
            . . . . .
            ",
        );
        assert_eq!(CommercialAlongRoads::new(2).apply(&g), g);
    }

    #[test]
    fn roadside_cell_with_housing_converts() {
        let g = grid(
            "
            l l . .
            . . r .
            . . . .
            ",
        );
        let next = CommercialAlongRoads::new(2).apply(&g);
        // (1,1) is next to the road and touches (0,0), (0,1).
        assert_eq!(next[(1, 1)], LandUse::Commercial);
        // (1,0) has two residential neighbours but is 2 from the road.
        assert_eq!(next[(1, 0)], LandUse::Empty);
        // (0,2) is next to the road but touches only (0,1).
        assert_eq!(next[(0, 2)], LandUse::Empty);
    }

    #[test]
    fn wider_radius_reaches_further() {
        let g = grid(
            "
            l l . .
            . . r .
            ",
        );
        let next = CommercialAlongRoads::new(2).with_road_radius(2).apply(&g);
        assert_eq!(next[(1, 0)], LandUse::Commercial);
    }
}
