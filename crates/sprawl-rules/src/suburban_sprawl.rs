//! Suburban sprawl: low-density housing creeps outward far from the core.

use sprawl_core::LandUse;
use sprawl_rule::{ParamError, ParamKind, ParamSpec, ParamValue, Rule, RuleParams, StepContext};
use sprawl_space::{distance_from_center, neighbour_count};

/// Minimum distance from the grid center, `suburban_distance` (default 80).
///
/// Accepts integer or real values.
pub const DISTANCE: ParamSpec = ParamSpec {
    key: "suburban_distance",
    kind: ParamKind::Distance,
    default: ParamValue::Int(80),
    range: 0.0..=10_000.0,
    description: "Min. distance from center for suburban sprawl",
};

/// Residential-Low neighbours a suburban cell needs.
pub const MIN_NEIGHBOURS: u8 = 2;

/// Empty cells strictly further than `distance` from the center with at
/// least [`MIN_NEIGHBOURS`] Residential-Low neighbours become
/// Residential-Low.
#[derive(Clone, Debug, PartialEq)]
pub struct SuburbanSprawl {
    distance: f64,
    min_neighbours: u8,
}

impl SuburbanSprawl {
    /// Create the rule with an explicit distance threshold.
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            min_neighbours: MIN_NEIGHBOURS,
        }
    }

    /// Build from caller parameters; requires [`DISTANCE`].
    pub fn from_params(params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(DISTANCE.distance(params)?))
    }

    /// Override the Residential-Low neighbour requirement.
    pub fn with_min_neighbours(mut self, min: u8) -> Self {
        self.min_neighbours = min;
        self
    }

    /// The distance threshold in grid cells.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl Default for SuburbanSprawl {
    fn default() -> Self {
        Self::new(80.0)
    }
}

impl Rule for SuburbanSprawl {
    fn name(&self) -> &str {
        "Suburban Sprawl"
    }

    fn destination(&self) -> LandUse {
        LandUse::ResidentialLow
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let dist = distance_from_center(ctx.snapshot());
        let neighbours = neighbour_count(ctx.snapshot(), LandUse::ResidentialLow);
        let (dist, counts) = (dist.as_slice(), neighbours.as_slice());
        ctx.transition(
            |c| c == LandUse::Empty,
            |i| dist[i] > self.distance && counts[i] >= self.min_neighbours,
            LandUse::ResidentialLow,
        );
    }
}
