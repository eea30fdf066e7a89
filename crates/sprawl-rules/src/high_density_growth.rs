//! High-density growth: Empty land surrounded by housing densifies.

use sprawl_core::{CategorySet, LandUse};
use sprawl_rule::{ParamError, ParamKind, ParamSpec, ParamValue, Rule, RuleParams, StepContext};
use sprawl_space::neighbour_count_any;

/// Minimum residential neighbours, `high_density_threshold` (default 5).
pub const THRESHOLD: ParamSpec = ParamSpec {
    key: "high_density_threshold",
    kind: ParamKind::Count,
    default: ParamValue::Int(5),
    range: 1.0..=8.0,
    description: "Min. residential neighbours for Residential-High",
};

/// Empty cells with at least `threshold` residential (low or high)
/// neighbours become Residential-High.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighDensityGrowth {
    threshold: u8,
}

impl HighDensityGrowth {
    /// Create the rule with an explicit neighbour threshold.
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Build from caller parameters; requires [`THRESHOLD`].
    pub fn from_params(params: &RuleParams) -> Result<Self, ParamError> {
        Ok(Self::new(THRESHOLD.count(params)?))
    }

    /// The neighbour threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Default for HighDensityGrowth {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Rule for HighDensityGrowth {
    fn name(&self) -> &str {
        "High-Density Growth"
    }

    fn destination(&self) -> LandUse {
        LandUse::ResidentialHigh
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let neighbours = neighbour_count_any(ctx.snapshot(), CategorySet::RESIDENTIAL);
        let counts = neighbours.as_slice();
        ctx.transition(
            |c| c == LandUse::Empty,
            |i| counts[i] >= self.threshold,
            LandUse::ResidentialHigh,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_test_utils::grid;

    #[test]
    fn block_edge_never_reaches_five() {
        // 3x3 Res-Low block centered in a 5x5 grid: every Empty cell on
        // the border touches at most 3 block cells.
        let g = grid(
            "
            . . . . .
            . l l l .
            . l l l .
            . l l l .
            . . . . .
            ",
        );
        assert_eq!(HighDensityGrowth::new(5).apply(&g), g);
    }

    #[test]
    fn hole_in_block_densifies() {
        let g = grid(
            "
            l l h
            l . h
            l l .
            ",
        );
        let next = HighDensityGrowth::new(5).apply(&g);
        assert_eq!(next[(1, 1)], LandUse::ResidentialHigh);
        // (2,2) sees (1,1) empty, (1,2) h, (2,1) l: only 2.
        assert_eq!(next[(2, 2)], LandUse::Empty);
    }

    #[test]
    fn only_empty_cells_are_eligible() {
        let g = grid(
            "
            l l l
            l p l
            l l l
            ",
        );
        assert_eq!(HighDensityGrowth::new(1).apply(&g), g);
    }
}
