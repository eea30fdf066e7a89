//! Residential-Low expansion.
//!
//! Any developable cell (not Water, Road, or already Residential-Low)
//! with at least `threshold` Residential-Low neighbours becomes
//! Residential-Low. This is the only catalog rule that can overwrite
//! Parks, Commercial and Industrial land directly.

use sprawl_core::LandUse;
use sprawl_rule::{ParamError, ParamKind, ParamSpec, ParamValue, Rule, RuleParams, StepContext};
use sprawl_space::neighbour_count;

/// Minimum Residential-Low neighbours, `res_low_threshold` (default 3).
pub const THRESHOLD: ParamSpec = ParamSpec {
    key: "res_low_threshold",
    kind: ParamKind::Count,
    default: ParamValue::Int(3),
    range: 1.0..=8.0,
    description: "Min. Residential-Low neighbours for expansion",
};

/// Spread low-density housing into neighbouring land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResLowExpansion {
    threshold: u8,
}

impl ResLowExpansion {
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

impl Default for ResLowExpansion {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Rule for ResLowExpansion {
    fn name(&self) -> &str {
        "Residential-Low Expansion"
    }

    fn destination(&self) -> LandUse {
        LandUse::ResidentialLow
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let neighbours = neighbour_count(ctx.snapshot(), LandUse::ResidentialLow);
        let counts = neighbours.as_slice();
        ctx.transition(
            |c| !c.is_protected() && c != LandUse::ResidentialLow,
            |i| counts[i] >= self.threshold,
            LandUse::ResidentialLow,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_test_utils::grid;

    #[test]
    fn expands_into_surrounded_cells() {
        let g = grid(
            "
            l l l
            l . l
            . . .
            ",
        );
        let next = ResLowExpansion::new(3).apply(&g);
        // (1,1) has 5 Res-Low neighbours. (2,1) has only 2 in the snapshot;
        // the new cell at (1,1) is not visible within the same rule.
        assert_eq!(
            next,
            grid(
                "
                l l l
                l l l
                . . .
                "
            )
        );
    }

    #[test]
    fn water_and_road_never_convert() {
        let g = grid(
            "
            l l l
            l w l
            l r l
            ",
        );
        let next = ResLowExpansion::new(1).apply(&g);
        assert_eq!(next, g);
    }

    #[test]
    fn overwrites_park_and_commercial() {
        let g = grid(
            "
            l l l
            p c i
            l l l
            ",
        );
        let next = ResLowExpansion::new(3).apply(&g);
        assert_eq!(next[(1, 0)], LandUse::ResidentialLow);
        assert_eq!(next[(1, 1)], LandUse::ResidentialLow);
        assert_eq!(next[(1, 2)], LandUse::ResidentialLow);
    }

    #[test]
    fn threshold_read_from_params() {
        let params = RuleParams::new().with("res_low_threshold", 6);
        assert_eq!(ResLowExpansion::from_params(&params).unwrap().threshold(), 6);
        assert!(ResLowExpansion::from_params(&RuleParams::new()).is_err());
    }
}
