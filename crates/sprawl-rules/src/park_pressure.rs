//! Park pressure: parks hemmed in by housing get built over.

use sprawl_core::{CategorySet, LandUse};
use sprawl_rule::{ParamError, ParamKind, ParamSpec, ParamValue, Rule, RuleParams, StepContext};
use sprawl_space::neighbour_count_any;

/// Minimum residential neighbours, `park_threshold` (default 6).
pub const THRESHOLD: ParamSpec = ParamSpec {
    key: "park_threshold",
    kind: ParamKind::Count,
    default: ParamValue::Int(6),
    range: 1.0..=8.0,
    description: "Min. residential neighbours to develop a park",
};

/// Park cells with at least `threshold` residential neighbours become
/// Residential-Low.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkPressure {
    threshold: u8,
}

impl ParkPressure {
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

impl Default for ParkPressure {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Rule for ParkPressure {
    fn name(&self) -> &str {
        "Park Pressure"
    }

    fn destination(&self) -> LandUse {
        LandUse::ResidentialLow
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let neighbours = neighbour_count_any(ctx.snapshot(), CategorySet::RESIDENTIAL);
        let counts = neighbours.as_slice();
        ctx.transition(
            |c| c == LandUse::Park,
            |i| counts[i] >= self.threshold,
            LandUse::ResidentialLow,
        );
    }
}
