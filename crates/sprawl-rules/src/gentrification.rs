//! Gentrification: low-density housing ringed by shops turns commercial.

use sprawl_core::LandUse;
use sprawl_rule::{ParamError, ParamKind, ParamSpec, ParamValue, Rule, RuleParams, StepContext};
use sprawl_space::neighbour_count;

/// Minimum Commercial neighbours, `gentrification_threshold` (default 4).
pub const THRESHOLD: ParamSpec = ParamSpec {
    key: "gentrification_threshold",
    kind: ParamKind::Count,
    default: ParamValue::Int(4),
    range: 1.0..=8.0,
    description: "Min. Commercial neighbours for gentrification",
};

/// Residential-Low cells with at least `threshold` Commercial neighbours
/// become Commercial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gentrification {
    threshold: u8,
}

impl Gentrification {
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

impl Default for Gentrification {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Rule for Gentrification {
    fn name(&self) -> &str {
        "Gentrification"
    }

    fn destination(&self) -> LandUse {
        LandUse::Commercial
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let neighbours = neighbour_count(ctx.snapshot(), LandUse::Commercial);
        let counts = neighbours.as_slice();
        ctx.transition(
            |c| c == LandUse::ResidentialLow,
            |i| counts[i] >= self.threshold,
            LandUse::Commercial,
        );
    }
}
