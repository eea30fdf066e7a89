//! Urban decay: isolated commerce and industry are abandoned.

use sprawl_core::{CategorySet, LandUse};
use sprawl_rule::{Rule, StepContext};
use sprawl_space::neighbour_count_any;

/// Residential neighbours below which a business cell decays.
pub const MIN_RESIDENTIAL: u8 = 2;

/// Commercial or Industrial cells with fewer than [`MIN_RESIDENTIAL`]
/// residential neighbours become Empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrbanDecay {
    min_residential: u8,
}

impl UrbanDecay {
    /// The catalog configuration.
    pub fn new() -> Self {
        Self {
            min_residential: MIN_RESIDENTIAL,
        }
    }

    /// Override the residential floor.
    pub fn with_min_residential(mut self, min: u8) -> Self {
        self.min_residential = min;
        self
    }
}

impl Default for UrbanDecay {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for UrbanDecay {
    fn name(&self) -> &str {
        "Urban Decay"
    }

    fn destination(&self) -> LandUse {
        LandUse::Empty
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let business = CategorySet::single(LandUse::Commercial).with(LandUse::Industrial);
        let residential = neighbour_count_any(ctx.snapshot(), CategorySet::RESIDENTIAL);
        let counts = residential.as_slice();
        ctx.transition(
            |c| business.contains(c),
            |i| counts[i] < self.min_residential,
            LandUse::Empty,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_test_utils::grid;

    #[test]
    fn isolated_business_is_abandoned() {
        let g = grid(
            "
            c . .
            . i l
            . l .
            ",
        );
        let next = UrbanDecay::new().apply(&g);
        assert_eq!(next[(0, 0)], LandUse::Empty);
        assert_eq!(next[(1, 1)], LandUse::Industrial);
    }

    #[test]
    fn other_categories_are_untouched() {
        let g = grid(
            "
            p w r
            l h .
            ",
        );
        assert_eq!(UrbanDecay::new().apply(&g), g);
    }

    #[test]
    fn floor_can_be_raised() {
        let g = grid(
            "
            l l
            c .
            ",
        );
        assert_eq!(UrbanDecay::new().apply(&g), g);
        let next = UrbanDecay::new().with_min_residential(3).apply(&g);
        assert_eq!(next[(1, 0)], LandUse::Empty);
    }
}
