//! Invariants shared by every catalog rule.

use proptest::prelude::*;
use sprawl_core::{Census, LandUse};
use sprawl_rule::Rule;
use sprawl_rules::{ResLowExpansion, RuleId, UrbanDecay};
use sprawl_test_utils::{arb_land_grid, arb_rule_params};

fn arb_rule_id() -> impl Strategy<Value = RuleId> {
    (0..RuleId::ALL.len()).prop_map(|i| RuleId::ALL[i])
}

proptest! {
    #[test]
    fn water_and_road_are_never_touched(
        g in arb_land_grid(10, 10),
        params in arb_rule_params(),
        id in arb_rule_id(),
    ) {
        let rule = id.build(&params).unwrap();
        let next = rule.apply(&g);
        prop_assert_eq!(next.shape(), g.shape());
        for (before, after) in g.iter().zip(next.iter()) {
            if before.is_protected() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn changed_cells_take_the_destination(
        g in arb_land_grid(10, 10),
        params in arb_rule_params(),
        id in arb_rule_id(),
    ) {
        let rule = id.build(&params).unwrap();
        let next = rule.apply(&g);
        for (before, after) in g.iter().zip(next.iter()) {
            if before != after {
                prop_assert_eq!(*after, rule.destination());
            }
        }
    }

    #[test]
    fn input_is_not_mutated(
        g in arb_land_grid(8, 8),
        params in arb_rule_params(),
        id in arb_rule_id(),
    ) {
        let before = g.clone();
        let _ = id.build(&params).unwrap().apply(&g);
        prop_assert_eq!(g, before);
    }

    #[test]
    fn urban_decay_is_idempotent(g in arb_land_grid(10, 10)) {
        let once = UrbanDecay::new().apply(&g);
        let twice = UrbanDecay::new().apply(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stricter_expansion_changes_a_subset(g in arb_land_grid(10, 10), t in 1u8..8) {
        let loose = ResLowExpansion::new(t).apply(&g);
        let strict = ResLowExpansion::new(t + 1).apply(&g);
        for ((orig, l), s) in g.iter().zip(loose.iter()).zip(strict.iter()) {
            if orig != s {
                prop_assert_eq!(l, s);
            }
        }
        let loose_count = Census::of(&loose).count(LandUse::ResidentialLow);
        let strict_count = Census::of(&strict).count(LandUse::ResidentialLow);
        prop_assert!(strict_count <= loose_count);
    }
}
