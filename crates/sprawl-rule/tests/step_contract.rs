//! The step contract seen through fixture rules.

use proptest::prelude::*;
use sprawl_core::{IterationId, LandUse};
use sprawl_rule::{Rule, StepContext};
use sprawl_test_utils::{arb_land_grid, grid, FillRule};

fn arb_category() -> impl Strategy<Value = LandUse> {
    (0u8..8).prop_map(|c| LandUse::from_code(c).unwrap_or_default())
}

proptest! {
    #[test]
    fn changed_count_matches_cell_diff(
        g in arb_land_grid(8, 8),
        from in arb_category(),
        to in arb_category(),
    ) {
        let rule = FillRule::new("fill", from, to);
        let mut next = g.clone();
        let mut ctx = StepContext::new(&g, &mut next, IterationId(1));
        rule.step(&mut ctx);
        let reported = ctx.changed();
        let diff = g.iter().zip(next.iter()).filter(|(a, b)| a != b).count();
        prop_assert_eq!(reported, diff);
    }

    #[test]
    fn apply_leaves_input_alone(g in arb_land_grid(8, 8), to in arb_category()) {
        let before = g.clone();
        let next = FillRule::new("fill", LandUse::Empty, to).apply(&g);
        prop_assert_eq!(&g, &before);
        if to != LandUse::Empty {
            prop_assert_eq!(next.count_where(|c| *c == LandUse::Empty), 0);
        }
    }
}

#[test]
fn boxed_rules_are_object_safe() {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(FillRule::new("parks_to_water", LandUse::Park, LandUse::Water)),
        Box::new(FillRule::new("water_to_road", LandUse::Water, LandUse::Road)),
    ];
    let mut g = grid("p . p");
    for rule in &rules {
        g = rule.apply(&g);
    }
    assert_eq!(g, grid("r . r"));
}
