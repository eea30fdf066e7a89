//! Proptest strategies for land grids and rule parameters.

use proptest::collection::vec;
use proptest::prelude::*;
use sprawl_core::LandGrid;
use sprawl_rule::RuleParams;

/// Grids of 1..=`max_rows` by 1..=`max_cols` with uniformly random
/// categories.
pub fn arb_land_grid(max_rows: usize, max_cols: usize) -> impl Strategy<Value = LandGrid> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(|(rows, cols)| {
        vec(0u8..8, rows * cols).prop_map(move |codes| {
            LandGrid::from_codes(rows, cols, &codes).expect("codes are in range")
        })
    })
}

/// A full, valid parameter map for every catalog rule.
///
/// Distances stay small so suburban rules fire on test-sized grids.
pub fn arb_rule_params() -> impl Strategy<Value = RuleParams> {
    (
        1i64..=8,
        1i64..=8,
        1i64..=8,
        1i64..=8,
        1i64..=8,
        0.0f64..12.0,
    )
        .prop_map(|(res_low, high, gent, comm, park, dist)| {
            RuleParams::new()
                .with("res_low_threshold", res_low)
                .with("high_density_threshold", high)
                .with("gentrification_threshold", gent)
                .with("commercial_threshold", comm)
                .with("park_threshold", park)
                .with("suburban_distance", dist)
        })
}
