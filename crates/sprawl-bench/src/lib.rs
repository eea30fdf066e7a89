//! Benchmark profiles and synthetic grids for Sprawl.
//!
//! - [`synthetic_city`]: seeded random city with a road lattice
//! - [`reference_profile`]: 100x100 grid (10K cells) with the full rule plan
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sprawl_core::{GridError, LandGrid, LandUse};
use sprawl_engine::SimulationConfig;
use sprawl_rules::RuleId;

/// Spacing of the road lattice in [`synthetic_city`].
pub const ROAD_SPACING: usize = 12;

/// Every catalog rule, by display name, in catalog order.
pub fn full_plan() -> Vec<&'static str> {
    RuleId::ALL.iter().map(|id| id.name()).collect()
}

/// Generate a deterministic synthetic city.
///
/// Roads form a lattice every [`ROAD_SPACING`] cells. Housing and
/// commerce thin out with distance from the center; industry thickens
/// towards the edge; water and parks are scattered uniformly.
pub fn synthetic_city(rows: usize, cols: usize, seed: u64) -> Result<LandGrid, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (cr, cc) = ((rows / 2) as f64, (cols / 2) as f64);
    let radius = (rows.min(cols) as f64 / 2.0).max(1.0);
    let lane = ROAD_SPACING / 2;

    let cells = (0..rows * cols)
        .map(|i| {
            let (r, c) = (i / cols, i % cols);
            if r % ROAD_SPACING == lane || c % ROAD_SPACING == lane {
                return LandUse::Road;
            }
            let d = ((r as f64 - cr).powi(2) + (c as f64 - cc).powi(2)).sqrt();
            let urban = 1.0 - (d / radius).min(1.0);
            let roll: f64 = rng.gen();
            match roll {
                x if x < 0.03 => LandUse::Water,
                x if x < 0.08 => LandUse::Park,
                x if x < 0.08 + 0.45 * urban => {
                    if rng.gen_bool(0.25 * urban) {
                        LandUse::ResidentialHigh
                    } else {
                        LandUse::ResidentialLow
                    }
                }
                x if x < 0.08 + 0.55 * urban => LandUse::Commercial,
                _ if rng.gen_bool(0.06 * (1.0 - urban)) => LandUse::Industrial,
                _ => LandUse::Empty,
            }
        })
        .collect();
    LandGrid::from_vec(rows, cols, cells)
}

fn profile(side: usize, seed: u64) -> SimulationConfig {
    let grid = synthetic_city(side, side, seed).expect("profile sides are non-zero");
    SimulationConfig::new(grid)
        .with_rules(full_plan())
        .with_params(RuleId::defaults_for(&RuleId::ALL))
}

/// Build a reference benchmark profile: 100x100 grid (10K cells).
///
/// Plan: all eight catalog rules at their defaults, in catalog order.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    profile(100, seed)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same plan as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    profile(316, seed)
}
