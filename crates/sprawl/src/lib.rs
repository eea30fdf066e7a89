//! Sprawl: a cellular-automaton engine for urban land-use change.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sprawl sub-crates. For most users, adding `sprawl` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use sprawl::prelude::*;
//!
//! // A Res-Low cluster next to a shop, surrounded by open land.
//! let grid = LandGrid::from_code_rows(vec![
//!     vec![1, 1, 0, 0],
//!     vec![1, 0, 3, 0],
//!     vec![0, 0, 0, 7],
//! ])
//! .unwrap();
//!
//! let config = SimulationConfig::new(grid)
//!     .with_rules(["Residential-Low Expansion", "Urban Decay"])
//!     .with_default_params();
//! let mut sim = Simulation::new(config).unwrap();
//!
//! let summary = sim.run(5, |step| {
//!     if step.metrics.total_changed() == 0 {
//!         ControlFlow::Break(())
//!     } else {
//!         ControlFlow::Continue(())
//!     }
//! });
//! assert!(summary.iterations >= 1);
//! assert_eq!(sim.census().total(), 12);
//! assert_eq!(sim.grid()[(1, 1)], LandUse::ResidentialLow);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sprawl-core` | Categories, grids, census, iteration IDs |
//! | [`space`] | `sprawl-space` | Moore neighbourhood and spatial metrics |
//! | [`rule`] | `sprawl-rule` | Rule trait, step context, parameters |
//! | [`rules`] | `sprawl-rules` | The eight catalog rules and [`rules::RuleId`] |
//! | [`engine`] | `sprawl-engine` | Composer and simulation driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`sprawl-core`).
///
/// [`types::LandUse`], [`types::LandGrid`], [`types::Census`] and the
/// ingestion error [`types::GridError`].
pub use sprawl_core as types;

/// Spatial metrics (`sprawl-space`).
///
/// Neighbour counts, proximity masks and center distance over the
/// [`space::Moore`] neighbourhood.
pub use sprawl_space as space;

/// Rule trait and parameters (`sprawl-rule`).
///
/// [`rule::Rule`] is the extension point for user-defined transitions.
pub use sprawl_rule as rule;

/// The built-in rule catalog (`sprawl-rules`).
pub use sprawl_rules as rules;

/// Composition and the iteration driver (`sprawl-engine`).
pub use sprawl_engine as engine;

/// Common imports for typical Sprawl usage.
///
/// ```rust
/// use sprawl::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sprawl_core::{Census, CategorySet, Grid, IterationId, LandGrid, LandUse};

    // Errors
    pub use sprawl_core::GridError;
    pub use sprawl_engine::{ComposeError, ConfigError};
    pub use sprawl_rule::ParamError;

    // Rules
    pub use sprawl_rule::{ParamValue, Rule, RuleParams, StepContext};
    pub use sprawl_rules::RuleId;

    // Engine
    pub use sprawl_engine::{
        apply, Composer, RunSummary, Simulation, SimulationConfig, StepMetrics, StepResult,
    };
}
