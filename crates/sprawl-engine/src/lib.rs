//! Rule composition and the iteration driver for Sprawl simulations.
//!
//! [`Composer`] resolves an ordered list of rule names against the
//! catalog and applies the rules in sequence, each observing the
//! previous rule's output. [`Simulation`] owns the evolving grid and
//! steps it one iteration at a time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compose;
pub mod config;
pub mod metrics;
pub mod simulation;

pub use compose::{apply, ComposeError, Composer};
pub use config::{ConfigError, SimulationConfig};
pub use metrics::StepMetrics;
pub use simulation::{RunSummary, Simulation, StepResult};
