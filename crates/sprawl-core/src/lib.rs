//! Core types for the Sprawl land-use simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Sprawl workspace:
//! land-use categories, the rectangular [`Grid`] container, iteration
//! IDs, census statistics, and grid ingestion errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod category;
pub mod census;
pub mod error;
pub mod grid;
pub mod id;

pub use category::{CategorySet, LandUse};
pub use census::Census;
pub use error::GridError;
pub use grid::{Grid, LandGrid};
pub use id::IterationId;
