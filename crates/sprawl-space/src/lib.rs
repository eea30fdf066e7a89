//! Spatial metrics for Sprawl land-use grids.
//!
//! Every function in this crate is pure: it reads a grid and returns a
//! freshly allocated derived field of the same shape. Rules combine these
//! fields into per-cell trigger predicates.
//!
//! # Topology
//!
//! All metrics use the 8-connected Moore neighbourhood ([`Moore`]) with
//! absorbing edges: out-of-grid neighbours are absent, never wrapped.
//! Corners have 3 neighbours, edge cells 5, interior cells 8.
//!
//! # Metrics
//!
//! - [`neighbour_count`] / [`neighbour_count_any`]: Moore neighbour counts
//! - [`proximity_mask`]: cells within a Chebyshev radius of a category
//! - [`chebyshev_distance_to`]: the underlying distance transform
//! - [`distance_from_center`]: Euclidean distance from the center cell

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod metrics;
pub mod moore;
pub mod proximity;

pub use metrics::{distance_from_center, neighbour_count, neighbour_count_any};
pub use moore::Moore;
pub use proximity::{chebyshev_distance_to, dilate, proximity_mask};
