//! Test utilities and fixtures for Sprawl development.
//!
//! Provides an ASCII grid builder ([`grid`]), canned grids, fixture
//! rules for exercising the composer, and proptest strategies.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{grid, render, CountingRule, FillRule, RecordingRule};
pub use strategies::{arb_land_grid, arb_rule_params};
