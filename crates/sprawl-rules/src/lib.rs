//! The Sprawl land-use rule catalog.
//!
//! Eight transition rules, each a [`Rule`](sprawl_rule::Rule) that reads
//! a frozen snapshot, computes spatial metrics from it, and moves
//! eligible cells to a single destination category.
//!
//! | Rule | Eligible | Trigger | Destination |
//! |---|---|---|---|
//! | [`ResLowExpansion`] | not Water/Road/Res-Low | Res-Low neighbours ≥ t | Residential-Low |
//! | [`HighDensityGrowth`] | Empty | residential neighbours ≥ t | Residential-High |
//! | [`Gentrification`] | Residential-Low | Commercial neighbours ≥ t | Commercial |
//! | [`CommercialAlongRoads`] | Empty | next to Road, residential neighbours ≥ t | Commercial |
//! | [`SuburbanSprawl`] | Empty | center distance > d, Res-Low neighbours ≥ 2 | Residential-Low |
//! | [`ParkPressure`] | Park | residential neighbours ≥ t | Residential-Low |
//! | [`IndustrialPeriphery`] | Empty | center distance > 70, Road within 2 | Industrial |
//! | [`UrbanDecay`] | Commercial/Industrial | residential neighbours < 2 | Empty |
//!
//! [`RuleId`] is the enum-keyed catalog: display names, parameter
//! declarations, and construction from a [`RuleParams`](sprawl_rule::RuleParams).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod commercial_along_roads;
pub mod gentrification;
pub mod high_density_growth;
pub mod industrial_periphery;
pub mod park_pressure;
pub mod res_low_expansion;
pub mod suburban_sprawl;
pub mod urban_decay;

pub use catalog::RuleId;
pub use commercial_along_roads::CommercialAlongRoads;
pub use gentrification::Gentrification;
pub use high_density_growth::HighDensityGrowth;
pub use industrial_periphery::IndustrialPeriphery;
pub use park_pressure::ParkPressure;
pub use res_low_expansion::ResLowExpansion;
pub use suburban_sprawl::SuburbanSprawl;
pub use urban_decay::UrbanDecay;
