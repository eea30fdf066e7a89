//! Enum-keyed catalog of the built-in rules.
//!
//! Each [`RuleId`] carries its display name, a snake-case key, the
//! parameters it needs, and a constructor from [`RuleParams`]. Names are
//! resolved by [`RuleId::from_name`], which accepts either form.

use std::fmt;

use sprawl_rule::{ParamError, ParamSpec, Rule, RuleParams};

use crate::{
    commercial_along_roads, gentrification, high_density_growth, park_pressure,
    res_low_expansion, suburban_sprawl, CommercialAlongRoads, Gentrification, HighDensityGrowth,
    IndustrialPeriphery, ParkPressure, ResLowExpansion, SuburbanSprawl, UrbanDecay,
};

const RES_LOW_PARAMS: &[ParamSpec] = &[res_low_expansion::THRESHOLD];
const HIGH_DENSITY_PARAMS: &[ParamSpec] = &[high_density_growth::THRESHOLD];
const GENTRIFICATION_PARAMS: &[ParamSpec] = &[gentrification::THRESHOLD];
const COMMERCIAL_PARAMS: &[ParamSpec] = &[commercial_along_roads::THRESHOLD];
const SUBURBAN_PARAMS: &[ParamSpec] = &[suburban_sprawl::DISTANCE];
const PARK_PARAMS: &[ParamSpec] = &[park_pressure::THRESHOLD];

/// Identifier of a built-in rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// [`ResLowExpansion`].
    ResLowExpansion,
    /// [`HighDensityGrowth`].
    HighDensityGrowth,
    /// [`Gentrification`].
    Gentrification,
    /// [`CommercialAlongRoads`].
    CommercialAlongRoads,
    /// [`SuburbanSprawl`].
    SuburbanSprawl,
    /// [`ParkPressure`].
    ParkPressure,
    /// [`IndustrialPeriphery`].
    IndustrialPeriphery,
    /// [`UrbanDecay`].
    UrbanDecay,
}

impl RuleId {
    /// Every catalog rule, in listing order.
    pub const ALL: [RuleId; 8] = [
        RuleId::ResLowExpansion,
        RuleId::HighDensityGrowth,
        RuleId::Gentrification,
        RuleId::CommercialAlongRoads,
        RuleId::SuburbanSprawl,
        RuleId::ParkPressure,
        RuleId::IndustrialPeriphery,
        RuleId::UrbanDecay,
    ];

    /// Display name, as reported by [`Rule::name`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResLowExpansion => "Residential-Low Expansion",
            Self::HighDensityGrowth => "High-Density Growth",
            Self::Gentrification => "Gentrification",
            Self::CommercialAlongRoads => "Commercial-Along-Roads",
            Self::SuburbanSprawl => "Suburban Sprawl",
            Self::ParkPressure => "Park Pressure",
            Self::IndustrialPeriphery => "Industrial Periphery",
            Self::UrbanDecay => "Urban Decay",
        }
    }

    /// Snake-case key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ResLowExpansion => "res_low_expansion",
            Self::HighDensityGrowth => "high_density_growth",
            Self::Gentrification => "gentrification",
            Self::CommercialAlongRoads => "commercial_along_roads",
            Self::SuburbanSprawl => "suburban_sprawl",
            Self::ParkPressure => "park_pressure",
            Self::IndustrialPeriphery => "industrial_periphery",
            Self::UrbanDecay => "urban_decay",
        }
    }

    /// One-line summary of the transition.
    pub const fn description(self) -> &'static str {
        match self {
            Self::ResLowExpansion => "Developable land next to enough Res-Low becomes Res-Low",
            Self::HighDensityGrowth => "Empty land next to enough housing becomes Res-High",
            Self::Gentrification => "Res-Low next to enough Commercial becomes Commercial",
            Self::CommercialAlongRoads => "Empty roadside land near housing becomes Commercial",
            Self::SuburbanSprawl => "Distant Empty land next to Res-Low becomes Res-Low",
            Self::ParkPressure => "Parks surrounded by housing become Res-Low",
            Self::IndustrialPeriphery => "Distant Empty land near roads becomes Industrial",
            Self::UrbanDecay => "Commercial/Industrial without housing becomes Empty",
        }
    }

    /// Look up a rule by display name or snake-case key.
    ///
    /// Matching is exact; unknown names return `None`.
    pub fn from_name(name: &str) -> Option<RuleId> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == name || id.key() == name)
    }

    /// Parameters this rule reads from [`RuleParams`].
    pub fn params(self) -> &'static [ParamSpec] {
        match self {
            Self::ResLowExpansion => RES_LOW_PARAMS,
            Self::HighDensityGrowth => HIGH_DENSITY_PARAMS,
            Self::Gentrification => GENTRIFICATION_PARAMS,
            Self::CommercialAlongRoads => COMMERCIAL_PARAMS,
            Self::SuburbanSprawl => SUBURBAN_PARAMS,
            Self::ParkPressure => PARK_PARAMS,
            Self::IndustrialPeriphery | Self::UrbanDecay => &[],
        }
    }

    /// Every parameter any catalog rule reads, in catalog order.
    pub fn all_params() -> impl Iterator<Item = &'static ParamSpec> {
        Self::ALL.into_iter().flat_map(|id| id.params().iter())
    }

    /// A parameter map holding the documented defaults for `ids`.
    ///
    /// The only path by which defaults enter a composition.
    pub fn defaults_for(ids: &[RuleId]) -> RuleParams {
        RuleParams::with_defaults(ids.iter().flat_map(|id| id.params().iter()))
    }

    /// Construct the rule, validating its parameters.
    pub fn build(self, params: &RuleParams) -> Result<Box<dyn Rule>, ParamError> {
        Ok(match self {
            Self::ResLowExpansion => Box::new(ResLowExpansion::from_params(params)?),
            Self::HighDensityGrowth => Box::new(HighDensityGrowth::from_params(params)?),
            Self::Gentrification => Box::new(Gentrification::from_params(params)?),
            Self::CommercialAlongRoads => Box::new(CommercialAlongRoads::from_params(params)?),
            Self::SuburbanSprawl => Box::new(SuburbanSprawl::from_params(params)?),
            Self::ParkPressure => Box::new(ParkPressure::from_params(params)?),
            Self::IndustrialPeriphery => Box::new(IndustrialPeriphery::new()),
            Self::UrbanDecay => Box::new(UrbanDecay::new()),
        })
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
