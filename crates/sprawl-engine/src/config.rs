//! Simulation configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use sprawl_core::{GridError, LandGrid};
use sprawl_rule::RuleParams;
use sprawl_rules::RuleId;

use crate::compose::{ComposeError, Composer};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The rule list failed to resolve.
    Compose(ComposeError),
    /// The initial grid could not be built.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compose(e) => write!(f, "rule plan error: {e}"),
            Self::Grid(e) => write!(f, "initial grid error: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compose(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ComposeError> for ConfigError {
    fn from(e: ComposeError) -> Self {
        Self::Compose(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Everything needed to start a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Grid at iteration 0; restored by [`reset`](crate::Simulation::reset).
    pub initial: LandGrid,
    /// Rule names in execution order.
    pub rules: Vec<String>,
    /// Parameters for every rule in `rules`.
    pub params: RuleParams,
}

impl SimulationConfig {
    /// A configuration with no rules and no parameters.
    pub fn new(initial: LandGrid) -> Self {
        Self {
            initial,
            rules: Vec::new(),
            params: RuleParams::new(),
        }
    }

    /// Start from raw row-major category codes.
    pub fn from_codes(rows: usize, cols: usize, codes: &[u8]) -> Result<Self, ConfigError> {
        Ok(Self::new(LandGrid::from_codes(rows, cols, codes)?))
    }

    /// Replace the rule list.
    pub fn with_rules<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the parameter map.
    pub fn with_params(mut self, params: RuleParams) -> Self {
        self.params = params;
        self
    }

    /// Fill in documented defaults for every recognised rule in the list.
    ///
    /// Values already set are kept. Unknown names are left for
    /// [`validate`](Self::validate) to report.
    pub fn with_default_params(mut self) -> Self {
        let ids: Vec<RuleId> = self
            .rules
            .iter()
            .filter_map(|name| RuleId::from_name(name))
            .collect();
        self.params
            .fill_defaults(ids.iter().flat_map(|id| id.params().iter()));
        self
    }

    /// Check that the rule list resolves with the given parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.composer().map(|_| ())
    }

    pub(crate) fn composer(&self) -> Result<Composer, ConfigError> {
        Ok(Composer::new(&self.rules, &self.params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> LandGrid {
        LandGrid::from_codes(2, 2, &[0, 1, 3, 7]).unwrap()
    }

    #[test]
    fn empty_rule_list_is_valid() {
        assert!(SimulationConfig::new(grid()).validate().is_ok());
    }

    #[test]
    fn defaults_are_opt_in() {
        let cfg = SimulationConfig::new(grid()).with_rules(["Gentrification"]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Compose(ComposeError::InvalidParameter { .. }))
        ));
        let cfg = cfg.with_default_params();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.params.len(), 1);
    }

    #[test]
    fn explicit_values_survive_default_fill() {
        let cfg = SimulationConfig::new(grid())
            .with_rules(["park_pressure"])
            .with_params(RuleParams::new().with("park_threshold", 8))
            .with_default_params();
        assert_eq!(
            cfg.params.get("park_threshold"),
            Some(sprawl_rule::ParamValue::Int(8))
        );
    }

    #[test]
    fn bad_codes_become_grid_errors() {
        let err = SimulationConfig::from_codes(1, 2, &[0, 9]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Grid(GridError::InvalidCategory {
                row: 0,
                col: 1,
                code: 9
            })
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn unknown_rule_is_a_compose_error() {
        let cfg = SimulationConfig::new(grid()).with_rules(["Nonexistent"]);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Compose(ComposeError::UnknownRule {
                name: "Nonexistent".into()
            }))
        );
    }
}
