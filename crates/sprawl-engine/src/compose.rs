//! Sequential rule composition.
//!
//! A [`Composer`] is a validated, ordered list of rules. Resolution
//! happens once, up front: an unknown name or a bad parameter anywhere in
//! the list fails before any rule has run. Application then threads the
//! grid through the rules in order; each rule sees its predecessor's
//! output as a frozen snapshot and writes into a fresh copy.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use sprawl_core::{IterationId, LandGrid};
use sprawl_rule::{ParamError, Rule, RuleParams, StepContext};
use sprawl_rules::RuleId;

use crate::metrics::StepMetrics;

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from resolving a rule list.
#[derive(Clone, Debug, PartialEq)]
pub enum ComposeError {
    /// A name matches no catalog rule.
    UnknownRule {
        /// The name as given.
        name: String,
    },
    /// A rule's parameter is missing, of the wrong kind, or out of range.
    InvalidParameter {
        /// Display name of the rule that rejected it.
        rule: &'static str,
        /// The underlying parameter error.
        source: ParamError,
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRule { name } => write!(f, "unknown rule '{name}'"),
            Self::InvalidParameter { rule, source } => {
                write!(f, "invalid parameter for rule '{rule}': {source}")
            }
        }
    }
}

impl Error for ComposeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownRule { .. } => None,
            Self::InvalidParameter { source, .. } => Some(source),
        }
    }
}

// ── Composer ───────────────────────────────────────────────────────

/// An ordered, validated rule plan.
pub struct Composer {
    rules: Vec<Box<dyn Rule>>,
}

impl Composer {
    /// Resolve `names` against the catalog with `params`.
    ///
    /// Names may be display names or snake-case keys. Duplicates are kept
    /// and run once per occurrence. An empty list is valid and yields the
    /// identity plan.
    pub fn new<S: AsRef<str>>(names: &[S], params: &RuleParams) -> Result<Self, ComposeError> {
        let ids = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                RuleId::from_name(name).ok_or_else(|| ComposeError::UnknownRule {
                    name: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rules = ids
            .into_iter()
            .map(|id| {
                id.build(params)
                    .map_err(|source| ComposeError::InvalidParameter {
                        rule: id.name(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Compose caller-supplied rules, in order.
    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Number of rules in the plan.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the plan holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in execution order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    /// Apply every rule in order and return the final grid.
    ///
    /// `grid` is never mutated.
    pub fn apply(&self, grid: &LandGrid) -> LandGrid {
        self.apply_with_metrics(grid, IterationId::default()).0
    }

    /// Like [`apply`](Self::apply), also returning per-rule timings and
    /// change counts.
    pub fn apply_with_metrics(
        &self,
        grid: &LandGrid,
        iteration: IterationId,
    ) -> (LandGrid, StepMetrics) {
        let start = Instant::now();
        let mut metrics = StepMetrics::default();
        let mut current = grid.clone();

        for rule in &self.rules {
            let rule_start = Instant::now();
            let mut next = current.clone();
            let changed = {
                let mut ctx = StepContext::new(&current, &mut next, iteration);
                rule.step(&mut ctx);
                ctx.changed()
            };
            current = next;

            let us = rule_start.elapsed().as_micros() as u64;
            log::debug!(
                "iteration {iteration}: '{}' changed {changed} cells in {us}us",
                rule.name()
            );
            metrics.rule_us.push((rule.name().to_string(), us));
            metrics.changed_cells.push((rule.name().to_string(), changed));
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        (current, metrics)
    }
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Resolve `names` and apply them to `grid` in one call.
///
/// Nothing is applied unless the whole list resolves.
///
/// ```
/// use sprawl_core::{LandGrid, LandUse};
/// use sprawl_rules::RuleId;
///
/// let grid = LandGrid::from_codes(1, 2, &[3, 0]).unwrap();
/// let params = RuleId::defaults_for(&[RuleId::UrbanDecay]);
/// let next = sprawl_engine::apply(&grid, &["Urban Decay"], &params).unwrap();
/// assert_eq!(next[(0, 0)], LandUse::Empty);
/// ```
pub fn apply<S: AsRef<str>>(
    grid: &LandGrid,
    names: &[S],
    params: &RuleParams,
) -> Result<LandGrid, ComposeError> {
    Ok(Composer::new(names, params)?.apply(grid))
}
