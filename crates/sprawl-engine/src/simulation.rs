//! The iteration driver.
//!
//! [`Simulation`] owns the evolving grid and a validated [`Composer`].
//! Each [`step()`](Simulation::step) runs the whole rule plan once and
//! replaces the current grid wholesale.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] but not shared. [`step()`](Simulation::step)
//! returns a [`StepResult`] that borrows the new grid from `self`, so
//! the caller cannot step again while holding it.

use std::ops::ControlFlow;

use sprawl_core::{Census, IterationId, LandGrid};
use sprawl_rule::RuleParams;

use crate::compose::{ComposeError, Composer};
use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::StepMetrics;

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of one [`Simulation::step()`] call.
#[derive(Debug)]
pub struct StepResult<'s> {
    /// The grid after this iteration.
    pub grid: &'s LandGrid,
    /// The iteration just completed (1 after the first step).
    pub iteration: IterationId,
    /// Timings and change counts for this iteration.
    pub metrics: StepMetrics,
}

/// Outcome of a [`Simulation::run()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations executed by this call.
    pub iterations: u64,
    /// Whether the callback stopped the run before `n` iterations.
    pub stopped_early: bool,
    /// Iteration counter after the run.
    pub final_iteration: IterationId,
    /// Sum of per-iteration wall-clock time, in microseconds.
    pub total_us: u64,
}

// ── Simulation ──────────────────────────────────────────────────

/// A land-use simulation stepped one iteration at a time.
///
/// # Example
///
/// ```
/// use sprawl_core::LandGrid;
/// use sprawl_engine::{Simulation, SimulationConfig};
///
/// let grid = LandGrid::from_codes(3, 3, &[1, 1, 1, 1, 0, 1, 0, 0, 0]).unwrap();
/// let config = SimulationConfig::new(grid)
///     .with_rules(["Residential-Low Expansion"])
///     .with_default_params();
/// let mut sim = Simulation::new(config).unwrap();
/// let result = sim.step();
/// assert_eq!(result.iteration.0, 1);
/// assert_eq!(result.metrics.total_changed(), 1);
/// ```
pub struct Simulation {
    initial: LandGrid,
    grid: LandGrid,
    composer: Composer,
    rules: Vec<String>,
    params: RuleParams,
    iteration: IterationId,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config` and build a simulation at iteration 0.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let composer = config.composer()?;
        let SimulationConfig {
            initial,
            rules,
            params,
        } = config;
        log::info!(
            "simulation created: {}x{} grid, {} rules",
            initial.rows(),
            initial.cols(),
            composer.len()
        );
        Ok(Self {
            grid: initial.clone(),
            initial,
            composer,
            rules,
            params,
            iteration: IterationId::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Run one iteration of the rule plan.
    pub fn step(&mut self) -> StepResult<'_> {
        let iteration = self.iteration.next();
        let (next, metrics) = self.composer.apply_with_metrics(&self.grid, iteration);
        self.grid = next;
        self.iteration = iteration;
        self.last_metrics = metrics.clone();
        StepResult {
            grid: &self.grid,
            iteration,
            metrics,
        }
    }

    /// Run up to `n` iterations, calling `on_step` after each one.
    ///
    /// Returning [`ControlFlow::Break`] from the callback stops the run
    /// after the current iteration. Iterations are never interrupted
    /// part-way.
    pub fn run<F>(&mut self, n: u64, mut on_step: F) -> RunSummary
    where
        F: FnMut(&StepResult<'_>) -> ControlFlow<()>,
    {
        let mut summary = RunSummary {
            iterations: 0,
            stopped_early: false,
            final_iteration: self.iteration,
            total_us: 0,
        };
        for _ in 0..n {
            let result = self.step();
            summary.iterations += 1;
            summary.total_us += result.metrics.total_us;
            let flow = on_step(&result);
            if flow.is_break() {
                log::debug!("run stopped by caller after {}", result.iteration);
                summary.stopped_early = summary.iterations < n;
                break;
            }
        }
        summary.final_iteration = self.iteration;
        summary
    }

    /// Restore the initial grid and iteration 0.
    ///
    /// The rule plan is kept.
    pub fn reset(&mut self) -> &LandGrid {
        log::info!("simulation reset from iteration {}", self.iteration);
        self.grid = self.initial.clone();
        self.iteration = IterationId::default();
        self.last_metrics = StepMetrics::default();
        &self.grid
    }

    /// Swap the rule plan between iterations.
    ///
    /// The new plan is fully resolved before anything is replaced; on
    /// error the previous plan and parameters stay in effect.
    pub fn reconfigure<S: AsRef<str>>(
        &mut self,
        names: &[S],
        params: RuleParams,
    ) -> Result<(), ComposeError> {
        let composer = Composer::new(names, &params)?;
        self.rules = names.iter().map(|n| n.as_ref().to_string()).collect();
        self.params = params;
        self.composer = composer;
        log::info!(
            "rule plan replaced at iteration {}: {:?}",
            self.iteration,
            self.rules
        );
        Ok(())
    }

    /// The current grid.
    pub fn grid(&self) -> &LandGrid {
        &self.grid
    }

    /// The grid at iteration 0.
    pub fn initial(&self) -> &LandGrid {
        &self.initial
    }

    /// Completed iterations since creation or the last reset.
    pub fn iteration(&self) -> IterationId {
        self.iteration
    }

    /// Category counts of the current grid.
    pub fn census(&self) -> Census {
        Census::of(&self.grid)
    }

    /// Metrics from the most recent step (zeroed after reset).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Rule names as configured, in execution order.
    pub fn rule_names(&self) -> &[String] {
        &self.rules
    }

    /// Parameters of the current plan.
    pub fn params(&self) -> &RuleParams {
        &self.params
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("shape", &self.grid.shape())
            .field("iteration", &self.iteration)
            .field("rules", &self.rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulation {
        let grid = LandGrid::from_codes(1, 3, &[3, 0, 4]).unwrap();
        Simulation::new(SimulationConfig::new(grid).with_rules(["urban_decay"])).unwrap()
    }

    #[test]
    fn step_advances_iteration() {
        let mut s = sim();
        assert_eq!(s.iteration(), IterationId(0));
        let r = s.step();
        assert_eq!(r.iteration, IterationId(1));
        assert_eq!(r.grid.to_codes(), vec![0, 0, 0]);
        assert_eq!(s.last_metrics().total_changed(), 2);
    }

    #[test]
    fn reset_restores_initial() {
        let mut s = sim();
        s.step();
        s.step();
        let g = s.reset().clone();
        assert_eq!(g, *s.initial());
        assert_eq!(s.iteration(), IterationId(0));
        assert!(s.last_metrics().rule_us.is_empty());
    }

    #[test]
    fn run_zero_does_nothing() {
        let mut s = sim();
        let summary = s.run(0, |_| ControlFlow::Continue(()));
        assert_eq!(summary.iterations, 0);
        assert!(!summary.stopped_early);
        assert_eq!(s.grid(), s.initial());
    }

    #[test]
    fn census_tracks_grid() {
        let mut s = sim();
        assert_eq!(s.census().count(sprawl_core::LandUse::Empty), 1);
        s.step();
        assert_eq!(s.census().count(sprawl_core::LandUse::Empty), 3);
    }
}
