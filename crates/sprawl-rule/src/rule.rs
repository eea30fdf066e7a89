//! The [`Rule`] trait.
//!
//! Rules are stateless transition operators executed in sequence each
//! iteration. Each one reads a frozen snapshot of the grid and writes
//! its destination category into a fresh copy.

use crate::context::StepContext;
use sprawl_core::{IterationId, LandGrid, LandUse};

/// A land-use transition rule.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same snapshot, same output.
/// - `&self`: rules are stateless; thresholds are fixed at construction.
/// - `step()` reads only [`StepContext::snapshot`], so cell updates
///   within one rule never see each other (synchronous update).
/// - Water and Road cells are never eligible in any catalog rule.
///
/// # Object safety
///
/// This trait is object-safe; the composer stores rules as
/// `Vec<Box<dyn Rule>>`.
///
/// # Examples
///
/// A rule that turns every Park into Empty land:
///
/// ```
/// use sprawl_core::{LandGrid, LandUse};
/// use sprawl_rule::{Rule, StepContext};
///
/// struct ClearParks;
///
/// impl Rule for ClearParks {
///     fn name(&self) -> &str { "clear_parks" }
///
///     fn destination(&self) -> LandUse { LandUse::Empty }
///
///     fn step(&self, ctx: &mut StepContext<'_>) {
///         ctx.transition(|c| c == LandUse::Park, |_| true, LandUse::Empty);
///     }
/// }
///
/// let grid = LandGrid::from_codes(1, 3, &[5, 7, 5]).unwrap();
/// let next = ClearParks.apply(&grid);
/// assert_eq!(next.to_codes(), vec![0, 7, 0]);
/// assert_eq!(grid.to_codes(), vec![5, 7, 5]);
/// ```
pub trait Rule: Send + 'static {
    /// Human-readable name for error reporting and metrics.
    fn name(&self) -> &str;

    /// The category this rule writes.
    fn destination(&self) -> LandUse;

    /// Execute the rule once against the context's snapshot.
    fn step(&self, ctx: &mut StepContext<'_>);

    /// Apply the rule to `grid` and return the resulting grid.
    ///
    /// The argument is never mutated; the result is a new value.
    fn apply(&self, grid: &LandGrid) -> LandGrid {
        let mut next = grid.clone();
        let mut ctx = StepContext::new(grid, &mut next, IterationId(0));
        self.step(&mut ctx);
        next
    }
}
