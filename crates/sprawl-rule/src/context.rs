//! Execution context passed to rules during an iteration.
//!
//! [`StepContext`] splits grid access into the frozen pre-rule snapshot
//! and the write buffer that becomes the rule's output.

use sprawl_core::{IterationId, LandGrid, LandUse};

/// Execution context passed to each rule's `step()` method.
///
/// # Split-borrow semantics
///
/// - **`snapshot()`** is the grid as it was before this rule started.
///   It never changes while the rule runs, so every cell's transition is
///   decided against the same state.
/// - **`transition()`** writes into the next grid, which starts as a copy
///   of the snapshot. Cells a rule does not touch keep their category.
pub struct StepContext<'a> {
    snapshot: &'a LandGrid,
    next: &'a mut LandGrid,
    iteration: IterationId,
    changed: usize,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// `next` must have the snapshot's shape; the composer passes a clone
    /// of the snapshot.
    pub fn new(snapshot: &'a LandGrid, next: &'a mut LandGrid, iteration: IterationId) -> Self {
        debug_assert_eq!(snapshot.shape(), next.shape());
        Self {
            snapshot,
            next,
            iteration,
            changed: 0,
        }
    }

    /// The frozen pre-rule grid.
    pub fn snapshot(&self) -> &LandGrid {
        self.snapshot
    }

    /// The iteration being computed.
    pub fn iteration(&self) -> IterationId {
        self.iteration
    }

    /// Number of cells changed so far by this rule.
    pub fn changed(&self) -> usize {
        self.changed
    }

    /// Set `destination` on every cell where both predicates hold.
    ///
    /// `eligible` is evaluated on the cell's snapshot category; `trigger`
    /// receives the cell's flat row-major index, for lookups into derived
    /// fields computed from the snapshot. Returns the number of cells
    /// whose category actually changed.
    pub fn transition(
        &mut self,
        eligible: impl Fn(LandUse) -> bool,
        trigger: impl Fn(usize) -> bool,
        destination: LandUse,
    ) -> usize {
        let mut changed = 0;
        let out = self.next.as_mut_slice();
        for (i, &cell) in self.snapshot.iter().enumerate() {
            if eligible(cell) && trigger(i) && out[i] != destination {
                out[i] = destination;
                changed += 1;
            }
        }
        self.changed += changed;
        changed
    }
}
