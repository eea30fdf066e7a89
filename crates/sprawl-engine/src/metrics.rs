//! Per-iteration performance metrics.

/// Timing and change counts collected during a single iteration.
///
/// All durations are in microseconds. Per-rule entries appear in
/// execution order; a rule listed twice appears twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole iteration, in microseconds.
    pub total_us: u64,
    /// Per-rule execution times: `(name, microseconds)`.
    pub rule_us: Vec<(String, u64)>,
    /// Per-rule count of cells whose category changed.
    pub changed_cells: Vec<(String, usize)>,
}

impl StepMetrics {
    /// Cells changed across all rules. A cell changed by two rules counts
    /// twice.
    pub fn total_changed(&self) -> usize {
        self.changed_cells.iter().map(|(_, n)| n).sum()
    }
}
