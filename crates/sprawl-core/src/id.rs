//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing iteration counter.
///
/// `IterationId(0)` is the initial grid; each applied iteration of the
/// rule list advances the counter by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IterationId(pub u64);

impl IterationId {
    /// The iteration that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for IterationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IterationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
