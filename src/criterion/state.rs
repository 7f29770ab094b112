#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Memory carried between successive calls to
/// [`NoProgressLoss::evaluate`](super::NoProgressLoss).
///
/// Start every search from [`CriterionState::default()`] and feed each
/// returned state into the next call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CriterionState {
    /// Best loss observed so far, `None` until one has been recorded.
    pub best_loss: Option<f64>,
    /// Consecutive trials without sufficient improvement.
    pub no_progress_count: usize,
}

impl CriterionState {
    /// Creates a state with the given values, e.g. to resume a search.
    #[must_use]
    pub fn new(best_loss: Option<f64>, no_progress_count: usize) -> Self {
        Self {
            best_loss,
            no_progress_count,
        }
    }
}
