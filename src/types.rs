//! Core types shared by histories and criteria.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a finished trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrialState {
    /// The trial completed and reported a loss.
    Complete,
    /// The trial failed with an error.
    Failed,
    /// The trial was stopped early by a pruner.
    Pruned,
}

impl TrialState {
    /// Returns `true` if a trial in this state carries a loss value.
    #[must_use]
    pub fn has_loss(self) -> bool {
        matches!(self, Self::Complete)
    }
}
