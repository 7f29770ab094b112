//! Stop criteria for hyperparameter search loops.
//!
//! A stop criterion is consulted once after every finished trial and decides
//! whether the whole search should halt. It never holds mutable state of its
//! own: whatever it needs to remember between calls is returned to the
//! caller as a `State` value and passed back in on the next call. One
//! criterion can therefore serve any number of independent searches.

mod config;
mod no_progress;
mod state;

pub use config::CriterionConfig;
pub use no_progress::NoProgressLoss;
pub use state::CriterionState;

use crate::error::Result;
use crate::history::TrialHistory;

/// Trait for pluggable search-level stopping strategies.
///
/// # Implementing a custom criterion
///
/// ```
/// use early_stop::criterion::StopCriterion;
/// use early_stop::{Error, Result, TrialHistory};
///
/// /// Stop as soon as any trial reaches the target loss.
/// struct TargetLoss(f64);
///
/// impl StopCriterion for TargetLoss {
///     type State = ();
///
///     fn evaluate<H>(&self, history: &H, state: ()) -> Result<(bool, ())>
///     where
///         H: TrialHistory + ?Sized,
///     {
///         if history.is_empty() {
///             return Err(Error::EmptyHistory);
///         }
///         let hit = history.last_loss().is_some_and(|l| l <= self.0);
///         Ok((hit, state))
///     }
/// }
///
/// let losses = [Some(3.0), Some(0.5)];
/// assert!(TargetLoss(1.0).evaluate(&losses[..], ()).unwrap().0);
/// ```
pub trait StopCriterion {
    /// Memory carried from one call to the next.
    ///
    /// `Default` must produce the state used before the first trial.
    type State: Default;

    /// Decide whether to stop after the most recent trial in `history`.
    ///
    /// Returns the decision together with the state to pass to the next
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHistory`](crate::Error::EmptyHistory) if
    /// `history` contains no trials.
    fn evaluate<H>(&self, history: &H, state: Self::State) -> Result<(bool, Self::State)>
    where
        H: TrialHistory + ?Sized;
}
