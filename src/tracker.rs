//! Per-search bookkeeping around a [`StopCriterion`].
//!
//! [`EarlyStopper`] owns the state of exactly one search and turns each
//! decision into a [`ControlFlow`], the same signal an optimization loop
//! uses to break out early. [`replay`] runs a criterion over a recorded
//! sequence of losses, which is handy for tuning `patience` offline.

use core::ops::ControlFlow;

use crate::criterion::{NoProgressLoss, StopCriterion};
use crate::error::Result;
use crate::history::TrialHistory;

/// Threads a criterion's state across the trials of one search.
///
/// # Examples
///
/// ```
/// use early_stop::{CriterionConfig, EarlyStopper, NoProgressLoss, TrialLog};
///
/// let criterion = NoProgressLoss::new(
///     CriterionConfig::new().patience(2).warmup_trials(0),
/// )
/// .unwrap();
/// let mut stopper = EarlyStopper::new(criterion);
/// let mut log = TrialLog::new();
///
/// let mut trials = 0;
/// for loss in [3.0, 2.0, 2.5, 2.1] {
///     log.push_complete(loss);
///     trials += 1;
///     if stopper.observe(&log).unwrap().is_break() {
///         break;
///     }
/// }
/// assert_eq!(trials, 4);
/// assert!(stopper.is_stopped());
/// ```
#[derive(Debug)]
pub struct EarlyStopper<C: StopCriterion = NoProgressLoss> {
    criterion: C,
    state: C::State,
    stopped: bool,
    n_observed: usize,
}

impl<C: StopCriterion> EarlyStopper<C> {
    /// Creates a stopper starting from the criterion's initial state.
    pub fn new(criterion: C) -> Self {
        Self::with_state(criterion, C::State::default())
    }

    /// Resumes a search from a previously returned state.
    pub fn with_state(criterion: C, state: C::State) -> Self {
        Self {
            criterion,
            state,
            stopped: false,
            n_observed: 0,
        }
    }

    /// Consults the criterion after the latest trial in `history`.
    ///
    /// Call exactly once per finished trial, after it has been appended.
    /// Returns `ControlFlow::Break(())` when the search should halt.
    ///
    /// # Errors
    ///
    /// Propagates the criterion's error, e.g.
    /// [`Error::EmptyHistory`](crate::Error::EmptyHistory). The carried
    /// state is left untouched on error.
    pub fn observe<H>(&mut self, history: &H) -> Result<ControlFlow<()>>
    where
        H: TrialHistory + ?Sized,
        C::State: Clone,
    {
        let (should_stop, state) = self.criterion.evaluate(history, self.state.clone())?;
        self.state = state;
        self.n_observed += 1;
        self.stopped = should_stop;
        Ok(if should_stop {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        })
    }

    /// Whether the last observation asked the search to stop.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Number of successful observations since creation or the last reset.
    #[must_use]
    pub fn n_observed(&self) -> usize {
        self.n_observed
    }

    /// The state that will be passed to the next evaluation.
    pub fn state(&self) -> &C::State {
        &self.state
    }

    /// The wrapped criterion.
    pub fn criterion(&self) -> &C {
        &self.criterion
    }

    /// Forgets all carried state so the stopper can drive a fresh search.
    pub fn reset(&mut self) {
        self.state = C::State::default();
        self.stopped = false;
        self.n_observed = 0;
    }

    /// Consumes the stopper, returning the final carried state.
    pub fn into_state(self) -> C::State {
        self.state
    }
}

/// Runs `criterion` over `losses` as if they arrived one trial at a time.
///
/// Returns one decision per trial. Evaluation continues past the first
/// stop so the full decision trace is visible.
///
/// ```
/// use early_stop::{CriterionConfig, NoProgressLoss, replay};
///
/// let criterion = NoProgressLoss::new(
///     CriterionConfig::new().patience(2).warmup_trials(0),
/// )
/// .unwrap();
/// let decisions = replay(&criterion, &[Some(1.0), None, None, None]).unwrap();
/// assert_eq!(decisions, [false, false, false, false]);
/// ```
///
/// # Errors
///
/// Propagates any error returned by the criterion.
pub fn replay<C>(criterion: &C, losses: &[Option<f64>]) -> Result<Vec<bool>>
where
    C: StopCriterion,
{
    let mut state = C::State::default();
    let mut decisions = Vec::with_capacity(losses.len());
    for n in 1..=losses.len() {
        let (should_stop, next) = criterion.evaluate(&losses[..n], state)?;
        decisions.push(should_stop);
        state = next;
    }
    Ok(decisions)
}
