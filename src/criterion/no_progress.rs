use super::{CriterionConfig, CriterionState, StopCriterion};
use crate::error::{Error, Result};
use crate::history::TrialHistory;

/// Stops a search once the loss has not improved for `patience`
/// consecutive trials.
///
/// A trial counts as progress when its loss is strictly below
/// `best_loss - |best_loss * relative_tolerance|`. The first
/// `warmup_trials` trials never trigger a stop.
///
/// Two behaviours are kept deliberately literal:
///
/// - A trial with no result (failed or pruned) counts as progress. It
///   resets the counter but leaves `best_loss` unchanged, so failures never
///   push a search towards stopping.
/// - The tolerance band is `|best_loss * tolerance|`, so the threshold
///   always sits at or below the best loss whatever its sign. A best loss
///   of exactly zero makes the tolerance a no-op.
///
/// # Examples
///
/// ```
/// use early_stop::{CriterionConfig, CriterionState, NoProgressLoss, StopCriterion};
///
/// let criterion = NoProgressLoss::new(
///     CriterionConfig::new().patience(3).warmup_trials(2),
/// )
/// .unwrap();
///
/// let losses = [Some(5.0), Some(4.0), Some(3.0), Some(3.0), Some(3.0), Some(3.0)];
/// let mut state = CriterionState::default();
/// let mut decisions = Vec::new();
/// for n in 1..=losses.len() {
///     let (stop, next) = criterion.evaluate(&losses[..n], state).unwrap();
///     decisions.push(stop);
///     state = next;
/// }
/// assert_eq!(decisions, [false, false, false, false, false, true]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoProgressLoss {
    config: CriterionConfig,
}

impl NoProgressLoss {
    /// Creates a criterion from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPatience`] or [`Error::InvalidTolerance`] if
    /// the config is out of range. Values are never clamped.
    pub fn new(config: CriterionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The config this criterion was built with.
    #[must_use]
    pub fn config(&self) -> &CriterionConfig {
        &self.config
    }

    /// The loss a new trial must beat, given the current best loss.
    #[must_use]
    pub fn threshold(&self, best_loss: f64) -> f64 {
        best_loss - (best_loss * self.config.relative_tolerance_value()).abs()
    }
}

impl StopCriterion for NoProgressLoss {
    type State = CriterionState;

    fn evaluate<H>(&self, history: &H, state: CriterionState) -> Result<(bool, CriterionState)>
    where
        H: TrialHistory + ?Sized,
    {
        let n_trials = history.n_trials();
        if n_trials == 0 {
            return Err(Error::EmptyHistory);
        }
        let new_loss = history.last_loss();
        let patience = self.config.patience_value();

        if n_trials <= self.config.warmup_trials_value() {
            let state = CriterionState::new(new_loss, state.no_progress_count.min(patience));
            return Ok((false, state));
        }

        // No result counts as progress; the best loss is left stale.
        let Some(new_loss) = new_loss else {
            return Ok((false, CriterionState::new(state.best_loss, 0)));
        };

        let Some(best_loss) = state.best_loss else {
            let count = state.no_progress_count.saturating_add(1).min(patience);
            return Ok((count >= patience, CriterionState::new(Some(new_loss), count)));
        };

        let threshold = self.threshold(best_loss);
        if new_loss < threshold {
            return Ok((false, CriterionState::new(Some(new_loss), 0)));
        }

        let count = state.no_progress_count.saturating_add(1).min(patience);
        trace_debug!(
            no_progress_count = count,
            patience,
            best_loss,
            threshold,
            new_loss,
            "no progress made"
        );

        let should_stop = count >= patience;
        if should_stop && state.no_progress_count < patience {
            trace_info!(n_trials, best_loss, patience, "stopping: no progress within patience");
        }
        Ok((should_stop, CriterionState::new(Some(best_loss), count)))
    }
}
