//! Trial histories as seen by a stop criterion.
//!
//! A criterion never rescans the full history: it only needs the number of
//! finished trials and the loss of the most recent one. [`TrialHistory`]
//! captures exactly that, so any storage the search loop already keeps can
//! be handed to a criterion without copying.
//!
//! ```
//! use early_stop::{TrialHistory, TrialLog};
//!
//! let mut log = TrialLog::new();
//! log.push_complete(0.8);
//! log.push_failed();
//!
//! assert_eq!(log.n_trials(), 2);
//! assert_eq!(log.last_loss(), None);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::TrialState;

/// Read-only view of the trials finished so far, in completion order.
///
/// Implemented for slices and vectors of [`TrialRecord`] and of raw
/// `Option<f64>` losses, and for [`TrialLog`].
pub trait TrialHistory {
    /// Number of finished trials.
    fn n_trials(&self) -> usize;

    /// Loss of the most recently finished trial.
    ///
    /// `None` either when the last trial produced no result (failed or
    /// pruned) or when the history is empty; use
    /// [`n_trials`](Self::n_trials) to tell the two apart.
    fn last_loss(&self) -> Option<f64>;

    /// Returns `true` if no trial has finished yet.
    fn is_empty(&self) -> bool {
        self.n_trials() == 0
    }
}

/// A single finished trial.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialRecord {
    /// Identifier assigned by the search loop.
    pub id: u64,
    /// The reported loss, or `None` when the trial produced no result.
    pub loss: Option<f64>,
    /// How the trial finished.
    pub state: TrialState,
}

impl TrialRecord {
    /// A trial that completed with the given loss.
    #[must_use]
    pub fn complete(id: u64, loss: f64) -> Self {
        Self {
            id,
            loss: Some(loss),
            state: TrialState::Complete,
        }
    }

    /// A trial that failed before reporting a loss.
    #[must_use]
    pub fn failed(id: u64) -> Self {
        Self {
            id,
            loss: None,
            state: TrialState::Failed,
        }
    }

    /// A trial that was pruned before reporting a loss.
    #[must_use]
    pub fn pruned(id: u64) -> Self {
        Self {
            id,
            loss: None,
            state: TrialState::Pruned,
        }
    }
}

impl TrialHistory for [TrialRecord] {
    fn n_trials(&self) -> usize {
        self.len()
    }

    fn last_loss(&self) -> Option<f64> {
        self.last().and_then(|r| r.loss)
    }
}

impl TrialHistory for Vec<TrialRecord> {
    fn n_trials(&self) -> usize {
        self.len()
    }

    fn last_loss(&self) -> Option<f64> {
        self.as_slice().last_loss()
    }
}

impl TrialHistory for [Option<f64>] {
    fn n_trials(&self) -> usize {
        self.len()
    }

    fn last_loss(&self) -> Option<f64> {
        self.last().copied().flatten()
    }
}

impl TrialHistory for Vec<Option<f64>> {
    fn n_trials(&self) -> usize {
        self.len()
    }

    fn last_loss(&self) -> Option<f64> {
        self.as_slice().last_loss()
    }
}

/// Append-only log of finished trials.
///
/// Ids are assigned sequentially starting at zero. Records can only be
/// appended, never edited or removed, which is the ordering contract a
/// stop criterion relies on.
#[derive(Clone, Debug, Default)]
pub struct TrialLog {
    records: Vec<TrialRecord>,
}

impl TrialLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log with room for `capacity` trials.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record built from a raw loss and returns its id.
    ///
    /// `Some` becomes a complete trial, `None` a failed one.
    pub fn push(&mut self, loss: Option<f64>) -> u64 {
        match loss {
            Some(v) => self.push_complete(v),
            None => self.push_failed(),
        }
    }

    /// Appends a completed trial and returns its id.
    pub fn push_complete(&mut self, loss: f64) -> u64 {
        let id = self.next_id();
        self.records.push(TrialRecord::complete(id, loss));
        id
    }

    /// Appends a failed trial and returns its id.
    pub fn push_failed(&mut self) -> u64 {
        let id = self.next_id();
        self.records.push(TrialRecord::failed(id));
        id
    }

    /// Appends a pruned trial and returns its id.
    pub fn push_pruned(&mut self) -> u64 {
        let id = self.next_id();
        self.records.push(TrialRecord::pruned(id));
        id
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Iterates over the records, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, TrialRecord> {
        self.records.iter()
    }

    /// The lowest loss among completed trials, if any.
    #[must_use]
    pub fn best_loss(&self) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|r| r.loss)
            .min_by(f64::total_cmp)
    }

    fn next_id(&self) -> u64 {
        self.records.len() as u64
    }
}

impl TrialHistory for TrialLog {
    fn n_trials(&self) -> usize {
        self.records.len()
    }

    fn last_loss(&self) -> Option<f64> {
        self.records.last_loss()
    }
}

impl<'a> IntoIterator for &'a TrialLog {
    type Item = &'a TrialRecord;
    type IntoIter = core::slice::Iter<'a, TrialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_no_last_loss() {
        let records: Vec<TrialRecord> = Vec::new();
        assert_eq!(records.n_trials(), 0);
        assert_eq!(records.last_loss(), None);

        let losses: &[Option<f64>] = &[];
        assert!(TrialHistory::is_empty(losses));
    }

    #[test]
    fn last_loss_reads_only_the_tail() {
        let records = vec![
            TrialRecord::complete(0, 1.0),
            TrialRecord::failed(1),
            TrialRecord::complete(2, 3.0),
        ];
        assert_eq!(records.n_trials(), 3);
        assert_eq!(records.last_loss(), Some(3.0));

        let losses = vec![Some(1.0), None];
        assert_eq!(losses.last_loss(), None);
        assert_eq!(losses[..1].last_loss(), Some(1.0));
    }

    #[test]
    fn failed_and_pruned_records_have_no_loss() {
        assert_eq!(TrialRecord::failed(7).loss, None);
        assert_eq!(TrialRecord::pruned(7).state, TrialState::Pruned);
        assert!(!TrialRecord::pruned(7).state.has_loss());
        assert!(TrialRecord::complete(7, 0.0).state.has_loss());
    }

    #[test]
    fn log_assigns_sequential_ids() {
        let mut log = TrialLog::with_capacity(4);
        assert_eq!(log.push_complete(2.0), 0);
        assert_eq!(log.push_pruned(), 1);
        assert_eq!(log.push(None), 2);
        assert_eq!(log.push(Some(1.5)), 3);

        let ids: Vec<u64> = log.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(log.records()[2].state, TrialState::Failed);
        assert_eq!(log.last_loss(), Some(1.5));
        assert_eq!(log.best_loss(), Some(1.5));
    }

    #[test]
    fn best_loss_ignores_missing_results() {
        let mut log = TrialLog::new();
        assert_eq!(log.best_loss(), None);
        log.push_failed();
        assert_eq!(log.best_loss(), None);
        log.push_complete(-4.0);
        log.push_complete(2.0);
        assert_eq!(log.best_loss(), Some(-4.0));
        assert_eq!((&log).into_iter().count(), 3);
    }
}
