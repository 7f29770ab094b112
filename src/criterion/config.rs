#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for [`NoProgressLoss`](super::NoProgressLoss).
///
/// Built with consuming setters; validation is deferred to
/// [`validate`](Self::validate), which
/// [`NoProgressLoss::new`](super::NoProgressLoss::new) calls.
///
/// # Examples
///
/// ```
/// use early_stop::CriterionConfig;
///
/// let config = CriterionConfig::new()
///     .patience(5)
///     .percent_tolerance(1.0)
///     .warmup_trials(10);
///
/// assert!(config.validate().is_ok());
/// assert!((config.relative_tolerance_value() - 0.01).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CriterionConfig {
    patience: usize,
    relative_tolerance: f64,
    warmup_trials: usize,
}

impl CriterionConfig {
    /// Default number of consecutive non-improving trials tolerated.
    pub const DEFAULT_PATIENCE: usize = 20;
    /// Default number of trials during which stopping is disabled.
    pub const DEFAULT_WARMUP_TRIALS: usize = 20;

    /// Creates a config with default settings.
    ///
    /// Default settings:
    /// - `patience`: 20
    /// - `relative_tolerance`: 0.0 (any strict improvement counts)
    /// - `warmup_trials`: 20
    #[must_use]
    pub fn new() -> Self {
        Self {
            patience: Self::DEFAULT_PATIENCE,
            relative_tolerance: 0.0,
            warmup_trials: Self::DEFAULT_WARMUP_TRIALS,
        }
    }

    /// Sets how many consecutive non-improving trials are tolerated before
    /// the criterion reports stop. Must be at least 1.
    #[must_use]
    pub fn patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Sets the minimum improvement, as a fraction of the best loss, that a
    /// new loss must beat to count as progress. `0.01` means 1%.
    #[must_use]
    pub fn relative_tolerance(mut self, fraction: f64) -> Self {
        self.relative_tolerance = fraction;
        self
    }

    /// Same as [`relative_tolerance`](Self::relative_tolerance), expressed
    /// in percent. `10.0` means the new loss must be more than 10% below the
    /// best loss.
    #[must_use]
    pub fn percent_tolerance(self, percent: f64) -> Self {
        self.relative_tolerance(percent / 100.0)
    }

    /// Sets the number of initial trials during which the criterion never
    /// reports stop.
    #[must_use]
    pub fn warmup_trials(mut self, n: usize) -> Self {
        self.warmup_trials = n;
        self
    }

    /// Configured patience.
    #[must_use]
    pub fn patience_value(&self) -> usize {
        self.patience
    }

    /// Configured relative tolerance, as a fraction.
    #[must_use]
    pub fn relative_tolerance_value(&self) -> f64 {
        self.relative_tolerance
    }

    /// Configured warm-up length.
    #[must_use]
    pub fn warmup_trials_value(&self) -> usize {
        self.warmup_trials
    }

    /// Checks every setting and reports the first one out of range.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPatience`] if `patience` is zero.
    /// - [`Error::InvalidTolerance`] if `relative_tolerance` is negative,
    ///   NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.patience == 0 {
            return Err(Error::InvalidPatience(self.patience));
        }
        if !self.relative_tolerance.is_finite() || self.relative_tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.relative_tolerance));
        }
        Ok(())
    }
}

impl Default for CriterionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CriterionConfig::default();
        assert_eq!(config.patience_value(), 20);
        assert_eq!(config.warmup_trials_value(), 20);
        assert_eq!(config.relative_tolerance_value(), 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_patience_is_rejected() {
        let err = CriterionConfig::new().patience(0).validate().unwrap_err();
        assert_eq!(err, Error::InvalidPatience(0));
    }

    #[test]
    fn negative_or_non_finite_tolerance_is_rejected() {
        for bad in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = CriterionConfig::new().relative_tolerance(bad).validate();
            assert!(
                matches!(result, Err(Error::InvalidTolerance(_))),
                "tolerance {bad} should be rejected"
            );
        }
    }

    #[test]
    fn zero_warmup_and_zero_tolerance_are_allowed() {
        let config = CriterionConfig::new()
            .patience(1)
            .relative_tolerance(0.0)
            .warmup_trials(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn percent_tolerance_is_converted_to_fraction() {
        let config = CriterionConfig::new().percent_tolerance(10.0);
        assert!((config.relative_tolerance_value() - 0.1).abs() < 1e-12);
    }
}
