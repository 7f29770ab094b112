/// Errors returned by stop criteria and their configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when patience is zero.
    #[error("invalid patience: {0} must be at least 1")]
    InvalidPatience(usize),

    /// Returned when the relative tolerance is negative or not finite.
    #[error("invalid relative tolerance: {0} must be a finite, non-negative fraction")]
    InvalidTolerance(f64),

    /// Returned when a criterion is evaluated against a history with no trials.
    #[error("trial history is empty: evaluate must be called after a trial completes")]
    EmptyHistory,
}

impl Error {
    /// Returns `true` for errors raised while validating a
    /// [`CriterionConfig`](crate::CriterionConfig).
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidPatience(_) | Self::InvalidTolerance(_))
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_classified() {
        assert!(Error::InvalidPatience(0).is_config_error());
        assert!(Error::InvalidTolerance(-1.0).is_config_error());
        assert!(!Error::EmptyHistory.is_config_error());
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            Error::InvalidPatience(0).to_string(),
            "invalid patience: 0 must be at least 1"
        );
        assert!(Error::InvalidTolerance(-0.5).to_string().contains("-0.5"));
    }
}
