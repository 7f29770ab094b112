#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! No-progress stopping criterion for hyperparameter search loops.
//!
//! After every finished trial, a search loop asks a [`StopCriterion`]
//! whether to keep going. [`NoProgressLoss`] stops once the loss has failed
//! to improve by more than a relative tolerance for `patience` consecutive
//! trials, after an initial warm-up period. The criterion itself is
//! immutable: everything it remembers lives in a [`CriterionState`] value
//! that the caller threads from one call to the next.
//!
//! # Getting Started
//!
//! ```
//! use early_stop::prelude::*;
//!
//! let criterion = NoProgressLoss::new(
//!     CriterionConfig::new()
//!         .patience(3)
//!         .percent_tolerance(1.0)
//!         .warmup_trials(2),
//! )?;
//!
//! let mut log = TrialLog::new();
//! let mut state = CriterionState::default();
//! for loss in [5.0, 4.0, 3.0, 2.99, 2.98, 2.975] {
//!     log.push_complete(loss);
//!     let (should_stop, next) = criterion.evaluate(&log, state)?;
//!     state = next;
//!     if should_stop {
//!         break;
//!     }
//! }
//! assert_eq!(state.best_loss, Some(3.0));
//! assert_eq!(state.no_progress_count, 3);
//! # Ok::<(), early_stop::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`TrialHistory`] | What a criterion reads: trial count and the latest loss. |
//! | [`TrialLog`] | Append-only history with sequential trial ids. |
//! | [`CriterionConfig`] | `patience`, `relative_tolerance`, `warmup_trials`. |
//! | [`CriterionState`] | Best loss and no-progress counter carried between calls. |
//! | [`NoProgressLoss`] | The stop criterion. |
//! | [`EarlyStopper`] | Owns the state for one search and yields `ControlFlow`. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on configs, states and records | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on non-improving trials and on stop | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod criterion;
mod error;
mod history;
mod tracker;
mod types;

pub use criterion::{CriterionConfig, CriterionState, NoProgressLoss, StopCriterion};
pub use error::{Error, Result};
pub use history::{TrialHistory, TrialLog, TrialRecord};
pub use tracker::{EarlyStopper, replay};
pub use types::TrialState;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use early_stop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::criterion::{CriterionConfig, CriterionState, NoProgressLoss, StopCriterion};
    pub use crate::error::{Error, Result};
    pub use crate::history::{TrialHistory, TrialLog, TrialRecord};
    pub use crate::tracker::{EarlyStopper, replay};
    pub use crate::types::TrialState;
}
