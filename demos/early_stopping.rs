//! Early stopping — halt a random search once the loss stops improving.
//!
//! Samples `x` uniformly, evaluates `(x - 3)^2` (failing now and then), and
//! asks an [`EarlyStopper`] after every trial whether to keep going.
//!
//! Run with: `cargo run --example early_stopping`

use early_stop::prelude::*;

fn objective(rng: &mut fastrand::Rng) -> Option<f64> {
    let x = -10.0 + rng.f64() * 20.0;
    // Roughly one trial in ten fails.
    if rng.u8(0..10) == 0 {
        None
    } else {
        Some((x - 3.0).powi(2))
    }
}

fn main() -> early_stop::Result<()> {
    let criterion = NoProgressLoss::new(
        CriterionConfig::new()
            .patience(15)
            .percent_tolerance(1.0)
            .warmup_trials(10),
    )?;
    let mut stopper = EarlyStopper::new(criterion);
    let mut log = TrialLog::with_capacity(500);
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..500 {
        let id = log.push(objective(&mut rng));
        if stopper.observe(&log)?.is_break() {
            println!("No progress for 15 trials, stopping after trial #{id}");
            break;
        }
    }

    let state = stopper.state();
    println!(
        "Ran {} trials — best loss {:?}, criterion best {:?}, no-progress count {}",
        log.n_trials(),
        log.best_loss(),
        state.best_loss,
        state.no_progress_count,
    );

    Ok(())
}
