use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use early_stop::{
    CriterionConfig, CriterionState, NoProgressLoss, StopCriterion, TrialLog, replay,
};

/// Build a synthetic loss stream that slowly improves with noise and the
/// occasional failed trial.
fn build_losses(n: usize) -> Vec<Option<f64>> {
    let mut rng = fastrand::Rng::with_seed(42);
    (0..n)
        .map(|i| {
            if rng.u8(0..20) == 0 {
                None
            } else {
                Some(1.0 / (1.0 + i as f64) + rng.f64() * 0.05)
            }
        })
        .collect()
}

fn bench_single_evaluate(c: &mut Criterion) {
    let criterion = NoProgressLoss::new(CriterionConfig::new().patience(10).warmup_trials(5))
        .unwrap();
    let mut group = c.benchmark_group("evaluate");

    for history_size in [10, 1_000, 100_000] {
        let mut log = TrialLog::with_capacity(history_size);
        for loss in build_losses(history_size) {
            log.push(loss);
        }
        let state = CriterionState::new(Some(0.5), 3);
        group.bench_with_input(
            BenchmarkId::new("history", history_size),
            &log,
            |b, log| b.iter(|| criterion.evaluate(log, state)),
        );
    }
    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let criterion = NoProgressLoss::new(
        CriterionConfig::new()
            .patience(25)
            .percent_tolerance(0.5)
            .warmup_trials(20),
    )
    .unwrap();
    let mut group = c.benchmark_group("replay");

    for n in [100, 10_000] {
        let losses = build_losses(n);
        group.bench_with_input(BenchmarkId::new("trials", n), &losses, |b, losses| {
            b.iter(|| replay(&criterion, losses));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_evaluate, bench_replay);
criterion_main!(benches);
