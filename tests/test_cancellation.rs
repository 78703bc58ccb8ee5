use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use gmab::GmabBuilder;

#[test]
fn test_pre_set_token_stops_after_initialization() {
    let calls = AtomicUsize::new(0);
    let objective = |x: &[i32]| {
        calls.fetch_add(1, Ordering::Relaxed);
        x[0] as f64
    };
    let token = Arc::new(AtomicBool::new(true));

    let mut gmab = GmabBuilder::default()
        .objective(objective)
        .bounds(vec![(0, 30)])
        .population_size(20)
        .cancellation_token(token)
        .seed(1)
        .build()
        .expect("failed to build GMAB");

    // Cancellation is checked at iteration boundaries, so only the
    // initialization evaluations run and the best-so-far comes back.
    let best = gmab.optimize(1_000).expect("cancelled run must return partial results");
    assert_eq!(calls.load(Ordering::Relaxed), 20);
    assert_eq!(best.n_pulls(), 1);

    let min_mean = gmab
        .population()
        .arms()
        .map(|arm| arm.mean())
        .fold(f64::INFINITY, f64::min);
    assert_eq!(best.mean(), min_mean);
}

#[test]
fn test_token_set_mid_run_stops_at_the_next_iteration_boundary() {
    let calls = Arc::new(AtomicUsize::new(0));
    let token = Arc::new(AtomicBool::new(false));

    let calls_inner = calls.clone();
    let token_inner = token.clone();
    let objective = move |x: &[i32]| {
        if calls_inner.fetch_add(1, Ordering::Relaxed) + 1 >= 100 {
            token_inner.store(true, Ordering::Relaxed);
        }
        x[0] as f64
    };

    let mut gmab = GmabBuilder::default()
        .objective(objective)
        .bounds(vec![(0, 30)])
        .population_size(20)
        .cancellation_token(token)
        .seed(2)
        .build()
        .expect("failed to build GMAB");

    gmab.optimize(10_000).expect("cancelled run must return partial results");

    // The iteration in flight finishes, then the loop stops well short of
    // the full budget.
    let spent = calls.load(Ordering::Relaxed);
    assert!(spent >= 100, "spent only {spent} evaluations");
    assert!(spent < 10_000, "cancellation did not stop the run");
}

#[test]
fn test_unset_token_lets_the_run_complete() {
    let calls = AtomicUsize::new(0);
    let objective = |x: &[i32]| {
        calls.fetch_add(1, Ordering::Relaxed);
        x[0] as f64
    };

    let mut gmab = GmabBuilder::default()
        .objective(objective)
        .bounds(vec![(0, 30)])
        .population_size(20)
        .cancellation_token(Arc::new(AtomicBool::new(false)))
        .seed(3)
        .build()
        .expect("failed to build GMAB");

    gmab.optimize(500).expect("run failed");
    assert_eq!(calls.load(Ordering::Relaxed), 500);
}
