use gmab::{GmabBuilder, GmabError};
use rstest::rstest;

fn sphere(x: &[i32]) -> f64 {
    x.iter().map(|&v| (v * v) as f64).sum()
}

fn builder() -> GmabBuilder<fn(&[i32]) -> f64> {
    GmabBuilder::default()
        .objective(sphere as fn(&[i32]) -> f64)
        .bounds(vec![(0, 10), (0, 10)])
}

#[rstest]
#[case(-0.1)]
#[case(1.1)]
fn test_mutation_rate_outside_the_unit_interval_is_rejected(#[case] rate: f64) {
    let err = builder().mutation_rate(rate).build().unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("mutation_rate")),
        "unexpected error: {err}"
    );
}

#[rstest]
#[case(-0.1)]
#[case(1.1)]
fn test_crossover_rate_outside_the_unit_interval_is_rejected(#[case] rate: f64) {
    let err = builder().crossover_rate(rate).build().unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("crossover_rate")),
        "unexpected error: {err}"
    );
}

#[rstest]
#[case(0.0)]
#[case(-0.1)]
#[case(1.5)]
fn test_mutation_span_outside_the_half_open_interval_is_rejected(#[case] span: f64) {
    let err = builder().mutation_span(span).build().unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("mutation_span")),
        "unexpected error: {err}"
    );
}

#[rstest]
#[case(0)]
#[case(1)]
fn test_population_size_below_two_is_rejected(#[case] population_size: usize) {
    let err = builder().population_size(population_size).build().unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("population_size")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_population_size_exceeding_cardinality_is_rejected() {
    // (0,1) x (0,1) has only 4 points, below the default population size.
    let err = GmabBuilder::default()
        .objective(sphere as fn(&[i32]) -> f64)
        .bounds(vec![(0, 1), (0, 1)])
        .build()
        .unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("population_size")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_population_size_equal_to_cardinality_enumerates_the_space() {
    let mut gmab = GmabBuilder::default()
        .objective(sphere as fn(&[i32]) -> f64)
        .bounds(vec![(0, 1), (0, 1)])
        .population_size(4)
        .seed(3)
        .build()
        .expect("exact enumeration must be allowed");

    gmab.optimize(4).expect("run failed");

    let mut keys: Vec<Vec<i32>> = gmab
        .population()
        .arms()
        .map(|arm| arm.action_vector().to_vec())
        .collect();
    keys.sort();
    assert_eq!(keys, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
}

#[test]
fn test_missing_objective_is_reported() {
    let err = GmabBuilder::<fn(&[i32]) -> f64>::default()
        .bounds(vec![(0, 10)])
        .build()
        .unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("objective")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let err = GmabBuilder::default()
        .objective(sphere as fn(&[i32]) -> f64)
        .bounds(vec![(5, 0)])
        .build()
        .unwrap_err();
    assert!(matches!(err, GmabError::SearchSpace(_)), "unexpected error: {err}");
}

#[test]
fn test_budget_below_population_size_is_rejected_before_any_evaluation() {
    let mut gmab = builder()
        .population_size(2)
        .seed(1)
        .build()
        .expect("failed to build GMAB");
    let err = gmab.optimize(1).unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("n_trials")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_zero_n_best_is_rejected() {
    let mut gmab = builder().seed(1).build().expect("failed to build GMAB");
    let err = gmab.optimize_best(100, 0).unwrap_err();
    assert!(
        matches!(err, GmabError::InvalidConfig(ref msg) if msg.contains("n_best")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_n_best_is_capped_at_the_population_size() {
    let mut gmab = builder()
        .population_size(5)
        .seed(1)
        .build()
        .expect("failed to build GMAB");
    let arms = gmab.optimize_best(100, 50).expect("run failed");
    assert_eq!(arms.len(), 5);
    // Ascending by mean.
    for pair in arms.windows(2) {
        assert!(pair[0].mean() <= pair[1].mean());
    }
}

#[test]
fn test_non_finite_objective_aborts_with_the_offending_vector() {
    let mut gmab = GmabBuilder::default()
        .objective(|_: &[i32]| f64::NAN)
        .bounds(vec![(0, 10), (0, 10)])
        .population_size(2)
        .seed(1)
        .build()
        .expect("failed to build GMAB");

    let err = gmab.optimize(100).unwrap_err();
    match err {
        GmabError::Objective(inner) => {
            let message = inner.to_string();
            assert!(message.contains("non-finite"), "unexpected message: {message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
