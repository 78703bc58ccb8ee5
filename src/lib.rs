//! # gmab
//!
//! <div align="center">
//! <strong>Genetic Multi-Armed Bandit Optimization in Pure Rust</strong><br>
//! Derivative-free minimization of noisy objectives over bounded integer spaces.
//! </div>
//!
//! ---
//!
//! ## Overview
//!
//! `gmab` finds the integer configuration that minimizes the *expected value*
//! of a stochastic objective within a fixed evaluation budget. It hybridizes
//! two ideas:
//!
//! * a **steady-state genetic algorithm** over integer action vectors:
//!   tournament selection, uniform crossover and bounded scale-aware mutation;
//! * a **multi-armed-bandit allocation policy** that re-pulls the top-ranked
//!   arms each iteration, sharpening their mean estimates exactly where noise
//!   could flip the ranking.
//!
//! Runs are deterministic given a seed: all randomness flows through one
//! generator on the main sequence, even when offspring evaluation is fanned
//! out over a rayon pool.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gmab::GmabBuilder;
//!
//! /// 2-D Rosenbrock over integers; global minimum at (1, 1).
//! fn rosenbrock(x: &[i32]) -> f64 {
//!     let (a, b) = (x[0] as f64, x[1] as f64);
//!     100.0 * (b - a * a).powi(2) + (1.0 - a).powi(2)
//! }
//!
//! let mut gmab = GmabBuilder::default()
//!     .objective(rosenbrock as fn(&[i32]) -> f64)
//!     .bounds(vec![(-5, 10), (-5, 10)])
//!     .population_size(20)
//!     .seed(42)
//!     .build()
//!     .expect("failed to build GMAB");
//!
//! let best = gmab.optimize(10_000).expect("run failed");
//! println!(
//!     "best {:?} with mean {} over {} pulls",
//!     best.action_vector(),
//!     best.mean(),
//!     best.n_pulls()
//! );
//! ```
//!
//! For hyperparameter-search style tasks with named integer / float /
//! categorical parameters, use the [`Study`](crate::study::Study) facade.
//!
//! ## Module layout
//!
//! * [`algorithm`](crate::algorithm) – the GMAB driver and its builder
//! * [`arm`](crate::arm) – candidate points with running reward statistics
//! * [`population`](crate::population) – the ranked, deduplicated arm pool
//! * [`bandit`](crate::bandit) – the sample-allocation policy
//! * [`operators`](crate::operators) – sampling, selection, crossover, mutation
//! * [`params`](crate::params) – parameter definitions and decoding
//! * [`study`](crate::study) – multi-run optimization facade
//! * [`evaluator`](crate::evaluator) – objective invocation pipeline
//! * [`random`](crate::random) – pluggable RNG abstraction
//!
//! ---

pub mod algorithm;
pub mod arm;
pub mod bandit;
pub mod evaluator;
pub(crate) mod helpers;
pub mod operators;
pub mod params;
pub mod population;
pub mod random;
pub mod search_space;
pub mod study;

pub use algorithm::{Gmab, GmabBuilder, GmabBuilderError, GmabError, RunContext};
pub use arm::{Arm, ArmError};
pub use bandit::{SampleAllocationPolicy, TopRankRepull};
pub use evaluator::{Evaluator, EvaluatorError, ObjectiveFn};
pub use operators::{
    BoundedUniformMutation, CrossoverOperator, GeneticOperator, MutationOperator,
    RandomSamplingInt, RankTournamentSelection, SamplingOperator, SelectionOperator,
    UniformCrossover,
};
pub use params::{
    CategoricalParam, FloatParam, IntParam, Param, ParamError, ParamSpace, ParamValue, TrialParams,
};
pub use population::Population;
pub use random::{GmabRandomGenerator, NoopRandomGenerator, RandomGenerator, TestDummyRng};
pub use search_space::{SearchSpace, SearchSpaceError};
pub use study::{RunReport, Study, StudyError, TrialObjective};
