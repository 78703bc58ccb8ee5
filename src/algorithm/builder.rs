//! # `builder` – Configuring a GMAB run
//!
//! [`GmabBuilder`] follows a fluent interface (setter methods + `.build()`)
//! to configure the optimizer: objective, per-dimension bounds, population
//! size, variation rates, seed, verbosity, parallel offspring evaluation and
//! an optional cancellation token. `.build()` validates every option before
//! a single evaluation can happen, so a misconfigured run never starts.
//!
//! ```rust,no_run
//! use gmab::GmabBuilder;
//!
//! fn sphere(x: &[i32]) -> f64 {
//!     x.iter().map(|&v| (v * v) as f64).sum()
//! }
//!
//! let mut gmab = GmabBuilder::default()
//!     .objective(sphere as fn(&[i32]) -> f64)
//!     .bounds(vec![(-10, 10), (-10, 10)])
//!     .population_size(20)
//!     .seed(42)
//!     .build()
//!     .expect("failed to build GMAB");
//! let best = gmab.optimize(1_000).expect("run failed");
//! println!("best arm: {:?}", best.action_vector());
//! ```
use std::sync::{Arc, atomic::AtomicBool};

use derive_builder::Builder;

use crate::{
    algorithm::{
        Gmab,
        error::GmabError,
        validators::{validate_mutation_span, validate_population_size, validate_probability},
    },
    evaluator::{Evaluator, ObjectiveFn},
    random::GmabRandomGenerator,
    search_space::SearchSpace,
};

/// Population size used when the caller does not override it.
pub const DEFAULT_POPULATION_SIZE: usize = 20;

#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "GmabBuilder",
    build_fn(name = "build_params", validate = "Self::validate")
)]
pub struct GmabParams<F>
where
    F: ObjectiveFn,
{
    /// Objective over raw action vectors, lower is better.
    objective: F,
    /// Inclusive `(lo, hi)` bounds, one pair per dimension.
    bounds: Vec<(i32, i32)>,
    #[builder(default = "DEFAULT_POPULATION_SIZE")]
    population_size: usize,
    #[builder(default = "0.1")]
    mutation_rate: f64,
    #[builder(default = "0.9")]
    crossover_rate: f64,
    #[builder(default = "1.0")]
    mutation_span: f64,
    #[builder(setter(strip_option), default = "None")]
    seed: Option<u64>,
    #[builder(default = "false")]
    verbose: bool,
    /// Fan offspring evaluations out over a rayon pool. Only offspring: init
    /// draws and re-pulls stay sequential.
    #[builder(default = "false")]
    parallel: bool,
    #[builder(setter(strip_option), default = "None")]
    cancellation_token: Option<Arc<AtomicBool>>,
}

impl<F> GmabBuilder<F>
where
    F: ObjectiveFn,
{
    /// Pre build validation
    fn validate(&self) -> Result<(), GmabBuilderError> {
        if let Some(population_size) = self.population_size {
            validate_population_size(population_size)?;
        }
        if let Some(mutation_rate) = self.mutation_rate {
            validate_probability(mutation_rate, "mutation_rate")?;
        }
        if let Some(crossover_rate) = self.crossover_rate {
            validate_probability(crossover_rate, "crossover_rate")?;
        }
        if let Some(mutation_span) = self.mutation_span {
            validate_mutation_span(mutation_span)?;
        }
        Ok(())
    }

    pub fn build(self) -> Result<Gmab<F>, GmabError> {
        let params = self.build_params()?;

        let space = SearchSpace::new(params.bounds)?;
        if params.population_size as u128 > space.cardinality() {
            return Err(GmabError::InvalidConfig(format!(
                "population_size ({}) exceeds the search-space cardinality ({})",
                params.population_size,
                space.cardinality()
            )));
        }

        if params.seed.is_none() {
            println!("Warning: no seed provided, results will not be reproducible");
        }
        let rng = GmabRandomGenerator::new_from_seed(params.seed);
        let evaluator = Evaluator::new(params.objective, params.parallel);

        Ok(Gmab::new(
            evaluator,
            space,
            params.population_size,
            params.mutation_rate,
            params.crossover_rate,
            params.mutation_span,
            params.verbose,
            rng,
            params.cancellation_token,
        ))
    }
}

impl From<GmabBuilderError> for GmabError {
    fn from(e: GmabBuilderError) -> Self {
        GmabError::InvalidConfig(e.to_string())
    }
}
