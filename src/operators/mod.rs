//! # `operators` – Building Blocks for Evolution
//!
//! The evolution loop is assembled from a pipeline of interchangeable
//! **operators**, each focused on a single stage of the cycle: sampling the
//! initial arms, selecting parents, recombining them, and perturbing the
//! result.
//!
//! The common super-trait [`GeneticOperator`] provides a tiny reflection hook
//! (`name()`) so the driver and loggers can identify each concrete operator
//! at runtime. Beyond that, each sub-trait defines the behaviour expected for
//! its stage:
//!
//! | Trait | Purpose | Implementation |
//! |-------|---------|----------------|
//! | [`SamplingOperator`]  | Draw initial action vectors from the search space. | [`RandomSamplingInt`] |
//! | [`SelectionOperator`] | Choose parents from the ranked population. | [`RankTournamentSelection`] |
//! | [`CrossoverOperator`] | Combine two parents into one offspring. | [`UniformCrossover`] |
//! | [`MutationOperator`]  | Apply bounded random variation to a vector *in place*. | [`BoundedUniformMutation`] |
//!
//! Every operator draws randomness exclusively through
//! [`RandomGenerator`](crate::random::RandomGenerator), which keeps runs
//! reproducible and lets unit tests substitute fake generators.
use std::fmt::Debug;

pub mod crossover;
pub mod mutation;
pub mod sampling;
pub mod selection;

pub use crossover::{CrossoverOperator, UniformCrossover};
pub use mutation::{BoundedUniformMutation, MutationOperator};
pub use sampling::{RandomSamplingInt, SamplingOperator};
pub use selection::{RankTournamentSelection, SelectionOperator};

pub trait GeneticOperator: Debug {
    fn name(&self) -> String;
}
