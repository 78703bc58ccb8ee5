//! # `algorithm` – The GMAB Evolution Loop
//!
//! [`Gmab`] ties everything together: it owns the population, the RNG, the
//! variation operators and the sample-allocation policy, and walks a small
//! state machine under a fixed evaluation budget.
//!
//! | State | Transition |
//! |-------|------------|
//! | `Init` | Draw `P` distinct random arms, evaluate each once (`budget -= P`). → `Evolving` |
//! | `Evolving` | Re-pull the top-ranked arms, then breed, evaluate and insert offspring. → `Evolving` while budget remains, → `Done` otherwise |
//! | `Done` | Return the `n_best` arms from the final ranking. |
//!
//! Everything that consumes randomness happens on the single main sequence:
//! even when offspring evaluation is parallelized, the RNG draws that shaped
//! those offspring are already done, and population updates are applied in
//! the order the offspring were generated. Two runs with the same seed and
//! configuration therefore produce identical populations, worker pool or not.
//!
//! Construction goes through [`GmabBuilder`]; see the module-level example in
//! [`builder`].
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    arm::Arm,
    bandit::{SampleAllocationPolicy, TopRankRepull},
    evaluator::{Evaluator, ObjectiveFn},
    helpers::printer::print_iteration_best,
    operators::{
        BoundedUniformMutation, CrossoverOperator, MutationOperator, RandomSamplingInt,
        RankTournamentSelection, SamplingOperator, SelectionOperator, UniformCrossover,
    },
    population::Population,
    random::GmabRandomGenerator,
    search_space::SearchSpace,
};

pub mod builder;
mod context;
mod error;
mod validators;

pub use builder::{GmabBuilder, GmabBuilderError};
pub use context::RunContext;
pub use error::GmabError;

/// The genetic multi-armed bandit optimizer for one objective.
#[derive(Debug)]
pub struct Gmab<F>
where
    F: ObjectiveFn,
{
    evaluator: Evaluator<F>,
    space: SearchSpace,
    population: Population,
    sampler: RandomSamplingInt,
    selection: RankTournamentSelection,
    crossover: UniformCrossover,
    mutation: BoundedUniformMutation,
    policy: TopRankRepull,
    population_size: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    verbose: bool,
    rng: GmabRandomGenerator,
    cancellation_token: Option<Arc<AtomicBool>>,
}

impl<F> Gmab<F>
where
    F: ObjectiveFn,
{
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        evaluator: Evaluator<F>,
        space: SearchSpace,
        population_size: usize,
        mutation_rate: f64,
        crossover_rate: f64,
        mutation_span: f64,
        verbose: bool,
        rng: GmabRandomGenerator,
        cancellation_token: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            evaluator,
            space,
            population: Population::new(),
            sampler: RandomSamplingInt::new(),
            selection: RankTournamentSelection::new(),
            crossover: UniformCrossover::new(),
            mutation: BoundedUniformMutation::new(mutation_span),
            policy: TopRankRepull::new(),
            population_size,
            mutation_rate,
            crossover_rate,
            verbose,
            rng,
            cancellation_token,
        }
    }

    /// The arms currently under consideration.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    /// Draws `population_size` distinct action vectors uniformly from the
    /// search space and evaluates each exactly once, in sampling order.
    fn initialize(&mut self, context: &mut RunContext) -> Result<(), GmabError> {
        self.population = Population::new();
        while self.population.len() < self.population_size {
            let action_vector = self.sampler.sample_individual(&self.space, &mut self.rng);
            if self.population.contains(&action_vector) {
                continue;
            }
            context.try_spend()?;
            let reward = self.evaluator.evaluate(&action_vector)?;
            let mut arm = Arm::new(action_vector);
            arm.record_pull(reward)?;
            self.population.insert(arm);
        }
        Ok(())
    }

    /// One `Evolving` iteration: bandit re-pulls, then offspring. Runs a
    /// truncated version when fewer evaluations remain than the policy asks
    /// for: re-pulls first, then as many offspring as the budget permits.
    fn next(&mut self, context: &mut RunContext) -> Result<(), GmabError> {
        // Re-pull the top-ranked arms, one pull each.
        let num_repulls = self
            .policy
            .num_repulls(self.population_size)
            .min(context.budget());
        let repulls: Vec<Vec<i32>> = self.population.ranking()[..num_repulls].to_vec();
        for action_vector in &repulls {
            context.try_spend()?;
            let reward = self.evaluator.evaluate(action_vector)?;
            self.population.record_pull(action_vector, reward)?;
        }

        // Breed offspring. Every RNG draw happens here, on the main sequence,
        // before any evaluation is dispatched.
        let num_offspring = self
            .policy
            .num_offspring(self.population_size)
            .min(context.budget());
        let ranking: Vec<Vec<i32>> = self.population.ranking().to_vec();
        let mut offspring = Vec::with_capacity(num_offspring);
        for _ in 0..num_offspring {
            let parent_a = &ranking[self.selection.select(ranking.len(), &mut self.rng)];
            let parent_b = &ranking[self.selection.select(ranking.len(), &mut self.rng)];
            let mut child =
                self.crossover
                    .operate(parent_a, parent_b, self.crossover_rate, &mut self.rng);
            self.mutation
                .mutate(&mut child, self.mutation_rate, &self.space, &mut self.rng);
            offspring.push(child);
        }

        for _ in 0..offspring.len() {
            context.try_spend()?;
        }
        let rewards = self.evaluator.evaluate_batch(&offspring)?;
        // Insertions apply in generation order, not completion order.
        for (action_vector, reward) in offspring.into_iter().zip(rewards) {
            let mut arm = Arm::new(action_vector);
            arm.record_pull(reward)?;
            self.population.replace_worst(arm)?;
        }
        Ok(())
    }

    /// Runs the optimizer with a budget of `n_trials` objective evaluations
    /// and returns the best arm found.
    pub fn optimize(&mut self, n_trials: usize) -> Result<Arm, GmabError> {
        let mut best = self.optimize_best(n_trials, 1)?;
        Ok(best.remove(0))
    }

    /// Runs the optimizer and returns the `min(n_best, population_size)` best
    /// arms of the final ranking, ascending by mean.
    pub fn optimize_best(&mut self, n_trials: usize, n_best: usize) -> Result<Vec<Arm>, GmabError> {
        if n_best == 0 {
            return Err(GmabError::InvalidConfig(
                "n_best must be at least 1".to_string(),
            ));
        }
        if n_trials < self.population_size {
            return Err(GmabError::InvalidConfig(format!(
                "n_trials ({}) must cover one evaluation per initial arm (population_size = {})",
                n_trials, self.population_size
            )));
        }

        let mut context = RunContext::new(n_trials);
        self.initialize(&mut context)?;

        while context.budget() > 0 {
            if let Some(token) = &self.cancellation_token {
                if token.load(Ordering::Relaxed) {
                    if self.verbose {
                        println!("Run cancelled at iteration {}", context.iteration());
                    }
                    break;
                }
            }
            self.next(&mut context)?;
            context.advance_iteration();
            if self.verbose {
                let best = self.population.best().expect("population is initialized");
                print_iteration_best(context.iteration(), best.mean(), best.n_pulls());
            }
        }

        let mut ranked = self.population.ranked_arms();
        ranked.truncate(n_best.min(self.population_size));
        Ok(ranked)
    }
}
