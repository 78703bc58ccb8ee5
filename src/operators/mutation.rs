use crate::{operators::GeneticOperator, random::RandomGenerator, search_space::SearchSpace};

/// MutationOperator defines an in-place mutation where the action vector is
/// modified directly, always staying inside the per-dimension bounds.
pub trait MutationOperator: GeneticOperator {
    /// Mutates a single action vector in place.
    ///
    /// # Arguments
    ///
    /// * `action_vector` - The vector to mutate.
    /// * `mutation_rate` - Per-gene probability of perturbation.
    /// * `space` - The search space providing per-dimension bounds.
    /// * `rng` - A random number generator.
    fn mutate(
        &self,
        action_vector: &mut [i32],
        mutation_rate: f64,
        space: &SearchSpace,
        rng: &mut impl RandomGenerator,
    );
}

/// Scale-aware integer mutation: each gene is perturbed, with probability
/// `mutation_rate`, by a uniform integer offset from `[-span, +span]` where
/// `span = ceil(mutation_span * (hi - lo))`, clamped back into `[lo, hi]`.
/// A relative span preserves locality in wide dimensions while still
/// permitting global jumps when `mutation_span` is large.
#[derive(Debug, Clone)]
pub struct BoundedUniformMutation {
    pub mutation_span: f64,
}

impl BoundedUniformMutation {
    pub fn new(mutation_span: f64) -> Self {
        Self { mutation_span }
    }
}

impl GeneticOperator for BoundedUniformMutation {
    fn name(&self) -> String {
        "BoundedUniformMutation".to_string()
    }
}

impl MutationOperator for BoundedUniformMutation {
    fn mutate(
        &self,
        action_vector: &mut [i32],
        mutation_rate: f64,
        space: &SearchSpace,
        rng: &mut impl RandomGenerator,
    ) {
        for (gene, &(lo, hi)) in action_vector.iter_mut().zip(space.bounds()) {
            if rng.gen_bool(mutation_rate) {
                let span = (self.mutation_span * (hi - lo) as f64).ceil() as i32;
                let offset = rng.gen_range_i32(-span, span);
                *gene = gene.saturating_add(offset).clamp(lo, hi);
            }
        }
    }
}
