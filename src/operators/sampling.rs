use crate::{operators::GeneticOperator, random::RandomGenerator, search_space::SearchSpace};

/// SamplingOperator draws fresh action vectors for the initial population.
pub trait SamplingOperator: GeneticOperator {
    /// Samples a single action vector within the search-space bounds.
    fn sample_individual(
        &self,
        space: &SearchSpace,
        rng: &mut impl RandomGenerator,
    ) -> Vec<i32>;
}

/// Sampling operator drawing each gene uniformly from its inclusive bounds.
#[derive(Debug, Clone)]
pub struct RandomSamplingInt;

impl RandomSamplingInt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomSamplingInt {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneticOperator for RandomSamplingInt {
    fn name(&self) -> String {
        "RandomSamplingInt".to_string()
    }
}

impl SamplingOperator for RandomSamplingInt {
    fn sample_individual(
        &self,
        space: &SearchSpace,
        rng: &mut impl RandomGenerator,
    ) -> Vec<i32> {
        space
            .bounds()
            .iter()
            .map(|&(lo, hi)| rng.gen_range_i32(lo, hi))
            .collect()
    }
}
