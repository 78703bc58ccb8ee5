use crate::{operators::GeneticOperator, random::RandomGenerator};

/// CrossoverOperator combines two parent action vectors into one offspring.
pub trait CrossoverOperator: GeneticOperator {
    /// Produces a single offspring from two parents.
    fn crossover(
        &self,
        parent_a: &[i32],
        parent_b: &[i32],
        rng: &mut impl RandomGenerator,
    ) -> Vec<i32>;

    /// Applies crossover with probability `crossover_rate`; otherwise the
    /// offspring is a copy of parent A.
    fn operate(
        &self,
        parent_a: &[i32],
        parent_b: &[i32],
        crossover_rate: f64,
        rng: &mut impl RandomGenerator,
    ) -> Vec<i32> {
        if rng.gen_probability() <= crossover_rate {
            self.crossover(parent_a, parent_b, rng)
        } else {
            parent_a.to_vec()
        }
    }
}

/// Uniform crossover: each gene is copied from parent A with probability 0.5,
/// else from parent B. Robust across dimensions of differing influence since
/// no positional linkage is assumed.
#[derive(Debug, Clone)]
pub struct UniformCrossover;

impl UniformCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneticOperator for UniformCrossover {
    fn name(&self) -> String {
        "UniformCrossover".to_string()
    }
}

impl CrossoverOperator for UniformCrossover {
    fn crossover(
        &self,
        parent_a: &[i32],
        parent_b: &[i32],
        rng: &mut impl RandomGenerator,
    ) -> Vec<i32> {
        debug_assert_eq!(parent_a.len(), parent_b.len());
        parent_a
            .iter()
            .zip(parent_b)
            .map(|(&a, &b)| if rng.gen_bool(0.5) { a } else { b })
            .collect()
    }
}
