//! # `bandit` – Sample Allocation Under Noise
//!
//! The bandit layer decides how each iteration's evaluation budget is split
//! between *re-pulls* of existing arms (sharpening noisy mean estimates) and
//! brand-new offspring (exploring the search space). Without re-pulls a
//! single lucky draw can park a mediocre arm at the top of the ranking for
//! the rest of the run.
use std::fmt::Debug;

/// Splits one iteration's evaluations between re-pulls and offspring.
pub trait SampleAllocationPolicy: Debug {
    /// Number of top-ranked arms to re-pull once each this iteration.
    fn num_repulls(&self, population_size: usize) -> usize;

    /// Number of offspring to generate and evaluate this iteration.
    fn num_offspring(&self, population_size: usize) -> usize;
}

/// UCB-flavored allocation: re-pull the top quarter of the ranking
/// (`max(1, P / 4)` arms, once each) and spend the rest of the iteration on
/// `P / 2` offspring. The best-looking arms are exactly the ones whose rank
/// is most vulnerable to noise, so pulling them resolves uncertainty where it
/// matters.
#[derive(Debug, Clone)]
pub struct TopRankRepull;

impl TopRankRepull {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TopRankRepull {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleAllocationPolicy for TopRankRepull {
    fn num_repulls(&self, population_size: usize) -> usize {
        (population_size / 4).max(1)
    }

    fn num_offspring(&self, population_size: usize) -> usize {
        population_size / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repull_count_is_a_quarter_of_the_population() {
        let policy = TopRankRepull::new();
        assert_eq!(policy.num_repulls(20), 5);
        assert_eq!(policy.num_repulls(100), 25);
    }

    #[test]
    fn test_repull_count_never_drops_below_one() {
        let policy = TopRankRepull::new();
        assert_eq!(policy.num_repulls(2), 1);
        assert_eq!(policy.num_repulls(3), 1);
    }

    #[test]
    fn test_offspring_count_is_half_the_population() {
        let policy = TopRankRepull::new();
        assert_eq!(policy.num_offspring(20), 10);
        assert_eq!(policy.num_offspring(2), 1);
        assert_eq!(policy.num_offspring(5), 2);
    }
}
