use crate::{operators::GeneticOperator, random::RandomGenerator};

/// SelectionOperator picks a parent out of the ranked population. Positions
/// refer to the current ranking (0 is the best arm), which makes duels a
/// plain index comparison and keeps selection deterministic for a given RNG
/// stream.
pub trait SelectionOperator: GeneticOperator {
    /// Tournament size. Two means binary tournaments.
    fn pressure(&self) -> usize {
        2
    }

    /// Draws `pressure()` positions uniformly from `[0, ranked_len)` and
    /// returns the winner's position.
    fn select(&self, ranked_len: usize, rng: &mut impl RandomGenerator) -> usize;
}

/// Binary tournament over ranking positions: draw two arms uniformly from the
/// population, keep the better-ranked one. Favors diversity over deterministic
/// elitism while still biasing toward strong arms.
#[derive(Debug, Clone)]
pub struct RankTournamentSelection;

impl RankTournamentSelection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RankTournamentSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneticOperator for RankTournamentSelection {
    fn name(&self) -> String {
        "RankTournamentSelection".to_string()
    }
}

impl SelectionOperator for RankTournamentSelection {
    fn select(&self, ranked_len: usize, rng: &mut impl RandomGenerator) -> usize {
        (0..self.pressure())
            .map(|_| rng.gen_range_usize(0, ranked_len))
            .min()
            .expect("selection pressure must be at least 1")
    }
}
