//! # `search_space` – Bounded Integer Domains
//!
//! A [`SearchSpace`] is an ordered sequence of inclusive `(lo, hi)` integer
//! bounds, one per dimension of the action vector. It knows its cardinality
//! (the number of distinct action vectors it contains), which caps the
//! population size: a population cannot hold more distinct arms than exist.
use thiserror::Error;

/// Error type for search space construction.
#[derive(Debug, Error, PartialEq)]
pub enum SearchSpaceError {
    #[error("search space must have at least one dimension")]
    Empty,
    #[error("invalid bounds at dimension {dim}: lower bound {lo} exceeds upper bound {hi}")]
    InvalidBounds { dim: usize, lo: i32, hi: i32 },
}

/// Inclusive per-dimension integer bounds of the action vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpace {
    bounds: Vec<(i32, i32)>,
}

impl SearchSpace {
    pub fn new(bounds: Vec<(i32, i32)>) -> Result<Self, SearchSpaceError> {
        if bounds.is_empty() {
            return Err(SearchSpaceError::Empty);
        }
        for (dim, &(lo, hi)) in bounds.iter().enumerate() {
            if lo > hi {
                return Err(SearchSpaceError::InvalidBounds { dim, lo, hi });
            }
        }
        Ok(Self { bounds })
    }

    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    pub fn bounds(&self) -> &[(i32, i32)] {
        &self.bounds
    }

    /// Number of distinct action vectors in the space, saturating at
    /// `u128::MAX` for astronomically large spaces.
    pub fn cardinality(&self) -> u128 {
        self.bounds
            .iter()
            .map(|&(lo, hi)| (hi as i64 - lo as i64 + 1) as u128)
            .fold(1u128, |acc, n| acc.saturating_mul(n))
    }

    /// Whether `action_vector` has the right dimension and every gene lies
    /// within its bounds.
    pub fn contains(&self, action_vector: &[i32]) -> bool {
        action_vector.len() == self.bounds.len()
            && action_vector
                .iter()
                .zip(&self.bounds)
                .all(|(&x, &(lo, hi))| lo <= x && x <= hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_is_the_product_of_dimension_sizes() {
        let space = SearchSpace::new(vec![(-5, 10), (-5, 10)]).unwrap();
        assert_eq!(space.dimension(), 2);
        assert_eq!(space.cardinality(), 16 * 16);
    }

    #[test]
    fn test_degenerate_dimension_counts_once() {
        let space = SearchSpace::new(vec![(3, 3), (0, 1)]).unwrap();
        assert_eq!(space.cardinality(), 2);
    }

    #[test]
    fn test_contains_checks_dimension_and_bounds() {
        let space = SearchSpace::new(vec![(0, 4), (-2, 2)]).unwrap();
        assert!(space.contains(&[0, -2]));
        assert!(space.contains(&[4, 2]));
        assert!(!space.contains(&[5, 0]));
        assert!(!space.contains(&[0, 3]));
        assert!(!space.contains(&[0]));
    }

    #[test]
    fn test_empty_bounds_are_rejected() {
        assert_eq!(SearchSpace::new(vec![]).unwrap_err(), SearchSpaceError::Empty);
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let err = SearchSpace::new(vec![(0, 5), (7, 3)]).unwrap_err();
        assert_eq!(
            err,
            SearchSpaceError::InvalidBounds {
                dim: 1,
                lo: 7,
                hi: 3
            }
        );
    }
}
