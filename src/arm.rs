//! # `arm` – One Candidate, Many Noisy Observations
//!
//! An [`Arm`] couples a point of the integer search space (its *action
//! vector*) with the running statistics of every reward observed there. The
//! objective is stochastic, so a single evaluation says little; arms
//! accumulate pulls and expose the empirical mean, variance and standard
//! deviation of what they have seen so far.
//!
//! Statistics are maintained with Welford's online algorithm: rewards have no
//! known scale, and a naive sum-of-squares accumulator loses precision once
//! the pull count grows into the thousands.
use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use thiserror::Error;

/// Error type for arm statistics updates.
#[derive(Debug, Error, PartialEq)]
pub enum ArmError {
    #[error("pull count overflow on arm {action_vector:?}")]
    PullCountOverflow { action_vector: Vec<i32> },
}

/// A point in the search space together with its empirical value statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Arm {
    action_vector: Vec<i32>,
    n_pulls: u64,
    mean: f64,
    m2: f64,
}

impl Arm {
    /// Creates a fresh arm with zero pulls.
    pub fn new(action_vector: Vec<i32>) -> Self {
        Self {
            action_vector,
            n_pulls: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    pub fn action_vector(&self) -> &[i32] {
        &self.action_vector
    }

    /// Number of times the objective has been evaluated at this action vector.
    pub fn n_pulls(&self) -> u64 {
        self.n_pulls
    }

    /// Running arithmetic mean of the observed rewards. Meaningful only once
    /// at least one pull has been recorded.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance of the observed rewards: `m2 / max(n_pulls - 1, 1)`.
    pub fn variance(&self) -> f64 {
        self.m2 / self.n_pulls.saturating_sub(1).max(1) as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Folds one observed reward into the running statistics (Welford's
    /// online update). Fails only if the pull counter would overflow.
    pub fn record_pull(&mut self, reward: f64) -> Result<(), ArmError> {
        let n = self
            .n_pulls
            .checked_add(1)
            .ok_or_else(|| ArmError::PullCountOverflow {
                action_vector: self.action_vector.clone(),
            })?;
        self.n_pulls = n;
        let delta = reward - self.mean;
        self.mean += delta / n as f64;
        let delta2 = reward - self.mean;
        self.m2 += delta * delta2;
        Ok(())
    }

    /// Total order used for ranking arms: ascending mean (minimization), ties
    /// broken by higher pull count (the more-confident estimate wins), then by
    /// lexicographic action vector.
    pub fn cmp_rank(&self, other: &Arm) -> Ordering {
        OrderedFloat(self.mean)
            .cmp(&OrderedFloat(other.mean))
            .then_with(|| other.n_pulls.cmp(&self.n_pulls))
            .then_with(|| self.action_vector.cmp(&other.action_vector))
    }
}
