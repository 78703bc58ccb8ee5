//! # `evaluator` – From Action Vectors to Rewards
//!
//! The **`Evaluator`** is the point where the user-supplied objective meets
//! the optimizer. It invokes the objective at an action vector, checks that
//! the reward is a finite real number, and (for offspring batches only)
//! optionally fans the pure evaluations out over a rayon worker pool.
//!
//! The objective contract is deliberately small: a callable from `&[i32]` to
//! `f64`. Non-finite returns abort the run with the offending action vector
//! recorded in the error; panics inside the objective propagate to the caller
//! untouched. Noise in the reward is handled statistically by re-pulls, never
//! by retrying a failed evaluation.
//!
//! Objectives must be [`Sync`]: the sequential core never shares them across
//! threads, but the type-level bound is what lets a caller opt into parallel
//! offspring evaluation without changing the objective's signature.
use rayon::prelude::*;
use thiserror::Error;

/// User-supplied objective: a (possibly stochastic) function from an action
/// vector to a scalar reward, lower is better.
pub trait ObjectiveFn: Sync {
    fn call(&self, action_vector: &[i32]) -> f64;
}

impl<F> ObjectiveFn for F
where
    F: Fn(&[i32]) -> f64 + Sync,
{
    fn call(&self, action_vector: &[i32]) -> f64 {
        self(action_vector)
    }
}

/// Error type for the Evaluator.
#[derive(Debug, Error, PartialEq)]
pub enum EvaluatorError {
    #[error("objective returned non-finite value {value} at action vector {action_vector:?}")]
    NonFiniteReward { action_vector: Vec<i32>, value: f64 },
}

/// Wraps the objective with the finiteness check and the optional parallel
/// dispatch of offspring batches.
#[derive(Debug)]
pub struct Evaluator<F: ObjectiveFn> {
    objective: F,
    parallel: bool,
}

impl<F: ObjectiveFn> Evaluator<F> {
    pub fn new(objective: F, parallel: bool) -> Self {
        Self {
            objective,
            parallel,
        }
    }

    /// One pull of the objective at `action_vector`.
    pub fn evaluate(&self, action_vector: &[i32]) -> Result<f64, EvaluatorError> {
        let value = self.objective.call(action_vector);
        if !value.is_finite() {
            return Err(EvaluatorError::NonFiniteReward {
                action_vector: action_vector.to_vec(),
                value,
            });
        }
        Ok(value)
    }

    /// Evaluates a batch of offspring, one pull each. Rewards come back in
    /// the order of `action_vectors` regardless of the dispatch mode, so the
    /// caller can apply population updates in canonical generation order.
    pub fn evaluate_batch(&self, action_vectors: &[Vec<i32>]) -> Result<Vec<f64>, EvaluatorError> {
        if self.parallel {
            action_vectors
                .par_iter()
                .map(|v| self.evaluate(v))
                .collect()
        } else {
            action_vectors.iter().map(|v| self.evaluate(v)).collect()
        }
    }
}
