use thiserror::Error;

use crate::{arm::ArmError, evaluator::EvaluatorError, search_space::SearchSpaceError};

/// Errors surfaced by the optimizer.
///
/// Configuration problems are caught before any evaluation happens; objective
/// failures abort the run immediately and are never retried.
#[derive(Debug, Error)]
pub enum GmabError {
    /// A configuration option is outside its declared range, or the requested
    /// population does not fit into the search space.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The user-supplied objective returned a non-finite value.
    #[error(transparent)]
    Objective(#[from] EvaluatorError),

    #[error(transparent)]
    SearchSpace(#[from] SearchSpaceError),

    #[error(transparent)]
    Arm(#[from] ArmError),

    /// An evaluation was attempted with zero budget left. This is an internal
    /// invariant violation, not a recoverable condition.
    #[error("evaluation budget exhausted before the run completed")]
    BudgetExhausted,
}
