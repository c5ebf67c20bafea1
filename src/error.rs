//! Error types for knapsack Tabu Search.

use thiserror::Error;

/// Errors surfaced to callers of the search core.
///
/// Everything that can go wrong during the search itself (no feasible
/// addition, no admissible neighbor) is handled internally by falling back
/// to diversification, so the only failure channel is bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// Malformed or out-of-range problem parameters or search settings.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl KnapsackError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        KnapsackError::InvalidInput(msg.into())
    }
}

/// Result type alias for knapsack operations.
pub type Result<T> = std::result::Result<T, KnapsackError>;
