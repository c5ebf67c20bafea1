//! Search strategies, lifecycle phases and results.

use crate::problem::Solution;

/// How each round explores the neighborhood of the current solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Sample `iteration_budget` tweaks of the current solution, keep the best
    /// non-tabu one, and commit it at the end of the round if still admissible.
    #[default]
    Sampled,
    /// For `iteration_budget` steps, move to the best non-tabu feasible
    /// single-flip neighbor, or flip two random bits when none exists.
    Steepest,
}

/// Lifecycle of a [`TabuSearch`](super::TabuSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Uninitialized,
    Initialized,
    Running,
    Done,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TabuResult {
    /// Best solution found.
    pub best: Solution,
    /// Score of the best solution.
    pub best_value: u64,
    /// Total weight of the best solution.
    pub best_weight: u64,
    /// Rounds completed without interruption.
    pub rounds: usize,
    /// Neighbor-generation steps executed across all rounds.
    pub iterations: usize,
    /// Step at which the best solution was found (0 = initial solution).
    pub best_iteration: usize,
    /// Best value after each round (`Sampled`) or step (`Steepest`).
    pub value_history: Vec<u64>,
    /// Whether the run was stopped by the cancellation flag.
    pub cancelled: bool,
    /// Whether the run was stopped by the time limit.
    pub timed_out: bool,
}
