//! Tabu Search for the 0/1 knapsack problem.
//!
//! Searches for a high-value selection of items under a capacity limit by
//! local search with a short-term memory of recently visited selections.
//!
//! - **Problem**: immutable items and capacity, boolean selection vectors,
//!   and the evaluator (over capacity scores zero).
//! - **Neighborhood**: randomized multi-item tweak, and the full feasible
//!   single-flip neighborhood.
//! - **Tabu**: bounded FIFO tabu list and the search loop with two round
//!   strategies, a fixed step budget and a configurable round count.
//! - **Input**: text parsing and report formatting for the binary.
//!
//! This is a heuristic: it reports the best selection it visited, with no
//! optimality guarantee.
//!
//! # Examples
//!
//! ```
//! let problem = knapsack_tabu::load(3, 5, &[(2, 3), (3, 4), (4, 5)]).unwrap();
//! let (best, value) = knapsack_tabu::run(&problem, 1000, 10).unwrap();
//! assert_eq!(best.len(), 3);
//! assert!(value <= 7);
//! ```

pub mod error;
pub mod input;
pub mod neighborhood;
pub mod problem;
pub mod tabu;

pub use error::{KnapsackError, Result};
pub use problem::{Item, KnapsackProblem, Solution};
pub use tabu::{TabuConfig, TabuResult, TabuRunner};

/// Default tabu list capacity.
pub const DEFAULT_TABU_CAPACITY: i64 = 10;

/// Builds a validated problem instance from raw `(weight, value)` pairs.
pub fn load(item_count: i64, capacity: i64, items: &[(i64, i64)]) -> Result<KnapsackProblem> {
    KnapsackProblem::load(item_count, capacity, items)
}

/// Runs one round of the default sampled Tabu Search and returns the best
/// selection with its value.
///
/// Takes signed counts like [`load`] so raw shell input can be passed
/// through. Fails with [`KnapsackError::InvalidInput`] when
/// `iteration_budget <= 0` or `tabu_capacity <= 0`. Use [`TabuRunner`] for
/// full control over rounds, strategy and seeding.
pub fn run(
    problem: &KnapsackProblem,
    iteration_budget: i64,
    tabu_capacity: i64,
) -> Result<(Solution, u64)> {
    let iteration_budget = positive(iteration_budget, "iteration_budget")?;
    let tabu_capacity = positive(tabu_capacity, "tabu_capacity")?;
    let config = TabuConfig::default()
        .with_iteration_budget(iteration_budget)
        .with_tabu_capacity(tabu_capacity);
    let result = TabuRunner::run(problem, &config)?;
    Ok((result.best, result.best_value))
}

fn positive(n: i64, what: &str) -> Result<usize> {
    if n <= 0 {
        return Err(KnapsackError::invalid(format!(
            "{what} must be positive, got {n}"
        )));
    }
    usize::try_from(n).map_err(|_| KnapsackError::invalid(format!("{what} is too large: {n}")))
}
