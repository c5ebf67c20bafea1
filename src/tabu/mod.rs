//! Tabu Search (TS) over knapsack selections.
//!
//! A single-solution trajectory metaheuristic that keeps recently visited
//! solutions in a bounded FIFO tabu list, forbidding immediate revisits and
//! pushing the search out of local optima.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;
mod types;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{TabuRunner, TabuSearch};
pub use types::{SearchPhase, SearchStrategy, TabuResult};
