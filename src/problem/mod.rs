//! Problem data model: items, instance, selections and their evaluation.

mod evaluator;
mod solution;
mod types;

pub use solution::Solution;
pub use types::{Item, KnapsackProblem};
