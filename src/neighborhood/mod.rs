//! Neighbor generation over knapsack selections.
//!
//! Two materially different strategies are offered:
//!
//! - [`tweak`]: a single randomized multi-item perturbation.
//! - [`flip_neighborhood`]: every feasible one-bit flip, deterministic.
//!
//! Neither keeps state between calls beyond the problem and the explicit
//! solution and RNG arguments.

mod flip;
mod initial;
mod tweak;

pub use flip::{flip_neighborhood, random_double_flip};
pub use initial::greedy_random_packing;
pub use tweak::{tweak, TweakMode, ADD_ATTEMPTS, REMOVALS};
