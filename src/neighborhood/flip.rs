//! Full single-flip neighborhood.

use rand::Rng;

use crate::problem::{KnapsackProblem, Solution};

/// All feasible one-bit-flip neighbors of `solution`, in index order.
///
/// Each candidate's weight is recomputed in full, and candidates over
/// capacity are discarded. Deterministic; returns between 0 and `N`
/// solutions.
pub fn flip_neighborhood(problem: &KnapsackProblem, solution: &Solution) -> Vec<Solution> {
    (0..problem.item_count())
        .filter_map(|i| {
            let mut neighbor = solution.clone();
            neighbor.flip(i);
            (neighbor.total_weight(problem) <= problem.capacity()).then_some(neighbor)
        })
        .collect()
}

/// Flips two uniformly random positions, ignoring feasibility.
///
/// The two draws are independent, so they may coincide and cancel out.
pub fn random_double_flip<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let n = solution.len();
    let mut next = solution.clone();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    next.flip(a);
    next.flip(b);
    next
}
