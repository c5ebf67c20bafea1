//! Greedy random starting point.

use rand::Rng;

use crate::problem::{KnapsackProblem, Solution};

/// Packs a feasible starting selection by sampling `N` random indices.
///
/// Each sampled item is added if it is not yet selected and still fits the
/// running weight. A rejected item is never retried, so the result is a
/// greedily packed feasible selection rather than a uniform random subset.
pub fn greedy_random_packing<R: Rng>(problem: &KnapsackProblem, rng: &mut R) -> Solution {
    let n = problem.item_count();
    let capacity = problem.capacity();
    let mut solution = Solution::empty(n);
    let mut weight = 0u64;

    for _ in 0..n {
        let x = rng.random_range(0..n);
        let w = problem.item(x).weight;
        if !solution.is_selected(x) && weight.saturating_add(w) <= capacity {
            solution.set(x, true);
            weight += w;
        }
    }

    solution
}
