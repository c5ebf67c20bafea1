//! Randomized multi-item perturbation ("tweak").
//!
//! 1. Try up to [`ADD_ATTEMPTS`] random single-item additions that fit the
//!    running weight.
//! 2. If none succeeded, drop up to [`REMOVALS`] selected items at random
//!    (without replacement) and try [`ADD_ATTEMPTS`] further additions.
//!
//! In [`TweakMode::Faithful`] the second round of additions only checks
//! each item against the raw capacity, so the result may be over capacity
//! and score zero. [`TweakMode::WeightTracked`] keeps the running weight
//! through every step and never leaves a feasible input infeasible.

use rand::Rng;
use tracing::trace;

use crate::problem::{KnapsackProblem, Solution};

/// Random additions attempted per pass.
pub const ADD_ATTEMPTS: usize = 5;

/// Selected items dropped when the first pass adds nothing.
pub const REMOVALS: usize = 2;

/// How the fallback pass checks feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TweakMode {
    /// Fallback additions are checked against the raw capacity only and may
    /// re-select an already selected item. Can produce over-capacity
    /// neighbors.
    #[default]
    Faithful,
    /// Fallback additions are checked against the running weight.
    WeightTracked,
}

/// Returns a perturbed copy of `solution`. The input is not modified.
pub fn tweak<R: Rng>(
    problem: &KnapsackProblem,
    solution: &Solution,
    mode: TweakMode,
    rng: &mut R,
) -> Solution {
    let n = problem.item_count();
    let capacity = problem.capacity();
    let mut next = solution.clone();
    let mut weight = next.total_weight(problem);

    let mut added = false;
    for _ in 0..ADD_ATTEMPTS {
        let x = rng.random_range(0..n);
        let w = problem.item(x).weight;
        if !next.is_selected(x) && weight.saturating_add(w) <= capacity {
            next.set(x, true);
            weight += w;
            added = true;
        }
    }

    if added {
        return next;
    }

    trace!(weight, "tweak added nothing, dropping items");

    let mut selected = next.selected_indices();
    for _ in 0..REMOVALS {
        if selected.is_empty() {
            break;
        }
        let idx = rng.random_range(0..selected.len());
        let x = selected.remove(idx);
        next.set(x, false);
    }
    weight = next.total_weight(problem);

    for _ in 0..ADD_ATTEMPTS {
        let x = rng.random_range(0..n);
        let w = problem.item(x).weight;
        match mode {
            TweakMode::Faithful => {
                if w <= capacity {
                    next.set(x, true);
                }
            }
            TweakMode::WeightTracked => {
                if !next.is_selected(x) && weight.saturating_add(w) <= capacity {
                    next.set(x, true);
                    weight += w;
                }
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn heavy_problem() -> KnapsackProblem {
        // Any two items together exceed the capacity.
        KnapsackProblem::load(3, 5, &[(4, 1), (4, 2), (4, 3)]).unwrap()
    }

    #[test]
    fn test_tweak_adds_when_room() {
        let p = KnapsackProblem::load(2, 10, &[(1, 1), (1, 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let start = Solution::empty(2);
        let next = tweak(&p, &start, TweakMode::Faithful, &mut rng);
        assert!(next.selected_count() >= 1);
        assert_eq!(start, Solution::empty(2));
    }

    #[test]
    fn test_faithful_fallback_can_exceed_capacity() {
        let p = heavy_problem();
        let start = Solution::from_indices(3, &[0]);
        let mut rng = StdRng::seed_from_u64(42);
        let infeasible = (0..100)
            .map(|_| tweak(&p, &start, TweakMode::Faithful, &mut rng))
            .filter(|s| !p.is_feasible(s))
            .count();
        assert!(
            infeasible > 0,
            "raw-capacity fallback should produce over-capacity neighbors"
        );
    }

    #[test]
    fn test_tracked_fallback_stays_feasible() {
        let p = heavy_problem();
        let start = Solution::from_indices(3, &[0]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let s = tweak(&p, &start, TweakMode::WeightTracked, &mut rng);
            assert!(p.is_feasible(&s));
            assert_eq!(s.selected_count(), 1);
        }
    }

    #[test]
    fn test_fallback_on_empty_zero_capacity() {
        let p = KnapsackProblem::load(3, 0, &[(1, 5), (2, 5), (3, 5)]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for mode in [TweakMode::Faithful, TweakMode::WeightTracked] {
            let s = tweak(&p, &Solution::empty(3), mode, &mut rng);
            assert_eq!(s, Solution::empty(3));
        }
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let m = i64::MAX;
        let p = KnapsackProblem::load(3, m, &[(m, 1), (m, 2), (m, 3)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for mode in [TweakMode::Faithful, TweakMode::WeightTracked] {
            let mut current = Solution::from_indices(3, &[0, 1, 2]);
            for _ in 0..50 {
                current = tweak(&p, &current, mode, &mut rng);
            }
        }
        let start = Solution::from_indices(3, &[1]);
        for _ in 0..50 {
            let next = tweak(&p, &start, TweakMode::WeightTracked, &mut rng);
            assert!(p.is_feasible(&next));
        }
    }

    proptest! {
        #[test]
        fn prop_tweak_does_not_mutate_input(
            seed in any::<u64>(),
            bits in prop::collection::vec(any::<bool>(), 6),
        ) {
            let p = KnapsackProblem::load(
                6, 9, &[(2, 3), (3, 4), (4, 5), (1, 1), (5, 8), (2, 2)],
            ).unwrap();
            let start = Solution::from_bits(bits);
            let snapshot = start.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            let _ = tweak(&p, &start, TweakMode::Faithful, &mut rng);
            prop_assert_eq!(start, snapshot);
        }

        #[test]
        fn prop_tracked_preserves_feasibility(seed in any::<u64>()) {
            let p = KnapsackProblem::load(
                6, 9, &[(2, 3), (3, 4), (4, 5), (1, 1), (5, 8), (2, 2)],
            ).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let start = crate::neighborhood::greedy_random_packing(&p, &mut rng);
            let next = tweak(&p, &start, TweakMode::WeightTracked, &mut rng);
            prop_assert!(p.is_feasible(&next));
        }
    }
}
