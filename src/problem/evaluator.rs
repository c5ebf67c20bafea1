//! Objective evaluation.
//!
//! The score of a selection is its total value when it fits the capacity
//! and zero otherwise. Infeasible selections stay representable; they just
//! never win a value-maximizing comparison. A zero score cannot tell
//! "over capacity" apart from "feasible but worthless", so neighbor
//! construction tracks weight separately.

use super::solution::Solution;
use super::types::KnapsackProblem;

impl KnapsackProblem {
    /// Evaluates `solution`: summed value, or 0 when summed weight exceeds capacity.
    ///
    /// Sums saturate at `u64::MAX`; a saturated weight is always over capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_tabu::problem::{KnapsackProblem, Solution};
    ///
    /// let p = KnapsackProblem::load(3, 5, &[(2, 3), (3, 4), (4, 5)]).unwrap();
    /// assert_eq!(p.score(&Solution::from_indices(3, &[0, 1])), 7);
    /// assert_eq!(p.score(&Solution::from_indices(3, &[1, 2])), 0);
    /// ```
    pub fn score(&self, solution: &Solution) -> u64 {
        debug_assert_eq!(solution.len(), self.item_count());
        let (weight, value) = solution
            .bits()
            .iter()
            .zip(self.items())
            .filter(|(&s, _)| s)
            .fold((0u64, 0u64), |(w, v), (_, item)| {
                (w.saturating_add(item.weight), v.saturating_add(item.value))
            });

        if weight > self.capacity() {
            0
        } else {
            value
        }
    }

    /// Whether the selection's total weight fits the capacity.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        solution.total_weight(self) <= self.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn problem() -> KnapsackProblem {
        KnapsackProblem::load(3, 5, &[(2, 3), (3, 4), (4, 5)]).unwrap()
    }

    #[test]
    fn test_score_feasible() {
        let p = problem();
        assert_eq!(p.score(&Solution::from_indices(3, &[0, 1])), 7);
        assert_eq!(p.score(&Solution::from_indices(3, &[2])), 5);
        assert_eq!(p.score(&Solution::empty(3)), 0);
    }

    #[test]
    fn test_score_infeasible_is_zero() {
        let p = problem();
        let s = Solution::from_indices(3, &[0, 1, 2]);
        assert_eq!(s.total_value(&p), 12);
        assert_eq!(p.score(&s), 0);
        assert!(!p.is_feasible(&s));
    }

    #[test]
    fn test_score_exact_capacity_counts() {
        let p = KnapsackProblem::load(1, 1, &[(1, 10)]).unwrap();
        assert_eq!(p.score(&Solution::from_indices(1, &[0])), 10);
    }

    #[test]
    fn test_score_huge_weights_saturate() {
        let m = i64::MAX;
        let p = KnapsackProblem::load(3, m, &[(m, 1), (m, 2), (m, 3)]).unwrap();
        assert_eq!(p.score(&Solution::from_indices(3, &[0, 1, 2])), 0);
        assert_eq!(p.score(&Solution::from_indices(3, &[0, 1])), 0);
        assert_eq!(p.score(&Solution::from_indices(3, &[2])), 3);
        assert_eq!(Solution::from_indices(3, &[0, 1, 2]).total_weight(&p), u64::MAX);
        assert!(!p.is_feasible(&Solution::from_indices(3, &[0, 1, 2])));
    }

    fn instance_and_bits() -> impl Strategy<Value = (KnapsackProblem, Solution)> {
        (1usize..12).prop_flat_map(|n| {
            (
                prop::collection::vec((0u64..20, 0u64..50), n),
                0u64..60,
                prop::collection::vec(any::<bool>(), n),
            )
                .prop_map(|(pairs, capacity, bits)| {
                    let items = pairs
                        .into_iter()
                        .map(|(w, v)| crate::problem::Item::new(w, v))
                        .collect();
                    (
                        KnapsackProblem::new(capacity, items).unwrap(),
                        Solution::from_bits(bits),
                    )
                })
        })
    }

    proptest! {
        #[test]
        fn prop_score_zero_iff_over_capacity((p, s) in instance_and_bits()) {
            let score = p.score(&s);
            if s.total_weight(&p) > p.capacity() {
                prop_assert_eq!(score, 0);
            } else {
                prop_assert_eq!(score, s.total_value(&p));
            }
        }

        #[test]
        fn prop_score_is_idempotent((p, s) in instance_and_bits()) {
            prop_assert_eq!(p.score(&s), p.score(&s));
        }
    }
}
