//! Bounded FIFO tabu list of recently visited solutions.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::problem::Solution;

/// Short-term memory of visited solutions.
///
/// Entries are kept in insertion order and evicted oldest-first once the
/// list holds `capacity` entries. Recency is implied by position only; there
/// is no per-entry tenure. Membership is an equality test against the
/// stored solutions, backed by a multiplicity index so that a solution added
/// twice stays tabu until both copies are evicted.
///
/// # Examples
///
/// ```
/// use knapsack_tabu::problem::Solution;
/// use knapsack_tabu::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// let a = Solution::from_indices(3, &[0]);
/// let b = Solution::from_indices(3, &[1]);
/// let c = Solution::from_indices(3, &[2]);
/// tabu.add(a.clone());
/// tabu.add(b.clone());
/// tabu.add(c.clone());
/// assert!(!tabu.contains(&a));
/// assert!(tabu.contains(&b) && tabu.contains(&c));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    entries: VecDeque<Solution>,
    index: HashMap<Solution, usize>,
    capacity: usize,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    pub fn contains(&self, solution: &Solution) -> bool {
        self.index.contains_key(solution)
    }

    /// Appends `solution`, first evicting the single oldest entry if full.
    pub fn add(&mut self, solution: Solution) {
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.entries.pop_front() {
                self.forget(oldest);
            }
        }
        *self.index.entry(solution.clone()).or_insert(0) += 1;
        self.entries.push_back(solution);
    }

    fn forget(&mut self, solution: Solution) {
        if let Entry::Occupied(mut slot) = self.index.entry(solution) {
            *slot.get_mut() -= 1;
            if *slot.get() == 0 {
                slot.remove();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.entries.iter()
    }
}
