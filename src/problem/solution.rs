//! Boolean membership vector over the items.

use std::fmt;

use super::types::KnapsackProblem;

/// A candidate selection: `selected[i]` is true when item `i` is packed.
///
/// Solutions are plain values compared by content. Feasibility is not
/// enforced here; an over-capacity vector is legal and simply scores zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    selected: Vec<bool>,
}

impl Solution {
    /// The empty selection over `n` items.
    pub fn empty(n: usize) -> Self {
        Self {
            selected: vec![false; n],
        }
    }

    pub fn from_bits(selected: Vec<bool>) -> Self {
        Self { selected }
    }

    /// Selection containing exactly the given indices.
    pub fn from_indices(n: usize, indices: &[usize]) -> Self {
        let mut s = Self::empty(n);
        for &i in indices {
            s.selected[i] = true;
        }
        s
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected[index]
    }

    pub fn set(&mut self, index: usize, value: bool) {
        self.selected[index] = value;
    }

    pub fn flip(&mut self, index: usize) {
        self.selected[index] = !self.selected[index];
    }

    /// Indices of selected items in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Sum of weights of the selected items, recomputed from scratch.
    /// Saturates at `u64::MAX`.
    pub fn total_weight(&self, problem: &KnapsackProblem) -> u64 {
        self.selected_indices()
            .into_iter()
            .fold(0u64, |acc, i| acc.saturating_add(problem.item(i).weight))
    }

    /// Sum of values of the selected items, ignoring feasibility.
    /// Saturates at `u64::MAX`.
    pub fn total_value(&self, problem: &KnapsackProblem) -> u64 {
        self.selected_indices()
            .into_iter()
            .fold(0u64, |acc, i| acc.saturating_add(problem.item(i).value))
    }
}

/// Renders as a bit string, e.g. `"110"`.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.selected {
            f.write_str(if s { "1" } else { "0" })?;
        }
        Ok(())
    }
}
