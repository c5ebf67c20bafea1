//! Knapsack problem instance.

use crate::error::{KnapsackError, Result};

/// A single item that may be packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight counted against the capacity.
    pub weight: u64,
    /// Value gained when the item is selected.
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// An immutable 0/1 knapsack instance: items indexed `0..N` plus a capacity.
///
/// Construction validates the instance once; afterwards it is read-only for
/// the whole search.
///
/// # Examples
///
/// ```
/// use knapsack_tabu::problem::KnapsackProblem;
///
/// let problem = KnapsackProblem::load(3, 5, &[(2, 3), (3, 4), (4, 5)]).unwrap();
/// assert_eq!(problem.item_count(), 3);
/// assert_eq!(problem.capacity(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackProblem {
    capacity: u64,
    items: Vec<Item>,
}

impl KnapsackProblem {
    /// Builds an instance from raw signed input, as read from a text shell.
    ///
    /// Fails with [`KnapsackError::InvalidInput`] when `item_count <= 0`,
    /// `capacity < 0`, the number of pairs differs from `item_count`, or any
    /// weight or value is negative.
    pub fn load(item_count: i64, capacity: i64, items: &[(i64, i64)]) -> Result<Self> {
        if item_count <= 0 {
            return Err(KnapsackError::invalid(format!(
                "item_count must be positive, got {item_count}"
            )));
        }
        if capacity < 0 {
            return Err(KnapsackError::invalid(format!(
                "capacity must be non-negative, got {capacity}"
            )));
        }
        if items.len() as u64 != item_count as u64 {
            return Err(KnapsackError::invalid(format!(
                "expected {item_count} items, got {}",
                items.len()
            )));
        }

        let items = items
            .iter()
            .enumerate()
            .map(|(i, &(weight, value))| {
                if weight < 0 || value < 0 {
                    Err(KnapsackError::invalid(format!(
                        "item {i} has negative weight or value ({weight}, {value})"
                    )))
                } else {
                    Ok(Item::new(weight as u64, value as u64))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(capacity as u64, items)
    }

    /// Builds an instance from already-typed items.
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(KnapsackError::invalid("at least one item is required"));
        }
        Ok(Self { capacity, items })
    }

    /// Number of items `N`.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Capacity `W`.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`. Panics if out of range.
    pub fn item(&self, index: usize) -> Item {
        self.items[index]
    }
}
