//! Tabu Search configuration.

use std::time::Duration;

use super::types::SearchStrategy;
use crate::error::{KnapsackError, Result};
use crate::neighborhood::TweakMode;

/// Configuration parameters for knapsack Tabu Search.
///
/// # Examples
///
/// ```
/// use knapsack_tabu::tabu::{SearchStrategy, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_iteration_budget(500)
///     .with_tabu_capacity(7)
///     .with_rounds(20)
///     .with_strategy(SearchStrategy::Steepest)
///     .with_seed(42);
/// assert_eq!(config.iteration_budget, 500);
/// assert_eq!(config.rounds, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Neighbor-generation steps per round.
    pub iteration_budget: usize,
    /// Maximum number of solutions held in the tabu list.
    pub tabu_capacity: usize,
    /// Number of rounds to run.
    pub rounds: usize,
    /// Round orchestration.
    pub strategy: SearchStrategy,
    /// Feasibility handling in the tweak fallback (`Sampled` only).
    pub tweak_mode: TweakMode,
    /// Random seed (None for random).
    pub seed: Option<u64>,
    /// Wall-clock limit, checked between steps.
    pub time_limit: Option<Duration>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iteration_budget: 1000,
            tabu_capacity: 10,
            rounds: 1,
            strategy: SearchStrategy::Sampled,
            tweak_mode: TweakMode::Faithful,
            seed: None,
            time_limit: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of steps per round.
    pub fn with_iteration_budget(mut self, n: usize) -> Self {
        self.iteration_budget = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_tweak_mode(mut self, mode: TweakMode) -> Self {
        self.tweak_mode = mode;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iteration_budget == 0 {
            return Err(KnapsackError::invalid("iteration_budget must be positive"));
        }
        if self.tabu_capacity == 0 {
            return Err(KnapsackError::invalid("tabu_capacity must be positive"));
        }
        if self.rounds == 0 {
            return Err(KnapsackError::invalid("rounds must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.iteration_budget, 1000);
        assert_eq!(config.tabu_capacity, 10);
        assert_eq!(config.rounds, 1);
        assert_eq!(config.strategy, SearchStrategy::Sampled);
        assert_eq!(config.tweak_mode, TweakMode::Faithful);
        assert!(config.seed.is_none());
        assert!(config.time_limit.is_none());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_iteration_budget(200)
            .with_tabu_capacity(4)
            .with_rounds(3)
            .with_strategy(SearchStrategy::Steepest)
            .with_tweak_mode(TweakMode::WeightTracked)
            .with_seed(123)
            .with_time_limit(Duration::from_millis(50));

        assert_eq!(config.iteration_budget, 200);
        assert_eq!(config.tabu_capacity, 4);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.strategy, SearchStrategy::Steepest);
        assert_eq!(config.tweak_mode, TweakMode::WeightTracked);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.time_limit, Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_validate_ok() {
        assert!(TabuConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_budget() {
        let err = TabuConfig::default()
            .with_iteration_budget(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_zero_tabu_capacity() {
        assert!(TabuConfig::default().with_tabu_capacity(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_rounds() {
        assert!(TabuConfig::default().with_rounds(0).validate().is_err());
    }
}
