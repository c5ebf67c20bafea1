//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Pack a greedy random feasible starting solution; it becomes the best
//!    so far and the first tabu entry.
//! 2. For each round:
//!    - `Sampled`: draw `iteration_budget` tweaks of the current solution,
//!      keeping the best non-tabu candidate (a tabu candidate is always
//!      replaced). Commit it and mark it tabu if still admissible.
//!    - `Steepest`: for `iteration_budget` steps, move to the best non-tabu
//!      feasible single-flip neighbor (two random flips when none exists),
//!      pushing the previous solution onto the tabu list.
//! 3. Update the global best whenever a strictly better value appears.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::config::TabuConfig;
use super::list::TabuList;
use super::types::{SearchPhase, SearchStrategy, TabuResult};
use crate::error::Result;
use crate::neighborhood::{flip_neighborhood, greedy_random_packing, random_double_flip, tweak};
use crate::problem::{KnapsackProblem, Solution};

/// A single Tabu Search run over one problem instance.
///
/// Owns all mutable search state: the RNG (seeded once), the current
/// solution, the best so far and the tabu list. Moves through
/// [`SearchPhase::Uninitialized`] → `Initialized` → `Running` → `Done`.
pub struct TabuSearch<'a> {
    problem: &'a KnapsackProblem,
    config: TabuConfig,
    rng: StdRng,
    phase: SearchPhase,
    current: Solution,
    best: Solution,
    best_value: u64,
    tabu: TabuList,
    rounds: usize,
    iterations: usize,
    best_iteration: usize,
    value_history: Vec<u64>,
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
    cancelled: bool,
    timed_out: bool,
}

impl<'a> TabuSearch<'a> {
    /// Validates `config` and prepares an uninitialized search.
    pub fn new(problem: &'a KnapsackProblem, config: TabuConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let n = problem.item_count();

        Ok(Self {
            problem,
            rng,
            phase: SearchPhase::Uninitialized,
            current: Solution::empty(n),
            best: Solution::empty(n),
            best_value: 0,
            tabu: TabuList::new(config.tabu_capacity),
            rounds: 0,
            iterations: 0,
            best_iteration: 0,
            value_history: Vec::with_capacity(config.rounds),
            cancel: None,
            deadline: None,
            cancelled: false,
            timed_out: false,
            config,
        })
    }

    /// Attaches a cancellation flag polled between steps.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn current(&self) -> &Solution {
        &self.current
    }

    pub fn best(&self) -> &Solution {
        &self.best
    }

    pub fn best_value(&self) -> u64 {
        self.best_value
    }

    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu
    }

    /// Builds the starting solution and seeds the tabu list with it.
    ///
    /// Does nothing unless the search is still uninitialized.
    pub fn initialize(&mut self) {
        if self.phase != SearchPhase::Uninitialized {
            return;
        }

        self.current = greedy_random_packing(self.problem, &mut self.rng);
        self.best = self.current.clone();
        self.best_value = self.problem.score(&self.current);
        self.tabu.add(self.current.clone());
        self.phase = SearchPhase::Initialized;

        debug!(
            initial = %self.current,
            value = self.best_value,
            "initialized tabu search"
        );
    }

    /// Runs every configured round and returns the result.
    ///
    /// Initializes first if needed. Once the search is done, further calls
    /// return the same result without searching again.
    pub fn solve(&mut self) -> TabuResult {
        if self.phase == SearchPhase::Done {
            return self.result();
        }

        self.initialize();
        self.phase = SearchPhase::Running;
        self.deadline = self
            .config
            .time_limit
            .and_then(|limit| Instant::now().checked_add(limit));

        info!(
            items = self.problem.item_count(),
            capacity = self.problem.capacity(),
            strategy = ?self.config.strategy,
            rounds = self.config.rounds,
            iteration_budget = self.config.iteration_budget,
            "starting tabu search"
        );

        for round in 0..self.config.rounds {
            if self.interrupted() {
                break;
            }
            match self.config.strategy {
                SearchStrategy::Sampled => self.sampled_round(),
                SearchStrategy::Steepest => self.steepest_round(),
            }
            if self.cancelled || self.timed_out {
                break;
            }
            self.rounds += 1;
            debug!(round, best_value = self.best_value, "round finished");
        }

        self.phase = SearchPhase::Done;

        info!(
            best_value = self.best_value,
            best = %self.best,
            rounds = self.rounds,
            iterations = self.iterations,
            cancelled = self.cancelled,
            timed_out = self.timed_out,
            "tabu search finished"
        );

        self.result()
    }

    fn sampled_round(&mut self) {
        let problem = self.problem;
        let mode = self.config.tweak_mode;
        let mut candidate = tweak(problem, &self.current, mode, &mut self.rng);

        for _ in 0..self.config.iteration_budget {
            if self.interrupted() {
                break;
            }
            let neighbor = tweak(problem, &self.current, mode, &mut self.rng);
            self.iterations += 1;

            if self.tabu.contains(&neighbor) {
                trace!(neighbor = %neighbor, "neighbor is tabu");
                continue;
            }
            if problem.score(&neighbor) > problem.score(&candidate)
                || self.tabu.contains(&candidate)
            {
                candidate = neighbor;
            }
        }

        if self.tabu.contains(&candidate) {
            trace!(candidate = %candidate, "round candidate is tabu, current unchanged");
        } else {
            self.current = candidate;
            self.tabu.add(self.current.clone());
        }

        let value = problem.score(&self.current);
        if value > self.best_value {
            self.improve(self.current.clone(), value);
        }
        self.value_history.push(self.best_value);
    }

    /// Best-improvement steps over the feasible single-flip neighborhood.
    ///
    /// Ties go to the lowest flipped index. When every neighbor is tabu, two
    /// random bits are flipped regardless of tabu status and feasibility, and
    /// that fallback neighbor is scored like any other: it becomes the new
    /// best if it beats the current best.
    fn steepest_round(&mut self) {
        let problem = self.problem;

        for _ in 0..self.config.iteration_budget {
            if self.interrupted() {
                break;
            }

            let mut chosen: Option<(Solution, u64)> = None;
            for neighbor in flip_neighborhood(problem, &self.current) {
                if self.tabu.contains(&neighbor) {
                    continue;
                }
                let value = problem.score(&neighbor);
                if chosen.as_ref().map_or(true, |(_, best)| value > *best) {
                    chosen = Some((neighbor, value));
                }
            }

            let (next, value) = match chosen {
                Some(found) => found,
                None => {
                    trace!(
                        current = %self.current,
                        "no admissible neighbor, flipping two random bits"
                    );
                    let next = random_double_flip(&self.current, &mut self.rng);
                    let value = problem.score(&next);
                    (next, value)
                }
            };
            self.iterations += 1;

            if value > self.best_value {
                self.improve(next.clone(), value);
            }

            let previous = std::mem::replace(&mut self.current, next);
            self.tabu.add(previous);
            self.value_history.push(self.best_value);
        }
    }

    fn improve(&mut self, solution: Solution, value: u64) {
        debug!(
            iteration = self.iterations,
            from = self.best_value,
            to = value,
            "new best solution"
        );
        self.best = solution;
        self.best_value = value;
        self.best_iteration = self.iterations;
    }

    /// Polls the cancellation flag and the deadline.
    fn interrupted(&mut self) -> bool {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.cancelled = true;
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
                return true;
            }
        }
        false
    }

    fn result(&self) -> TabuResult {
        TabuResult {
            best: self.best.clone(),
            best_value: self.best_value,
            best_weight: self.best.total_weight(self.problem),
            rounds: self.rounds,
            iterations: self.iterations,
            best_iteration: self.best_iteration,
            value_history: self.value_history.clone(),
            cancelled: self.cancelled,
            timed_out: self.timed_out,
        }
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_tabu::problem::KnapsackProblem;
    /// use knapsack_tabu::tabu::{TabuConfig, TabuRunner};
    ///
    /// let problem = KnapsackProblem::load(3, 5, &[(2, 3), (3, 4), (4, 5)]).unwrap();
    /// let config = TabuConfig::default().with_rounds(10).with_seed(42);
    /// let result = TabuRunner::run(&problem, &config).unwrap();
    /// assert_eq!(result.best_value, 7);
    /// ```
    pub fn run(problem: &KnapsackProblem, config: &TabuConfig) -> Result<TabuResult> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token.
    pub fn run_with_cancel(
        problem: &KnapsackProblem,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult> {
        let mut search = TabuSearch::new(problem, config.clone())?;
        if let Some(flag) = cancel {
            search = search.with_cancel(flag);
        }
        Ok(search.solve())
    }
}
