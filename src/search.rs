//! Base contract shared by every local search strategy.

use std::time::{Duration, Instant};

use tracing::info;

use crate::error::Result;
use crate::node::Node;
use crate::problem::OptProblem;

/// Result of the most recent `solve` call.
///
/// An idle strategy holds the default outcome: no tour, no value, zero
/// iterations and zero time. Each `solve` overwrites the whole outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome<S> {
    /// Best state found.
    pub tour: Option<S>,
    /// Objective value of `tour`.
    pub value: Option<f64>,
    /// Number of moves performed.
    pub niters: usize,
    /// Wall-clock duration of the run.
    pub time: Duration,
    /// Number of restarts (random-restart strategy only).
    pub restarts: usize,
    /// Iteration at which `value` was first reached.
    pub best_iteration: usize,
    /// Value of the current node after each iteration, starting with the
    /// initial node.
    pub value_history: Vec<f64>,
}

impl<S> Default for SearchOutcome<S> {
    fn default() -> Self {
        Self {
            tour: None,
            value: None,
            niters: 0,
            time: Duration::ZERO,
            restarts: 0,
            best_iteration: 0,
            value_history: Vec::new(),
        }
    }
}

impl<S> SearchOutcome<S> {
    /// Whether a `solve` call has populated this outcome.
    pub fn is_solved(&self) -> bool {
        self.tour.is_some()
    }

    /// Stores `best` as the reported solution and stamps the elapsed time.
    pub(crate) fn finish(&mut self, best: Node<S>, start: Instant) {
        let (state, value) = best.into_parts();
        self.tour = Some(state);
        self.value = Some(value);
        self.time = start.elapsed();
    }
}

/// A local search strategy.
///
/// `solve` is the only transition from idle to solved. It borrows the
/// strategy mutably, so a single instance can never run two searches at
/// once. The problem is borrowed mutably as well because restarting
/// strategies reconfigure it through [`OptProblem::random_reset`].
pub trait LocalSearch {
    /// State type of the problems this strategy solves.
    type State;

    /// Short identifier used in log events.
    fn name(&self) -> &'static str;

    /// Outcome of the most recent run.
    fn outcome(&self) -> &SearchOutcome<Self::State>;

    /// Mutable access to the outcome, used by the provided `solve`.
    fn outcome_mut(&mut self) -> &mut SearchOutcome<Self::State>;

    /// Runs the search and returns the populated outcome.
    ///
    /// The provided implementation performs no search at all: it evaluates
    /// the initial state and reports it. Strategies override it.
    fn solve<P>(&mut self, problem: &mut P) -> Result<&SearchOutcome<Self::State>>
    where
        P: OptProblem<State = Self::State>,
    {
        let start = Instant::now();
        let strategy = self.name();
        info!(event = "solve_start", strategy);

        let init = problem.init();
        let node = Node::evaluate(&*problem, init);

        let outcome = self.outcome_mut();
        *outcome = SearchOutcome::default();
        outcome.value_history.push(node.value());
        outcome.finish(node, start);
        log_solve_end(strategy, outcome);

        Ok(self.outcome())
    }
}

/// Emits the structured end-of-run event shared by every strategy.
pub(crate) fn log_solve_end<S>(strategy: &'static str, outcome: &SearchOutcome<S>) {
    info!(
        event = "solve_end",
        strategy,
        value = outcome.value.unwrap_or(f64::NAN),
        niters = outcome.niters as u64,
        restarts = outcome.restarts as u64,
        duration_ms = outcome.time.as_millis() as u64,
    );
}

/// Reports the initial state without searching.
///
/// Useful as a reference point: any real strategy should do at least as
/// well as the baseline on the same problem.
#[derive(Debug, Clone)]
pub struct Baseline<S> {
    outcome: SearchOutcome<S>,
}

impl<S> Baseline<S> {
    /// Creates an idle baseline.
    pub fn new() -> Self {
        Self {
            outcome: SearchOutcome::default(),
        }
    }
}

impl<S> Default for Baseline<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> LocalSearch for Baseline<S> {
    type State = S;

    fn name(&self) -> &'static str {
        "baseline"
    }

    fn outcome(&self) -> &SearchOutcome<S> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut SearchOutcome<S> {
        &mut self.outcome
    }
}
