//! Random-restart hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from a node at the problem's initial state
//! 2. Until the step budget or the time limit is spent:
//!    a. If the climb has used up its patience, restart
//!    b. Otherwise take the steepest-ascent step; if it does not improve,
//!       restart, else move and extend the climb
//!    c. Track the best node seen so far
//! 3. Report the best node
//!
//! A restart calls `random_reset` on the problem and continues from its new
//! initial state.

use std::fmt::Debug;
use std::time::Instant;

use tracing::{debug, info, trace};

use super::config::ResetConfig;
use crate::error::Result;
use crate::hill_climbing::steepest_ascent;
use crate::node::Node;
use crate::problem::OptProblem;
use crate::rng::create_rng;
use crate::search::{log_solve_end, LocalSearch, SearchOutcome};

/// Hill climbing with patience-bounded random restarts.
///
/// # Examples
///
/// ```
/// use u_localsearch::{LocalSearch, OptProblem};
/// use u_localsearch::reset::{HillClimbingReset, ResetConfig};
///
/// /// Two peaks: a low one at 2 and a high one at 20.
/// struct TwoPeaks { start: i32 }
/// impl OptProblem for TwoPeaks {
///     type State = i32;
///     type Action = i32;
///     fn init(&self) -> i32 { self.start }
///     fn obj_val(&self, x: &i32) -> f64 {
///         let low = 5 - (x - 2).abs();
///         let high = 50 - 3 * (x - 20).abs();
///         low.max(high) as f64
///     }
///     fn actions(&self, _x: &i32) -> Vec<i32> { vec![-1, 1] }
///     fn result(&self, x: &i32, a: &i32) -> i32 { x + a }
///     fn random_reset(&mut self) { self.start += 9; }
/// }
///
/// let mut search = HillClimbingReset::new(
///     ResetConfig::default().with_max_iterations(200).with_seed(3),
/// );
/// let outcome = search.solve(&mut TwoPeaks { start: 0 }).unwrap();
/// assert_eq!(outcome.tour, Some(20));
/// assert!(outcome.restarts > 0);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbingReset<S> {
    config: ResetConfig,
    outcome: SearchOutcome<S>,
}

impl<S> HillClimbingReset<S> {
    /// Creates an idle random-restart hill climber.
    pub fn new(config: ResetConfig) -> Self {
        Self {
            config,
            outcome: SearchOutcome::default(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ResetConfig {
        &self.config
    }

    fn budget_spent(&self, steps: usize, start: Instant) -> bool {
        let steps_spent = self.config.max_iterations > 0 && steps >= self.config.max_iterations;
        let time_spent = self
            .config
            .time_limit
            .is_some_and(|limit| start.elapsed() >= limit);
        steps_spent || time_spent
    }
}

impl<S> Default for HillClimbingReset<S> {
    fn default() -> Self {
        Self::new(ResetConfig::default())
    }
}

impl<S: Clone + PartialEq + Debug> LocalSearch for HillClimbingReset<S> {
    type State = S;

    fn name(&self) -> &'static str {
        "hill_climbing_reset"
    }

    fn outcome(&self) -> &SearchOutcome<S> {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut SearchOutcome<S> {
        &mut self.outcome
    }

    fn solve<P>(&mut self, problem: &mut P) -> Result<&SearchOutcome<S>>
    where
        P: OptProblem<State = S>,
    {
        self.config.validate()?;

        let start = Instant::now();
        let mut rng = create_rng(self.config.seed);
        self.outcome = SearchOutcome::default();

        info!(
            event = "solve_start",
            strategy = "hill_climbing_reset",
            reset_patience = self.config.reset_patience as u64,
            max_iterations = self.config.max_iterations as u64,
        );

        let init = problem.init();
        let mut current = Node::evaluate(&*problem, init);
        let mut best = current.clone();
        let mut best_iteration = 0usize;
        let mut value_history = vec![current.value()];

        let mut niters = 0usize;
        let mut restarts = 0usize;
        let mut patience = 0usize;

        while !self.budget_spent(niters + restarts, start) {
            let improving = if patience > self.config.reset_patience {
                None
            } else {
                let (action, delta) =
                    steepest_ascent(&*problem, current.state(), &mut rng, niters)?;
                (delta > 0.0).then_some((action, delta))
            };

            match improving {
                Some((action, delta)) => {
                    let next = problem.result(current.state(), &action);
                    current = Node::new(next, current.value() + delta);
                    niters += 1;
                    patience += 1;
                    trace!(iteration = niters as u64, ?action, delta, value = current.value());
                }
                None => {
                    problem.random_reset();
                    let init = problem.init();
                    current = Node::evaluate(&*problem, init);
                    patience = 0;
                    restarts += 1;
                    debug!(
                        event = "restart",
                        restarts = restarts as u64,
                        niters = niters as u64,
                        value = current.value(),
                        best = best.value(),
                    );
                }
            }

            value_history.push(current.value());

            if current.value() > best.value() {
                best = current.clone();
                best_iteration = niters;
            }
        }

        let outcome = &mut self.outcome;
        outcome.niters = niters;
        outcome.restarts = restarts;
        outcome.best_iteration = best_iteration;
        outcome.value_history = value_history;
        outcome.finish(best, start);
        log_solve_end("hill_climbing_reset", outcome);

        Ok(&self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::test_problems::{init_tracing, Chain, Quadratic, Staircase};
    use std::time::Duration;

    /// Four isolated starts that are all local optima, each leading only to
    /// a deep sink.
    fn isolated_starts() -> Chain {
        let mut problem = Chain::new(
            vec![1.0, 3.0, 2.0, 4.0, -100.0],
            vec![vec![4], vec![4], vec![4], vec![4], vec![4]],
        );
        problem.restart_points = vec![1, 2, 3, 0];
        problem
    }

    #[test]
    fn test_restarts_visit_every_start() {
        let mut problem = isolated_starts();
        let mut search =
            HillClimbingReset::new(ResetConfig::default().with_max_iterations(8).with_seed(1));

        let outcome = search.solve(&mut problem).unwrap();

        assert_eq!(
            outcome.value_history,
            vec![1.0, 3.0, 2.0, 4.0, 1.0, 3.0, 2.0, 4.0, 1.0]
        );
        assert_eq!(outcome.restarts, 8);
        assert_eq!(outcome.niters, 0);
        assert_eq!(outcome.tour, Some(3));
        assert_eq!(outcome.value, Some(4.0));
        assert_eq!(problem.resets, 8);
    }

    #[test]
    fn test_patience_forces_restart() {
        init_tracing();
        let mut problem = Staircase { start: 0 };
        let mut search = HillClimbingReset::new(
            ResetConfig::default()
                .with_reset_patience(5)
                .with_max_iterations(30)
                .with_seed(1),
        );

        let outcome = search.solve(&mut problem).unwrap();

        // Each climb makes 6 moves, then restarts: 4 full cycles + 2 moves.
        assert_eq!(outcome.restarts, 4);
        assert_eq!(outcome.niters, 26);
        assert_eq!(outcome.tour, Some(4002));
        assert_eq!(outcome.value, Some(4002.0));
    }

    #[test]
    fn test_step_budget_is_respected() {
        let mut problem = Quadratic { start: 40 };
        let mut search =
            HillClimbingReset::new(ResetConfig::default().with_max_iterations(200).with_seed(9));

        let outcome = search.solve(&mut problem).unwrap();

        assert_eq!(outcome.niters + outcome.restarts, 200);
        assert!(outcome.restarts > 0);
    }

    #[test]
    fn test_reports_best_not_last() {
        let mut problem = Quadratic { start: 40 };
        let mut search =
            HillClimbingReset::new(ResetConfig::default().with_max_iterations(150).with_seed(9));

        let outcome = search.solve(&mut problem).unwrap();

        assert_eq!(outcome.tour, Some(5));
        assert_eq!(outcome.value, Some(0.0));
        assert_eq!(outcome.best_iteration, 35);
        let last = *outcome.value_history.last().unwrap();
        assert!(outcome.value.unwrap() >= last);
    }

    #[test]
    fn test_time_limit_terminates() {
        let mut problem = Staircase { start: 0 };
        let limit = Duration::from_millis(20);
        let mut search = HillClimbingReset::new(
            ResetConfig::default()
                .with_max_iterations(0)
                .with_time_limit(limit),
        );

        let outcome = search.solve(&mut problem).unwrap();

        assert!(outcome.time >= limit);
        assert!(outcome.niters > 0);
    }

    #[test]
    fn test_unbounded_config_is_rejected() {
        let mut problem = Staircase { start: 0 };
        let mut search = HillClimbingReset::new(ResetConfig::default().with_max_iterations(0));

        let err = search.solve(&mut problem).unwrap_err();

        assert_eq!(err, SearchError::UnboundedSearch);
        assert_eq!(problem.start, 0);
    }

    #[test]
    fn test_empty_neighborhood_propagates() {
        let mut problem = Chain::new(vec![0.0], vec![vec![]]);
        let mut search = HillClimbingReset::<usize>::default();

        let err = search.solve(&mut problem).unwrap_err();

        assert_eq!(err, SearchError::EmptyNeighborhood { iteration: 0 });
        assert!(!search.outcome().is_solved());
    }
}
