//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from a node at the problem's initial state
//! 2. At each iteration:
//!    a. Compute the objective delta of every applicable action
//!    b. Pick uniformly among the actions with the largest delta
//!    c. If that delta is not positive, stop: local optimum
//!    d. Otherwise move to the successor
//! 3. Report the final node

use std::fmt::Debug;
use std::time::Instant;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{info, trace};

use super::config::HillClimbingConfig;
use crate::error::{Result, SearchError};
use crate::node::Node;
use crate::problem::OptProblem;
use crate::rng::create_rng;
use crate::search::{log_solve_end, LocalSearch, SearchOutcome};

/// Selects the steepest-ascent action at `state`.
///
/// Returns the chosen action and its delta. Among actions sharing the
/// maximum delta the choice is uniform.
pub(crate) fn steepest_ascent<P, R>(
    problem: &P,
    state: &P::State,
    rng: &mut R,
    iteration: usize,
) -> Result<(P::Action, f64)>
where
    P: OptProblem,
    R: Rng,
{
    let mut diff = problem.val_diff(state);
    if diff.is_empty() {
        return Err(SearchError::EmptyNeighborhood { iteration });
    }

    let max = diff
        .iter()
        .map(|(_, delta)| *delta)
        .filter(|delta| !delta.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);

    let ties: Vec<usize> = diff
        .iter()
        .enumerate()
        .filter(|(_, (_, delta))| *delta == max)
        .map(|(i, _)| i)
        .collect();

    let &chosen = ties
        .choose(rng)
        .ok_or(SearchError::NonComparableDelta { iteration })?;

    Ok(diff.swap_remove(chosen))
}

/// Steepest-ascent hill climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::{LocalSearch, OptProblem};
/// use u_localsearch::hill_climbing::{HillClimbing, HillClimbingConfig};
///
/// struct Peak;
/// impl OptProblem for Peak {
///     type State = i32;
///     type Action = i32;
///     fn init(&self) -> i32 { 0 }
///     fn obj_val(&self, x: &i32) -> f64 { -((x - 4) * (x - 4)) as f64 }
///     fn actions(&self, _x: &i32) -> Vec<i32> { vec![-1, 1] }
///     fn result(&self, x: &i32, a: &i32) -> i32 { x + a }
///     fn random_reset(&mut self) {}
/// }
///
/// let mut search = HillClimbing::new(HillClimbingConfig::default().with_seed(1));
/// let outcome = search.solve(&mut Peak).unwrap();
/// assert_eq!(outcome.tour, Some(4));
/// assert_eq!(outcome.niters, 4);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbing<S> {
    config: HillClimbingConfig,
    outcome: SearchOutcome<S>,
}

impl<S> HillClimbing<S> {
    /// Creates an idle hill climber.
    pub fn new(config: HillClimbingConfig) -> Self {
        Self {
            config,
            outcome: SearchOutcome::default(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &HillClimbingConfig {
        &self.config
    }
}

impl<S> Default for HillClimbing<S> {
    fn default() -> Self {
        Self::new(HillClimbingConfig::default())
    }
}

impl<S: Clone + PartialEq + Debug> LocalSearch for HillClimbing<S> {
    type State = S;

    fn name(&self) -> &'static str {
        "hill_climbing"
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
        let start = Instant::now();
        let mut rng = create_rng(self.config.seed);
        self.outcome = SearchOutcome::default();

        info!(event = "solve_start", strategy = "hill_climbing");

        let init = problem.init();
        let mut current = Node::evaluate(&*problem, init);
        let mut niters = 0usize;
        let mut value_history = vec![current.value()];

        loop {
            if self.config.max_iterations > 0 && niters >= self.config.max_iterations {
                break;
            }

            let (action, delta) = steepest_ascent(&*problem, current.state(), &mut rng, niters)?;
            if delta <= 0.0 {
                break;
            }

            let next = problem.result(current.state(), &action);
            current = Node::new(next, current.value() + delta);
            niters += 1;
            value_history.push(current.value());

            trace!(iteration = niters as u64, ?action, delta, value = current.value());
        }

        let outcome = &mut self.outcome;
        outcome.niters = niters;
        outcome.best_iteration = niters;
        outcome.value_history = value_history;
        outcome.finish(current, start);
        log_solve_end("hill_climbing", outcome);

        Ok(&self.outcome)
    }
}
