//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a node at the problem's initial state
//! 2. At each iteration:
//!    a. Generate every successor of the current state
//!    b. Select the best non-tabu successor (first found wins ties), or a
//!       tabu one satisfying aspiration; apply the fallback if none remains
//!    c. Record it in the tabu list and evict entries past their tenure
//!    d. Move to it and update the best node if it improved
//! 3. Terminate after max iterations or stagnation, reporting the best node
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::fmt::Debug;
use std::time::Instant;

use tracing::{debug, info, trace, warn};

use super::config::TabuConfig;
use super::types::{TabuFallback, TabuList};
use crate::error::{Result, SearchError};
use crate::node::Node;
use crate::problem::OptProblem;
use crate::search::{log_solve_end, LocalSearch, SearchOutcome};

/// Tabu Search over whole states.
///
/// # Examples
///
/// ```
/// use u_localsearch::{LocalSearch, OptProblem};
/// use u_localsearch::tabu::{Tabu, TabuConfig};
///
/// /// A dip at 3 separates the start from the peak at 6.
/// struct Ridge;
/// impl OptProblem for Ridge {
///     type State = usize;
///     type Action = usize;
///     fn init(&self) -> usize { 1 }
///     fn obj_val(&self, x: &usize) -> f64 {
///         [0.0, 4.0, 2.0, 1.0, 3.0, 5.0, 9.0, 6.0][*x]
///     }
///     fn actions(&self, x: &usize) -> Vec<usize> {
///         [x.checked_sub(1), Some(x + 1).filter(|&y| y < 8)]
///             .into_iter()
///             .flatten()
///             .collect()
///     }
///     fn result(&self, _x: &usize, to: &usize) -> usize { *to }
///     fn random_reset(&mut self) {}
/// }
///
/// let mut search = Tabu::new(TabuConfig::default());
/// let outcome = search.solve(&mut Ridge).unwrap();
/// assert_eq!(outcome.tour, Some(6));
/// assert_eq!(outcome.value, Some(9.0));
/// ```
#[derive(Debug, Clone)]
pub struct Tabu<S> {
    config: TabuConfig,
    outcome: SearchOutcome<S>,
    tabu_list: TabuList<S>,
}

impl<S> Tabu<S> {
    /// Creates an idle tabu search.
    pub fn new(config: TabuConfig) -> Self {
        Self {
            config,
            outcome: SearchOutcome::default(),
            tabu_list: TabuList::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Tabu memory as left by the most recent run.
    pub fn tabu_list(&self) -> &TabuList<S> {
        &self.tabu_list
    }
}

impl<S> Default for Tabu<S> {
    fn default() -> Self {
        Self::new(TabuConfig::default())
    }
}

impl<S: Clone + PartialEq + Debug> Tabu<S> {
    /// Picks the successor to move to.
    fn select(
        &self,
        mut successors: Vec<Node<S>>,
        best_value: f64,
        iteration: usize,
    ) -> Result<Node<S>> {
        // NaN-valued successors cannot be ranked and are never chosen.
        if successors.iter().all(|node| node.value().is_nan()) {
            return Err(SearchError::NonComparableDelta { iteration });
        }

        let mut chosen: Option<usize> = None;
        for (i, node) in successors.iter().enumerate() {
            if node.value().is_nan() {
                continue;
            }
            let admissible = !self.tabu_list.contains(node.state())
                || (self.config.aspiration && node.value() > best_value);
            if admissible && chosen.is_none_or(|c| node.value() > successors[c].value()) {
                chosen = Some(i);
            }
        }

        if let Some(i) = chosen {
            return Ok(successors.swap_remove(i));
        }

        match self.config.fallback {
            TabuFallback::Fail => Err(SearchError::AllSuccessorsTabu { iteration }),
            TabuFallback::LeastRecentlyTabu => {
                let mut pick: Option<(usize, usize)> = None;
                for (i, node) in successors.iter().enumerate() {
                    if node.value().is_nan() {
                        continue;
                    }
                    let recorded = self.tabu_list.last_recorded(node.state()).unwrap_or(0);
                    let better = pick.is_none_or(|(j, r)| {
                        recorded < r || (recorded == r && node.value() > successors[j].value())
                    });
                    if better {
                        pick = Some((i, recorded));
                    }
                }
                // At least one successor has a value, so pick is set.
                let (i, recorded) = pick.ok_or(SearchError::EmptyNeighborhood { iteration })?;
                warn!(
                    event = "tabu_fallback",
                    iteration = iteration as u64,
                    recorded = recorded as u64,
                    candidates = successors.len() as u64,
                );
                Ok(successors.swap_remove(i))
            }
        }
    }
}

impl<S: Clone + PartialEq + Debug> LocalSearch for Tabu<S> {
    type State = S;

    fn name(&self) -> &'static str {
        "tabu"
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
        self.outcome = SearchOutcome::default();
        self.tabu_list.clear();

        info!(
            event = "solve_start",
            strategy = "tabu",
            max_iterations = self.config.max_iterations as u64,
            max_tabu_iterations = self.config.max_tabu_iterations as u64,
        );

        let init = problem.init();
        let mut current = Node::evaluate(&*problem, init);
        let mut best = current.clone();
        let mut best_iteration = 0usize;
        let mut value_history = vec![current.value()];

        let mut niters = 0usize;
        let mut without_improvement = 0usize;

        while niters < self.config.max_iterations
            && without_improvement < self.config.max_iterations_without_improvement
        {
            let actions = problem.actions(current.state());
            if actions.is_empty() {
                return Err(SearchError::EmptyNeighborhood { iteration: niters });
            }

            let successors: Vec<Node<S>> = actions
                .iter()
                .map(|action| Node::evaluate(&*problem, problem.result(current.state(), action)))
                .collect();

            let chosen = self.select(successors, best.value(), niters)?;

            self.tabu_list.record(chosen.state().clone(), niters);
            self.tabu_list
                .evict_older_than(niters, self.config.max_tabu_iterations);

            current = chosen;
            let improved = current.value() > best.value();
            if improved {
                best = current.clone();
                without_improvement = 0;
            } else {
                without_improvement += 1;
            }

            niters += 1;
            value_history.push(current.value());

            if improved {
                best_iteration = niters;
                debug!(event = "new_best", iteration = niters as u64, value = best.value());
            }
            trace!(
                iteration = niters as u64,
                value = current.value(),
                tabu = self.tabu_list.len() as u64,
            );
        }

        let outcome = &mut self.outcome;
        outcome.niters = niters;
        outcome.best_iteration = best_iteration;
        outcome.value_history = value_history;
        outcome.finish(best, start);
        log_solve_end("tabu", outcome);

        Ok(&self.outcome)
    }
}
