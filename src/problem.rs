//! Core trait for local search problems.

use std::fmt::Debug;

/// Defines an optimization problem explored by local search.
///
/// The strategies know nothing about the structure of a state. They only
/// ask for the starting state, the applicable actions, the successor an
/// action leads to and the objective value of a state.
///
/// # Maximization
///
/// Higher objective values are better. For a cost to be minimized
/// (e.g. a tour length), return its negation.
///
/// # Examples
///
/// ```
/// use u_localsearch::OptProblem;
///
/// /// Walk on the integers towards 10.
/// struct Walk {
///     start: i64,
/// }
///
/// impl OptProblem for Walk {
///     type State = i64;
///     type Action = i64;
///
///     fn init(&self) -> i64 {
///         self.start
///     }
///
///     fn obj_val(&self, x: &i64) -> f64 {
///         -((x - 10).abs() as f64)
///     }
///
///     fn actions(&self, _x: &i64) -> Vec<i64> {
///         vec![-1, 1]
///     }
///
///     fn result(&self, x: &i64, step: &i64) -> i64 {
///         x + step
///     }
///
///     fn random_reset(&mut self) {
///         self.start = -self.start;
///     }
/// }
///
/// let walk = Walk { start: 3 };
/// assert_eq!(walk.val_diff(&3), vec![(-1, -1.0), (1, 1.0)]);
/// ```
pub trait OptProblem {
    /// A candidate solution. Equality is used for tabu membership.
    type State: Clone + PartialEq + Debug;

    /// A transition from a state to one of its neighbors.
    type Action: Clone + Debug;

    /// The state a search starts from.
    fn init(&self) -> Self::State;

    /// Objective value of `state`. Higher is better.
    ///
    /// Must be idempotent: repeated calls return the same value.
    fn obj_val(&self, state: &Self::State) -> f64;

    /// All actions applicable at `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The successor reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Objective change for every applicable action, in `actions` order.
    ///
    /// Each delta must equal
    /// `obj_val(result(state, action)) - obj_val(state)`. The provided
    /// implementation evaluates every successor; problems with an
    /// incremental formula (2-opt on a tour, for instance) should override it.
    fn val_diff(&self, state: &Self::State) -> Vec<(Self::Action, f64)> {
        let base = self.obj_val(state);
        self.actions(state)
            .into_iter()
            .map(|action| {
                let delta = self.obj_val(&self.result(state, &action)) - base;
                (action, delta)
            })
            .collect()
    }

    /// Reconfigures the problem so that the next [`init`](Self::init)
    /// returns a different starting state.
    ///
    /// Only the random-restart strategy calls this.
    fn random_reset(&mut self);
}
