//! Search node: a state paired with its objective value.

use crate::problem::OptProblem;

/// Where the search currently stands.
///
/// The value is fixed at construction and always equals the problem's
/// objective at `state`. Nodes are never mutated; a move builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S> {
    state: S,
    value: f64,
}

impl<S> Node<S> {
    /// Creates a node whose value is already known, typically
    /// `parent.value() + delta` from [`OptProblem::val_diff`].
    pub fn new(state: S, value: f64) -> Self {
        Self { state, value }
    }

    /// Creates a node by evaluating `state` with the problem's objective.
    pub fn evaluate<P>(problem: &P, state: S) -> Self
    where
        P: OptProblem<State = S>,
    {
        let value = problem.obj_val(&state);
        Self { state, value }
    }

    /// The state held by this node.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The objective value of the state.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Consumes the node, returning `(state, value)`.
    pub fn into_parts(self) -> (S, f64) {
        (self.state, self.value)
    }
}
