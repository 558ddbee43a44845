//! Domain-agnostic local search for combinatorial optimization.
//!
//! Provides generic implementations of classic neighborhood-walking
//! strategies:
//!
//! - **Hill Climbing**: steepest ascent with uniformly random tie-breaking;
//!   stops at the first local optimum.
//! - **Random-Restart Hill Climbing**: hill climbing that restarts from a
//!   fresh initial state whenever it reaches a local optimum or runs out of
//!   patience, reporting the best node seen across climbs.
//! - **Tabu Search (TS)**: always moves to the best admissible neighbor,
//!   using a bounded-age memory of recently chosen states to escape local
//!   optima.
//!
//! # Architecture
//!
//! Problems implement [`OptProblem`]: an initial state, an objective to
//! maximize, the applicable actions and their successors. Strategies
//! implement [`LocalSearch`] and leave their result in a
//! [`SearchOutcome`]. Nothing here knows about any particular problem
//! domain; tours, schedules and assignments are all defined by consumers.
//!
//! Runs emit structured `tracing` events (`solve_start`, `solve_end`,
//! restarts, tabu fallbacks). Installing a subscriber is up to the caller.

pub mod error;
pub mod hill_climbing;
pub mod node;
pub mod problem;
pub mod reset;
pub mod search;
pub mod tabu;

mod rng;

#[cfg(test)]
mod test_problems;

pub use error::{Result, SearchError};
pub use hill_climbing::{HillClimbing, HillClimbingConfig};
pub use node::Node;
pub use problem::OptProblem;
pub use reset::{HillClimbingReset, ResetConfig};
pub use search::{Baseline, LocalSearch, SearchOutcome};
pub use tabu::{Tabu, TabuConfig, TabuFallback, TabuList};
