//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that always moves to the best
//! neighbor, even a worse one, while forbidding recently chosen states for a
//! bounded number of iterations. The memory prevents cycling and lets the
//! search walk out of local optima.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::Tabu;
pub use types::{TabuFallback, TabuList};
