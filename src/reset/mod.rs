//! Hill climbing with random restarts.
//!
//! Climbs exactly like [`hill_climbing`](crate::hill_climbing), but a local
//! optimum, or a climb that has run out of patience, triggers a restart
//! from a fresh initial state supplied by
//! [`OptProblem::random_reset`](crate::OptProblem::random_reset). The best
//! node seen across all climbs is reported.

mod config;
mod runner;

pub use config::ResetConfig;
pub use runner::HillClimbingReset;
