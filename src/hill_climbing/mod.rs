//! Steepest-ascent hill climbing.
//!
//! At every step the search evaluates the objective change of every
//! applicable action and moves along the largest one. Ties between equally
//! good actions are broken uniformly at random. The search stops at the
//! first state where no action improves the objective, i.e. a local
//! optimum.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., Section 4.1.1.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::HillClimbing;

pub(crate) use runner::steepest_ascent;
