//! Error types for local search runs.

use thiserror::Error;

/// Errors raised while configuring or running a local search.
///
/// Every variant is fatal for the current `solve` call. Nothing is retried
/// and the strategy's outcome is left at its idle defaults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The problem reported no applicable action at a state.
    #[error("no applicable actions at iteration {iteration}")]
    EmptyNeighborhood {
        /// Iteration at which the empty neighborhood was found.
        iteration: usize,
    },

    /// Every successor was tabu and the configured fallback is to fail.
    #[error("every successor is tabu at iteration {iteration}")]
    AllSuccessorsTabu {
        /// Iteration at which no admissible successor remained.
        iteration: usize,
    },

    /// A restarting search was configured with neither an iteration budget
    /// nor a time limit.
    #[error("search has no termination bound: set max_iterations or time_limit")]
    UnboundedSearch,

    /// No maximum objective delta exists (every delta or every successor
    /// value is NaN).
    #[error("objective deltas are not comparable at iteration {iteration}")]
    NonComparableDelta {
        /// Iteration at which the deltas were evaluated.
        iteration: usize,
    },

    /// Any other invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for local search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
