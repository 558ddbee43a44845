//! Random-restart hill climbing configuration.

use std::time::Duration;

use crate::error::{Result, SearchError};

/// Configuration for [`HillClimbingReset`](super::HillClimbingReset).
///
/// The search never stops at a local optimum on its own, so at least one of
/// `max_iterations` or `time_limit` must bound the run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_localsearch::reset::ResetConfig;
///
/// let config = ResetConfig::default()
///     .with_reset_patience(30)
///     .with_max_iterations(0)
///     .with_time_limit(Duration::from_secs(2))
///     .with_seed(7);
/// assert!(config.validate().is_ok());
///
/// let unbounded = ResetConfig::default().with_max_iterations(0);
/// assert!(unbounded.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetConfig {
    /// Moves allowed in one climb before a forced restart.
    pub reset_patience: usize,

    /// Budget of loop steps, where a move and a restart each cost one.
    /// 0 = no limit.
    pub max_iterations: usize,

    /// Wall-clock budget for the whole run.
    pub time_limit: Option<Duration>,

    /// Random seed for tie-breaking (None for random).
    pub seed: Option<u64>,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            reset_patience: 45,
            max_iterations: 10_000,
            time_limit: None,
            seed: None,
        }
    }
}

impl ResetConfig {
    /// Sets the number of moves tolerated before a restart.
    pub fn with_reset_patience(mut self, patience: usize) -> Self {
        self.reset_patience = patience;
        self
    }

    /// Sets the step budget (0 = unlimited).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 && self.time_limit.is_none() {
            return Err(SearchError::UnboundedSearch);
        }
        if self.time_limit.is_some_and(|limit| limit.is_zero()) {
            return Err(SearchError::InvalidConfig(
                "time_limit must be positive".into(),
            ));
        }
        Ok(())
    }
}
