//! Tabu Search configuration.

use super::types::TabuFallback;
use crate::error::{Result, SearchError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::{TabuConfig, TabuFallback};
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_max_tabu_iterations(7)
///     .with_aspiration(true)
///     .with_fallback(TabuFallback::Fail);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.max_tabu_iterations, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Maximum iterations without improving the best value before stopping.
    pub max_iterations_without_improvement: usize,
    /// Maximum age of a tabu entry. A state chosen at iteration `t` is
    /// evicted at the end of iteration `t + max_tabu_iterations + 1`, so it
    /// stays tabu for the next `max_tabu_iterations + 1` selections.
    pub max_tabu_iterations: usize,
    /// Whether a tabu successor that beats the best value is admissible.
    pub aspiration: bool,
    /// Policy when every successor is tabu.
    pub fallback: TabuFallback,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_iterations_without_improvement: 10,
            max_tabu_iterations: 20,
            aspiration: false,
            fallback: TabuFallback::default(),
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets maximum iterations without improvement.
    pub fn with_max_iterations_without_improvement(mut self, n: usize) -> Self {
        self.max_iterations_without_improvement = n;
        self
    }

    /// Sets how many iterations a state remains tabu.
    pub fn with_max_tabu_iterations(mut self, n: usize) -> Self {
        self.max_tabu_iterations = n;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the policy for an all-tabu neighborhood.
    pub fn with_fallback(mut self, fallback: TabuFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        if self.max_iterations_without_improvement == 0 {
            return Err(SearchError::InvalidConfig(
                "max_iterations_without_improvement must be positive".into(),
            ));
        }
        Ok(())
    }
}
