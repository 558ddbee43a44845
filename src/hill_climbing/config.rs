//! Hill climbing configuration.

/// Configuration for steepest-ascent hill climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill_climbing::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(10_000)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 10_000);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Maximum number of moves. 0 = climb until a local optimum.
    pub max_iterations: usize,
    /// Random seed for tie-breaking (None for random).
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 0,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    /// Sets the move budget (0 = unlimited).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
