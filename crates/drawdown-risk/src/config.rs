//! Configuration for the risk engine.

use serde::{Deserialize, Serialize};

/// Default minimum trial count before trials are spread across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Configuration for Monte Carlo execution.
///
/// Controls parallelism and seeding. Results do not depend on whether trials
/// run in parallel: every trial is seeded from the base seed and its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Enable parallel trial execution.
    pub parallel: bool,

    /// Minimum trial count to trigger parallel execution.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Base seed. If None, each run draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always runs trials sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel execution.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel execution.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Fixes the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns true if parallel execution should be used for `trials`.
    #[must_use]
    pub fn should_parallelize(&self, trials: usize) -> bool {
        self.parallel && trials >= self.parallel_threshold
    }
}
