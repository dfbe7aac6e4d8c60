//! Forecast configuration parameters.

use serde::{Deserialize, Serialize};

use crate::board::cell::EPSILON;

/// Forecast configuration parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Per-cell states at or below this probability are not enumerated.
    /// Defaults to the engine-wide tolerance.
    pub drop_threshold: f64,

    /// Stop enumerating once the next candidate's joint probability falls
    /// below this floor. Everything past it is numerically negligible.
    pub min_probability: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            drop_threshold: EPSILON,
            min_probability: 1e-12,
        }
    }
}

impl ForecastConfig {
    /// Create a config with a custom per-cell drop threshold.
    #[must_use]
    pub fn with_drop_threshold(mut self, threshold: f64) -> Self {
        self.drop_threshold = threshold;
        self
    }

    /// Create a config with a custom joint-probability floor.
    #[must_use]
    pub fn with_min_probability(mut self, floor: f64) -> Self {
        self.min_probability = floor;
        self
    }
}
