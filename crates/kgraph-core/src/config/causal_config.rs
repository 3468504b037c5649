use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_CAUSAL_TRAVERSAL_DEPTH;
use crate::errors::{KgError, KgResult};

/// Causal engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalConfig {
    /// Maximum number of hops a causal path may span.
    pub max_causal_depth: usize,
    /// Confidence at or above which an analysis is flagged `above_threshold`.
    pub confidence_threshold: f64,
    /// Noise applied to counterfactual outcome predictions.
    pub counterfactual_noise: NoiseConfig,
}

impl Default for CausalConfig {
    fn default() -> Self {
        Self {
            max_causal_depth: defaults::DEFAULT_MAX_CAUSAL_DEPTH,
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            counterfactual_noise: NoiseConfig::default(),
        }
    }
}

impl CausalConfig {
    pub fn validate(&self) -> KgResult<()> {
        if self.max_causal_depth == 0 || self.max_causal_depth > MAX_CAUSAL_TRAVERSAL_DEPTH {
            return Err(KgError::InvalidConfig {
                field: "causal.max_causal_depth".into(),
                reason: format!(
                    "must be between 1 and {MAX_CAUSAL_TRAVERSAL_DEPTH}, got {}",
                    self.max_causal_depth
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(KgError::InvalidConfig {
                field: "causal.confidence_threshold".into(),
                reason: format!("must be within [0, 1], got {}", self.confidence_threshold),
            });
        }
        self.counterfactual_noise.validate()
    }
}

/// Counterfactual noise configuration. A zero standard deviation disables noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Standard deviation of the Gaussian noise term.
    pub std_dev: f64,
    /// Seed for reproducible noise. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            std_dev: defaults::DEFAULT_NOISE_STD_DEV,
            seed: None,
        }
    }
}

impl NoiseConfig {
    /// Seeded Gaussian noise.
    pub fn seeded(std_dev: f64, seed: u64) -> Self {
        Self {
            std_dev,
            seed: Some(seed),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.std_dev > 0.0
    }

    pub fn validate(&self) -> KgResult<()> {
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(KgError::InvalidConfig {
                field: "causal.counterfactual_noise.std_dev".into(),
                reason: format!("must be finite and non-negative, got {}", self.std_dev),
            });
        }
        Ok(())
    }
}
