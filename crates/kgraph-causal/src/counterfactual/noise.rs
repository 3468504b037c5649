//! Injectable noise for counterfactual outcome predictions.

use kgraph_core::config::NoiseConfig;
use kgraph_core::errors::{KgError, KgResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Samples are clamped to this many standard deviations.
pub const NOISE_BOUND_SIGMAS: f64 = 3.0;

/// Source of the unmodeled-variance term in outcome predictions.
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

/// Always zero. Used whenever noise is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// Zero-mean Gaussian noise, bounded to ±3σ.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    rng: ChaCha8Rng,
    normal: Normal<f64>,
    bound: f64,
}

impl GaussianNoise {
    pub fn new(std_dev: f64, seed: Option<u64>) -> KgResult<Self> {
        let normal = Normal::new(0.0, std_dev).map_err(|e| KgError::InvalidConfig {
            field: "causal.counterfactual_noise.std_dev".into(),
            reason: e.to_string(),
        })?;
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            rng,
            normal,
            bound: NOISE_BOUND_SIGMAS * std_dev,
        })
    }
}

impl NoiseSource for GaussianNoise {
    fn sample(&mut self) -> f64 {
        self.normal
            .sample(&mut self.rng)
            .clamp(-self.bound, self.bound)
    }
}

/// Noise source for one query, as configured.
pub fn from_config(config: &NoiseConfig) -> KgResult<Box<dyn NoiseSource + Send>> {
    if config.is_enabled() {
        Ok(Box::new(GaussianNoise::new(config.std_dev, config.seed)?))
    } else {
        Ok(Box::new(ZeroNoise))
    }
}
