pub mod causal_config;
pub mod defaults;
pub mod observability_config;

pub use causal_config::{CausalConfig, NoiseConfig};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::KgResult;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KgConfig {
    pub causal: CausalConfig,
    pub observability: ObservabilityConfig,
}

impl KgConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(source: &str) -> KgResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KgResult<()> {
        self.causal.validate()
    }
}
