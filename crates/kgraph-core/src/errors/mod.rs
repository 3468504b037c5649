pub mod causal_error;

pub use causal_error::CausalError;

/// Top-level error type for the kgraph engine.
#[derive(Debug, thiserror::Error)]
pub enum KgError {
    #[error("causal error: {0}")]
    Causal(#[from] CausalError),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for KgError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}

pub type KgResult<T> = Result<T, KgError>;
