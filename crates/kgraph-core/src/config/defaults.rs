//! Default values for every configuration field.

pub const DEFAULT_MAX_CAUSAL_DEPTH: usize = 3;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_NOISE_STD_DEV: f64 = 0.0;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
