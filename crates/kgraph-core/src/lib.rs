//! # kgraph-core
//!
//! Foundation crate for the kgraph causal reasoning engine.
//! Defines the input records handed to the engine by its collaborators,
//! the analysis records it returns, and the shared errors, config, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{CausalConfig, KgConfig, NoiseConfig, ObservabilityConfig};
pub use errors::{CausalError, KgError, KgResult};
pub use models::{
    AnalysisResult, AnalysisStatus, CausalPath, Confounder, CounterfactualEstimate,
    CounterfactualSpec, Hypothesis, InterventionEffects, InterventionSpec, RelationKind,
    RelationRecord, StrengthBreakdown, SubgraphRecord, TemporalRecord, TemporalSeries,
};
