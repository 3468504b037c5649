pub mod analysis;
pub mod graph;
pub mod hypothesis;
pub mod query;
pub mod subgraph;

pub use analysis::{
    AnalysisResult, AnalysisStatus, CausalPath, Confounder, CounterfactualEstimate,
    InterventionEffects, MediatedEffect, PathStrength, StrengthBreakdown,
};
pub use graph::{EdgeSnapshot, GraphMetadata, GraphSnapshot, NodeSnapshot};
pub use hypothesis::{CounterfactualSpec, Hypothesis, InterventionSpec};
pub use query::CausalQuery;
pub use subgraph::{
    PropertyMap, RelationEndpoints, RelationKind, RelationRecord, SubgraphRecord, TemporalRecord,
    TemporalSeries,
};
