//! # kgraph-reasoning
//!
//! Strategy dispatch over a knowledge-graph subgraph. A [`ReasoningTask`]
//! names its [`TaskKind`]; [`ReasoningStrategy::for_task`] picks the matching
//! implementation and [`Reasoner::evaluate`] runs it against [`Knowledge`].
//!
//! Also hosts batch causal analysis and tracing subscriber setup.

pub mod batch;
pub mod causal;
pub mod knowledge;
pub mod path_finding;
pub mod relation_prediction;
pub mod strategy;
pub mod tracing_setup;

pub use batch::analyze_batch;
pub use causal::CausalStrategy;
pub use knowledge::Knowledge;
pub use path_finding::{PathFindingOutcome, PathFindingStrategy};
pub use relation_prediction::{
    PredictedRelation, RelationPredictionOutcome, RelationPredictionStrategy,
};
pub use strategy::{Reasoner, ReasoningOutcome, ReasoningStrategy, ReasoningTask, TaskKind};
