//! Task kinds, the `Reasoner` seam, and the closed set of strategies.

use kgraph_core::config::KgConfig;
use kgraph_core::errors::KgResult;
use kgraph_core::models::{AnalysisResult, Hypothesis};
use serde::{Deserialize, Serialize};

use crate::causal::CausalStrategy;
use crate::knowledge::Knowledge;
use crate::path_finding::{PathFindingOutcome, PathFindingStrategy};
use crate::relation_prediction::{RelationPredictionOutcome, RelationPredictionStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Causal,
    PathFinding,
    RelationPrediction,
}

/// One reasoning request. `entities[0]` and `entities[1]` are the start and
/// end for path finding and relation prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTask {
    pub kind: TaskKind,
    #[serde(default)]
    pub entities: Vec<String>,
    /// Only read by the causal strategy.
    #[serde(default)]
    pub hypothesis: Hypothesis,
}

impl ReasoningTask {
    pub fn new<I, S>(kind: TaskKind, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            entities: entities.into_iter().map(Into::into).collect(),
            hypothesis: Hypothesis::default(),
        }
    }

    pub fn with_hypothesis(mut self, hypothesis: Hypothesis) -> Self {
        self.hypothesis = hypothesis;
        self
    }

    /// First two entities, when present.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match self.entities.as_slice() {
            [start, end, ..] => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }
}

/// Evaluates a task against retrieved knowledge. Never fails; problems are
/// reported inside the outcome.
pub trait Reasoner {
    fn evaluate(&self, task: &ReasoningTask, knowledge: &Knowledge) -> ReasoningOutcome;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "outcome", rename_all = "snake_case")]
pub enum ReasoningOutcome {
    Causal(AnalysisResult),
    PathFinding(PathFindingOutcome),
    RelationPrediction(RelationPredictionOutcome),
}

impl ReasoningOutcome {
    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Causal(_) => TaskKind::Causal,
            Self::PathFinding(_) => TaskKind::PathFinding,
            Self::RelationPrediction(_) => TaskKind::RelationPrediction,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::Causal(result) => result.confidence,
            Self::PathFinding(outcome) => outcome.confidence,
            Self::RelationPrediction(outcome) => outcome.confidence,
        }
    }
}

/// The available strategies.
#[derive(Debug, Clone)]
pub enum ReasoningStrategy {
    Causal(CausalStrategy),
    PathFinding(PathFindingStrategy),
    RelationPrediction(RelationPredictionStrategy),
}

impl ReasoningStrategy {
    /// Strategy for `kind`, configured from `config`. Fails only on invalid config.
    pub fn for_task(kind: TaskKind, config: &KgConfig) -> KgResult<Self> {
        config.validate()?;
        Ok(match kind {
            TaskKind::Causal => Self::Causal(CausalStrategy::with_config(config.causal.clone())?),
            TaskKind::PathFinding => {
                Self::PathFinding(PathFindingStrategy::new(config.causal.max_causal_depth))
            }
            TaskKind::RelationPrediction => Self::RelationPrediction(RelationPredictionStrategy),
        })
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Causal(_) => TaskKind::Causal,
            Self::PathFinding(_) => TaskKind::PathFinding,
            Self::RelationPrediction(_) => TaskKind::RelationPrediction,
        }
    }
}

impl Reasoner for ReasoningStrategy {
    fn evaluate(&self, task: &ReasoningTask, knowledge: &Knowledge) -> ReasoningOutcome {
        let _span = tracing::info_span!("kgraph.reasoning.evaluate", kind = ?task.kind).entered();
        match self {
            Self::Causal(s) => s.evaluate(task, knowledge),
            Self::PathFinding(s) => s.evaluate(task, knowledge),
            Self::RelationPrediction(s) => s.evaluate(task, knowledge),
        }
    }
}
