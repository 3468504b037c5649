//! Ranks the relations observed between two entities.

use kgraph_core::models::RelationKind;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::knowledge::Knowledge;
use crate::strategy::{Reasoner, ReasoningOutcome, ReasoningTask};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedRelation {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: RelationKind,
    /// Absolute edge weight.
    pub score: f64,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationPredictionOutcome {
    /// Best score first.
    pub predictions: Vec<PredictedRelation>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationPredictionStrategy;

impl RelationPredictionStrategy {
    /// Relations between `a` and `b` in either direction.
    pub fn predict(&self, knowledge: &Knowledge, a: &str, b: &str) -> Vec<PredictedRelation> {
        let graph = knowledge.full_graph(&[a.to_string(), b.to_string()]);
        let (Some(a_idx), Some(b_idx)) = (graph.get_node(a), graph.get_node(b)) else {
            return Vec::new();
        };

        let mut predictions: Vec<PredictedRelation> = graph
            .graph
            .edge_references()
            .filter(|e| {
                (e.source(), e.target()) == (a_idx, b_idx)
                    || (e.source(), e.target()) == (b_idx, a_idx)
            })
            .filter_map(|e| {
                Some(PredictedRelation {
                    source: graph.node_id(e.source())?.to_string(),
                    target: graph.node_id(e.target())?.to_string(),
                    kind: e.weight().kind.clone(),
                    score: e.weight().weight.abs(),
                    evidence: e.weight().evidence.clone(),
                })
            })
            .collect();
        predictions.sort_by(|x, y| y.score.total_cmp(&x.score));

        debug!(%a, %b, predictions = predictions.len(), "relation prediction complete");
        predictions
    }
}

impl Reasoner for RelationPredictionStrategy {
    fn evaluate(&self, task: &ReasoningTask, knowledge: &Knowledge) -> ReasoningOutcome {
        let Some((a, b)) = task.endpoints() else {
            debug!(entities = task.entities.len(), "relation prediction needs two entities");
            return ReasoningOutcome::RelationPrediction(RelationPredictionOutcome::default());
        };
        let predictions = self.predict(knowledge, a, b);
        let confidence = predictions.first().map_or(0.0, |p| p.score);
        ReasoningOutcome::RelationPrediction(RelationPredictionOutcome {
            predictions,
            confidence,
        })
    }
}
