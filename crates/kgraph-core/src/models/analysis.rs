//! Output records of a causal analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::graph::GraphSnapshot;
use crate::constants::CAUSAL_REASONING_TYPE;

/// A causal chain from cause to effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalPath {
    /// Node ids from cause to effect; at least two.
    #[serde(rename = "path")]
    pub nodes: Vec<String>,
    /// True iff the path is a single edge.
    pub direct: bool,
    /// Product of the traversed edge weights.
    pub strength: f64,
}

impl CausalPath {
    pub fn new(nodes: Vec<String>, strength: f64) -> Self {
        let direct = nodes.len() == 2;
        Self {
            nodes,
            direct,
            strength,
        }
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStrength {
    pub path: Vec<String>,
    pub strength: f64,
}

/// Direct, indirect, and combined causal strength.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthBreakdown {
    pub overall_strength: f64,
    pub direct_strength: f64,
    pub indirect_strength: f64,
    pub path_strengths: Vec<PathStrength>,
}

/// Effect propagated through one mediator: `variable -> mediator -> downstream`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediatedEffect {
    pub path: Vec<String>,
    pub effect: f64,
}

impl MediatedEffect {
    /// Display key, e.g. `"rate->growth->inflation"`.
    pub fn key(&self) -> String {
        self.path.join("->")
    }
}

/// Simulated effect of setting a variable to a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionEffects {
    pub target_variable: String,
    pub intervention_value: f64,
    pub direct_effect: f64,
    pub indirect_effects: Vec<MediatedEffect>,
    pub total_effect: f64,
    pub confidence: f64,
}

/// A node with causal edges into both the cause and the effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confounder {
    pub variable: String,
    pub effect_on_cause: f64,
    pub effect_on_effect: f64,
    pub needs_adjustment: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterfactualEstimate {
    pub variable: String,
    pub original_value: f64,
    pub counterfactual_value: f64,
    pub factual_outcome: f64,
    pub counterfactual_outcome: f64,
    /// `counterfactual_outcome - factual_outcome`.
    pub individual_treatment_effect: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    Completed,
    Failed,
}

/// The full result of one causal analysis. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub causal_graph: GraphSnapshot,
    pub causal_paths: Vec<CausalPath>,
    pub causal_strength: StrengthBreakdown,
    pub intervention_effects: Option<InterventionEffects>,
    pub confounders: Vec<Confounder>,
    pub counterfactuals: Option<CounterfactualEstimate>,
    pub confidence: f64,
    pub above_threshold: bool,
    pub reasoning_type: String,
    pub status: AnalysisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// The defined result for incomplete queries: nothing found, zero confidence.
    pub fn empty() -> Self {
        Self {
            causal_graph: GraphSnapshot::default(),
            causal_paths: Vec::new(),
            causal_strength: StrengthBreakdown::default(),
            intervention_effects: None,
            confounders: Vec::new(),
            counterfactuals: None,
            confidence: 0.0,
            above_threshold: false,
            reasoning_type: CAUSAL_REASONING_TYPE.to_string(),
            status: AnalysisStatus::Completed,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Empty-shaped result carrying an error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: AnalysisStatus::Failed,
            error: Some(error.into()),
            ..Self::empty()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == AnalysisStatus::Failed
    }

    /// True when this result matches the empty shape, ignoring the timestamp.
    pub fn is_empty_shape(&self) -> bool {
        self.causal_graph == GraphSnapshot::default()
            && self.causal_paths.is_empty()
            && self.causal_strength == StrengthBreakdown::default()
            && self.intervention_effects.is_none()
            && self.confounders.is_empty()
            && self.counterfactuals.is_none()
            && self.confidence == 0.0
            && !self.above_threshold
    }
}
