use serde::{Deserialize, Serialize};

use super::subgraph::{PropertyMap, RelationKind, TemporalSeries};

/// Serializable view of a per-query causal graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
    pub metadata: GraphMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: String,
    pub properties: PropertyMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_features: Option<TemporalSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub kind: RelationKind,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub entity_count: usize,
    /// All retained edges, causal or not.
    pub relation_count: usize,
    /// Fraction of nodes with at least one temporal observation.
    pub temporal_coverage: f64,
}
