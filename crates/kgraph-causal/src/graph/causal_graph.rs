use std::collections::HashMap;

use kgraph_core::models::{
    EdgeSnapshot, GraphMetadata, GraphSnapshot, NodeSnapshot, PropertyMap, RelationKind,
    TemporalSeries,
};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// A node in the causal graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CausalNode {
    pub id: String,
    pub properties: PropertyMap,
    pub temporal_features: Option<TemporalSeries>,
}

impl CausalNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: PropertyMap::new(),
            temporal_features: None,
        }
    }
}

/// Weight on a directed edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CausalEdge {
    /// Signed influence in [-1, 1].
    pub weight: f64,
    pub kind: RelationKind,
    /// Audit tags; never read by the engine.
    pub evidence: Vec<String>,
}

impl CausalEdge {
    pub fn causal(weight: f64) -> Self {
        Self {
            weight,
            kind: RelationKind::Causal,
            evidence: Vec::new(),
        }
    }

    pub fn is_causal(&self) -> bool {
        self.kind.is_causal()
    }
}

/// Directed graph with an id → index lookup. Nodes are never removed, so
/// node and edge indices follow insertion order.
#[derive(Debug, Clone, Default)]
pub struct CausalGraph {
    pub graph: DiGraph<CausalNode, CausalEdge>,
    index: HashMap<String, NodeIndex>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless one with the same id exists. Returns its index either way.
    pub fn insert_node(&mut self, node: CausalNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.id) {
            return idx;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    /// Get or create a bare node.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        match self.index.get(id) {
            Some(&idx) => idx,
            None => self.insert_node(CausalNode::new(id)),
        }
    }

    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|n| n.id.as_str())
    }

    /// Add an edge between two existing nodes. Returns `None` if either endpoint is missing.
    pub fn add_edge(&mut self, source: &str, target: &str, edge: CausalEdge) -> Option<EdgeIndex> {
        let source_idx = self.get_node(source)?;
        let target_idx = self.get_node(target)?;
        Some(self.graph.add_edge(source_idx, target_idx, edge))
    }

    /// The earliest-inserted causal edge from `source` to `target`.
    pub fn causal_edge(&self, source: NodeIndex, target: NodeIndex) -> Option<&CausalEdge> {
        self.graph
            .edges_connecting(source, target)
            .filter(|e| e.weight().is_causal())
            .min_by_key(|e| e.id())
            .map(|e| e.weight())
    }

    /// True if a causal edge `source -> target` exists, by id.
    pub fn has_causal_edge(&self, source: &str, target: &str) -> bool {
        match (self.get_node(source), self.get_node(target)) {
            (Some(s), Some(t)) => self.causal_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// Causal successors with edge weights, in edge insertion order.
    pub fn causal_successors(&self, idx: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| e.weight().is_causal())
            .map(|e| (e.id(), e.target(), e.weight().weight))
            .collect();
        out.sort_by_key(|&(edge, _, _)| edge);
        out.into_iter()
            .map(|(_, target, weight)| (target, weight))
            .collect()
    }

    pub fn causal_out_degree(&self, idx: NodeIndex) -> usize {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| e.weight().is_causal())
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn causal_edge_count(&self) -> usize {
        self.graph
            .edge_weights()
            .filter(|e| e.is_causal())
            .count()
    }

    /// Node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Fraction of nodes carrying at least one temporal observation.
    pub fn temporal_coverage(&self) -> f64 {
        let total = self.graph.node_count();
        if total == 0 {
            return 0.0;
        }
        let covered = self
            .graph
            .node_weights()
            .filter(|n| n.temporal_features.as_ref().is_some_and(|s| !s.is_empty()))
            .count();
        covered as f64 / total as f64
    }

    /// Serializable copy of the graph.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self
            .graph
            .node_weights()
            .map(|n| NodeSnapshot {
                id: n.id.clone(),
                properties: n.properties.clone(),
                temporal_features: n.temporal_features.clone(),
            })
            .collect();

        let edges = self
            .graph
            .edge_references()
            .filter_map(|e| {
                Some(EdgeSnapshot {
                    source: self.node_id(e.source())?.to_string(),
                    target: self.node_id(e.target())?.to_string(),
                    weight: e.weight().weight,
                    kind: e.weight().kind.clone(),
                    evidence: e.weight().evidence.clone(),
                })
            })
            .collect();

        GraphSnapshot {
            nodes,
            edges,
            metadata: GraphMetadata {
                entity_count: self.node_count(),
                relation_count: self.edge_count(),
                temporal_coverage: self.temporal_coverage(),
            },
        }
    }
}
