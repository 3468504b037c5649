//! Builds a `CausalGraph` from a subgraph record and temporal data.
//!
//! Every requested entity becomes a node. A relation becomes an edge only when
//! both endpoints are requested entities; causal edges are deduplicated per
//! ordered pair (first wins) and weights are clamped to [-1, 1].

use kgraph_core::errors::CausalError;
use kgraph_core::models::{RelationEndpoints, RelationRecord, SubgraphRecord, TemporalRecord};
use tracing::{debug, info, warn};

use super::causal_graph::{CausalEdge, CausalGraph, CausalNode};
use super::relation_key;

/// Build the per-query graph. Never fails; unusable relations are skipped.
pub fn build(
    entities: &[String],
    subgraph: &SubgraphRecord,
    temporal_data: &TemporalRecord,
) -> CausalGraph {
    let mut graph = CausalGraph::new();

    for id in entities {
        if graph.contains(id) {
            continue;
        }
        graph.insert_node(CausalNode {
            id: id.clone(),
            properties: subgraph.entities.get(id).cloned().unwrap_or_default(),
            temporal_features: temporal_data.get(id).cloned(),
        });
    }

    let mut skipped = 0usize;
    for relation in &subgraph.relations {
        match endpoints(relation, &graph) {
            Ok(Some((source, target))) => {
                if !add_relation(&mut graph, &source, &target, relation) {
                    skipped += 1;
                }
            }
            Ok(None) => skipped += 1,
            Err(e) => {
                warn!(error = %e, "skipping relation");
                skipped += 1;
            }
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        causal_edges = graph.causal_edge_count(),
        skipped,
        "built causal graph"
    );

    graph
}

/// Resolve a relation's endpoints. `Ok(None)` means a structured pair names an
/// entity outside the graph.
fn endpoints(
    relation: &RelationRecord,
    graph: &CausalGraph,
) -> Result<Option<(String, String)>, CausalError> {
    match &relation.endpoints {
        RelationEndpoints::Pair { source, target } => {
            if graph.contains(source) && graph.contains(target) {
                Ok(Some((source.clone(), target.clone())))
            } else {
                debug!(%source, %target, "relation references unknown entity");
                Ok(None)
            }
        }
        RelationEndpoints::Key { key } => relation_key::resolve(key, graph).map(Some),
    }
}

fn add_relation(
    graph: &mut CausalGraph,
    source: &str,
    target: &str,
    relation: &RelationRecord,
) -> bool {
    if !relation.strength.is_finite() {
        let e = CausalError::NonFiniteWeight {
            source_id: source.to_string(),
            target_id: target.to_string(),
        };
        warn!(error = %e, "skipping relation");
        return false;
    }

    if relation.kind.is_causal() && graph.has_causal_edge(source, target) {
        debug!(%source, %target, "duplicate causal relation ignored");
        return false;
    }

    let edge = CausalEdge {
        weight: relation.strength.clamp(-1.0, 1.0),
        kind: relation.kind.clone(),
        evidence: relation.evidence.clone(),
    };
    graph.add_edge(source, target, edge).is_some()
}
