//! Confounder detection: nodes with causal edges into both the cause and the effect.

use kgraph_core::models::Confounder;
use tracing::debug;

use crate::graph::CausalGraph;

/// Scan every non-endpoint node, in graph order. Confounders are flagged for
/// adjustment downstream; no adjustment happens here.
pub fn detect(graph: &CausalGraph, cause: &str, effect: &str) -> Vec<Confounder> {
    if cause == effect {
        return Vec::new();
    }
    let (Some(cause_idx), Some(effect_idx)) = (graph.get_node(cause), graph.get_node(effect))
    else {
        return Vec::new();
    };

    let confounders: Vec<Confounder> = graph
        .node_indices()
        .filter(|&idx| idx != cause_idx && idx != effect_idx)
        .filter_map(|idx| {
            let to_cause = graph.causal_edge(idx, cause_idx)?;
            let to_effect = graph.causal_edge(idx, effect_idx)?;
            Some(Confounder {
                variable: graph.node_id(idx)?.to_string(),
                effect_on_cause: to_cause.weight,
                effect_on_effect: to_effect.weight,
                needs_adjustment: true,
            })
        })
        .collect();

    debug!(%cause, %effect, confounders = confounders.len(), "confounder scan complete");
    confounders
}
