//! Resolves legacy `"{source}_{target}"` composite relation keys.
//!
//! Entity ids may themselves contain `_`, so every boundary is tried and the key
//! resolves only when exactly one split names two nodes in the graph.

use kgraph_core::errors::CausalError;

use super::causal_graph::CausalGraph;

/// Split `key` into `(source, target)` ids known to `graph`.
pub fn resolve(key: &str, graph: &CausalGraph) -> Result<(String, String), CausalError> {
    let mut candidates = key
        .match_indices('_')
        .map(|(i, _)| (&key[..i], &key[i + 1..]))
        .filter(|(source, target)| graph.contains(source) && graph.contains(target));

    match (candidates.next(), candidates.next()) {
        (Some((source, target)), None) => Ok((source.to_string(), target.to_string())),
        _ => Err(CausalError::MalformedRelationKey {
            key: key.to_string(),
        }),
    }
}
