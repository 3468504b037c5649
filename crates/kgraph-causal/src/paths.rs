//! Depth-bounded enumeration of simple causal paths between two nodes.
//!
//! DFS follows causal edges only. The on-path set is scoped to the current
//! branch and restored on backtrack, so a node may appear on unrelated
//! branches. A branch ends where it first reaches the target.

use kgraph_core::models::CausalPath;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::graph::CausalGraph;

/// Default maximum number of hops per path.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// All simple causal paths from `source` to `target` of at most `max_depth`
/// hops, strongest first. Ties keep discovery order.
pub fn enumerate(
    graph: &CausalGraph,
    source: &str,
    target: &str,
    max_depth: usize,
) -> Vec<CausalPath> {
    if source == target {
        return Vec::new();
    }
    let (Some(source_idx), Some(target_idx)) = (graph.get_node(source), graph.get_node(target))
    else {
        debug!(%source, %target, "path endpoint not in graph");
        return Vec::new();
    };

    let mut search = PathSearch {
        graph,
        target: target_idx,
        max_depth,
        path: vec![source_idx],
        on_path: vec![false; graph.node_count()],
        found: Vec::new(),
    };
    search.on_path[source_idx.index()] = true;
    search.visit(source_idx, 1.0);

    let mut paths = search.found;
    paths.sort_by(|a, b| b.strength.total_cmp(&a.strength));

    debug!(%source, %target, max_depth, paths = paths.len(), "enumerated causal paths");
    paths
}

struct PathSearch<'g> {
    graph: &'g CausalGraph,
    target: NodeIndex,
    max_depth: usize,
    path: Vec<NodeIndex>,
    on_path: Vec<bool>,
    found: Vec<CausalPath>,
}

impl PathSearch<'_> {
    fn visit(&mut self, current: NodeIndex, strength: f64) {
        // Hops used so far is path.len() - 1; one more must stay within max_depth.
        if self.path.len() > self.max_depth {
            return;
        }

        for (next, weight) in self.graph.causal_successors(current) {
            if self.on_path[next.index()] {
                continue;
            }
            let next_strength = strength * weight;
            self.path.push(next);

            if next == self.target {
                self.record(next_strength);
            } else {
                self.on_path[next.index()] = true;
                self.visit(next, next_strength);
                self.on_path[next.index()] = false;
            }

            self.path.pop();
        }
    }

    fn record(&mut self, strength: f64) {
        let nodes = self
            .path
            .iter()
            .filter_map(|&idx| self.graph.node_id(idx).map(str::to_string))
            .collect();
        self.found.push(CausalPath::new(nodes, strength));
    }
}
