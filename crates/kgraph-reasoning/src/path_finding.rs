//! Simple directed paths between two entities over relations of any kind.
//!
//! Confidence depends only on the shortest path found:
//! `max(1 − 0.1 × (nodes − 1), 0.1)`, or 0.0 when nothing connects them.

use std::collections::HashSet;

use kgraph_causal::paths::DEFAULT_MAX_DEPTH;
use kgraph_core::constants::{MIN_PATH_CONFIDENCE, PATH_LENGTH_PENALTY};
use petgraph::algo::all_simple_paths;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::knowledge::Knowledge;
use crate::strategy::{Reasoner, ReasoningOutcome, ReasoningTask};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathFindingOutcome {
    /// Node ids from start to end, shortest first.
    pub paths: Vec<Vec<String>>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFindingStrategy {
    /// Maximum number of hops per path.
    pub max_depth: usize,
}

impl Default for PathFindingStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl PathFindingStrategy {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn find_paths(&self, knowledge: &Knowledge, start: &str, end: &str) -> Vec<Vec<String>> {
        if start == end {
            return vec![vec![start.to_string()]];
        }
        if self.max_depth == 0 {
            return Vec::new();
        }

        let graph = knowledge.full_graph(&[start.to_string(), end.to_string()]);
        let (Some(from), Some(to)) = (graph.get_node(start), graph.get_node(end)) else {
            return Vec::new();
        };

        // Parallel edges yield the same node sequence more than once.
        let mut seen = HashSet::new();
        let mut paths: Vec<Vec<String>> =
            all_simple_paths::<Vec<_>, _>(&graph.graph, from, to, 0, Some(self.max_depth - 1))
                .filter_map(|indices| {
                    indices
                        .into_iter()
                        .map(|idx| graph.node_id(idx).map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .filter(|path| seen.insert(path.clone()))
                .collect();
        paths.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        debug!(%start, %end, max_depth = self.max_depth, paths = paths.len(), "path finding complete");
        paths
    }
}

pub fn path_confidence(paths: &[Vec<String>]) -> f64 {
    match paths.iter().map(Vec::len).min() {
        Some(shortest) => {
            (1.0 - PATH_LENGTH_PENALTY * (shortest as f64 - 1.0)).max(MIN_PATH_CONFIDENCE)
        }
        None => 0.0,
    }
}

impl Reasoner for PathFindingStrategy {
    fn evaluate(&self, task: &ReasoningTask, knowledge: &Knowledge) -> ReasoningOutcome {
        let Some((start, end)) = task.endpoints() else {
            debug!(entities = task.entities.len(), "path finding needs two entities");
            return ReasoningOutcome::PathFinding(PathFindingOutcome::default());
        };
        let paths = self.find_paths(knowledge, start, end);
        let confidence = path_confidence(&paths);
        ReasoningOutcome::PathFinding(PathFindingOutcome { paths, confidence })
    }
}
