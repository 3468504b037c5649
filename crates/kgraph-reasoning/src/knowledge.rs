use kgraph_causal::graph::{self, CausalGraph};
use kgraph_core::models::{RelationEndpoints, SubgraphRecord, TemporalRecord};
use serde::{Deserialize, Serialize};

/// Retrieved knowledge a task is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Knowledge {
    pub subgraph: SubgraphRecord,
    pub temporal_data: TemporalRecord,
}

impl Knowledge {
    pub fn new(subgraph: SubgraphRecord) -> Self {
        Self {
            subgraph,
            temporal_data: TemporalRecord::new(),
        }
    }

    /// Graph over every entity the subgraph mentions, task entities first.
    ///
    /// Unlike causal analysis, which only admits the requested entities, this
    /// keeps intermediate entities so paths can route through them.
    pub fn full_graph(&self, task_entities: &[String]) -> CausalGraph {
        let mut ids: Vec<String> = task_entities.to_vec();
        ids.extend(self.subgraph.entities.keys().cloned());
        for relation in &self.subgraph.relations {
            if let RelationEndpoints::Pair { source, target } = &relation.endpoints {
                ids.push(source.clone());
                ids.push(target.clone());
            }
        }
        graph::build(&ids, &self.subgraph, &self.temporal_data)
    }
}
