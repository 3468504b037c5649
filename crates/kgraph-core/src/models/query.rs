use serde::{Deserialize, Serialize};

use super::hypothesis::Hypothesis;
use super::subgraph::{SubgraphRecord, TemporalRecord};

/// Everything a single causal analysis needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalQuery {
    /// Entities that become graph nodes, in order.
    pub entities: Vec<String>,
    pub hypothesis: Hypothesis,
    pub subgraph: SubgraphRecord,
    pub temporal_data: TemporalRecord,
}

impl CausalQuery {
    pub fn new<I, S>(entities: I, hypothesis: Hypothesis, subgraph: SubgraphRecord) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
            hypothesis,
            subgraph,
            temporal_data: TemporalRecord::new(),
        }
    }

    pub fn with_temporal_data(mut self, temporal_data: TemporalRecord) -> Self {
        self.temporal_data = temporal_data;
        self
    }
}
