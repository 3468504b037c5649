use kgraph_causal::CausalEngine;
use kgraph_core::config::CausalConfig;
use kgraph_core::errors::KgResult;
use kgraph_core::models::CausalQuery;

use crate::knowledge::Knowledge;
use crate::strategy::{Reasoner, ReasoningOutcome, ReasoningTask};

/// Runs the full causal pipeline on the task's entities and hypothesis.
#[derive(Debug, Clone, Default)]
pub struct CausalStrategy {
    engine: CausalEngine,
}

impl CausalStrategy {
    pub fn with_config(config: CausalConfig) -> KgResult<Self> {
        Ok(Self {
            engine: CausalEngine::with_config(config)?,
        })
    }

    pub fn engine(&self) -> &CausalEngine {
        &self.engine
    }
}

impl Reasoner for CausalStrategy {
    fn evaluate(&self, task: &ReasoningTask, knowledge: &Knowledge) -> ReasoningOutcome {
        let query = CausalQuery {
            entities: task.entities.clone(),
            hypothesis: task.hypothesis.clone(),
            subgraph: knowledge.subgraph.clone(),
            temporal_data: knowledge.temporal_data.clone(),
        };
        ReasoningOutcome::Causal(self.engine.analyze(&query))
    }
}
