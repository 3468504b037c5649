//! CausalEngine: runs the full analysis pipeline for one query.
//!
//! build graph → enumerate paths → {aggregate strength, detect confounders}
//! → {simulate intervention, estimate counterfactual} → confidence → result.

use chrono::Utc;
use kgraph_core::config::CausalConfig;
use kgraph_core::constants::CAUSAL_REASONING_TYPE;
use kgraph_core::errors::{CausalError, KgResult};
use kgraph_core::models::{
    AnalysisResult, AnalysisStatus, CausalPath, CausalQuery, Hypothesis, InterventionEffects,
};
use tracing::{debug, info, warn};

use crate::confidence::{self, ConfidenceFactors};
use crate::counterfactual::{self, noise, noise::NoiseSource};
use crate::graph::{self, CausalGraph};
use crate::{confounders, intervention, paths, strength};

/// Stateless causal analysis engine. Holds only static configuration.
#[derive(Debug, Clone, Default)]
pub struct CausalEngine {
    config: CausalConfig,
}

impl CausalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CausalConfig) -> KgResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CausalConfig {
        &self.config
    }

    /// Analyze a query with the configured noise. Never fails: errors become
    /// a result with `status: failed`.
    pub fn analyze(&self, query: &CausalQuery) -> AnalysisResult {
        match noise::from_config(&self.config.counterfactual_noise) {
            Ok(mut source) => self.analyze_with_noise(query, source.as_mut()),
            Err(e) => {
                warn!(error = %e, "noise source unavailable");
                AnalysisResult::failed(e.to_string())
            }
        }
    }

    /// Analyze a query drawing counterfactual noise from `noise`.
    pub fn analyze_with_noise(
        &self,
        query: &CausalQuery,
        noise: &mut dyn NoiseSource,
    ) -> AnalysisResult {
        let span = crate::analysis_span!(query.hypothesis.cause, query.hypothesis.effect);
        let _guard = span.enter();

        match self.run(query, noise) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "causal analysis failed");
                AnalysisResult::failed(e.to_string())
            }
        }
    }

    /// Build the per-query graph.
    pub fn build_graph(&self, query: &CausalQuery) -> CausalGraph {
        graph::build(&query.entities, &query.subgraph, &query.temporal_data)
    }

    /// Causal paths from `cause` to `effect` within the configured depth.
    pub fn causal_paths(&self, graph: &CausalGraph, cause: &str, effect: &str) -> Vec<CausalPath> {
        paths::enumerate(graph, cause, effect, self.config.max_causal_depth)
    }

    fn run(&self, query: &CausalQuery, noise: &mut dyn NoiseSource) -> KgResult<AnalysisResult> {
        let hypothesis = &query.hypothesis;
        if query.entities.is_empty() || hypothesis.is_empty() {
            debug!("incomplete query, returning empty result");
            return Ok(AnalysisResult::empty());
        }
        validate_hypothesis(hypothesis)?;

        let graph = self.build_graph(query);

        let (causal_paths, causal_strength, confounders) = match hypothesis.endpoints() {
            Some((cause, effect)) => {
                let paths = self.causal_paths(&graph, cause, effect);
                let strength = strength::aggregate(&paths);
                let confounders = confounders::detect(&graph, cause, effect);
                (paths, Some(strength), Some(confounders))
            }
            None => {
                debug!("hypothesis has no cause/effect pair, skipping path analysis");
                (Vec::new(), None, None)
            }
        };

        let intervention_effects = hypothesis
            .intervention
            .as_ref()
            .map(|spec| intervention::simulate(&graph, spec));
        if let Some(effects) = &intervention_effects {
            check_intervention(effects)?;
        }

        let counterfactuals = hypothesis
            .counterfactual
            .as_ref()
            .map(|spec| counterfactual::estimate(spec, noise));
        if let Some(estimate) = &counterfactuals {
            ensure_finite("counterfactual.factual_outcome", estimate.factual_outcome)?;
            ensure_finite(
                "counterfactual.counterfactual_outcome",
                estimate.counterfactual_outcome,
            )?;
        }

        let confidence = confidence::aggregate(ConfidenceFactors {
            paths: &causal_paths,
            strength: causal_strength.as_ref(),
            confounders: confounders.as_deref(),
        });
        ensure_finite("confidence", confidence)?;

        info!(
            nodes = graph.node_count(),
            paths = causal_paths.len(),
            confounders = confounders.as_ref().map_or(0, Vec::len),
            confidence,
            "causal analysis complete"
        );

        Ok(AnalysisResult {
            causal_graph: graph.snapshot(),
            causal_paths,
            causal_strength: causal_strength.unwrap_or_default(),
            intervention_effects,
            confounders: confounders.unwrap_or_default(),
            counterfactuals,
            confidence,
            above_threshold: confidence >= self.config.confidence_threshold,
            reasoning_type: CAUSAL_REASONING_TYPE.to_string(),
            status: AnalysisStatus::Completed,
            error: None,
            timestamp: Utc::now(),
        })
    }
}

fn validate_hypothesis(hypothesis: &Hypothesis) -> Result<(), CausalError> {
    if let Some(spec) = &hypothesis.intervention {
        ensure_finite("intervention.value", spec.value)?;
    }
    if let Some(spec) = &hypothesis.counterfactual {
        ensure_finite("counterfactual.original_value", spec.original_value)?;
        ensure_finite("counterfactual.counterfactual_value", spec.counterfactual_value)?;
    }
    Ok(())
}

fn check_intervention(effects: &InterventionEffects) -> Result<(), CausalError> {
    ensure_finite("intervention.direct_effect", effects.direct_effect)?;
    ensure_finite("intervention.total_effect", effects.total_effect)?;
    for mediated in &effects.indirect_effects {
        ensure_finite("intervention.indirect_effects", mediated.effect)?;
    }
    Ok(())
}

fn ensure_finite(field: &str, value: f64) -> Result<(), CausalError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CausalError::NonFiniteValue {
            field: field.to_string(),
            value,
        })
    }
}
