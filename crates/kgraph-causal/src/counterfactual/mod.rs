//! Counterfactual estimation: factual vs. counterfactual outcome for one variable.

pub mod noise;

use kgraph_core::constants::{COUNTERFACTUAL_CONFIDENCE, COUNTERFACTUAL_RESPONSE};
use kgraph_core::models::{CounterfactualEstimate, CounterfactualSpec};
use tracing::debug;

use self::noise::NoiseSource;

/// Linear response model: `0.8 × value + noise`.
pub fn predict_outcome(value: f64, noise: &mut dyn NoiseSource) -> f64 {
    COUNTERFACTUAL_RESPONSE * value + noise.sample()
}

/// Predict both outcomes and their difference, the individual treatment effect.
pub fn estimate(spec: &CounterfactualSpec, noise: &mut dyn NoiseSource) -> CounterfactualEstimate {
    let factual_outcome = predict_outcome(spec.original_value, noise);
    let counterfactual_outcome = predict_outcome(spec.counterfactual_value, noise);
    let individual_treatment_effect = counterfactual_outcome - factual_outcome;

    debug!(
        variable = %spec.variable,
        ite = individual_treatment_effect,
        "estimated counterfactual"
    );

    CounterfactualEstimate {
        variable: spec.variable.clone(),
        original_value: spec.original_value,
        counterfactual_value: spec.counterfactual_value,
        factual_outcome,
        counterfactual_outcome,
        individual_treatment_effect,
        confidence: COUNTERFACTUAL_CONFIDENCE,
    }
}
