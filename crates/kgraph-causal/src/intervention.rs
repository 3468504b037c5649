//! First-order intervention simulation: direct effects plus effects mediated
//! through exactly one intermediate node.

use kgraph_core::constants::{
    INTERVENTION_CONFIDENCE_PER_EDGE, MAX_INTERVENTION_CONFIDENCE, MEDIATED_EFFECT_DISCOUNT,
};
use kgraph_core::models::{InterventionEffects, InterventionSpec, MediatedEffect};
use tracing::debug;

use crate::graph::CausalGraph;

/// Simulate setting `spec.variable` to `spec.value`.
///
/// `total = direct + 0.7 × Σ mediated`; confidence grows 0.3 per outgoing
/// causal edge, capped at 0.9. An unknown variable has no effect and zero confidence.
pub fn simulate(graph: &CausalGraph, spec: &InterventionSpec) -> InterventionEffects {
    let value = spec.value;
    let mut effects = InterventionEffects {
        target_variable: spec.variable.clone(),
        intervention_value: value,
        direct_effect: 0.0,
        indirect_effects: Vec::new(),
        total_effect: 0.0,
        confidence: 0.0,
    };

    let Some(variable) = graph.get_node(&spec.variable) else {
        debug!(variable = %spec.variable, "intervention variable not in graph");
        return effects;
    };

    let successors = graph.causal_successors(variable);
    effects.direct_effect = successors.iter().map(|&(_, w)| w * value).sum();

    for &(mediator, w1) in &successors {
        for (downstream, w2) in graph.causal_successors(mediator) {
            let path = [variable, mediator, downstream]
                .iter()
                .filter_map(|&idx| graph.node_id(idx).map(str::to_string))
                .collect();
            effects.indirect_effects.push(MediatedEffect {
                path,
                effect: w1 * w2 * value,
            });
        }
    }

    let mediated: f64 = effects.indirect_effects.iter().map(|e| e.effect).sum();
    effects.total_effect = effects.direct_effect + MEDIATED_EFFECT_DISCOUNT * mediated;
    effects.confidence = confidence(graph.causal_out_degree(variable));

    debug!(
        variable = %spec.variable,
        direct = effects.direct_effect,
        mediated = effects.indirect_effects.len(),
        total = effects.total_effect,
        "simulated intervention"
    );
    effects
}

fn confidence(out_degree: usize) -> f64 {
    (INTERVENTION_CONFIDENCE_PER_EDGE * out_degree as f64).min(MAX_INTERVENTION_CONFIDENCE)
}
