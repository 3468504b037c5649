/// Hard ceiling on the configurable causal search depth.
pub const MAX_CAUSAL_TRAVERSAL_DEPTH: usize = 10;

/// Tag written into every causal analysis result.
pub const CAUSAL_REASONING_TYPE: &str = "causal_reasoning";

/// Strength assumed for a relation that omits one.
pub const DEFAULT_RELATION_STRENGTH: f64 = 0.5;

/// Per-hop discount applied to indirect paths beyond the shortest indirect length.
pub const INDIRECT_HOP_DECAY: f64 = 0.8;

/// Weight of the summed indirect strength relative to the direct strength.
pub const INDIRECT_STRENGTH_WEIGHT: f64 = 0.3;

/// Discount on mediated effects when totalling an intervention.
pub const MEDIATED_EFFECT_DISCOUNT: f64 = 0.7;

/// Confidence gained per outgoing causal edge of an intervened variable.
pub const INTERVENTION_CONFIDENCE_PER_EDGE: f64 = 0.3;

/// Ceiling on intervention confidence.
pub const MAX_INTERVENTION_CONFIDENCE: f64 = 0.9;

/// Linear response coefficient of the counterfactual outcome model.
pub const COUNTERFACTUAL_RESPONSE: f64 = 0.8;

/// Fixed confidence attached to counterfactual estimates.
pub const COUNTERFACTUAL_CONFIDENCE: f64 = 0.7;

/// Confidence penalty per detected confounder.
pub const CONFOUNDER_PENALTY: f64 = 0.1;

/// Floor of the confounder factor.
pub const MIN_CONFOUNDER_FACTOR: f64 = 0.1;

/// Tag for path-finding outcomes.
pub const PATH_FINDING_REASONING_TYPE: &str = "path_finding";

/// Tag for relation-prediction outcomes.
pub const RELATION_PREDICTION_REASONING_TYPE: &str = "relation_prediction";

/// Confidence lost per extra node on the shortest found path.
pub const PATH_LENGTH_PENALTY: f64 = 0.1;

/// Floor of path-finding confidence when any path exists.
pub const MIN_PATH_CONFIDENCE: f64 = 0.1;
