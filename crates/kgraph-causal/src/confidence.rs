//! Overall confidence: the mean of whichever quality factors are available.
//!
//! Factors: mean path strength, overall causal strength, and the confounder
//! factor `max(1 − 0.1 × confounders, 0.1)`.
//!
//! A factor only counts when its stage ran. A hypothesis that names only an
//! intervention or a counterfactual runs no path analysis, so it has no
//! factors and scores 0.0, not a neutral 0.5.

use kgraph_core::constants::{CONFOUNDER_PENALTY, MIN_CONFOUNDER_FACTOR};
use kgraph_core::models::{CausalPath, Confounder, StrengthBreakdown};

/// Inputs to confidence aggregation. `None` marks a stage that did not run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceFactors<'a> {
    pub paths: &'a [CausalPath],
    pub strength: Option<&'a StrengthBreakdown>,
    pub confounders: Option<&'a [Confounder]>,
}

/// Fold the available factors into one score in [0, 1]. No factors gives 0.0.
pub fn aggregate(factors: ConfidenceFactors<'_>) -> f64 {
    let available: Vec<f64> = [
        path_quality(factors.paths),
        factors.strength.map(|s| s.overall_strength),
        factors.confounders.map(|c| confounder_factor(c.len())),
    ]
    .into_iter()
    .flatten()
    .collect();

    if available.is_empty() {
        return 0.0;
    }
    let mean = available.iter().sum::<f64>() / available.len() as f64;
    mean.clamp(0.0, 1.0)
}

/// Mean path strength, or `None` without paths.
pub fn path_quality(paths: &[CausalPath]) -> Option<f64> {
    if paths.is_empty() {
        return None;
    }
    Some(paths.iter().map(|p| p.strength).sum::<f64>() / paths.len() as f64)
}

pub fn confounder_factor(count: usize) -> f64 {
    (1.0 - CONFOUNDER_PENALTY * count as f64).max(MIN_CONFOUNDER_FACTOR)
}
