//! Aggregates path strengths into direct, indirect, and overall causal strength.
//!
//! ```text
//! direct   = max strength over single-edge paths (0 if none)
//! indirect = Σ strength × 0.8^(hops − 2) over multi-edge paths
//! overall  = min(direct + 0.3 × indirect, 1.0)
//! ```

use kgraph_core::constants::{INDIRECT_HOP_DECAY, INDIRECT_STRENGTH_WEIGHT};
use kgraph_core::models::{CausalPath, PathStrength, StrengthBreakdown};

pub fn aggregate(paths: &[CausalPath]) -> StrengthBreakdown {
    if paths.is_empty() {
        return StrengthBreakdown::default();
    }

    let direct_strength = paths
        .iter()
        .filter(|p| p.direct)
        .map(|p| p.strength)
        .reduce(f64::max)
        .unwrap_or(0.0);

    let indirect_strength: f64 = paths
        .iter()
        .filter(|p| !p.direct)
        .map(|p| p.strength * hop_discount(p.hops()))
        .sum();

    // Capped above only; inhibitory chains may push the total below -1.
    let overall_strength =
        (direct_strength + INDIRECT_STRENGTH_WEIGHT * indirect_strength).min(1.0);

    StrengthBreakdown {
        overall_strength,
        direct_strength,
        indirect_strength,
        path_strengths: paths
            .iter()
            .map(|p| PathStrength {
                path: p.nodes.clone(),
                strength: p.strength,
            })
            .collect(),
    }
}

/// Discount for an indirect path: 1.0 at two hops, ×0.8 per extra hop.
pub fn hop_discount(hops: usize) -> f64 {
    INDIRECT_HOP_DECAY.powi(hops.saturating_sub(2) as i32)
}
