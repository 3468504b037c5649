//! Parallel causal analysis over independent queries.

use kgraph_causal::CausalEngine;
use kgraph_core::models::{AnalysisResult, CausalQuery};
use rayon::prelude::*;
use tracing::info;

/// Analyze each query on the rayon pool. Output order matches input order.
pub fn analyze_batch(engine: &CausalEngine, queries: &[CausalQuery]) -> Vec<AnalysisResult> {
    let _span = tracing::info_span!("kgraph.reasoning.batch", queries = queries.len()).entered();

    let results: Vec<AnalysisResult> = queries.par_iter().map(|q| engine.analyze(q)).collect();

    let failed = results.iter().filter(|r| r.is_failed()).count();
    info!(queries = queries.len(), failed, "batch analysis complete");
    results
}
