//! Span definitions for causal analysis.

/// Span around one full analysis.
#[macro_export]
macro_rules! analysis_span {
    ($cause:expr, $effect:expr) => {
        tracing::info_span!($crate::spans::names::ANALYSIS, cause = ?$cause, effect = ?$effect)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "kgraph.causal.analysis";
}
