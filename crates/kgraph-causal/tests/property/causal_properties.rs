//! Property tests for kgraph-causal over random subgraphs.

use proptest::prelude::*;

use kgraph_causal::graph::{self, CausalGraph};
use kgraph_causal::{intervention, paths, CausalEngine};
use kgraph_core::models::{
    AnalysisResult, CausalQuery, Hypothesis, InterventionSpec, RelationKind, RelationRecord,
    SubgraphRecord, TemporalRecord,
};

fn node(i: usize) -> String {
    format!("n{i}")
}

fn entities(n: usize) -> Vec<String> {
    (0..n).map(node).collect()
}

/// Subgraph over `n0..n{n}` with the given `(src, tgt, weight)` causal relations.
/// Cycles and self-loops are allowed.
fn subgraph(edges: &[(usize, usize, f64)]) -> SubgraphRecord {
    SubgraphRecord {
        relations: edges
            .iter()
            .map(|&(s, t, w)| RelationRecord::causal(node(s), node(t), w))
            .collect(),
        ..SubgraphRecord::default()
    }
}

fn build(n: usize, edges: &[(usize, usize, f64)]) -> CausalGraph {
    graph::build(&entities(n), &subgraph(edges), &TemporalRecord::new())
}

fn analyze(n: usize, edges: &[(usize, usize, f64)], cause: usize, effect: usize) -> AnalysisResult {
    let query = CausalQuery::new(entities(n), Hypothesis::new(node(cause), node(effect)), subgraph(edges));
    CausalEngine::new().analyze(&query)
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0..n, 0..n, -1.0_f64..=1.0_f64), 0..n * 3)
}

proptest! {
    #[test]
    fn no_causal_edges_means_no_paths_and_zero_strength(
        n in 2_usize..10,
        kind in "[a-z]{3,10}",
        edges in edge_strategy(10),
    ) {
        prop_assume!(kind != "causal");
        let relations = edges
            .iter()
            .filter(|&&(s, t, _)| s < n && t < n)
            .map(|&(s, t, w)| RelationRecord::new(node(s), node(t), RelationKind::from(kind.as_str()), w))
            .collect();
        let query = CausalQuery::new(
            entities(n),
            Hypothesis::new(node(0), node(n - 1)),
            SubgraphRecord { relations, ..SubgraphRecord::default() },
        );
        let result = CausalEngine::new().analyze(&query);
        prop_assert!(result.causal_paths.is_empty());
        prop_assert_eq!(result.causal_strength.overall_strength, 0.0);
        prop_assert!(result.confounders.is_empty());
    }
}

proptest! {
    #[test]
    fn paths_are_simple_bounded_and_follow_causal_edges(
        max_depth in 1_usize..6,
        source in 0_usize..8,
        target in 0_usize..8,
        edges in edge_strategy(8),
    ) {
        let graph = build(8, &edges);
        let found = paths::enumerate(&graph, &node(source), &node(target), max_depth);

        if source == target {
            prop_assert!(found.is_empty());
        }
        for path in &found {
            prop_assert!(path.len() >= 2);
            prop_assert!(path.len() <= max_depth + 1, "path {:?} exceeds depth {}", path.nodes, max_depth);
            prop_assert_eq!(&path.nodes[0], &node(source));
            prop_assert_eq!(path.nodes.last().unwrap(), &node(target));
            prop_assert_eq!(path.direct, path.len() == 2);

            let mut seen = std::collections::HashSet::new();
            for id in &path.nodes {
                prop_assert!(seen.insert(id), "node {} repeated in {:?}", id, path.nodes);
            }

            let mut product = 1.0;
            for pair in path.nodes.windows(2) {
                let s = graph.get_node(&pair[0]).unwrap();
                let t = graph.get_node(&pair[1]).unwrap();
                let edge = graph.causal_edge(s, t);
                prop_assert!(edge.is_some(), "no causal edge {} -> {}", pair[0], pair[1]);
                product *= edge.unwrap().weight;
            }
            prop_assert!((product - path.strength).abs() < 1e-12);
        }
        for pair in found.windows(2) {
            prop_assert!(pair[0].strength >= pair[1].strength);
        }
    }
}

proptest! {
    #[test]
    fn single_direct_edge_strength_is_its_weight(weight in -1.0_f64..=1.0_f64) {
        let result = analyze(2, &[(0, 1, weight)], 0, 1);
        prop_assert_eq!(result.causal_paths.len(), 1);
        prop_assert_eq!(result.causal_strength.direct_strength, weight);
        prop_assert_eq!(result.causal_strength.indirect_strength, 0.0);
        prop_assert_eq!(result.causal_strength.overall_strength, weight);
    }
}

proptest! {
    #[test]
    fn more_confounders_never_raise_confidence(
        weight in 0.0_f64..=1.0_f64,
        confounders in 0_usize..12,
    ) {
        // n0 -> n1 plus `k` nodes pointing into both.
        let edges_for = |k: usize| {
            let mut edges = vec![(0, 1, weight)];
            for i in 0..k {
                edges.push((2 + i, 0, 0.5));
                edges.push((2 + i, 1, 0.5));
            }
            edges
        };
        let n = 2 + confounders + 1;
        let fewer = analyze(n, &edges_for(confounders), 0, 1);
        let more = analyze(n, &edges_for(confounders + 1), 0, 1);
        prop_assert_eq!(fewer.confounders.len(), confounders);
        prop_assert_eq!(more.confounders.len(), confounders + 1);
        prop_assert!(more.confidence <= fewer.confidence);
    }
}

proptest! {
    #[test]
    fn intervention_is_linear_in_value(
        value in -100.0_f64..100.0,
        edges in edge_strategy(6),
    ) {
        let graph = build(6, &edges);
        let once = intervention::simulate(&graph, &InterventionSpec { variable: node(0), value });
        let twice = intervention::simulate(&graph, &InterventionSpec { variable: node(0), value: 2.0 * value });

        prop_assert!((twice.direct_effect - 2.0 * once.direct_effect).abs() < 1e-9);
        prop_assert!((twice.total_effect - 2.0 * once.total_effect).abs() < 1e-9);
        prop_assert_eq!(once.confidence, twice.confidence);
        prop_assert_eq!(once.indirect_effects.len(), twice.indirect_effects.len());
    }
}

proptest! {
    #[test]
    fn results_stay_in_range_and_round_trip(
        cause in 0_usize..6,
        effect in 0_usize..6,
        edges in edge_strategy(6),
    ) {
        let result = analyze(6, &edges, cause, effect);
        prop_assert!(!result.is_failed());
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!(result.causal_strength.overall_strength <= 1.0);
        for edge in &result.causal_graph.edges {
            prop_assert!((-1.0..=1.0).contains(&edge.weight));
        }

        let text = serde_json::to_string(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(parsed, result);
    }
}
