//! Property tests for the path-finding and relation-prediction strategies.

use proptest::prelude::*;

use kgraph_core::models::{RelationKind, RelationRecord, SubgraphRecord};
use kgraph_reasoning::path_finding::path_confidence;
use kgraph_reasoning::{Knowledge, PathFindingStrategy, RelationPredictionStrategy};

fn knowledge(edges: &[(usize, usize, f64, bool)]) -> Knowledge {
    let relations = edges
        .iter()
        .map(|&(s, t, w, causal)| {
            let kind = if causal {
                RelationKind::Causal
            } else {
                RelationKind::from("related")
            };
            RelationRecord::new(format!("n{s}"), format!("n{t}"), kind, w)
        })
        .collect();
    Knowledge::new(SubgraphRecord {
        relations,
        ..SubgraphRecord::default()
    })
}

fn edge_strategy() -> impl Strategy<Value = Vec<(usize, usize, f64, bool)>> {
    prop::collection::vec((0_usize..8, 0_usize..8, -1.0_f64..=1.0, any::<bool>()), 0..24)
}

proptest! {
    #[test]
    fn found_paths_are_simple_bounded_and_sorted(
        max_depth in 1_usize..5,
        start in 0_usize..8,
        end in 0_usize..8,
        edges in edge_strategy(),
    ) {
        prop_assume!(start != end);
        let k = knowledge(&edges);
        let (s, e) = (format!("n{start}"), format!("n{end}"));
        let paths = PathFindingStrategy::new(max_depth).find_paths(&k, &s, &e);

        for path in &paths {
            prop_assert!(path.len() >= 2 && path.len() <= max_depth + 1);
            prop_assert_eq!(&path[0], &s);
            prop_assert_eq!(path.last().unwrap(), &e);
            let unique: std::collections::HashSet<_> = path.iter().collect();
            prop_assert_eq!(unique.len(), path.len());
        }
        for pair in paths.windows(2) {
            prop_assert!(pair[0].len() <= pair[1].len());
            prop_assert_ne!(&pair[0], &pair[1]);
        }
        let confidence = path_confidence(&paths);
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert_eq!(paths.is_empty(), confidence == 0.0);
    }
}

proptest! {
    #[test]
    fn predictions_connect_the_pair_best_first(
        a in 0_usize..8,
        b in 0_usize..8,
        edges in edge_strategy(),
    ) {
        prop_assume!(a != b);
        let k = knowledge(&edges);
        let (a, b) = (format!("n{a}"), format!("n{b}"));
        let predictions = RelationPredictionStrategy.predict(&k, &a, &b);

        for p in &predictions {
            let forward = p.source == a && p.target == b;
            let backward = p.source == b && p.target == a;
            prop_assert!(forward || backward);
            prop_assert!((0.0..=1.0).contains(&p.score));
        }
        for pair in predictions.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
