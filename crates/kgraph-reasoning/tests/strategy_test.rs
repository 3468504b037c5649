//! Scenario tests for strategy dispatch, path finding, and relation prediction.

use kgraph_core::config::{CausalConfig, KgConfig};
use kgraph_core::models::{Hypothesis, RelationKind, RelationRecord, SubgraphRecord};
use kgraph_reasoning::path_finding::path_confidence;
use kgraph_reasoning::{
    Knowledge, PathFindingStrategy, Reasoner, ReasoningOutcome, ReasoningStrategy, ReasoningTask,
    RelationPredictionStrategy, TaskKind,
};

fn knowledge(relations: Vec<RelationRecord>) -> Knowledge {
    Knowledge::new(SubgraphRecord {
        relations,
        ..SubgraphRecord::default()
    })
}

fn strategy(kind: TaskKind) -> ReasoningStrategy {
    ReasoningStrategy::for_task(kind, &KgConfig::default()).unwrap()
}

fn path_outcome(outcome: ReasoningOutcome) -> kgraph_reasoning::PathFindingOutcome {
    match outcome {
        ReasoningOutcome::PathFinding(o) => o,
        other => panic!("expected path finding outcome, got {:?}", other.kind()),
    }
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn for_task_picks_matching_strategy() {
    for kind in [TaskKind::Causal, TaskKind::PathFinding, TaskKind::RelationPrediction] {
        assert_eq!(strategy(kind).kind(), kind);
    }
}

#[test]
fn for_task_rejects_invalid_config() {
    let config = KgConfig {
        causal: CausalConfig {
            confidence_threshold: 2.0,
            ..CausalConfig::default()
        },
        ..KgConfig::default()
    };
    assert!(ReasoningStrategy::for_task(TaskKind::Causal, &config).is_err());
    assert!(ReasoningStrategy::for_task(TaskKind::PathFinding, &config).is_err());
}

#[test]
fn path_finding_depth_follows_config() {
    let config = KgConfig {
        causal: CausalConfig {
            max_causal_depth: 5,
            ..CausalConfig::default()
        },
        ..KgConfig::default()
    };
    match ReasoningStrategy::for_task(TaskKind::PathFinding, &config).unwrap() {
        ReasoningStrategy::PathFinding(s) => assert_eq!(s.max_depth, 5),
        other => panic!("unexpected strategy {:?}", other.kind()),
    }
}

#[test]
fn causal_strategy_runs_engine_pipeline() {
    let k = knowledge(vec![RelationRecord::causal("X", "Y", 0.9)]);
    let task = ReasoningTask::new(TaskKind::Causal, ["X", "Y"]).with_hypothesis(Hypothesis::new("X", "Y"));
    let outcome = strategy(TaskKind::Causal).evaluate(&task, &k);

    assert_eq!(outcome.kind(), TaskKind::Causal);
    let ReasoningOutcome::Causal(result) = outcome else {
        panic!("expected causal outcome");
    };
    assert_eq!(result.causal_paths.len(), 1);
    assert_eq!(result.causal_strength.direct_strength, 0.9);
    assert_eq!(result.reasoning_type, "causal_reasoning");
}

#[test]
fn outcome_serializes_with_strategy_tag() {
    let outcome = strategy(TaskKind::PathFinding)
        .evaluate(&ReasoningTask::new(TaskKind::PathFinding, ["A", "A"]), &Knowledge::default());
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["strategy"], "path_finding");
    assert_eq!(value["outcome"]["paths"][0][0], "A");

    let parsed: ReasoningOutcome = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, outcome);
}

#[test]
fn task_deserializes_with_optional_fields() {
    let task: ReasoningTask =
        serde_json::from_str(r#"{ "kind": "relation_prediction", "entities": ["a", "b"] }"#).unwrap();
    assert_eq!(task.kind, TaskKind::RelationPrediction);
    assert_eq!(task.endpoints(), Some(("a", "b")));
    assert!(task.hypothesis.is_empty());
}

// =============================================================================
// Path finding
// =============================================================================

#[test]
fn path_finding_routes_through_entities_outside_the_task() {
    let k = knowledge(vec![
        RelationRecord::causal("A", "M", 0.5),
        RelationRecord::new("M", "B", RelationKind::from("temporal"), 0.5),
    ]);
    let outcome = path_outcome(
        PathFindingStrategy::default().evaluate(&ReasoningTask::new(TaskKind::PathFinding, ["A", "B"]), &k),
    );
    assert_eq!(outcome.paths, vec![ids(&["A", "M", "B"])]);
    assert!((outcome.confidence - 0.8).abs() < 1e-12);
}

#[test]
fn path_finding_is_directed() {
    let k = knowledge(vec![RelationRecord::causal("B", "A", 0.5)]);
    let paths = PathFindingStrategy::default().find_paths(&k, "A", "B");
    assert!(paths.is_empty());
}

#[test]
fn path_finding_shortest_first_then_lexicographic() {
    let k = knowledge(vec![
        RelationRecord::causal("S", "Y", 0.5),
        RelationRecord::causal("S", "X", 0.5),
        RelationRecord::causal("X", "T", 0.5),
        RelationRecord::causal("Y", "T", 0.5),
        RelationRecord::causal("S", "T", 0.1),
    ]);
    let paths = PathFindingStrategy::default().find_paths(&k, "S", "T");
    assert_eq!(
        paths,
        vec![ids(&["S", "T"]), ids(&["S", "X", "T"]), ids(&["S", "Y", "T"])]
    );
}

#[test]
fn path_finding_respects_max_depth() {
    let k = knowledge(vec![
        RelationRecord::causal("n0", "n1", 0.5),
        RelationRecord::causal("n1", "n2", 0.5),
        RelationRecord::causal("n2", "n3", 0.5),
        RelationRecord::causal("n3", "n4", 0.5),
    ]);
    assert!(PathFindingStrategy::new(3).find_paths(&k, "n0", "n4").is_empty());
    assert_eq!(PathFindingStrategy::new(4).find_paths(&k, "n0", "n4").len(), 1);
    assert!(PathFindingStrategy::new(0).find_paths(&k, "n0", "n1").is_empty());
}

#[test]
fn path_finding_collapses_parallel_relations() {
    let k = knowledge(vec![
        RelationRecord::causal("A", "B", 0.5),
        RelationRecord::new("A", "B", RelationKind::from("temporal"), 0.5),
    ]);
    let paths = PathFindingStrategy::default().find_paths(&k, "A", "B");
    assert_eq!(paths, vec![ids(&["A", "B"])]);
}

#[test]
fn path_finding_unknown_entity_has_no_paths() {
    let k = knowledge(vec![RelationRecord::causal("A", "B", 0.5)]);
    let outcome = path_outcome(
        PathFindingStrategy::default().evaluate(&ReasoningTask::new(TaskKind::PathFinding, ["A", "Z"]), &k),
    );
    assert!(outcome.paths.is_empty());
    assert_eq!(outcome.confidence, 0.0);
}

#[test]
fn path_confidence_has_floor() {
    assert_eq!(path_confidence(&[]), 0.0);
    assert_eq!(path_confidence(&[ids(&["A"])]), 1.0);
    let long: Vec<String> = (0..15).map(|i| format!("n{i}")).collect();
    assert_eq!(path_confidence(&[long]), 0.1);
}

// =============================================================================
// Relation prediction
// =============================================================================

#[test]
fn relation_prediction_ranks_by_absolute_strength() {
    let k = knowledge(vec![
        RelationRecord::causal("A", "B", 0.2),
        RelationRecord::new("B", "A", RelationKind::from("inhibits"), -0.9),
        RelationRecord::new("A", "B", RelationKind::from("similar_to"), 0.5),
        RelationRecord::causal("A", "C", 1.0),
    ]);
    let outcome = RelationPredictionStrategy.evaluate(&ReasoningTask::new(TaskKind::RelationPrediction, ["A", "B"]), &k);
    let ReasoningOutcome::RelationPrediction(outcome) = outcome else {
        panic!("expected relation prediction outcome");
    };

    let kinds: Vec<&str> = outcome.predictions.iter().map(|p| p.kind.as_str()).collect();
    assert_eq!(kinds, vec!["inhibits", "similar_to", "causal"]);
    assert_eq!(outcome.predictions[0].source, "B");
    assert_eq!(outcome.predictions[0].score, 0.9);
    assert_eq!(outcome.confidence, 0.9);
}

#[test]
fn relation_prediction_without_relations_is_empty() {
    let k = knowledge(vec![RelationRecord::causal("A", "C", 1.0)]);
    let predictions = RelationPredictionStrategy.predict(&k, "A", "B");
    assert!(predictions.is_empty());

    let outcome = RelationPredictionStrategy.evaluate(&ReasoningTask::new(TaskKind::RelationPrediction, ["A"]), &k);
    assert_eq!(outcome.confidence(), 0.0);
}
