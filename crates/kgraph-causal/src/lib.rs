//! # kgraph-causal
//!
//! Causal inference over a materialized knowledge-graph subgraph.
//!
//! | Stage | Module |
//! |-------|--------|
//! | Graph construction | [`graph`] |
//! | Depth-bounded path enumeration | [`paths`] |
//! | Direct/indirect strength | [`strength`] |
//! | Intervention simulation | [`intervention`] |
//! | Confounder detection | [`confounders`] |
//! | Counterfactual estimation | [`counterfactual`] |
//! | Overall confidence | [`confidence`] |
//!
//! Every stage is a pure function over an immutable per-query graph.
//! [`CausalEngine`] wires them together.

pub mod confidence;
pub mod confounders;
pub mod counterfactual;
pub mod engine;
pub mod graph;
pub mod intervention;
pub mod paths;
pub mod spans;
pub mod strength;

pub use counterfactual::noise::{GaussianNoise, NoiseSource, ZeroNoise};
pub use engine::CausalEngine;
pub use graph::{CausalEdge, CausalGraph, CausalNode};
