//! Per-query causal graph: arena of nodes plus directed weighted edges.

pub mod builder;
pub mod causal_graph;
pub mod relation_key;

pub use builder::build;
pub use causal_graph::{CausalEdge, CausalGraph, CausalNode};
