/// Causal engine errors.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("relation key '{key}' does not resolve to exactly one pair of known entities")]
    MalformedRelationKey { key: String },

    #[error("non-finite value for {field}: {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("non-finite weight on relation {source_id} -> {target_id}")]
    NonFiniteWeight { source_id: String, target_id: String },
}
