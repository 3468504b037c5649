//! Input records handed to the engine by the knowledge-graph retrieval layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RELATION_STRENGTH;

/// Arbitrary entity attributes carried through from the source subgraph.
pub type PropertyMap = serde_json::Map<String, serde_json::Value>;

/// Temporal observations keyed by entity id.
pub type TemporalRecord = BTreeMap<String, TemporalSeries>;

/// A materialized knowledge-graph subgraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubgraphRecord {
    /// Entity id → properties.
    pub entities: BTreeMap<String, PropertyMap>,
    /// Relations between entities, in producer order. Deserializes from a
    /// list of records or from a `{ "{source}_{target}": { type, strength,
    /// evidence } }` map.
    #[serde(deserialize_with = "deserialize_relations")]
    pub relations: Vec<RelationRecord>,
}

impl SubgraphRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, id: impl Into<String>, properties: PropertyMap) -> Self {
        self.entities.insert(id.into(), properties);
        self
    }

    pub fn with_relation(mut self, relation: RelationRecord) -> Self {
        self.relations.push(relation);
        self
    }
}

/// Relation attributes in the keyed map form; the key names the endpoints.
#[derive(Deserialize)]
struct KeyedRelationBody {
    #[serde(rename = "type", default)]
    kind: RelationKind,
    #[serde(default = "default_strength")]
    strength: f64,
    #[serde(default)]
    evidence: Vec<String>,
}

fn deserialize_relations<'de, D>(deserializer: D) -> Result<Vec<RelationRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(RelationsVisitor)
}

struct RelationsVisitor;

impl<'de> Visitor<'de> for RelationsVisitor {
    type Value = Vec<RelationRecord>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of relation records or a map of composite key to relation")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut relations = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(relation) = seq.next_element()? {
            relations.push(relation);
        }
        Ok(relations)
    }

    /// Entries keep document order, so first-wins deduplication follows the producer.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut relations = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, body)) = map.next_entry::<String, KeyedRelationBody>()? {
            relations.push(RelationRecord {
                endpoints: RelationEndpoints::Key { key },
                kind: body.kind,
                strength: body.strength,
                evidence: body.evidence,
            });
        }
        Ok(relations)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }
}

/// A single relation between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord {
    #[serde(flatten)]
    pub endpoints: RelationEndpoints,
    #[serde(rename = "type", default)]
    pub kind: RelationKind,
    #[serde(default = "default_strength")]
    pub strength: f64,
    #[serde(default)]
    pub evidence: Vec<String>,
}

fn default_strength() -> f64 {
    DEFAULT_RELATION_STRENGTH
}

impl RelationRecord {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
        strength: f64,
    ) -> Self {
        Self {
            endpoints: RelationEndpoints::Pair {
                source: source.into(),
                target: target.into(),
            },
            kind,
            strength,
            evidence: Vec::new(),
        }
    }

    /// A causal relation with the given strength.
    pub fn causal(source: impl Into<String>, target: impl Into<String>, strength: f64) -> Self {
        Self::new(source, target, RelationKind::Causal, strength)
    }

    /// A relation identified only by a `"{source}_{target}"` composite key.
    pub fn keyed(key: impl Into<String>, kind: RelationKind, strength: f64) -> Self {
        Self {
            endpoints: RelationEndpoints::Key { key: key.into() },
            kind,
            strength,
            evidence: Vec::new(),
        }
    }

    pub fn with_evidence<I, S>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evidence = evidence.into_iter().map(Into::into).collect();
        self
    }
}

/// How a relation names its endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationEndpoints {
    /// Structured endpoints.
    Pair { source: String, target: String },
    /// Legacy composite key, resolved against the requested entities.
    Key { key: String },
}

/// Relation kind tag. Only `causal` relations take part in causal search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationKind {
    Causal,
    Other(String),
}

impl RelationKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Causal => "causal",
            Self::Other(name) => name,
        }
    }

    pub fn is_causal(&self) -> bool {
        matches!(self, Self::Causal)
    }
}

impl Default for RelationKind {
    fn default() -> Self {
        Self::Other("related".to_string())
    }
}

impl From<String> for RelationKind {
    fn from(name: String) -> Self {
        if name == "causal" {
            Self::Causal
        } else {
            Self::Other(name)
        }
    }
}

impl From<&str> for RelationKind {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<RelationKind> for String {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Causal => "causal".to_string(),
            RelationKind::Other(name) => name,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered numeric observations for one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalSeries {
    #[serde(alias = "historical_values", alias = "series_values")]
    pub values: Vec<f64>,
    pub timestamps: Vec<String>,
}

impl TemporalSeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
