use serde::{Deserialize, Serialize};

/// A directional causal question: does `cause` drive `effect`, and what if we intervene?
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hypothesis {
    pub cause: Option<String>,
    pub effect: Option<String>,
    pub intervention: Option<InterventionSpec>,
    pub counterfactual: Option<CounterfactualSpec>,
}

impl Hypothesis {
    pub fn new(cause: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            cause: Some(cause.into()),
            effect: Some(effect.into()),
            ..Self::default()
        }
    }

    pub fn with_intervention(mut self, variable: impl Into<String>, value: f64) -> Self {
        self.intervention = Some(InterventionSpec {
            variable: variable.into(),
            value,
        });
        self
    }

    pub fn with_counterfactual(
        mut self,
        variable: impl Into<String>,
        original_value: f64,
        counterfactual_value: f64,
    ) -> Self {
        self.counterfactual = Some(CounterfactualSpec {
            variable: variable.into(),
            original_value,
            counterfactual_value,
        });
        self
    }

    /// True when the hypothesis asks nothing at all.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.cause).is_none()
            && non_empty(&self.effect).is_none()
            && self.intervention.is_none()
            && self.counterfactual.is_none()
    }

    /// Cause and effect, when both are given and non-empty.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        Some((non_empty(&self.cause)?, non_empty(&self.effect)?))
    }
}

fn non_empty(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|s| !s.is_empty())
}

/// Force `variable` to `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionSpec {
    pub variable: String,
    #[serde(default)]
    pub value: f64,
}

/// Compare outcomes for two values of `variable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterfactualSpec {
    pub variable: String,
    #[serde(default)]
    pub original_value: f64,
    #[serde(default)]
    pub counterfactual_value: f64,
}
