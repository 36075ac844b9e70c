use crate::error::PlanConversionError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The structured output of the upstream planner and the sole input to
/// validation and compilation.
///
/// Field order carries meaning: each `derived` entry may reference only
/// variables introduced by `inputs` or earlier `derived` entries. The
/// compiler surfaces violations as diagnostics rather than rejecting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticPlan {
    /// Variable names to be read at runtime, in declaration order.
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Assignment strings of the form `name = expression`.
    #[serde(default)]
    pub derived: Vec<String>,

    /// A single boolean expression, or `None` for an unconditional plan.
    #[serde(default)]
    pub condition: Option<String>,

    #[serde(default)]
    pub actions: PlanActions,

    /// Failure reason propagated from the upstream planner. A plan carrying
    /// an error is rejected before any capability check runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The two action branches of a plan. Both are always present on the wire,
/// possibly empty; `else` is only meaningful when a condition is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanActions {
    #[serde(default)]
    pub then: Vec<String>,

    #[serde(default, rename = "else")]
    pub else_: Vec<String>,
}

impl SemanticPlan {
    /// Parses a plan from its JSON wire form. Shape violations (a non-list
    /// `inputs`, a numeric action, a missing brace) surface here with the
    /// deserializer's reason.
    pub fn from_json(json: &str) -> Result<Self, PlanConversionError> {
        serde_json::from_str(json)
            .map_err(|e| PlanConversionError::JsonParseError(e.to_string()))
    }

    /// Loads a plan from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlanConversionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PlanConversionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// True when no field would contribute a statement to the compiled tree.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
            && self.derived.is_empty()
            && self.condition.is_none()
            && self.actions.then.is_empty()
            && self.actions.else_.is_empty()
    }
}
