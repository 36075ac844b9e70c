use super::definition::SemanticPlan;
use crate::error::PlanConversionError;

/// A trait for custom planner output formats that can be converted into a
/// tsumiki [`SemanticPlan`].
///
/// This is the extension point for making the core planner-agnostic. The
/// upstream stage (an LLM pipeline, a hand-written test harness, another
/// serialization format) parses its own representation, then implements
/// `IntoPlan` to hand the core the canonical plan shape.
///
/// # Example
///
/// ```rust
/// use tsumiki::plan::{IntoPlan, PlanActions, SemanticPlan};
/// use tsumiki::error::PlanConversionError;
///
/// // 1. Define your own structs for parsing the planner's format.
/// struct MyPlannerOutput {
///     reads: Vec<String>,
///     rule: Option<String>,
///     on_match: Vec<String>,
/// }
///
/// // 2. Implement `IntoPlan` to translate into the canonical shape.
/// impl IntoPlan for MyPlannerOutput {
///     fn into_plan(self) -> Result<SemanticPlan, PlanConversionError> {
///         Ok(SemanticPlan {
///             inputs: self.reads,
///             condition: self.rule,
///             actions: PlanActions {
///                 then: self.on_match,
///                 else_: vec![],
///             },
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoPlan {
    /// Consumes the object and converts it into a canonical semantic plan.
    fn into_plan(self) -> Result<SemanticPlan, PlanConversionError>;
}

impl IntoPlan for SemanticPlan {
    fn into_plan(self) -> Result<SemanticPlan, PlanConversionError> {
        Ok(self)
    }
}
