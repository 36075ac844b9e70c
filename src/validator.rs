use crate::catalog::{BlockCatalog, CapabilitySet};
use crate::error::{CatalogError, ValidationError};
use crate::plan::{PlanActions, SemanticPlan};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// A bare `name = ...` assignment with no operators.
static SIMPLE_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*\s*=\s*").expect("assignment pattern"));

/// A leading function call such as `min(`.
static LEADING_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").expect("call pattern"));

/// Outcome of a capability check, in the wire form the upstream pipeline
/// expects: `{"status": "ok"}` or `{"status": "error", "reason": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Error { reason: String },
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Ok => None,
            Verdict::Error { reason } => Some(reason),
        }
    }
}

/// Decides, before compilation, whether a semantic plan is realizable with
/// the operations inferable from the block catalog.
///
/// The capability set is derived once at construction and read-only
/// afterwards, so one validator can serve any number of `validate` calls.
/// Rejection always carries a human-readable reason; validation never
/// panics and never propagates an error to the caller.
pub struct CapabilityValidator {
    capabilities: CapabilitySet,
}

impl CapabilityValidator {
    /// Loads the catalog from a file and derives the capability set.
    /// A missing catalog is fatal: without it no meaningful validation is
    /// possible.
    pub fn new<P: AsRef<Path>>(catalog_path: P) -> Result<Self, CatalogError> {
        let catalog = BlockCatalog::from_file(catalog_path)?;
        Ok(Self::from_catalog(&catalog))
    }

    pub fn from_catalog(catalog: &BlockCatalog) -> Self {
        Self {
            capabilities: CapabilitySet::from_catalog(catalog),
        }
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Validates a plan against the capability set.
    ///
    /// A plan carrying an upstream `error` is rejected with that reason
    /// before anything else is inspected.
    pub fn validate(&self, plan: &SemanticPlan) -> Verdict {
        if let Some(reason) = &plan.error {
            return Verdict::Error {
                reason: reason.clone(),
            };
        }

        match self.check_plan(plan) {
            Ok(()) => Verdict::Ok,
            Err(e) => Verdict::Error {
                reason: e.to_string(),
            },
        }
    }

    fn check_plan(&self, plan: &SemanticPlan) -> Result<(), ValidationError> {
        for calculation in &plan.derived {
            self.check_calculation(calculation)?;
        }
        if let Some(condition) = &plan.condition {
            self.check_condition(condition)?;
        }
        self.check_actions(&plan.actions)?;
        Ok(())
    }

    /// A calculation passes on the first matching rule: any arithmetic
    /// symbol gates on the arithmetic capability, a leading call gates on
    /// the scraped function set, and a plain assignment always passes.
    fn check_calculation(&self, calculation: &str) -> Result<(), ValidationError> {
        let calculation = calculation.trim();

        if calculation
            .chars()
            .any(|c| matches!(c, '+' | '-' | '*' | '/'))
        {
            return if self.capabilities.has_arithmetic {
                Ok(())
            } else {
                Err(ValidationError::UnsupportedCalculation(
                    calculation.to_string(),
                ))
            };
        }

        if let Some(captures) = LEADING_CALL.captures(calculation) {
            return if self.capabilities.supports_function(&captures[1]) {
                Ok(())
            } else {
                Err(ValidationError::UnsupportedCalculation(
                    calculation.to_string(),
                ))
            };
        }

        if SIMPLE_ASSIGNMENT.is_match(calculation) {
            return Ok(());
        }

        Err(ValidationError::UnsupportedCalculation(
            calculation.to_string(),
        ))
    }

    /// An existence check, not a parse: comparison capability is required,
    /// with or without logic blocks. A condition can pass this gate and
    /// still use operators no block implements; that gap surfaces
    /// downstream, not here.
    fn check_condition(&self, condition: &str) -> Result<(), ValidationError> {
        if self.capabilities.has_comparisons && self.capabilities.has_logic {
            return Ok(());
        }

        // Comparisons alone still cover simple conditions.
        if self.capabilities.has_comparisons {
            return Ok(());
        }

        Err(ValidationError::UnsupportedCondition(condition.to_string()))
    }

    /// Every action, whatever its text, gates solely on print capability:
    /// non-print actions are emitted as prints downstream.
    fn check_actions(&self, actions: &PlanActions) -> Result<(), ValidationError> {
        for action in actions.then.iter().chain(actions.else_.iter()) {
            if !self.capabilities.has_print {
                return Err(ValidationError::UnsupportedAction(action.clone()));
            }
        }
        Ok(())
    }
}
