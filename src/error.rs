use thiserror::Error;

/// Errors that can occur while loading the block catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Block catalog not found: {0}")]
    NotFound(String),

    #[error("Failed to read block catalog '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse block catalog JSON: {0}")]
    JsonParseError(String),
}

/// Raised when a semantic plan asks for an operation the catalog cannot
/// express. Always caught at the `validate` boundary and converted into a
/// rejected [`Verdict`](crate::validator::Verdict); never propagated to the
/// caller as a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported calculation: {0}")]
    UnsupportedCalculation(String),

    #[error("unsupported condition: {0}")]
    UnsupportedCondition(String),

    #[error("unsupported action: {0}")]
    UnsupportedAction(String),
}

/// Errors that can occur when loading a semantic plan or converting a custom
/// planner output format into a [`SemanticPlan`](crate::plan::SemanticPlan).
#[derive(Error, Debug)]
pub enum PlanConversionError {
    #[error("Failed to read plan file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse plan JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid planner output: {0}")]
    ValidationError(String),
}

/// Errors produced while parsing a single expression string.
///
/// These never escape compilation: an expression that fails to parse is
/// demoted to a bare operand and a diagnostic on the compiled plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprParseError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("trailing input after expression: '{0}'")]
    TrailingInput(String),
}

/// Structural invariant violations found in a block tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("Expression block '{0}' cannot carry statement inputs")]
    StatementInputsOnExpression(String),

    #[error("Expression block '{0}' cannot have a successor")]
    SuccessorOnExpression(String),

    #[error("Statement block '{block_type}' used in value slot '{slot}'")]
    StatementInValueSlot { block_type: String, slot: String },

    #[error("Expression block '{block_type}' used in statement slot '{slot}'")]
    ExpressionInStatementSlot { block_type: String, slot: String },
}

/// Errors for persisting and loading compiled plan artifacts.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}
