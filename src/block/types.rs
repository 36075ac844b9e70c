//! Block type tags and slot names shared with the downstream renderer.
//!
//! These strings are the wire contract: they must match the target
//! workspace's block definitions byte for byte.

/// Assigns a value to a named variable.
pub const VAR_SET: &str = "essentials_var_set";
/// Reads one external input as text.
pub const SAFE_INPUT: &str = "essentials_safe_input";
/// Binary arithmetic over two value inputs.
pub const NUM_ARITHMETIC: &str = "essentials_num_arithmetic";
/// A numeric literal, spelling preserved from the source expression.
pub const NUM_LITERAL: &str = "essentials_num_literal";
/// Reads a named variable.
pub const VAR_GET: &str = "essentials_var_get";
/// Binary comparison carrying a normalized operator tag.
pub const COMPARE: &str = "essentials_compare";
pub const LOGIC_AND: &str = "essentials_logic_and";
pub const LOGIC_OR: &str = "essentials_logic_or";
/// Conditional dispatch on a truthy expression.
pub const IF_TRUTHY: &str = "control_if_truthy";
pub const TEXT_PRINT: &str = "text_print";
pub const TEXT_LITERAL: &str = "text_literal";

/// Field and slot names used by the tags above.
pub mod slot {
    pub const VAR: &str = "VAR";
    pub const VALUE: &str = "VALUE";
    pub const TYPE: &str = "TYPE";
    pub const OP: &str = "OP";
    pub const A: &str = "A";
    pub const B: &str = "B";
    pub const NUM: &str = "NUM";
    pub const EXPR: &str = "EXPR";
    pub const THEN: &str = "THEN";
    pub const ELSE: &str = "ELSE";
    pub const TEXT: &str = "TEXT";
}

/// Normalized comparison operator tags for the `OP` field of [`COMPARE`].
pub mod compare_op {
    pub const GT: &str = "GT";
    pub const LT: &str = "LT";
    pub const GTE: &str = "GTE";
    pub const LTE: &str = "LTE";
    pub const EQ: &str = "EQ";
    pub const NEQ: &str = "NEQ";
}

/// Whether a block produces a value or performs an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Statement,
    Expression,
}

/// Classifies a type tag, or `None` for a tag this grammar does not define.
pub fn kind_of(block_type: &str) -> Option<BlockKind> {
    match block_type {
        VAR_SET | IF_TRUTHY | TEXT_PRINT => Some(BlockKind::Statement),
        SAFE_INPUT | NUM_ARITHMETIC | NUM_LITERAL | VAR_GET | COMPARE | LOGIC_AND | LOGIC_OR
        | TEXT_LITERAL => Some(BlockKind::Expression),
        _ => None,
    }
}
