//! Common test utilities for building catalogs and semantic plans.
use tsumiki::prelude::*;

/// Creates a catalog covering every capability category, with a code sample
/// that exposes `min`, `max` and `len` as recognized functions.
#[allow(dead_code)]
pub fn full_catalog() -> BlockCatalog {
    BlockCatalog::new(vec![
        BlockDescriptor::new("essentials_var_set"),
        BlockDescriptor::new("essentials_var_get"),
        BlockDescriptor::new("essentials_safe_input"),
        BlockDescriptor::new("essentials_num_arithmetic"),
        BlockDescriptor::new("essentials_num_literal"),
        BlockDescriptor::new("essentials_compare"),
        BlockDescriptor::new("essentials_logic_and"),
        BlockDescriptor::new("essentials_logic_or"),
        BlockDescriptor::new("control_if_truthy"),
        BlockDescriptor::new("text_print").with_sample("result = min(max(a, b), len(c))"),
        BlockDescriptor::new("text_literal"),
    ])
}

/// Creates a catalog holding only the given block types.
#[allow(dead_code)]
pub fn catalog_of(block_types: &[&str]) -> BlockCatalog {
    BlockCatalog::new(block_types.iter().map(|t| BlockDescriptor::new(*t)).collect())
}

/// The admission word problem: total two scores and branch on a pass mark.
#[allow(dead_code)]
pub fn admission_plan() -> SemanticPlan {
    SemanticPlan {
        inputs: vec!["math".to_string(), "physics".to_string()],
        derived: vec!["total = math + physics".to_string()],
        condition: Some("total >= 150".to_string()),
        actions: PlanActions {
            then: vec!["print admitted".to_string()],
            else_: vec!["print rejected".to_string()],
        },
        error: None,
    }
}

/// A plan with a single unconditional print and nothing else.
#[allow(dead_code)]
pub fn print_only_plan() -> SemanticPlan {
    SemanticPlan {
        actions: PlanActions {
            then: vec!["print Hello World".to_string()],
            else_: vec![],
        },
        ..Default::default()
    }
}
