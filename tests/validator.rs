//! Tests for the capability validator's gating rules.
mod common;
use common::*;
use tsumiki::error::CatalogError;
use tsumiki::prelude::*;

#[test]
fn test_upstream_error_short_circuits() {
    // Even with an empty catalog and otherwise-unsupportable content, the
    // upstream error is the reason reported, nothing else is inspected.
    let validator = CapabilityValidator::from_catalog(&catalog_of(&[]));
    let plan = SemanticPlan {
        derived: vec!["total = a + b".to_string()],
        error: Some("not_expressible".to_string()),
        ..Default::default()
    };

    let verdict = validator.validate(&plan);
    assert_eq!(verdict.reason(), Some("not_expressible"));
}

#[test]
fn test_arithmetic_gated_on_capability() {
    let plan = SemanticPlan {
        derived: vec!["total = math + physics".to_string()],
        ..Default::default()
    };

    let without = CapabilityValidator::from_catalog(&catalog_of(&["text_print"]));
    let verdict = without.validate(&plan);
    assert!(!verdict.is_ok());
    assert!(verdict.reason().unwrap().contains("unsupported calculation"));

    let with = CapabilityValidator::from_catalog(&catalog_of(&["essentials_num_arithmetic"]));
    assert!(with.validate(&plan).is_ok());
}

#[test]
fn test_function_calls_gated_on_scraped_names() {
    let validator = CapabilityValidator::from_catalog(&full_catalog());

    let known = SemanticPlan {
        derived: vec!["min(a, b)".to_string()],
        ..Default::default()
    };
    assert!(validator.validate(&known).is_ok());

    let unknown = SemanticPlan {
        derived: vec!["clamp(a, b)".to_string()],
        ..Default::default()
    };
    assert!(!validator.validate(&unknown).is_ok());
}

#[test]
fn test_plain_assignment_always_accepted() {
    // No arithmetic symbols, no call: a bare `name = ...` passes even with
    // an empty capability set.
    let validator = CapabilityValidator::from_catalog(&catalog_of(&[]));
    let plan = SemanticPlan {
        derived: vec!["x = y".to_string()],
        ..Default::default()
    };
    assert!(validator.validate(&plan).is_ok());
}

#[test]
fn test_free_text_calculation_rejected() {
    let validator = CapabilityValidator::from_catalog(&full_catalog());
    let plan = SemanticPlan {
        derived: vec!["figure it out somehow".to_string()],
        ..Default::default()
    };

    let verdict = validator.validate(&plan);
    assert!(!verdict.is_ok());
    assert!(verdict.reason().unwrap().contains("unsupported calculation"));
}

#[test]
fn test_condition_requires_comparisons() {
    let plan = SemanticPlan {
        condition: Some("total >= 150".to_string()),
        ..Default::default()
    };

    // Comparisons alone suffice.
    let comparisons_only = CapabilityValidator::from_catalog(&catalog_of(&["essentials_compare"]));
    assert!(comparisons_only.validate(&plan).is_ok());

    // Logic alone is insufficient.
    let logic_only = CapabilityValidator::from_catalog(&catalog_of(&["essentials_logic_and"]));
    let verdict = logic_only.validate(&plan);
    assert!(!verdict.is_ok());
    assert!(verdict.reason().unwrap().contains("unsupported condition"));

    // Both together pass.
    let both = CapabilityValidator::from_catalog(&catalog_of(&[
        "essentials_compare",
        "essentials_logic_and",
    ]));
    assert!(both.validate(&plan).is_ok());
}

#[test]
fn test_no_condition_is_always_valid() {
    let validator = CapabilityValidator::from_catalog(&catalog_of(&[]));
    assert!(validator.validate(&SemanticPlan::default()).is_ok());
}

#[test]
fn test_actions_gated_solely_on_print() {
    // Action text is irrelevant; only the print capability decides.
    let plan = SemanticPlan {
        actions: PlanActions {
            then: vec!["do a backflip".to_string()],
            else_: vec![],
        },
        ..Default::default()
    };

    let with_print = CapabilityValidator::from_catalog(&catalog_of(&["text_print"]));
    assert!(with_print.validate(&plan).is_ok());

    let without_print = CapabilityValidator::from_catalog(&catalog_of(&["essentials_var_set"]));
    let verdict = without_print.validate(&plan);
    assert!(!verdict.is_ok());
    assert!(verdict.reason().unwrap().contains("unsupported action"));
}

#[test]
fn test_else_actions_are_gated_too() {
    let plan = SemanticPlan {
        actions: PlanActions {
            then: vec![],
            else_: vec!["print rejected".to_string()],
        },
        ..Default::default()
    };

    let without_print = CapabilityValidator::from_catalog(&catalog_of(&[]));
    assert!(!without_print.validate(&plan).is_ok());
}

#[test]
fn test_missing_catalog_is_fatal() {
    let result = CapabilityValidator::new("definitely/not/here.json");
    match result {
        Err(CatalogError::NotFound(path)) => assert!(path.contains("not/here.json")),
        _ => panic!("Expected CatalogError::NotFound"),
    }
}

#[test]
fn test_validator_is_reusable_across_plans() {
    // The capability set is built once; repeated validate calls agree.
    let validator = CapabilityValidator::from_catalog(&full_catalog());
    let plan = admission_plan();
    assert!(validator.validate(&plan).is_ok());
    assert!(validator.validate(&plan).is_ok());
    assert!(validator.validate(&print_only_plan()).is_ok());
}
