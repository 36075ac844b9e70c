//! End-to-end tests: catalog → validation → compilation → wire-format JSON
//! and artifact round-trips.
mod common;
use common::*;
use serde_json::json;
use tsumiki::block::types as bt;
use tsumiki::block::types::slot;
use tsumiki::prelude::*;

#[test]
fn test_single_print_plan_wire_shape() {
    // The serialized tree is the wire contract: empty sections must be
    // omitted entirely, not emitted as empty maps.
    let validator = CapabilityValidator::from_catalog(&full_catalog());
    let plan = print_only_plan();
    assert!(validator.validate(&plan).is_ok());

    let compiled = SemanticCompiler::new().compile(&plan);
    assert_eq!(
        serde_json::to_value(&compiled.root).unwrap(),
        json!({
            "type": "text_print",
            "value_inputs": {
                "TEXT": {
                    "type": "text_literal",
                    "fields": {"TEXT": "Hello World"}
                }
            }
        })
    );
}

#[test]
fn test_admission_pipeline_end_to_end() {
    let validator = CapabilityValidator::from_catalog(&full_catalog());
    let plan = admission_plan();

    assert!(validator.validate(&plan).is_ok());

    let compiled = SemanticCompiler::new().compile(&plan);
    assert!(compiled.diagnostics.is_empty());
    assert!(compiled.root.check_integrity().is_ok());

    // Round-trips through the JSON wire format unchanged.
    let json = serde_json::to_string(&compiled.root).unwrap();
    let reparsed: Block = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, compiled.root);
}

#[test]
fn test_compound_condition_lowers_to_logic_tree() {
    let plan = SemanticPlan {
        inputs: vec!["score".to_string(), "total".to_string()],
        condition: Some("score >= 60 and total <= 100".to_string()),
        actions: PlanActions {
            then: vec!["print ok".to_string()],
            else_: vec![],
        },
        ..Default::default()
    };

    let compiled = SemanticCompiler::new().compile(&plan);
    let conditional = compiled.root.iter_chain().last().expect("chain tail");
    let expr = conditional.value_inputs.get(slot::EXPR).expect("EXPR");

    assert_eq!(expr.block_type, bt::LOGIC_AND);
    let left = expr.value_inputs.get(slot::A).expect("A");
    let right = expr.value_inputs.get(slot::B).expect("B");
    assert_eq!(left.block_type, bt::COMPARE);
    assert_eq!(left.fields.get(slot::OP).map(String::as_str), Some("GTE"));
    assert_eq!(right.block_type, bt::COMPARE);
    assert_eq!(right.fields.get(slot::OP).map(String::as_str), Some("LTE"));

    // Operand detail on the left comparison: score >= 60.
    assert_eq!(
        left.value_inputs.get(slot::A).unwrap().fields.get(slot::VAR).map(String::as_str),
        Some("score")
    );
    assert_eq!(
        left.value_inputs.get(slot::B).unwrap().fields.get(slot::NUM).map(String::as_str),
        Some("60")
    );
}

#[test]
fn test_parenthesized_condition_groups_properly() {
    let plan = SemanticPlan {
        inputs: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        condition: Some("(a > 1 or b > 2) and c > 3".to_string()),
        ..Default::default()
    };

    let compiled = SemanticCompiler::new().compile(&plan);
    let conditional = compiled.root.iter_chain().last().unwrap();
    let expr = conditional.value_inputs.get(slot::EXPR).expect("EXPR");

    assert_eq!(expr.block_type, bt::LOGIC_AND);
    assert_eq!(
        expr.value_inputs.get(slot::A).unwrap().block_type,
        bt::LOGIC_OR
    );
}

#[test]
fn test_bare_variable_condition() {
    // A condition that is just a boolean variable name still compiles.
    let plan = SemanticPlan {
        inputs: vec!["flag".to_string()],
        condition: Some("flag".to_string()),
        actions: PlanActions {
            then: vec!["print set".to_string()],
            else_: vec![],
        },
        ..Default::default()
    };

    let compiled = SemanticCompiler::new().compile(&plan);
    assert!(compiled.diagnostics.is_empty());
    let conditional = compiled.root.iter_chain().last().unwrap();
    let expr = conditional.value_inputs.get(slot::EXPR).expect("EXPR");
    assert_eq!(expr.block_type, bt::VAR_GET);
    assert_eq!(expr.fields.get(slot::VAR).map(String::as_str), Some("flag"));
}

#[test]
fn test_rejected_plan_is_never_compiled() {
    // The pipeline contract: no tree for a rejected plan.
    let validator = CapabilityValidator::from_catalog(&catalog_of(&["text_print"]));
    let plan = admission_plan();

    let verdict = validator.validate(&plan);
    assert!(!verdict.is_ok());
    assert!(verdict.reason().is_some());
}

#[test]
fn test_plan_serialization_always_carries_both_branches() {
    let value = serde_json::to_value(SemanticPlan::default()).unwrap();
    assert_eq!(value["actions"]["then"], json!([]));
    assert_eq!(value["actions"]["else"], json!([]));
    // The upstream error key is omitted when absent.
    assert!(value.get("error").is_none());
}

#[test]
fn test_artifact_roundtrip_in_memory() {
    let compiled = SemanticCompiler::new().compile(&admission_plan());

    let bytes = compiled.to_bytes().expect("serialize");
    let restored = CompiledPlan::from_bytes(&bytes).expect("deserialize");
    assert_eq!(restored, compiled);
}

#[test]
fn test_artifact_roundtrip_through_file() {
    let compiled = SemanticCompiler::new().compile(&print_only_plan());
    let path = std::env::temp_dir().join("tsumiki_artifact_test.bin");
    let path_str = path.to_str().expect("utf-8 temp path");

    compiled.save(path_str).expect("save");
    let restored = CompiledPlan::from_file(path_str).expect("load");
    assert_eq!(restored, compiled);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_catalog_json_loading() {
    let catalog = BlockCatalog::from_json(
        r#"[
            {"type": "essentials_compare"},
            {"type": "text_print", "python_sample": "print(round(x))"}
        ]"#,
    )
    .expect("valid catalog");

    assert_eq!(catalog.len(), 2);
    let validator = CapabilityValidator::from_catalog(&catalog);
    assert!(validator.capabilities().has_comparisons);
    assert!(validator.capabilities().supports_function("round"));

    assert!(BlockCatalog::from_json("{\"not\": \"a list\"}").is_err());
}
