//! # Tsumiki - Semantic Plan to Block Tree Compiler
//!
//! **Tsumiki** turns the structured plan an upstream planner distills from a
//! natural-language word problem into an executable visual-programming block
//! tree. The core is a two-stage pipeline: a capability check that rejects
//! plans the target block workspace cannot express, and a compiler that
//! parses the plan's expression strings into typed ASTs and lowers the whole
//! plan into one `next`-chained tree of renderer blocks.
//!
//! ## Core Workflow
//!
//! 1.  **Load the catalog**: parse the workspace's block descriptors into a
//!     [`BlockCatalog`](catalog::BlockCatalog); construction of the
//!     [`CapabilityValidator`](validator::CapabilityValidator) derives an
//!     immutable capability summary from it, once.
//! 2.  **Obtain a plan**: deserialize the planner's JSON into a
//!     [`SemanticPlan`](plan::SemanticPlan), or implement
//!     [`IntoPlan`](plan::IntoPlan) for your own planner output format.
//! 3.  **Validate**: `validate` returns a [`Verdict`](validator::Verdict) —
//!     either ok or a rejection with a human-readable reason. No tree is
//!     ever produced for a rejected plan.
//! 4.  **Compile**: [`SemanticCompiler`](compiler::SemanticCompiler)
//!     produces a guaranteed non-empty block tree plus a list of
//!     diagnostics for anything it had to drop or patch over. The tree's
//!     JSON form is the wire contract with the downstream renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use tsumiki::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The block catalog describes what the target workspace offers.
//!     let catalog = BlockCatalog::from_json(
//!         r#"[
//!             {"type": "essentials_num_arithmetic"},
//!             {"type": "essentials_compare"},
//!             {"type": "essentials_var_set"},
//!             {"type": "text_print"}
//!         ]"#,
//!     )?;
//!     let validator = CapabilityValidator::from_catalog(&catalog);
//!
//!     // The semantic plan arrives from the upstream planner.
//!     let plan = SemanticPlan::from_json(
//!         r#"{
//!             "inputs": ["math", "physics"],
//!             "derived": ["total = math + physics"],
//!             "condition": "total >= 150",
//!             "actions": {"then": ["print admitted"], "else": ["print rejected"]}
//!         }"#,
//!     )?;
//!
//!     // Gate on capability before compiling.
//!     let verdict = validator.validate(&plan);
//!     assert!(verdict.is_ok());
//!
//!     // Compile into the renderer's block tree.
//!     let compiled = SemanticCompiler::new().compile(&plan);
//!     assert!(compiled.diagnostics.is_empty());
//!     println!("{}", serde_json::to_string_pretty(&compiled.root)?);
//!
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod block;
pub mod catalog;
pub mod compiler;
pub mod error;
pub mod plan;
pub mod prelude;
pub mod validator;
