//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the tsumiki crate. Import
//! this module to get access to the core pipeline without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use tsumiki::prelude::*;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = CapabilityValidator::new("path/to/normalized_blocks.json")?;
//! let plan = SemanticPlan::from_file("path/to/plan.json")?;
//!
//! match validator.validate(&plan) {
//!     Verdict::Ok => {
//!         let compiled = SemanticCompiler::new().compile(&plan);
//!         println!("{}", serde_json::to_string(&compiled.root)?);
//!     }
//!     Verdict::Error { reason } => eprintln!("rejected: {}", reason),
//! }
//! # Ok(())
//! # }
//! ```

// Core validation and compilation
pub use crate::compiler::{ActionLowering, CompiledPlan, Diagnostic, SemanticCompiler};
pub use crate::validator::{CapabilityValidator, Verdict};

// Plan and catalog data models
pub use crate::catalog::{BlockCatalog, BlockDescriptor, CapabilitySet};
pub use crate::plan::{IntoPlan, PlanActions, SemanticPlan};

// Output tree types
pub use crate::ast::Expression;
pub use crate::block::{Block, types as block_types};

// Errors
pub use crate::error::{
    ArtifactError, CatalogError, PlanConversionError, TreeError, ValidationError,
};
