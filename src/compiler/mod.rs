use crate::ast::Expression;
use crate::block::Block;
use crate::block::types::{self, slot};
use crate::plan::SemanticPlan;
use ahash::AHashSet;
use itertools::Itertools;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

mod artifact;
mod chain;
mod lower;
mod parser;

use chain::ChainBuilder;
use lower::lower_expression;
use parser::parse_expression;

/// Splits a derived entry into its target name and expression text.
static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*=\s*(.+)$").expect("assignment pattern"));

/// Non-fatal problems observed during compilation.
///
/// The compiler never fails on imperfect planner output; it records what it
/// dropped or patched over and carries on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// A derived entry did not match the `name = expression` shape and was
    /// left out of the tree.
    MalformedDerived { entry: String },

    /// An expression did not parse; its raw text was kept as a bare
    /// variable reference instead.
    ExpressionFallback { expression: String, message: String },

    /// An expression references a name no input or earlier derived entry
    /// introduces.
    UnboundVariable { name: String, expression: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedDerived { entry } => write!(
                f,
                "derived entry '{}' is not of the form 'name = expression'; dropped",
                entry
            ),
            Diagnostic::ExpressionFallback {
                expression,
                message,
            } => write!(
                f,
                "expression '{}' did not parse ({}); kept as a bare operand",
                expression, message
            ),
            Diagnostic::UnboundVariable { name, expression } => {
                write!(f, "variable '{}' in '{}' is never assigned", name, expression)
            }
        }
    }
}

/// The compiler's output: a guaranteed non-empty block tree plus the
/// diagnostics recorded while producing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledPlan {
    pub root: Block,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledPlan {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Defines the contract for lowering one action string into a statement
/// block, keyed by a literal action prefix.
pub trait ActionLowering: Send + Sync {
    /// The literal prefix this lowering claims, e.g. `"print "`.
    fn prefix(&self) -> &str;

    /// Lowers the trimmed text after the prefix into one statement block.
    fn lower(&self, rest: &str) -> Block;
}

struct PrintLowering;

impl ActionLowering for PrintLowering {
    fn prefix(&self) -> &str {
        "print "
    }

    fn lower(&self, rest: &str) -> Block {
        print_block(rest)
    }
}

pub(crate) fn print_block(text: &str) -> Block {
    Block::new(types::TEXT_PRINT).with_value(
        slot::TEXT,
        Block::new(types::TEXT_LITERAL).with_field(slot::TEXT, text),
    )
}

fn input_block(name: &str) -> Block {
    Block::new(types::VAR_SET).with_field(slot::VAR, name).with_value(
        slot::VALUE,
        Block::new(types::SAFE_INPUT).with_field(slot::TYPE, "str"),
    )
}

pub struct SemanticCompilerBuilder {
    lowerings: Vec<Box<dyn ActionLowering>>,
}

impl SemanticCompilerBuilder {
    pub fn new() -> Self {
        Self {
            lowerings: vec![Box::new(PrintLowering)],
        }
    }

    /// Registers a custom action lowering ahead of the defaults.
    pub fn with_action_lowering(mut self, lowering: Box<dyn ActionLowering>) -> Self {
        self.lowerings.insert(0, lowering);
        self
    }

    pub fn build(self) -> SemanticCompiler {
        SemanticCompiler {
            lowerings: self.lowerings,
        }
    }
}

impl Default for SemanticCompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles validated semantic plans into block trees.
///
/// Stateless per call: two compilations of the same plan yield structurally
/// identical trees.
pub struct SemanticCompiler {
    lowerings: Vec<Box<dyn ActionLowering>>,
}

impl SemanticCompiler {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> SemanticCompilerBuilder {
        SemanticCompilerBuilder::new()
    }

    /// Compiles a plan into a block tree. Infallible: imperfect input is
    /// recorded as diagnostics, and an empty plan yields the fallback
    /// `No operations` print block rather than an empty result.
    pub fn compile(&self, plan: &SemanticPlan) -> CompiledPlan {
        let mut diagnostics = Vec::new();
        let mut scope: AHashSet<String> = AHashSet::new();
        let mut main = ChainBuilder::new();

        // 1. Read every input into its variable.
        for name in &plan.inputs {
            main.push(input_block(name));
            scope.insert(name.clone());
        }

        // 2. Derived calculations, in declaration order.
        for entry in &plan.derived {
            let Some(captures) = ASSIGNMENT.captures(entry.trim()) else {
                diagnostics.push(Diagnostic::MalformedDerived {
                    entry: entry.clone(),
                });
                continue;
            };
            let name = &captures[1];
            let expr = self.parse_or_fallback(&captures[2], &mut diagnostics);
            note_unbound(&expr, &scope, &mut diagnostics);

            main.push(
                Block::new(types::VAR_SET)
                    .with_field(slot::VAR, name)
                    .with_value(slot::VALUE, lower_expression(&expr)),
            );
            scope.insert(name.to_string());
        }

        // 3. Conditional dispatch, or 4. the bare `then` branch.
        if let Some(condition) = &plan.condition {
            let expr = self.parse_or_fallback(condition, &mut diagnostics);
            note_unbound(&expr, &scope, &mut diagnostics);

            // Branches build on independent chains; an empty branch leaves
            // its slot absent rather than holding an empty chain.
            let mut then_chain = ChainBuilder::new();
            for action in &plan.actions.then {
                then_chain.push(self.compile_action(action));
            }
            let mut else_chain = ChainBuilder::new();
            for action in &plan.actions.else_ {
                else_chain.push(self.compile_action(action));
            }

            let mut conditional =
                Block::new(types::IF_TRUTHY).with_value(slot::EXPR, lower_expression(&expr));
            if let Some(head) = then_chain.finish() {
                conditional = conditional.with_statement(slot::THEN, head);
            }
            if let Some(head) = else_chain.finish() {
                conditional = conditional.with_statement(slot::ELSE, head);
            }
            main.push(conditional);
        } else {
            // Without a condition only the `then` branch runs.
            for action in &plan.actions.then {
                main.push(self.compile_action(action));
            }
        }

        let root = main
            .finish()
            .unwrap_or_else(|| print_block("No operations"));
        CompiledPlan { root, diagnostics }
    }

    /// Lowers one action string. The first registered lowering whose prefix
    /// matches claims the action; everything else prints its own text.
    fn compile_action(&self, action: &str) -> Block {
        let action = action.trim();
        for lowering in &self.lowerings {
            if let Some(rest) = action.strip_prefix(lowering.prefix()) {
                return lowering.lower(rest.trim());
            }
        }
        print_block(action)
    }

    fn parse_or_fallback(&self, text: &str, diagnostics: &mut Vec<Diagnostic>) -> Expression {
        match parse_expression(text) {
            Ok(expr) => expr,
            Err(e) => {
                diagnostics.push(Diagnostic::ExpressionFallback {
                    expression: text.trim().to_string(),
                    message: e.to_string(),
                });
                Expression::Variable(text.trim().to_string())
            }
        }
    }
}

impl Default for SemanticCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Records a diagnostic for every referenced name the scope does not hold.
fn note_unbound(expr: &Expression, scope: &AHashSet<String>, diagnostics: &mut Vec<Diagnostic>) {
    let mut names = AHashSet::new();
    expr.variables(&mut names);
    for name in names.iter().sorted() {
        if !scope.contains(name) {
            diagnostics.push(Diagnostic::UnboundVariable {
                name: name.clone(),
                expression: expr.to_string(),
            });
        }
    }
}
