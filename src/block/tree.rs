use super::types::{self, BlockKind};
use crate::error::TreeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// One node of the compiled tree: an operation tag plus slots for literal
/// fields, nested expressions, nested statement chains, and a sequential
/// successor.
///
/// The serialized form is the wire contract with the downstream renderer:
/// empty sections are omitted entirely rather than emitted as empty maps.
/// Ordered maps keep the output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub block_type: String,

    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    #[serde(default)]
    pub value_inputs: BTreeMap<String, Block>,

    #[serde(default)]
    pub statement_inputs: BTreeMap<String, Block>,

    #[serde(default)]
    pub next: Option<Box<Block>>,
}

impl Serialize for Block {
    /// Human-readable formats (the JSON wire contract) omit empty sections;
    /// compact formats (bincode artifacts) need every field present because
    /// they cannot represent a skipped one.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let len = 1
                + usize::from(!self.fields.is_empty())
                + usize::from(!self.value_inputs.is_empty())
                + usize::from(!self.statement_inputs.is_empty())
                + usize::from(self.next.is_some());
            let mut state = serializer.serialize_struct("Block", len)?;
            state.serialize_field("type", &self.block_type)?;
            if !self.fields.is_empty() {
                state.serialize_field("fields", &self.fields)?;
            }
            if !self.value_inputs.is_empty() {
                state.serialize_field("value_inputs", &self.value_inputs)?;
            }
            if !self.statement_inputs.is_empty() {
                state.serialize_field("statement_inputs", &self.statement_inputs)?;
            }
            if let Some(next) = &self.next {
                state.serialize_field("next", next)?;
            }
            state.end()
        } else {
            let mut state = serializer.serialize_struct("Block", 5)?;
            state.serialize_field("type", &self.block_type)?;
            state.serialize_field("fields", &self.fields)?;
            state.serialize_field("value_inputs", &self.value_inputs)?;
            state.serialize_field("statement_inputs", &self.statement_inputs)?;
            state.serialize_field("next", &self.next)?;
            state.end()
        }
    }
}

impl Block {
    pub fn new(block_type: &str) -> Self {
        Self {
            block_type: block_type.to_string(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_value(mut self, slot: &str, child: Block) -> Self {
        self.value_inputs.insert(slot.to_string(), child);
        self
    }

    pub fn with_statement(mut self, slot: &str, head: Block) -> Self {
        self.statement_inputs.insert(slot.to_string(), head);
        self
    }

    /// Iterates the `next`-threaded chain starting at this block.
    pub fn iter_chain(&self) -> ChainIter<'_> {
        ChainIter {
            current: Some(self),
        }
    }

    /// Number of blocks in the chain starting here.
    pub fn chain_len(&self) -> usize {
        self.iter_chain().count()
    }

    /// Checks the structural invariants of the tree rooted here: every tag
    /// is known, expression blocks carry neither statement inputs nor
    /// successors, value slots hold expression blocks, and statement slots
    /// hold statement chains. The compiler upholds these by construction;
    /// the check exists for trees that arrive from elsewhere.
    pub fn check_integrity(&self) -> Result<(), TreeError> {
        Self::check_chain(self, "root")
    }

    /// Walks a `next`-threaded statement chain.
    fn check_chain(head: &Block, slot: &str) -> Result<(), TreeError> {
        for block in head.iter_chain() {
            match types::kind_of(&block.block_type) {
                None => return Err(TreeError::UnknownBlockType(block.block_type.clone())),
                Some(BlockKind::Expression) => {
                    return Err(TreeError::ExpressionInStatementSlot {
                        block_type: block.block_type.clone(),
                        slot: slot.to_string(),
                    });
                }
                Some(BlockKind::Statement) => block.check_slots()?,
            }
        }
        Ok(())
    }

    /// Checks one expression subtree.
    fn check_expression(expr: &Block, slot: &str) -> Result<(), TreeError> {
        match types::kind_of(&expr.block_type) {
            None => return Err(TreeError::UnknownBlockType(expr.block_type.clone())),
            Some(BlockKind::Statement) => {
                return Err(TreeError::StatementInValueSlot {
                    block_type: expr.block_type.clone(),
                    slot: slot.to_string(),
                });
            }
            Some(BlockKind::Expression) => {}
        }
        if !expr.statement_inputs.is_empty() {
            return Err(TreeError::StatementInputsOnExpression(
                expr.block_type.clone(),
            ));
        }
        if expr.next.is_some() {
            return Err(TreeError::SuccessorOnExpression(expr.block_type.clone()));
        }
        expr.check_slots()
    }

    /// Recurses into a node's value and statement slots.
    fn check_slots(&self) -> Result<(), TreeError> {
        for (slot, child) in &self.value_inputs {
            Self::check_expression(child, slot)?;
        }
        for (slot, head) in &self.statement_inputs {
            Self::check_chain(head, slot)?;
        }
        Ok(())
    }
}

/// Iterator over a sequential block chain.
pub struct ChainIter<'a> {
    current: Option<&'a Block>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.current?;
        self.current = block.next.as_deref();
        Some(block)
    }
}
