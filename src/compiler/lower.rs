//! Lowering from the typed expression tree to renderer blocks.

use crate::ast::Expression;
use crate::block::types::{self, compare_op, slot};
use crate::block::Block;

/// Lowers one expression tree into its block form.
pub(crate) fn lower_expression(expr: &Expression) -> Block {
    match expr {
        Expression::Sum(l, r) => arithmetic("+", l, r),
        Expression::Subtract(l, r) => arithmetic("-", l, r),
        Expression::Multiply(l, r) => arithmetic("*", l, r),
        Expression::Divide(l, r) => arithmetic("/", l, r),

        Expression::And(l, r) => logic(types::LOGIC_AND, l, r),
        Expression::Or(l, r) => logic(types::LOGIC_OR, l, r),

        Expression::Equal(l, r) => comparison(compare_op::EQ, l, r),
        Expression::NotEqual(l, r) => comparison(compare_op::NEQ, l, r),
        Expression::GreaterThan(l, r) => comparison(compare_op::GT, l, r),
        Expression::GreaterThanOrEqual(l, r) => comparison(compare_op::GTE, l, r),
        Expression::SmallerThan(l, r) => comparison(compare_op::LT, l, r),
        Expression::SmallerThanOrEqual(l, r) => comparison(compare_op::LTE, l, r),

        Expression::Number(raw) => Block::new(types::NUM_LITERAL).with_field(slot::NUM, raw.clone()),
        Expression::Variable(name) => {
            Block::new(types::VAR_GET).with_field(slot::VAR, name.clone())
        }
    }
}

fn arithmetic(op: &str, l: &Expression, r: &Expression) -> Block {
    Block::new(types::NUM_ARITHMETIC)
        .with_field(slot::OP, op)
        .with_value(slot::A, lower_expression(l))
        .with_value(slot::B, lower_expression(r))
}

fn comparison(op_tag: &str, l: &Expression, r: &Expression) -> Block {
    Block::new(types::COMPARE)
        .with_field(slot::OP, op_tag)
        .with_value(slot::A, lower_expression(l))
        .with_value(slot::B, lower_expression(r))
}

fn logic(block_type: &str, l: &Expression, r: &Expression) -> Block {
    Block::new(block_type)
        .with_value(slot::A, lower_expression(l))
        .with_value(slot::B, lower_expression(r))
}
