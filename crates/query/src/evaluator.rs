//! Short-circuit predicate evaluation.
//!
//! The evaluator walks the ordered node sequence left to right, maintaining
//! a running boolean `stays`. This is a stateful fold, not full boolean
//! algebra: a node whose chain belongs to the AND family ends evaluation
//! immediately when `stays` is already false, and a node whose chain belongs
//! to the OR family ends evaluation immediately when `stays` is already
//! true. Nested groups carry no chain and are evaluated with the current
//! `stays` as their seed.

use crate::ast::{Condition, Operand, Operator, PredicateNode};
use tabula_core::pattern_match::like;
use tabula_core::{Record, Value};

/// Evaluates a predicate tree against one record.
pub fn evaluate(record: &Record, nodes: &[PredicateNode]) -> bool {
    evaluate_seeded(record, nodes, true)
}

fn evaluate_seeded(record: &Record, nodes: &[PredicateNode], mut stays: bool) -> bool {
    for node in nodes {
        if let Some(chain) = node.chain() {
            if !stays && chain.is_conjunctive() {
                return stays;
            }
            if stays && chain.is_disjunctive() {
                return stays;
            }
        }
        match node {
            PredicateNode::Group(children) => {
                stays = evaluate_seeded(record, children, stays);
            }
            PredicateNode::Condition(cond) => {
                stays = eval_condition(record, cond);
            }
        }
    }
    stays
}

fn eval_condition(record: &Record, cond: &Condition) -> bool {
    let field = record.get_or_null(&cond.property);
    match cond.operator {
        Operator::Lt => ordered(field, &cond.operand, |o| o.is_lt()),
        Operator::Le => ordered(field, &cond.operand, |o| o.is_le()),
        Operator::Gt => ordered(field, &cond.operand, |o| o.is_gt()),
        Operator::Ge => ordered(field, &cond.operand, |o| o.is_ge()),
        Operator::Ne => match &cond.operand {
            Operand::Scalar(v) => field != v,
            // Strict inequality against a sequence always holds.
            Operand::List(_) => true,
        },
        Operator::Eq => match &cond.operand {
            Operand::Scalar(v) => field == v,
            Operand::List(_) => false,
        },
        Operator::Between => {
            // A single bound on both sides: collapses to equality under
            // the ordered comparison.
            ordered(field, &cond.operand, |o| o.is_le())
                && ordered(field, &cond.operand, |o| o.is_ge())
        }
        Operator::In => match &cond.operand {
            Operand::List(items) => items.contains(field),
            Operand::Scalar(_) => false,
        },
        Operator::Is => field.is_null(),
        Operator::IsNot => !field.is_null(),
        Operator::Like => match cond.operand.scalar() {
            Some(Value::Text(pattern)) => match field {
                Value::Text(s) => like(s, pattern),
                _ => false,
            },
            _ => false,
        },
    }
}

/// Ordered comparison of a record value against a scalar operand.
///
/// Unsatisfiable (evaluates to false) when the operand is a sequence or
/// Null, when the record value is Null, or when the two sides have
/// different runtime types.
fn ordered<F>(field: &Value, operand: &Operand, accept: F) -> bool
where
    F: Fn(core::cmp::Ordering) -> bool,
{
    let value = match operand.scalar() {
        Some(v) if !v.is_null() => v,
        _ => return false,
    };
    let ordering = match (field, value) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
        _ => None,
    };
    ordering.map(accept).unwrap_or(false)
}
