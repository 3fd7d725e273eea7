//! Predicate tree definitions for query filtering.

use alloc::string::String;
use alloc::vec::Vec;
use tabula_core::Value;

/// Comparison operator of a predicate leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Lt,
    Le,
    Gt,
    Ge,
    Ne,
    Eq,
    Between,
    In,
    Is,
    IsNot,
    Like,
}

/// Logical connective linking a node to the running evaluation result.
///
/// The NOT variants only affect which chain family the node belongs to;
/// they never negate the comparison itself; negation is the query
/// builder's concern, upstream of this engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chain {
    Where,
    WhereNot,
    And,
    AndNot,
    Or,
    OrNot,
}

impl Chain {
    /// Returns true for the AND family (WHERE, WHERE NOT, AND, AND NOT).
    #[inline]
    pub fn is_conjunctive(&self) -> bool {
        matches!(self, Chain::Where | Chain::WhereNot | Chain::And | Chain::AndNot)
    }

    /// Returns true for the OR family (OR, OR NOT).
    #[inline]
    pub fn is_disjunctive(&self) -> bool {
        matches!(self, Chain::Or | Chain::OrNot)
    }
}

/// The comparison value of a predicate leaf: a scalar, or a sequence
/// (IN needs one).
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Scalar(Value),
    List(Vec<Value>),
}

impl Operand {
    /// Returns the scalar value, or None for a list operand.
    pub fn scalar(&self) -> Option<&Value> {
        match self {
            Operand::Scalar(v) => Some(v),
            Operand::List(_) => None,
        }
    }

    /// Returns the list items, or None for a scalar operand.
    pub fn list(&self) -> Option<&[Value]> {
        match self {
            Operand::Scalar(_) => None,
            Operand::List(items) => Some(items),
        }
    }

    /// Null scalar operand.
    pub fn null() -> Self {
        Operand::Scalar(Value::Null)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Scalar(v)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Operand::Scalar(v.into())
    }
}

impl From<Vec<Value>> for Operand {
    fn from(items: Vec<Value>) -> Self {
        Operand::List(items)
    }
}

/// A leaf comparison: `record[property] <operator> operand`, combined with
/// the running result according to `chain`.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub property: String,
    pub operator: Operator,
    pub operand: Operand,
    pub chain: Chain,
}

impl Condition {
    /// Creates a condition.
    pub fn new(
        property: impl Into<String>,
        operator: Operator,
        operand: impl Into<Operand>,
        chain: Chain,
    ) -> Self {
        Self {
            property: property.into(),
            operator,
            operand: operand.into(),
            chain,
        }
    }
}

/// One node of a predicate tree: a leaf comparison, or a nested group.
///
/// A group is a bare ordered sequence of nodes: it carries no chain of its
/// own and is evaluated with the running result as its seed.
#[derive(Clone, Debug, PartialEq)]
pub enum PredicateNode {
    Condition(Condition),
    Group(Vec<PredicateNode>),
}

impl PredicateNode {
    /// Creates a leaf node.
    pub fn condition(
        property: impl Into<String>,
        operator: Operator,
        operand: impl Into<Operand>,
        chain: Chain,
    ) -> Self {
        PredicateNode::Condition(Condition::new(property, operator, operand, chain))
    }

    /// Creates a nested group node.
    pub fn group(nodes: Vec<PredicateNode>) -> Self {
        PredicateNode::Group(nodes)
    }

    /// Returns the node's chain, or None for a group.
    pub fn chain(&self) -> Option<Chain> {
        match self {
            PredicateNode::Condition(c) => Some(c.chain),
            PredicateNode::Group(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_chain_families() {
        assert!(Chain::Where.is_conjunctive());
        assert!(Chain::WhereNot.is_conjunctive());
        assert!(Chain::And.is_conjunctive());
        assert!(Chain::AndNot.is_conjunctive());
        assert!(!Chain::Or.is_conjunctive());

        assert!(Chain::Or.is_disjunctive());
        assert!(Chain::OrNot.is_disjunctive());
        assert!(!Chain::And.is_disjunctive());
    }

    #[test]
    fn test_operand_conversions() {
        let scalar: Operand = Value::Number(5.0).into();
        assert_eq!(scalar.scalar(), Some(&Value::Number(5.0)));
        assert!(scalar.list().is_none());

        let list: Operand = vec![Value::Number(1.0), Value::Number(2.0)].into();
        assert_eq!(list.list().map(|l| l.len()), Some(2));
        assert!(list.scalar().is_none());
    }

    #[test]
    fn test_group_has_no_chain() {
        let leaf = PredicateNode::condition("Make", Operator::Eq, "Ford", Chain::Where);
        assert_eq!(leaf.chain(), Some(Chain::Where));

        let group = PredicateNode::group(vec![leaf]);
        assert_eq!(group.chain(), None);
    }
}
