//! AST module for predicates and query descriptions.

mod predicate;
mod select;

pub use predicate::{Chain, Condition, Operand, Operator, PredicateNode};
pub use select::{ProjectionKey, SelectQuery, SortDirection, SortKey};
