//! Filter executor.

use crate::ast::PredicateNode;
use crate::evaluator::evaluate;
use alloc::vec::Vec;
use tabula_core::Record;

/// Filter executor - retains records satisfying the predicate tree.
pub struct FilterExecutor<'a> {
    predicate: &'a [PredicateNode],
}

impl<'a> FilterExecutor<'a> {
    /// Creates a new filter executor.
    pub fn new(predicate: &'a [PredicateNode]) -> Self {
        Self { predicate }
    }

    /// Executes the filter on the input records.
    pub fn execute(&self, input: Vec<Record>) -> Vec<Record> {
        input
            .into_iter()
            .filter(|record| evaluate(record, self.predicate))
            .collect()
    }
}
