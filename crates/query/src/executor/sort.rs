//! Sort executor.

use crate::ast::{SortDirection, SortKey};
use alloc::vec::Vec;
use core::cmp::Ordering;
use tabula_core::{Error, Record, Result, Value};

/// Sort executor - applies one stable sort per listed key, in the order the
/// keys are listed. Each subsequent key re-sorts the previously sorted
/// sequence, so the last listed key is the primary order and earlier keys
/// survive only as ties.
pub struct SortExecutor<'a> {
    keys: &'a [SortKey],
}

impl<'a> SortExecutor<'a> {
    /// Creates a new sort executor.
    pub fn new(keys: &'a [SortKey]) -> Self {
        Self { keys }
    }

    /// Executes the sort on the input records.
    ///
    /// A comparator meeting a value with no defined ordering (Null, or a
    /// mixed-type pair) fails the whole sort with UnsupportedDataType.
    pub fn execute(&self, mut input: Vec<Record>) -> Result<Vec<Record>> {
        for sort_key in self.keys {
            let mut failure: Option<Error> = None;
            input.sort_by(|a, b| {
                // Descending order swaps the operands, it does not negate
                // the comparator result.
                let (x, y) = match sort_key.direction {
                    SortDirection::Asc => (a, b),
                    SortDirection::Desc => (b, a),
                };
                match compare_sort_values(
                    x.get_or_null(&sort_key.key),
                    y.get_or_null(&sort_key.key),
                ) {
                    Ok(ordering) => ordering,
                    Err(err) => {
                        failure.get_or_insert(err);
                        Ordering::Equal
                    }
                }
            });
            if let Some(err) = failure {
                return Err(err);
            }
        }
        Ok(input)
    }
}

/// Type-directed comparison for the sort stage.
fn compare_sort_values(a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(x.partial_cmp(y).unwrap_or(Ordering::Equal)),
        (Value::Boolean(x), Value::Boolean(y)) => Ok(x.cmp(y)),
        (Value::Text(x), Value::Text(y)) => Ok(x.cmp(y)),
        (Value::DateTime(x), Value::DateTime(y)) => Ok(x.cmp(y)),
        (a, b) => {
            if a.is_null() || b.is_null() {
                Err(Error::unsupported_data_type(None))
            } else {
                Err(Error::unsupported_data_type(a.data_type()))
            }
        }
    }
}
