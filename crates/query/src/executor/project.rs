//! Project executor.

use crate::ast::ProjectionKey;
use alloc::vec::Vec;
use tabula_core::Record;

/// Project executor - maps each record to one containing exactly the
/// non-aggregate projection keys, each renamed to its output alias.
/// Aggregate entries are silently excluded; no aggregate is computed.
pub struct ProjectExecutor<'a> {
    projection: &'a [ProjectionKey],
}

impl<'a> ProjectExecutor<'a> {
    /// Creates a new project executor.
    pub fn new(projection: &'a [ProjectionKey]) -> Self {
        Self { projection }
    }

    /// Executes the projection on the input records.
    pub fn execute(&self, input: Vec<Record>) -> Vec<Record> {
        input
            .into_iter()
            .map(|record| {
                let mut projected = Record::new();
                for entry in self.projection {
                    if entry.aggregate {
                        continue;
                    }
                    projected.set(entry.alias.clone(), record.get_or_null(&entry.key).clone());
                }
                projected
            })
            .collect()
    }
}
