//! Group executor.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;
use tabula_core::{Record, Value};

/// Group executor - projects records down to the group keys and
/// deduplicates by key-tuple equality, keeping the first occurrence in
/// input order. All non-key fields are discarded; aggregate computation
/// beyond key deduplication is out of scope.
pub struct GroupExecutor<'a> {
    keys: &'a [String],
}

impl<'a> GroupExecutor<'a> {
    /// Creates a new group executor.
    pub fn new(keys: &'a [String]) -> Self {
        Self { keys }
    }

    /// Executes the grouping on the input records.
    pub fn execute(&self, input: Vec<Record>) -> Vec<Record> {
        let mut seen: HashSet<Vec<Value>> = HashSet::new();
        let mut output = Vec::new();
        for record in &input {
            let tuple: Vec<Value> = self
                .keys
                .iter()
                .map(|key| record.get_or_null(key).clone())
                .collect();
            if seen.insert(tuple.clone()) {
                let mut projected = Record::new();
                for (key, value) in self.keys.iter().zip(tuple) {
                    projected.set(key.clone(), value);
                }
                output.push(projected);
            }
        }
        output
    }
}
