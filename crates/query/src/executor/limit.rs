//! Limit executor.

use alloc::vec::Vec;
use tabula_core::Record;

/// Limit executor - applies the pagination window to a record sequence.
///
/// With both offset and limit the window is `[offset, offset + limit)`;
/// with only offset, `[offset, end)`; with only limit, `[0, limit)`;
/// with neither, the whole sequence.
pub struct LimitExecutor {
    limit: Option<usize>,
    offset: Option<usize>,
}

impl LimitExecutor {
    /// Creates a new limit executor.
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self { limit, offset }
    }

    /// Executes the pagination window on the input records.
    pub fn execute(&self, mut input: Vec<Record>) -> Vec<Record> {
        let len = input.len();
        let start = self.offset.unwrap_or(0).min(len);
        let end = match self.limit {
            Some(limit) => (start + limit).min(len),
            None => len,
        };

        input.truncate(end);
        if start > 0 {
            input.drain(..start);
        }
        input
    }
}
