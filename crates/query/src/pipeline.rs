//! Query pipeline runner.
//!
//! Orchestrates filter → group → sort → paginate → project over one table's
//! record sequence. The pipeline reads through the `DataSource` seam and
//! returns freshly built records, never aliases into stored state.

use crate::ast::SelectQuery;
use crate::executor::{FilterExecutor, GroupExecutor, LimitExecutor, ProjectExecutor, SortExecutor};
use alloc::vec::Vec;
use tabula_core::{Error, Record, Result};
use tabula_storage::TableStore;

/// Read access to table record sequences.
pub trait DataSource {
    /// Gets a table's records, or None if the table is unknown.
    fn table(&self, name: &str) -> Option<&[Record]>;
}

impl DataSource for TableStore {
    fn table(&self, name: &str) -> Option<&[Record]> {
        self.records(name)
    }
}

/// The query pipeline.
pub struct QueryPipeline;

impl QueryPipeline {
    /// Executes a query description against a data source.
    pub fn execute<S: DataSource>(source: &S, query: &SelectQuery) -> Result<Vec<Record>> {
        let records = source
            .table(&query.table)
            .ok_or_else(|| Error::table_not_found(&query.table))?
            .to_vec();

        let mut results = FilterExecutor::new(&query.predicate).execute(records);

        if let Some(keys) = &query.group_by {
            results = GroupExecutor::new(keys).execute(results);
        }

        if let Some(keys) = &query.order_by {
            results = SortExecutor::new(keys).execute(results)?;
        }

        results = LimitExecutor::new(query.limit, query.offset).execute(results);

        Ok(ProjectExecutor::new(&query.projection).execute(results))
    }

    /// Executes a query and returns the post-pipeline cardinality.
    ///
    /// Count is defined as the size of the result the query would otherwise
    /// produce: the full pipeline runs, including pagination.
    pub fn execute_count<S: DataSource>(source: &S, query: &SelectQuery) -> Result<usize> {
        Ok(Self::execute(source, query)?.len())
    }
}
