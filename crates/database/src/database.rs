//! Database - main entry point for Tabula engine operations.
//!
//! The `Database` owns the schema catalog and the table store for the
//! lifetime of the engine instance and applies query and mutation
//! descriptions against them. Every operation is synchronous, pure
//! in-memory computation; callers needing concurrent access wrap the whole
//! value in an external mutual-exclusion discipline.

use crate::config::{EngineConfig, ReplacementScan};
use crate::mutation::{Delete, Insert, MutationResult, Truncate, Update};
use alloc::string::ToString;
use alloc::vec::Vec;
use tabula_core::schema::{Catalog, TableSchema};
use tabula_core::{Error, Record, Result, Value};
use tabula_query::ast::SelectQuery;
use tabula_query::evaluator::evaluate;
use tabula_query::QueryPipeline;
use tabula_storage::{TableStore, UniquenessChecker};

/// The main engine interface.
pub struct Database {
    catalog: Catalog,
    store: TableStore,
    config: EngineConfig,
}

impl Database {
    /// Creates an engine instance with an empty record sequence for every
    /// table the catalog describes.
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        let store: TableStore = catalog
            .table_names()
            .into_iter()
            .map(|name| (name.to_string(), Vec::new()))
            .collect();
        Self {
            catalog,
            store,
            config,
        }
    }

    /// Replaces a table's records with caller-supplied initial data.
    pub fn seed(&mut self, table: &str, records: Vec<Record>) -> Result<()> {
        self.store.replace(table, records)
    }

    /// Returns the schema catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a table's current record count.
    pub fn table_len(&self, table: &str) -> Option<usize> {
        self.store.len(table)
    }

    /// Executes a query description and returns the projected records.
    pub fn select(&self, query: &SelectQuery) -> Result<Vec<Record>> {
        QueryPipeline::execute(&self.store, query)
    }

    /// Executes a query description and returns the post-pipeline
    /// cardinality.
    pub fn count(&self, query: &SelectQuery) -> Result<usize> {
        QueryPipeline::execute_count(&self.store, query)
    }

    /// Returns a table's schema, unmodified.
    pub fn describe(&self, table: &str) -> Result<&TableSchema> {
        self.catalog
            .get(table)
            .ok_or_else(|| Error::table_not_found(table))
    }

    /// Applies an insert description.
    ///
    /// Each value row is synthesized into a full record: every schema
    /// column defaults to Null except identity columns, which take the next
    /// sequential identity value (starting at the current table length + 1)
    /// regardless of any caller-supplied value. The whole batch commits
    /// only after the uniqueness check passes over the entire resulting
    /// record set; on violation nothing is applied.
    pub fn insert(&mut self, insert: &Insert) -> Result<MutationResult> {
        let schema = self
            .catalog
            .get(&insert.table)
            .ok_or_else(|| Error::table_not_found(&insert.table))?;
        let existing = self
            .store
            .records(&insert.table)
            .ok_or_else(|| Error::table_not_found(&insert.table))?;

        let start = existing.len() + 1;
        let mut new_records = Vec::with_capacity(insert.rows.len());
        for (n, row) in insert.rows.iter().enumerate() {
            let identity_value = Value::Number((start + n) as f64);
            let mut record = Record::new();
            for column in schema.columns() {
                if column.is_identity() {
                    record.set(column.field(), identity_value.clone());
                } else {
                    record.set(column.field(), Value::Null);
                }
            }
            for (column_name, value) in insert.columns.iter().zip(row) {
                let generated = schema
                    .get_column(column_name)
                    .map(|c| c.is_identity())
                    .unwrap_or(false);
                if generated {
                    record.set(column_name.clone(), identity_value.clone());
                } else {
                    record.set(column_name.clone(), value.clone());
                }
            }
            new_records.push(record);
        }

        UniquenessChecker::check_all(schema, existing.iter().chain(new_records.iter()))?;

        self.store
            .records_mut(&insert.table)
            .ok_or_else(|| Error::table_not_found(&insert.table))?
            .extend(new_records);
        Ok(MutationResult::inserted(insert.rows.len(), start as u64))
    }

    /// Applies an update description.
    ///
    /// Both mechanisms filter candidates through the predicate and both may
    /// be requested in one call: implicit replacement applies first, then
    /// explicit assignment runs over the (possibly replaced) records. The
    /// affected count accumulates across mechanisms, so a record touched by
    /// both is counted twice.
    pub fn update(&mut self, update: &Update) -> Result<MutationResult> {
        let scan = self.config.replacement_scan;
        let records = self
            .store
            .records_mut(&update.table)
            .ok_or_else(|| Error::table_not_found(&update.table))?;
        let mut affected = 0;

        if let Some(implicit) = &update.implicit {
            for stored in records.iter_mut() {
                if !evaluate(stored, &update.predicate) {
                    continue;
                }
                'candidates: for candidate in &implicit.records {
                    for pk in &implicit.primary_keys {
                        if candidate.get_or_null(pk) != stored.get_or_null(pk) {
                            match scan {
                                ReplacementScan::AbortOnFirstMismatch => break 'candidates,
                                ReplacementScan::FullScan => continue 'candidates,
                            }
                        }
                    }
                    *stored = candidate.clone();
                    affected += 1;
                    break 'candidates;
                }
            }
        }

        if let Some(explicit) = &update.explicit {
            for stored in records.iter_mut() {
                if evaluate(stored, &update.predicate) {
                    for (column, value) in explicit.columns.iter().zip(&explicit.values) {
                        stored.set(column.clone(), value.clone());
                    }
                    affected += 1;
                }
            }
        }

        Ok(MutationResult::affected(affected))
    }

    /// Applies a delete description: removes every record satisfying the
    /// predicate and reports how many were removed.
    pub fn delete(&mut self, delete: &Delete) -> Result<MutationResult> {
        let records = self
            .store
            .records_mut(&delete.table)
            .ok_or_else(|| Error::table_not_found(&delete.table))?;
        let before = records.len();
        records.retain(|record| !evaluate(record, &delete.predicate));
        Ok(MutationResult::affected(before - records.len()))
    }

    /// Applies a truncate description, subject to the configured permission
    /// gate.
    pub fn truncate(&mut self, truncate: &Truncate) -> Result<MutationResult> {
        if !self.config.allow_truncation {
            return Err(Error::truncation_not_permitted(&truncate.table));
        }
        let removed = self.store.clear_table(&truncate.table)?;
        Ok(MutationResult::affected(removed))
    }
}
