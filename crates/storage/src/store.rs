//! Table store for the Tabula engine.
//!
//! This module provides the `TableStore` struct: the mapping from table name
//! to its record sequence. Record order is insertion order. The store is
//! plainly owned; callers needing concurrent access must wrap it in an
//! external mutual-exclusion discipline granting exclusive access per table
//! for the duration of one operation.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use tabula_core::{Error, Record, Result};

/// Table name → ordered record sequence.
#[derive(Clone, Debug, Default)]
pub struct TableStore {
    tables: BTreeMap<String, Vec<Record>>,
}

impl TableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Creates an empty table in the store.
    pub fn create_table(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(Error::invalid_schema(format!(
                "Table already exists: {}",
                name
            )));
        }
        self.tables.insert(name, Vec::new());
        Ok(())
    }

    /// Replaces a table's records wholesale.
    pub fn replace(&mut self, name: &str, records: Vec<Record>) -> Result<()> {
        let slot = self
            .tables
            .get_mut(name)
            .ok_or_else(|| Error::table_not_found(name))?;
        *slot = records;
        Ok(())
    }

    /// Gets a table's records.
    pub fn records(&self, name: &str) -> Option<&[Record]> {
        self.tables.get(name).map(|r| r.as_slice())
    }

    /// Gets a mutable reference to a table's records.
    pub fn records_mut(&mut self, name: &str) -> Option<&mut Vec<Record>> {
        self.tables.get_mut(name)
    }

    /// Empties a table, returning the number of records removed.
    pub fn clear_table(&mut self, name: &str) -> Result<usize> {
        let records = self
            .tables
            .get_mut(name)
            .ok_or_else(|| Error::table_not_found(name))?;
        let removed = records.len();
        records.clear();
        Ok(removed)
    }

    /// Returns a table's record count.
    pub fn len(&self, name: &str) -> Option<usize> {
        self.tables.get(name).map(|r| r.len())
    }

    /// Returns true if the store holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Checks if a table exists.
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns all table names.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl FromIterator<(String, Vec<Record>)> for TableStore {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Record>)>>(iter: I) -> Self {
        let mut store = TableStore::new();
        for (name, records) in iter {
            store.tables.insert(name, records);
        }
        store
    }
}
