//! Table schema definition for the Tabula engine.

use super::column::Column;
use crate::error::{Error, Result};
use crate::value::Value;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// An ordered set of column descriptors for one table.
///
/// Immutable for the lifetime of the engine instance; schema evolution is
/// out of scope.
#[derive(Clone, Debug)]
pub struct TableSchema {
    /// Table name.
    name: String,
    /// Column descriptors in declaration order.
    columns: Vec<Column>,
}

impl TableSchema {
    /// Creates a schema from pre-built columns.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Returns the table name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the columns in declaration order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Gets a column by field name.
    pub fn get_column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field() == field)
    }

    /// Returns the columns flagged primary or unique, in declaration order.
    pub fn keyed_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_keyed()).collect()
    }

    /// Returns the identity columns, in declaration order.
    pub fn identity_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_identity()).collect()
    }
}

/// Builder for creating table schemas.
pub struct SchemaBuilder {
    name: String,
    columns: Vec<Column>,
}

impl SchemaBuilder {
    /// Creates a new schema builder.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::check_naming_rules(&name)?;
        Ok(Self {
            name,
            columns: Vec::new(),
        })
    }

    /// Validates a name follows naming rules.
    fn check_naming_rules(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::invalid_schema("Name cannot be empty"));
        }
        let first = name.chars().next().unwrap();
        if !first.is_ascii_alphabetic() && first != '_' {
            return Err(Error::invalid_schema(format!(
                "Name must start with letter or underscore: {}",
                name
            )));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::invalid_schema(format!(
                "Name contains invalid characters: {}",
                name
            )));
        }
        Ok(())
    }

    /// Adds a column.
    pub fn add_column(mut self, field: impl Into<String>) -> Result<Self> {
        let field = field.into();
        Self::check_naming_rules(&field)?;
        if self.columns.iter().any(|c| c.field() == field) {
            return Err(Error::invalid_schema(format!(
                "Column already exists: {}",
                field
            )));
        }
        self.columns.push(Column::new(&self.name, field));
        Ok(self)
    }

    /// Flags the listed columns as the primary key. When a single column is
    /// listed and `identity` is true, that column becomes identity-generated.
    pub fn add_primary_key(mut self, fields: &[&str], identity: bool) -> Result<Self> {
        for field in fields {
            let col = self.find_column_mut(field)?;
            *col = col.clone().primary(true);
        }
        if identity && fields.len() == 1 {
            let col = self.find_column_mut(fields[0])?;
            *col = col.clone().identity(true);
        }
        Ok(self)
    }

    /// Flags a column as identity-generated.
    pub fn add_identity(mut self, field: &str) -> Result<Self> {
        let col = self.find_column_mut(field)?;
        *col = col.clone().identity(true);
        Ok(self)
    }

    /// Flags a column as unique.
    pub fn add_unique(mut self, field: &str) -> Result<Self> {
        let col = self.find_column_mut(field)?;
        *col = col.clone().unique(true);
        Ok(self)
    }

    /// Sets a column's display alias.
    pub fn with_alias(mut self, field: &str, alias: impl Into<String>) -> Result<Self> {
        let alias = alias.into();
        Self::check_naming_rules(&alias)?;
        let col = self.find_column_mut(field)?;
        *col = col.clone().alias(alias);
        Ok(self)
    }

    /// Sets a column's carried default value.
    pub fn with_default(mut self, field: &str, value: Value) -> Result<Self> {
        let col = self.find_column_mut(field)?;
        *col = col.clone().default_value(value);
        Ok(self)
    }

    fn find_column_mut(&mut self, field: &str) -> Result<&mut Column> {
        let name = &self.name;
        self.columns
            .iter_mut()
            .find(|c| c.field() == field)
            .ok_or_else(|| Error::invalid_schema(format!("Column not found in {}: {}", name, field)))
    }

    /// Builds the table schema.
    pub fn build(self) -> Result<TableSchema> {
        if self.columns.is_empty() {
            return Err(Error::invalid_schema(format!(
                "Table has no columns: {}",
                self.name
            )));
        }
        Ok(TableSchema {
            name: self.name,
            columns: self.columns,
        })
    }
}
