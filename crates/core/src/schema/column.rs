//! Column descriptor for the Tabula schema.

use crate::value::Value;
use alloc::string::String;

/// Static metadata for one column of one table.
///
/// Records are untyped containers, so a column carries no declared data
/// type: the descriptor exists for identity generation, uniqueness
/// enforcement and display aliasing.
#[derive(Clone, Debug)]
pub struct Column {
    /// Owning table name.
    table: String,
    /// Field name.
    field: String,
    /// Display alias. Defaults to the field name.
    alias: String,
    /// Whether this column is part of the primary key.
    primary: bool,
    /// Whether this column's value is engine-generated on insert.
    identity: bool,
    /// Whether values in this column must be unique.
    unique: bool,
    /// Carried default value. Descriptor metadata only: insert defaults
    /// non-identity columns to Null.
    default_value: Option<Value>,
}

impl Column {
    /// Creates a new column descriptor.
    pub fn new(table: impl Into<String>, field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            table: table.into(),
            alias: field.clone(),
            field,
            primary: false,
            identity: false,
            unique: false,
            default_value: None,
        }
    }

    /// Sets the display alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Sets whether this column is part of the primary key.
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Sets whether this column is identity-generated.
    pub fn identity(mut self, identity: bool) -> Self {
        self.identity = identity;
        self
    }

    /// Sets whether this column has unique values.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Sets the carried default value.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Returns the owning table name.
    #[inline]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the field name.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the display alias.
    #[inline]
    pub fn get_alias(&self) -> &str {
        &self.alias
    }

    /// Returns whether this column is part of the primary key.
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Returns whether this column is identity-generated.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Returns whether this column has unique values.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns whether this column participates in the composite
    /// uniqueness key.
    #[inline]
    pub fn is_keyed(&self) -> bool {
        self.primary || self.unique
    }

    /// Returns the carried default value.
    pub fn get_default_value(&self) -> Value {
        self.default_value.clone().unwrap_or(Value::Null)
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.field == other.field
    }
}
