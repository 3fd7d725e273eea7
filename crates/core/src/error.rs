//! Error types for the Tabula engine.

use crate::types::DataType;
use alloc::string::String;
use core::fmt;

/// Result type alias for Tabula operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Tabula engine operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A sort comparator met a value whose runtime type has no defined ordering.
    UnsupportedDataType {
        data_type: Option<DataType>,
    },
    /// The post-merge uniqueness check failed during insert.
    NonUniqueKey {
        table: String,
        key: String,
    },
    /// Truncation is disallowed by the engine configuration.
    TruncationNotPermitted {
        table: String,
    },
    /// Table not found.
    TableNotFound {
        name: String,
    },
    /// Invalid schema definition.
    InvalidSchema {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedDataType { data_type } => match data_type {
                Some(dt) => write!(f, "Unexpected data type: {:?}", dt),
                None => write!(f, "Unexpected data type: Null"),
            },
            Error::NonUniqueKey { table, key } => {
                write!(f, "Non-unique key in table {}: {:?}", table, key)
            }
            Error::TruncationNotPermitted { table } => {
                write!(f, "Truncation is not permitted on table {}", table)
            }
            Error::TableNotFound { name } => {
                write!(f, "Table not found: {}", name)
            }
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates an unsupported data type error.
    pub fn unsupported_data_type(data_type: Option<DataType>) -> Self {
        Error::UnsupportedDataType { data_type }
    }

    /// Creates a non-unique key error.
    pub fn non_unique_key(table: impl Into<String>, key: impl Into<String>) -> Self {
        Error::NonUniqueKey {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Creates a truncation-not-permitted error.
    pub fn truncation_not_permitted(table: impl Into<String>) -> Self {
        Error::TruncationNotPermitted {
            table: table.into(),
        }
    }

    /// Creates a table not found error.
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Error::TableNotFound { name: name.into() }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }
}
