//! Tabula Core - Core types and schema definitions for the Tabula query engine.
//!
//! This crate provides the foundational types for the Tabula in-memory engine:
//!
//! - `Value`: Runtime values a record field can hold (Null, Number, Boolean, Text, DateTime)
//! - `DataType`: Runtime type tag reported by a non-null `Value`
//! - `Record`: A dynamically shaped record keyed by column name
//! - `schema`: Schema descriptors (Column, TableSchema, SchemaBuilder, Catalog)
//! - `Error`: Error types for engine operations
//!
//! # Example
//!
//! ```rust
//! use tabula_core::{Record, Value};
//! use tabula_core::schema::SchemaBuilder;
//!
//! // Describe a table
//! let schema = SchemaBuilder::new("users")
//!     .unwrap()
//!     .add_column("Id")
//!     .unwrap()
//!     .add_column("Name")
//!     .unwrap()
//!     .add_primary_key(&["Id"], true)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert!(schema.get_column("Id").unwrap().is_identity());
//!
//! // Build a record
//! let mut record = Record::new();
//! record.set("Id", Value::Number(1.0));
//! record.set("Name", Value::Text("Alice".into()));
//!
//! assert_eq!(record.get("Name"), Some(&Value::Text("Alice".into())));
//! assert!(record.get_or_null("Email").is_null());
//! ```

#![no_std]

extern crate alloc;

mod error;
pub mod pattern_match;
mod record;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use record::Record;
pub use types::DataType;
pub use value::Value;
