//! Tabula Storage - Table store for the Tabula in-memory query engine.
//!
//! This crate provides the mutable in-memory state of the engine:
//!
//! - `TableStore`: table name → ordered record sequence
//! - `UniquenessChecker`: composite-key uniqueness validation for insert
//!
//! # Example
//!
//! ```rust
//! use tabula_storage::TableStore;
//! use tabula_core::{Record, Value};
//!
//! let mut store = TableStore::new();
//! store.create_table("users").unwrap();
//!
//! let mut record = Record::new();
//! record.set("Id", Value::Number(1.0));
//! store.records_mut("users").unwrap().push(record);
//!
//! assert_eq!(store.len("users"), Some(1));
//! ```

#![no_std]

extern crate alloc;

pub mod constraint;
pub mod store;

pub use constraint::UniquenessChecker;
pub use store::TableStore;
