//! Tabula Database - Engine facade for the Tabula in-memory database.
//!
//! This crate ties the schema catalog, the table store and the query
//! pipeline together behind one `Database` value, and implements the
//! mutation operations (insert, update, delete, truncate, describe).
//!
//! The boundary is purely in-process: callers hand the engine fully
//! resolved query and mutation descriptions (built by an external
//! query-builder collaborator) and receive projected records or a
//! `MutationResult` back.
//!
//! # Example
//!
//! ```rust
//! use tabula_core::schema::{Catalog, SchemaBuilder};
//! use tabula_core::Value;
//! use tabula_database::{Database, EngineConfig, Insert};
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .add(
//!         SchemaBuilder::new("users")
//!             .unwrap()
//!             .add_column("Id")
//!             .unwrap()
//!             .add_column("Name")
//!             .unwrap()
//!             .add_primary_key(&["Id"], true)
//!             .unwrap()
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let mut db = Database::new(catalog, EngineConfig::default());
//! let result = db
//!     .insert(&Insert {
//!         table: "users".into(),
//!         columns: vec!["Name".into()],
//!         rows: vec![vec![Value::Text("Alice".into())]],
//!     })
//!     .unwrap();
//!
//! assert_eq!(result.affected, 1);
//! assert_eq!(result.first_identity, Some(1));
//! ```

extern crate alloc;

pub mod config;
pub mod database;
pub mod mutation;

pub use config::{EngineConfig, ReplacementScan};
pub use database::Database;
pub use mutation::{
    Delete, ExplicitAssignments, ImplicitReplacement, Insert, MutationResult, Truncate, Update,
};
