//! Schema definitions for the Tabula engine.

mod catalog;
mod column;
mod table;

pub use catalog::Catalog;
pub use column::Column;
pub use table::{SchemaBuilder, TableSchema};
