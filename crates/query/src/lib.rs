//! Tabula Query - Query pipeline for the Tabula in-memory engine.
//!
//! This crate provides query execution over a table's record sequence:
//!
//! - `ast`: Predicate tree and query description types
//! - `evaluator`: Short-circuit predicate evaluation
//! - `executor`: Stage executors (filter, group, sort, limit, project)
//! - `pipeline`: The filter → group → sort → paginate → project runner

#![no_std]

extern crate alloc;

pub mod ast;
pub mod evaluator;
pub mod executor;
pub mod pipeline;

pub use pipeline::{DataSource, QueryPipeline};
