//! Mutation descriptions and results.
//!
//! Like query descriptions, these are fully resolved structures built by an
//! external collaborator; the engine only applies them.

use alloc::string::String;
use alloc::vec::Vec;
use tabula_core::{Record, Value};
use tabula_query::ast::PredicateNode;

/// Insert description: one value row per record to create, with the
/// supplied columns paired positionally against each row.
#[derive(Clone, Debug)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Explicit update mechanism: overwrite the named columns with the
/// corresponding values, positionally paired by index.
#[derive(Clone, Debug)]
pub struct ExplicitAssignments {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

/// Implicit update mechanism: replace each matching stored record wholesale
/// with the replacement record whose primary-key values all match.
#[derive(Clone, Debug)]
pub struct ImplicitReplacement {
    pub primary_keys: Vec<String>,
    pub records: Vec<Record>,
}

/// Update description. At least one of `explicit`/`implicit` must be
/// supplied; when both are present both apply and their affected counts
/// accumulate (a record touched by both is counted twice).
#[derive(Clone, Debug)]
pub struct Update {
    pub table: String,
    pub predicate: Vec<PredicateNode>,
    pub explicit: Option<ExplicitAssignments>,
    pub implicit: Option<ImplicitReplacement>,
}

/// Delete description: remove every record satisfying the predicate.
#[derive(Clone, Debug)]
pub struct Delete {
    pub table: String,
    pub predicate: Vec<PredicateNode>,
}

/// Truncate description: unconditionally empty the table.
#[derive(Clone, Debug)]
pub struct Truncate {
    pub table: String,
}

/// Outcome of a mutation: how many records were touched and, for inserts,
/// the first generated identity value (the caller derives the full identity
/// range from the count and the first value).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationResult {
    pub affected: usize,
    pub first_identity: Option<u64>,
}

impl MutationResult {
    /// Result with an affected count only.
    pub fn affected(count: usize) -> Self {
        Self {
            affected: count,
            first_identity: None,
        }
    }

    /// Insert result: affected count plus the first generated identity.
    pub fn inserted(count: usize, first_identity: u64) -> Self {
        Self {
            affected: count,
            first_identity: Some(first_identity),
        }
    }
}
