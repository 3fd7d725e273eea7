//! Query description types.
//!
//! A `SelectQuery` is a fully resolved description handed to the engine by
//! an external query-builder collaborator: the engine never parses or plans,
//! it only executes.

use super::predicate::PredicateNode;
use alloc::string::String;
use alloc::vec::Vec;

/// Sort direction for one sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One sort key: the record key to order by and the direction.
#[derive(Clone, Debug, PartialEq)]
pub struct SortKey {
    pub key: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// Ascending sort key.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort key.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// One projection entry: the record key to read and the output alias to
/// write. Aggregate entries are dropped at projection time; this engine
/// computes no aggregates.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionKey {
    pub key: String,
    pub alias: String,
    pub aggregate: bool,
}

impl ProjectionKey {
    /// Plain column projection; the output alias is the key itself.
    pub fn column(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            alias: key.clone(),
            key,
            aggregate: false,
        }
    }

    /// Column projection renamed to an output alias.
    pub fn aliased(key: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alias: alias.into(),
            aggregate: false,
        }
    }

    /// Aggregate projection entry (excluded from the output).
    pub fn aggregate(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            alias: key.clone(),
            key,
            aggregate: true,
        }
    }
}

/// A fully resolved query description.
#[derive(Clone, Debug, Default)]
pub struct SelectQuery {
    /// Source table name.
    pub table: String,
    /// Predicate tree; an empty sequence retains every record.
    pub predicate: Vec<PredicateNode>,
    /// Group keys; deduplicates to distinct key tuples when present.
    pub group_by: Option<Vec<String>>,
    /// Sort keys, applied as sequential stable sorts.
    pub order_by: Option<Vec<SortKey>>,
    /// Pagination bounds.
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    /// Projection list.
    pub projection: Vec<ProjectionKey>,
}

impl SelectQuery {
    /// Creates a query over a source table with no predicate, grouping,
    /// ordering, pagination, or projection.
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_constructors() {
        let key = SortKey::asc("Mileage");
        assert_eq!(key.key, "Mileage");
        assert_eq!(key.direction, SortDirection::Asc);

        let key = SortKey::desc("Year");
        assert_eq!(key.direction, SortDirection::Desc);
    }

    #[test]
    fn test_projection_key_constructors() {
        let col = ProjectionKey::column("Model");
        assert_eq!(col.key, "Model");
        assert_eq!(col.alias, "Model");
        assert!(!col.aggregate);

        let renamed = ProjectionKey::aliased("Model", "CarModel");
        assert_eq!(renamed.alias, "CarModel");

        assert!(ProjectionKey::aggregate("Mileage").aggregate);
    }

    #[test]
    fn test_select_query_defaults() {
        let query = SelectQuery::from_table("Car");
        assert_eq!(query.table, "Car");
        assert!(query.predicate.is_empty());
        assert!(query.group_by.is_none());
        assert!(query.order_by.is_none());
        assert!(query.limit.is_none());
        assert!(query.offset.is_none());
    }
}
