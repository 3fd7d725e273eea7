//! Uniqueness constraint checking for the Tabula engine.
//!
//! The uniqueness key of a record is the ordered tuple of every column
//! flagged primary-or-unique, rendered and joined into one composite string.
//! Two records collide when their composite keys are equal. A schema with no
//! keyed columns gives every record the empty composite key, so any set of
//! two or more records collides.

use alloc::string::{String, ToString};
use hashbrown::HashSet;
use tabula_core::schema::{Column, TableSchema};
use tabula_core::{Error, Record, Result};

/// Composite-key uniqueness validation.
pub struct UniquenessChecker;

impl UniquenessChecker {
    /// Builds a record's composite uniqueness key over the given columns.
    ///
    /// Values render through `Value`'s display form: Null as the empty
    /// string, whole numbers without a fraction. Components are joined
    /// with `'_'`.
    pub fn composite_key(record: &Record, columns: &[&Column]) -> String {
        let mut key = String::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                key.push('_');
            }
            key.push_str(&record.get_or_null(col.field()).to_string());
        }
        key
    }

    /// Verifies uniqueness across an entire record set.
    ///
    /// Walks the records in order and fails on the first composite-key
    /// duplicate. The caller passes the full post-merge set (existing
    /// records followed by new ones) so the check sees one consistent
    /// snapshot.
    pub fn check_all<'a, I>(schema: &TableSchema, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let keyed = schema.keyed_columns();
        let mut seen: HashSet<String> = HashSet::new();
        for record in records {
            let key = Self::composite_key(record, &keyed);
            if !seen.insert(key.clone()) {
                return Err(Error::non_unique_key(schema.name(), key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use tabula_core::schema::SchemaBuilder;
    use tabula_core::Value;

    fn car_schema() -> TableSchema {
        SchemaBuilder::new("Car")
            .unwrap()
            .add_column("Id")
            .unwrap()
            .add_column("Vin")
            .unwrap()
            .add_column("Make")
            .unwrap()
            .add_primary_key(&["Id"], true)
            .unwrap()
            .add_unique("Vin")
            .unwrap()
            .build()
            .unwrap()
    }

    fn car(id: f64, vin: &str, make: &str) -> Record {
        let mut r = Record::new();
        r.set("Id", Value::Number(id));
        r.set("Vin", vin);
        r.set("Make", make);
        r
    }

    #[test]
    fn test_composite_key_joins_keyed_columns() {
        let schema = car_schema();
        let record = car(1.0, "VIN123", "Ford");
        let keyed = schema.keyed_columns();
        assert_eq!(UniquenessChecker::composite_key(&record, &keyed), "1_VIN123");
    }

    #[test]
    fn test_composite_key_null_renders_empty() {
        let schema = car_schema();
        let mut record = Record::new();
        record.set("Id", Value::Number(2.0));
        let keyed = schema.keyed_columns();
        assert_eq!(UniquenessChecker::composite_key(&record, &keyed), "2_");
    }

    #[test]
    fn test_check_all_passes_on_distinct_keys() {
        let schema = car_schema();
        let records = vec![car(1.0, "A", "Ford"), car(2.0, "B", "Ford")];
        assert!(UniquenessChecker::check_all(&schema, &records).is_ok());
    }

    #[test]
    fn test_check_all_detects_collision() {
        let schema = car_schema();
        let records = vec![car(1.0, "A", "Ford"), car(1.0, "A", "Chevy")];
        let err = UniquenessChecker::check_all(&schema, &records).unwrap_err();
        match err {
            Error::NonUniqueKey { table, key } => {
                assert_eq!(table, "Car");
                assert_eq!(key, "1_A");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_check_all_without_keyed_columns_collides() {
        // No primary/unique columns: every record has the empty composite
        // key, so a second record always collides.
        let schema = SchemaBuilder::new("Log")
            .unwrap()
            .add_column("Message")
            .unwrap()
            .build()
            .unwrap();
        let a: Record = [("Message", Value::Text("x".into()))].into_iter().collect();
        let b: Record = [("Message", Value::Text("y".into()))].into_iter().collect();

        assert!(UniquenessChecker::check_all(&schema, &[a.clone()]).is_ok());
        let records: Vec<Record> = vec![a, b];
        assert!(UniquenessChecker::check_all(&schema, &records).is_err());
    }
}
