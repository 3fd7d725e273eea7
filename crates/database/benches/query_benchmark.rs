//! Benchmarks for engine query execution.
//!
//! Run with: cargo bench -p tabula-database

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabula_core::schema::{Catalog, SchemaBuilder};
use tabula_core::{Record, Value};
use tabula_database::{Database, EngineConfig, Insert};
use tabula_query::ast::{Chain, Operator, PredicateNode, ProjectionKey, SelectQuery, SortKey};

fn test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add(
            SchemaBuilder::new("users")
                .unwrap()
                .add_column("Id")
                .unwrap()
                .add_column("Name")
                .unwrap()
                .add_column("Age")
                .unwrap()
                .add_column("Department")
                .unwrap()
                .add_primary_key(&["Id"], true)
                .unwrap()
                .build()
                .unwrap(),
        )
        .unwrap();
    catalog
}

fn seeded_database(count: usize) -> Database {
    let departments = ["Engineering", "Sales", "Marketing", "HR", "Finance"];
    let mut db = Database::new(test_catalog(), EngineConfig::default());
    let records: Vec<Record> = (0..count)
        .map(|i| {
            [
                ("Id", Value::Number((i + 1) as f64)),
                ("Name", Value::Text(format!("User {}", i + 1))),
                ("Age", Value::Number((20 + i % 50) as f64)),
                (
                    "Department",
                    Value::Text(departments[i % departments.len()].into()),
                ),
            ]
            .into_iter()
            .collect()
        })
        .collect();
    db.seed("users", records).unwrap();
    db
}

fn filter_sort_query() -> SelectQuery {
    let mut query = SelectQuery::from_table("users");
    query.predicate = vec![PredicateNode::condition(
        "Department",
        Operator::Eq,
        "Engineering",
        Chain::Where,
    )];
    query.order_by = Some(vec![SortKey::asc("Age")]);
    query.projection = vec![ProjectionKey::column("Name"), ProjectionKey::column("Age")];
    query
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    for size in [100usize, 1_000, 10_000] {
        let db = seeded_database(size);
        let query = filter_sort_query();
        group.bench_with_input(BenchmarkId::new("filter_sort_project", size), &db, |b, db| {
            b.iter(|| black_box(db.select(black_box(&query)).unwrap()));
        });
    }
    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let db = seeded_database(10_000);
    let query = filter_sort_query();
    c.bench_function("count_10k", |b| {
        b.iter(|| black_box(db.count(black_box(&query)).unwrap()));
    });
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_100", |b| {
        b.iter(|| {
            let mut db = seeded_database(0);
            for i in 0..100 {
                db.insert(&Insert {
                    table: "users".into(),
                    columns: vec!["Name".into()],
                    rows: vec![vec![Value::Text(format!("User {}", i))]],
                })
                .unwrap();
            }
            black_box(db.table_len("users"))
        });
    });
}

criterion_group!(benches, bench_select, bench_count, bench_insert);
criterion_main!(benches);
