//! This bench test measures the linear searches, the name sort, and a
//! save/load cycle over a large collection of customers.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use customers::{Customer, domain::collection, storage};
use tempfile::TempDir;

const CUSTOMERS: i64 = 10_000;

/// Generates customers with ten purchases each and names in reverse order.
fn preseed() -> Vec<Customer> {
    (1..=CUSTOMERS)
        .map(|id| {
            let kind = if id % 3 == 0 { "Regular" } else { "New" };
            let purchases = (0..10).map(|n| id * 10 + n);
            Customer::new(id, "Mx", format!("Customer {:05}", CUSTOMERS - id), kind, 10, purchases)
        })
        .collect()
}

fn search(c: &mut Criterion) {
    let customers = preseed();

    c.bench_function("find by id (last)", |b| {
        b.iter(|| collection::find_by_id(&customers, CUSTOMERS));
    });

    c.bench_function("find by purchase (last)", |b| {
        b.iter(|| collection::find_by_purchase(&customers, CUSTOMERS * 10 + 9));
    });

    c.bench_function("filter by type", |b| {
        b.iter(|| collection::filter_by_type(&customers, "Regular").len());
    });

    c.bench_function("sort by name", |b| {
        b.iter_batched(
            || customers.clone(),
            |mut customers| collection::sort_by_name(&mut customers),
            BatchSize::LargeInput,
        );
    });
}

fn persistence(c: &mut Criterion) {
    let customers = preseed();
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("customers.txt");

    c.bench_function("save and load", |b| {
        b.iter(|| {
            storage::save(&path, &customers).unwrap();
            storage::load(&path).unwrap()
        });
    });
}

criterion_group!(benches, search, persistence);
criterion_main!(benches);
