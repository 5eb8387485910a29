use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_core::{ItemName, Quantity};
use stockroom_inventory::{InventoryMode, InventoryStore};

fn name(raw: &str) -> ItemName {
    raw.parse().unwrap()
}

fn seeded(size: u32) -> InventoryStore {
    InventoryStore::with_entries(
        InventoryMode::Quantity,
        (0..size).map(|i| {
            (
                name(&format!("ITEM-{i:05}")),
                Quantity::new(i % 90 + 1).unwrap(),
            )
        }),
    )
}

fn bench_mutation_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation_latency");
    group.sample_size(1000);

    // Benchmark: first add of a key into an empty store
    group.bench_function("add_fresh_key", |b| {
        let key = name("LAPTOP");
        let amount = Quantity::new(5).unwrap();
        b.iter(|| {
            let mut store = InventoryStore::new(InventoryMode::Quantity);
            store
                .add(black_box(key.clone()), black_box(amount))
                .unwrap();
        });
    });

    // Benchmark: merge-by-sum onto an existing key in a populated store
    group.bench_function("merge_existing_key", |b| {
        let mut store = seeded(1000);
        let key = name("ITEM-00500");
        b.iter(|| {
            // Overflow after ~4e9 iterations is rejected; either way the
            // full lookup-and-merge path runs.
            let _ = black_box(store.add(key.clone(), Quantity::ONE));
        });
    });

    // Benchmark: add then remove of the same key (steady-state churn)
    group.bench_function("add_then_remove", |b| {
        let mut store = seeded(1000);
        let key = name("CHURN");
        b.iter(|| {
            store.add(key.clone(), Quantity::ONE).unwrap();
            store.remove(&key).unwrap();
        });
    });

    group.finish();
}

fn bench_snapshot_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_read");

    for entry_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*entry_count as u64));
        group.bench_with_input(
            BenchmarkId::new("sorted_snapshot", entry_count),
            entry_count,
            |b, &count| {
                let store = seeded(count);
                b.iter(|| {
                    black_box(store.snapshot());
                });
            },
        );
    }

    group.finish();
}

fn bench_seed_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_construction");

    for entry_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*entry_count as u64));
        group.bench_with_input(
            BenchmarkId::new("with_entries", entry_count),
            entry_count,
            |b, &count| {
                let seed: Vec<(ItemName, Quantity)> = (0..count)
                    .map(|i| {
                        (
                            name(&format!("ITEM-{i:05}")),
                            Quantity::new(i % 90 + 1).unwrap(),
                        )
                    })
                    .collect();
                b.iter(|| {
                    black_box(InventoryStore::with_entries(
                        InventoryMode::Quantity,
                        seed.iter().cloned(),
                    ));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mutation_latency,
    bench_snapshot_read,
    bench_seed_construction
);
criterion_main!(benches);
