use chained::hashing::{ChainedHashTable, ChainedHashTableBuilder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_table(buckets: usize, keys: &[String]) -> ChainedHashTable<String, usize> {
    let mut table = ChainedHashTableBuilder::new()
        .with_buckets(buckets)
        .build()
        .unwrap();
    for (i, key) in keys.iter().enumerate() {
        table.put(key.clone(), i);
    }
    table
}

fn bench_put(c: &mut Criterion) {
    let keys: Vec<String> = (0..1_000).map(|i| format!("key{}", i)).collect();
    let mut group = c.benchmark_group("chained_put");

    for &buckets in &[8usize, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(buckets), &buckets, |b, &buckets| {
            b.iter(|| build_table(black_box(buckets), &keys))
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let keys: Vec<String> = (0..1_000).map(|i| format!("key{}", i)).collect();
    let mut group = c.benchmark_group("chained_get");

    for &buckets in &[8usize, 64, 1024] {
        let table = build_table(buckets, &keys);
        group.bench_with_input(BenchmarkId::from_parameter(buckets), &table, |b, table| {
            b.iter(|| {
                for key in &keys {
                    black_box(table.get(key.as_str()));
                }
            })
        });
    }
    group.finish();
}

fn bench_contains_key_vs_value(c: &mut Criterion) {
    let keys: Vec<String> = (0..1_000).map(|i| format!("key{}", i)).collect();
    let table = build_table(8, &keys);

    c.bench_function("chained_contains_key", |b| {
        b.iter(|| black_box(table.contains_key(black_box("key999"))))
    });
    c.bench_function("chained_contains_value", |b| {
        b.iter(|| black_box(table.contains_value(black_box(&999))))
    });
}

criterion_group!(benches, bench_put, bench_get, bench_contains_key_vs_value);
criterion_main!(benches);
