//! Criterion benchmarks for the six drill operations at their default sizes.

use collection_drills::ops;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::HashMap;
use std::hint::black_box;

fn numbered(keys: impl Iterator<Item = u64>, offset: u64) -> HashMap<u64, String> {
    keys.map(|i| (i, format!("val{}", i + offset))).collect()
}

fn bench_lists(c: &mut Criterion) {
    c.bench_function("list_of_squares_1000", |b| {
        b.iter(|| ops::list_of_squares(black_box(1000)))
    });

    c.bench_function("reverse_sublist_200_400", |b| {
        b.iter_batched(
            || (1..=1000u64).collect::<Vec<_>>(),
            |mut items| {
                ops::reverse_sublist(&mut items, 200, 400).unwrap();
                items
            },
            BatchSize::SmallInput,
        )
    });

    let left: Vec<u64> = (1..=500).collect();
    let right: Vec<u64> = (501..=1000).collect();
    c.bench_function("merge_sorted_lists_500_500", |b| {
        b.iter(|| ops::merge_sorted_lists(black_box(&left), black_box(&right)))
    });
}

fn bench_dicts(c: &mut Criterion) {
    let left = numbered(1..=500, 0);
    let right = numbered(1..=500, 500);
    c.bench_function("merge_dicts_500", |b| {
        b.iter(|| ops::merge_dicts(black_box(&left), black_box(&right)))
    });

    let right = numbered(100..600, 500);
    c.bench_function("intersect_dicts_500", |b| {
        b.iter(|| ops::intersect_dicts(black_box(&left), black_box(&right)))
    });

    let words = ["apple", "banana", "apple", "orange", "banana", "banana"];
    c.bench_function("count_word_frequencies_6", |b| {
        b.iter(|| ops::count_word_frequencies(black_box(words)))
    });
}

criterion_group!(benches, bench_lists, bench_dicts);
criterion_main!(benches);
