//! Benchmarks for the three weighted distance variants.
//!
//! Tests various scenarios:
//! - String length variations (short, medium, long)
//! - Similarity patterns (identical, similar, different)
//! - Transposition-heavy inputs
//! - Unit vs. weighted cost models

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use weighted_levenshtein::prelude::*;

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        ("empty", "", ""),
        ("short_identical", "test", "test"),
        ("short_1edit", "test", "best"),
        ("short_different", "abc", "xyz"),
        ("medium_identical", "programming", "programming"),
        ("medium_similar", "programming", "programing"),
        ("medium_different", "completely", "different"),
        (
            "long_similar",
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumped over the lazy dog",
        ),
        (
            "long_different",
            "Pack my box with five dozen liquor jugs",
            "How vexingly quick daft zebras jump",
        ),
        ("transposition_simple", "ab", "ba"),
        ("transposition_word", "test", "tset"),
        ("transposition_separated", "ca", "abc"),
    ]
}

fn weighted_model() -> CostModel<char> {
    CostModel::builder()
        .substitute_cost('n', 'm', 0.25)
        .substitute_cost('e', 'a', 0.5)
        .insert_cost(' ', 0.1)
        .delete_cost(' ', 0.1)
        .transpose_cost('t', 's', 0.5)
        .build()
        .expect("valid benchmark model")
}

fn bench_unit_costs(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_costs");

    for (name, source, target) in generate_test_pairs() {
        let bytes = (source.len() + target.len()) as u64;
        group.throughput(Throughput::Bytes(bytes));

        group.bench_with_input(
            BenchmarkId::new("levenshtein", name),
            &(source, target),
            |b, (s, t)| b.iter(|| levenshtein_str(black_box(s), black_box(t))),
        );
        group.bench_with_input(
            BenchmarkId::new("osa", name),
            &(source, target),
            |b, (s, t)| b.iter(|| optimal_string_alignment_str(black_box(s), black_box(t))),
        );
        group.bench_with_input(
            BenchmarkId::new("damerau", name),
            &(source, target),
            |b, (s, t)| b.iter(|| damerau_levenshtein_str(black_box(s), black_box(t))),
        );
    }

    group.finish();
}

fn bench_weighted_costs(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_costs");
    let costs = weighted_model();

    for (name, source, target) in generate_test_pairs() {
        let a: Vec<char> = source.chars().collect();
        let b: Vec<char> = target.chars().collect();

        group.bench_with_input(
            BenchmarkId::new("levenshtein", name),
            &(a.clone(), b.clone()),
            |bench, (a, b)| bench.iter(|| levenshtein(black_box(a), black_box(b), &costs)),
        );
        group.bench_with_input(
            BenchmarkId::new("osa", name),
            &(a.clone(), b.clone()),
            |bench, (a, b)| {
                bench.iter(|| optimal_string_alignment(black_box(a), black_box(b), &costs))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("damerau", name),
            &(a, b),
            |bench, (a, b)| bench.iter(|| damerau_levenshtein(black_box(a), black_box(b), &costs)),
        );
    }

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let unit: CostModel<char> = CostModel::default();

    for len in [16usize, 64, 256] {
        let a: Vec<char> = "abcde".chars().cycle().take(len).collect();
        let b: Vec<char> = "edcba".chars().cycle().take(len).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("levenshtein", len), &len, |bench, _| {
            bench.iter(|| levenshtein(black_box(&a), black_box(&b), &unit))
        });
        group.bench_with_input(BenchmarkId::new("damerau", len), &len, |bench, _| {
            bench.iter(|| damerau_levenshtein(black_box(&a), black_box(&b), &unit))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unit_costs, bench_weighted_costs, bench_scaling);
criterion_main!(benches);
