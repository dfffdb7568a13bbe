//! Benchmarks for describing configuration types.
//!
//! Measures the full describe pipeline for:
//! - A flat type with many annotated accessor pairs
//! - A deep base chain carrying annotations on the root
//! - A batch of independent types described in parallel
//! - Cached lookups of an already described type

extern crate confscope;

use criterion::{criterion_group, criterion_main, Criterion};
use confscope::prelude::*;
use std::hint::black_box;

fn flat_config(attributes: usize) -> TypeRc {
    let mut builder = TypeBuilder::class("bench", "FlatConfig").default_constructor();
    for i in 0..attributes {
        let name = format!("Value{i}");
        let key = format!("bench.value{i}");
        builder = builder
            .method(MethodBuilder::getter(&name, TypeSignature::I8))
            .method(MethodBuilder::setter(&name, TypeSignature::I8).config(&key));
    }
    builder.build().unwrap()
}

fn deep_config(depth: usize) -> TypeRc {
    let mut current = TypeBuilder::class("bench", "Level0")
        .method(MethodBuilder::setter("Port", TypeSignature::I4).config("port"))
        .build()
        .unwrap();
    for level in 1..depth {
        current = TypeBuilder::class("bench", &format!("Level{level}"))
            .extends(current)
            .default_constructor()
            .method(MethodBuilder::setter("Port", TypeSignature::I4))
            .build()
            .unwrap();
    }
    current
}

/// Benchmark a type with 50 getter/setter pairs.
fn bench_describe_flat(c: &mut Criterion) {
    let config = flat_config(50);

    c.bench_function("describe_flat_50", |b| {
        b.iter(|| black_box(describe(black_box(&config))));
    });
}

/// Benchmark a 32 level base chain where only the root is annotated.
fn bench_describe_deep(c: &mut Criterion) {
    let config = deep_config(32);

    c.bench_function("describe_deep_32", |b| {
        b.iter(|| black_box(describe(black_box(&config))));
    });
}

/// Benchmark describing 64 types in parallel.
fn bench_describe_all(c: &mut Criterion) {
    let targets: Vec<TypeRc> = (0..64).map(|_| flat_config(10)).collect();

    c.bench_function("describe_all_64", |b| {
        b.iter(|| black_box(describe_all(black_box(&targets))));
    });
}

/// Benchmark a cache hit.
fn bench_cache_hit(c: &mut Criterion) {
    let config = flat_config(50);
    let cache = MetadataCache::new();
    cache.get_or_describe(&config);

    c.bench_function("cache_hit", |b| {
        b.iter(|| black_box(cache.get_or_describe(black_box(&config))));
    });
}

criterion_group!(
    benches,
    bench_describe_flat,
    bench_describe_deep,
    bench_describe_all,
    bench_cache_hit
);
criterion_main!(benches);
