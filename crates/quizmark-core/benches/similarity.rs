use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizmark_core::similarity::similarity;
use quizmark_core::verifier::verify;

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    group.bench_function("short", |b| {
        b.iter(|| similarity(black_box("irak"), black_box("iraq")))
    });

    group.bench_function("phrase", |b| {
        b.iter(|| {
            similarity(
                black_box("guerra del golfo persico"),
                black_box("guerra del golfo pérsico"),
            )
        })
    });

    let long_a = "the armistice was signed at panmunjom in july 1953 ".repeat(20);
    let long_b = "an armistice was signed in panmunjom during july of 1953 ".repeat(20);
    group.bench_function("paragraph", |b| {
        b.iter(|| similarity(black_box(&long_a), black_box(&long_b)))
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    c.bench_function("verify/normalized", |b| {
        b.iter(|| verify(black_box("  Operation DESERT Storm "), black_box("Operation Desert Storm")))
    });
}

criterion_group!(benches, bench_similarity, bench_verify);
criterion_main!(benches);
