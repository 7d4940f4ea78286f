use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raw_containers::Vector;

fn push_benchmark(c: &mut Criterion) {
    c.bench_function("push 10k u64", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for i in 0..10_000u64 {
                v.push(black_box(i));
            }
            v
        })
    });

    c.bench_function("push 10k u64 reserved", |b| {
        b.iter(|| {
            let mut v = Vector::with_capacity(10_000);
            for i in 0..10_000u64 {
                v.push(black_box(i));
            }
            v
        })
    });
}

fn insert_benchmark(c: &mut Criterion) {
    c.bench_function("insert front 1k strings", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for i in 0..1_000 {
                v.insert(0, black_box(i.to_string()));
            }
            v
        })
    });
}

criterion_group!(benches, push_benchmark, insert_benchmark);
criterion_main!(benches);
