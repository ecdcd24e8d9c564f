use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use implicit_treap::Treap;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: usize = 10_000;

fn workload(seed: u64) -> Vec<(isize, i64)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..N)
        .map(|i| (rng.random_range(0..=i as i64) as isize, rng.random_range(0..100)))
        .collect()
}

fn criterion_insert(c: &mut Criterion) {
    let ops = workload(1);
    c.bench_function("treap random insert", |b| {
        b.iter(|| {
            let mut t = Treap::with_seed(2);
            for &(index, value) in &ops {
                t.insert(index, value);
            }
            black_box(t.size())
        })
    });
    c.bench_function("vec random insert", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(N);
            for &(index, value) in &ops {
                let index = (index as usize).min(v.len());
                v.insert(index, value);
            }
            black_box(v.len())
        })
    });
}

fn criterion_split_merge(c: &mut Criterion) {
    let values: Vec<i64> = (0..N as i64).collect();
    c.bench_function("treap split + merge", |b| {
        b.iter_batched(
            || Treap::from_values(&values),
            |t| {
                let (l, r) = t.split(black_box(N as isize / 2));
                l.merge(r)
            },
            BatchSize::SmallInput,
        )
    });
}

fn criterion_find_export(c: &mut Criterion) {
    let t: Treap<i64> = (0..N as i64).collect();
    c.bench_function("treap find", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 7919) % N as isize;
            black_box(t.find(i))
        })
    });
    c.bench_function("treap export", |b| b.iter(|| black_box(t.export())));
}

fn criterion_benchmark(c: &mut Criterion) {
    criterion_insert(c);
    criterion_split_merge(c);
    criterion_find_export(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
