use criterion::{criterion_group, criterion_main, Criterion};
use merkle_frontier::Frontier;
use sha2::{Digest, Sha256};

pub fn generate_random_string() -> Vec<u8> {
    let length = 8 + (rand::random::<usize>() % 24);
    let mut value = Vec::with_capacity(length);
    for _ in 0..length {
        value.push(rand::random());
    }
    value
}

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("Frontier");

    let strings: Vec<Vec<u8>> = (0..1000).map(|_| generate_random_string()).collect();

    group.bench_function("Exclude 1000 strings", |b| {
        b.iter(|| {
            let mut frontier = Frontier::new();
            for string in &strings {
                frontier.exclude(string);
            }
            frontier
        })
    });

    let mut frontier = Frontier::new();
    for string in &strings {
        frontier.exclude(string);
    }

    group.bench_function("Check 1000 strings", |b| {
        b.iter(|| {
            for string in &strings {
                frontier.check(string);
            }
        })
    });

    group.bench_function("Merkle root of 1000 exclusions", |b| {
        b.iter(|| frontier.merkle_root(Sha256::new()))
    });

    group.finish();
}

criterion_group!(benches, bench_frontier);
criterion_main!(benches);
