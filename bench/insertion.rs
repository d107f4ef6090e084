use criterion::{criterion_group, criterion_main, Criterion};
use merkle_frontier::{leaf_hash, HTree, Tree};
use sha2::{Digest, Sha256};

pub fn generate_random_string() -> Vec<u8> {
    let mut value = Vec::with_capacity(64);
    for _ in 0..64 {
        value.push(rand::random());
    }
    value
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Streaming insertion");

    let strings: Vec<Vec<u8>> = (0..1000).map(|_| generate_random_string()).collect();
    let mut hasher = Sha256::new();
    let leaves: Vec<[u8; 32]> = strings.iter().map(|s| leaf_hash(&mut hasher, s)).collect();

    group.bench_function("Tree 1000 strings", |b| {
        b.iter(|| {
            let mut tree = Tree::new(Sha256::new());
            for string in &strings {
                tree.add(string).unwrap();
            }
            tree.root()
        })
    });

    group.bench_function("HTree 1000 leaf hashes", |b| {
        b.iter(|| {
            let mut htree = HTree::new(Sha256::new());
            for leaf in &leaves {
                htree.add(*leaf).unwrap();
            }
            htree.root()
        })
    });

    group.bench_function("Proof tree 1000 strings", |b| {
        b.iter(|| {
            let mut tree = Tree::new_proof(Sha256::new(), &strings[500]);
            for string in &strings {
                tree.add(string).unwrap();
            }
            tree.proof().unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_insertion);
criterion_main!(benches);
