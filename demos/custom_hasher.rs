//! Example of implementing a custom hasher for the streaming merkle tree
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Using it with the tree
//! - Comparing the result against the stock hasher

use merkle_frontier::{Hasher, Tree};
use sha2::{Digest, Sha256};

// Custom hasher that uses SHA256 but adds a prefix to every input
#[derive(Clone)]
struct PrefixedSha256(Sha256);

impl PrefixedSha256 {
    fn new() -> Self {
        let mut hasher = Self(Sha256::new());
        Hasher::reset(&mut hasher);
        hasher
    }
}

impl Hasher<32> for PrefixedSha256 {
    fn reset(&mut self) {
        Digest::reset(&mut self.0);
        Digest::update(&mut self.0, b"custom_prefix:");
    }
    fn write(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }
    fn sum(&mut self) -> [u8; 32] {
        self.0.finalize_reset().into()
    }
}

fn main() {
    let records: [&[u8]; 3] = [b"one", b"two", b"three"];

    let mut custom_tree = Tree::new(PrefixedSha256::new());
    for record in records {
        custom_tree.add(record).unwrap();
    }
    println!(
        "Root with custom hasher:   {}",
        hex::encode(custom_tree.root())
    );

    let mut standard_tree = Tree::new(Sha256::new());
    for record in records {
        standard_tree.add(record).unwrap();
    }
    println!(
        "Root with standard SHA256: {}",
        hex::encode(standard_tree.root())
    );

    println!("\nThe roots differ because the custom hasher prefixes every input.");
}
