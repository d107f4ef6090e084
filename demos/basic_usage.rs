//! Basic usage of the streaming merkle tree and the frontier
//!
//! This example demonstrates:
//! - Building a merkle root from a sequence of strings
//! - Recording and verifying an inclusion proof
//! - Committing to a set exclusion with a frontier

use merkle_frontier::{Frontier, Tree};
use sha2::{Digest, Sha256};

fn main() {
    let records: [&[u8]; 4] = [b"alpha", b"bravo", b"charlie", b"delta"];

    // Build the root for the whole sequence.
    let mut tree = Tree::new(Sha256::new());
    for record in records {
        tree.add(record).unwrap();
    }
    let root = tree.root();
    println!("Merkle root: {}", hex::encode(root));

    // Build the same sequence again, this time recording a proof that
    // "charlie" is one of the leaves.
    let mut proving = Tree::new_proof(Sha256::new(), b"charlie");
    for record in records {
        proving.add(record).unwrap();
    }
    let proof = proving.proof().unwrap();
    println!("Proof steps: {}", proof.steps().len());

    // A verifier holding only the root and the proof checks membership.
    proving_check(&proof, root);

    // Commit to everything excluded from a set.
    let mut frontier = Frontier::new();
    frontier.exclude(b"charlie");
    frontier.exclude(b"delta");
    let (prefix, excluded) = frontier.check(b"charlie's extension");
    println!(
        "excluded: {} (stored prefix: {:?})",
        excluded,
        String::from_utf8_lossy(prefix)
    );
    println!(
        "Frontier root: {}",
        hex::encode(frontier.merkle_root(Sha256::new()))
    );
}

fn proving_check(proof: &merkle_frontier::Proof<32>, root: [u8; 32]) {
    match proof.verify(&mut Sha256::new(), b"charlie", root) {
        Ok(()) => println!("proof verifies"),
        Err(err) => println!("proof rejected: {:?}", err),
    }
}
