//! Known-answer root vectors.

use hex_literal::hex;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

use crate::Tree;

#[test]
fn test_sha3_256_roots() {
    let cases: [(&[&[u8]], [u8; 32]); 8] = [
        (
            &[],
            hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
        ),
        (
            &[&[1]],
            hex!("76ab70dc46775b641a8e71507b07145aed11ae5efc0baa94ac06876af2b3bf5c"),
        ),
        (
            &[&[1], &[2]],
            hex!("1dad5e07e988e0e446e2cce0b77d2ea44a1801efea272d2e2bc374037a5bc1a8"),
        ),
        (
            &[&[1], &[2], &[3]],
            hex!("4f554b3aea550c2f7a86917c8c02a0ee842a813fadec1f4c87569cff27bccd14"),
        ),
        (
            &[&[1], &[2], &[3], &[4]],
            hex!("c39898712f54df7e2ace99e3829c100c1aaff45c65312a674ba9e24b37c46bf4"),
        ),
        (
            &[&[1], &[2], &[3], &[4], &[5]],
            hex!("49b61513bcc94c883a410c372f7dfa93456aed3c3c23223b0e5962bc44954c92"),
        ),
        (
            &[&[1], &[2], &[3], &[4], &[5], &[6]],
            hex!("61811c47bfd7e41e52cd7421ec9b4d39ceac28fabdfc6a45f74eb36e173fd1b2"),
        ),
        (
            &[&[1], &[2], &[3], &[4], &[5], &[6], &[7]],
            hex!("dd2545905846f83c3265ca731c2789235f349ac2c3a2b3ab07fcd3cffb498b0d"),
        ),
    ];

    for (input, want) in cases {
        let mut tree = Tree::new(Sha3_256::new());
        for leaf in input {
            tree.add(leaf).unwrap();
        }
        assert_eq!(
            tree.root(),
            want,
            "root mismatch for {} one-byte leaves",
            input.len()
        );
    }
}

#[test]
fn test_sha256_empty_root() {
    let mut tree = Tree::new(Sha256::new());
    assert_eq!(
        tree.root(),
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
}

#[test]
fn test_root_depends_only_on_insertion_order() {
    let inputs: [&[u8]; 4] = [b"w", b"x", b"y", b"z"];

    let mut first = Tree::new(Sha256::new());
    let mut second = Tree::new(Sha256::new());
    for input in inputs {
        first.add(input).unwrap();
        second.add(input).unwrap();
    }
    assert_eq!(first.root(), second.root());

    let mut reordered = Tree::new(Sha256::new());
    for input in inputs.iter().rev() {
        reordered.add(input).unwrap();
    }
    assert_ne!(first.root(), reordered.root());
}
