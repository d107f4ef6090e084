//! Hash abstraction and the domain-separated node hashing primitives

use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// Incremental, resettable hash required to hash the nodes in a tree.
///
/// `sum` finalises the running hash. It may leave the internal state
/// unspecified; callers reset before the next use.
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn reset(&mut self);
    fn write(&mut self, data: &[u8]);
    fn sum(&mut self) -> [u8; HASH_SIZE];
    fn size(&self) -> usize {
        HASH_SIZE
    }
}

impl Hasher<32> for Sha256 {
    fn reset(&mut self) {
        Digest::reset(self);
    }
    fn write(&mut self, data: &[u8]) {
        Digest::update(self, data);
    }
    fn sum(&mut self) -> [u8; 32] {
        self.finalize_reset().into()
    }
}

impl Hasher<32> for Sha3_256 {
    fn reset(&mut self) {
        Digest::reset(self);
    }
    fn write(&mut self, data: &[u8]) {
        Digest::update(self, data);
    }
    fn sum(&mut self) -> [u8; 32] {
        self.finalize_reset().into()
    }
}

// Domain separators keep a leaf and an interior node from ever hashing
// identically, blocking second-preimage attacks.
// https://en.wikipedia.org/wiki/Merkle_tree#Second_preimage_attack
const LEAF_DOMAIN: [u8; 1] = [0x00];
const INTERIOR_DOMAIN: [u8; 1] = [0x01];

/// Produces the hash of a leaf: `H(0x00 ‖ data)`.
pub fn leaf_hash<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    hasher: &mut H,
    data: &[u8],
) -> [u8; HASH_SIZE] {
    hasher.reset();
    hasher.write(&LEAF_DOMAIN);
    hasher.write(data);
    hasher.sum()
}

/// Produces the hash of an interior node: `H(0x01 ‖ left ‖ right)`.
///
/// The operands are written into the hasher before the digest is produced,
/// so they may alias a previously returned digest.
pub fn interior_hash<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    hasher: &mut H,
    left: &[u8; HASH_SIZE],
    right: &[u8; HASH_SIZE],
) -> [u8; HASH_SIZE] {
    hasher.reset();
    hasher.write(&INTERIOR_DOMAIN);
    hasher.write(left);
    hasher.write(right);
    hasher.sum()
}

/// Produces the hash of the empty input: the root of a tree with no leaves.
pub(crate) fn empty_hash<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    hasher: &mut H,
) -> [u8; HASH_SIZE] {
    hasher.reset();
    hasher.sum()
}
