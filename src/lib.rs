//! Streaming merkle trees and frontier tries
//!
//! This crate builds merkle root hashes from sequences of byte strings
//! presented one at a time, keeping only a logarithmic stack of partial
//! subtree roots, and can record a compact inclusion proof for a designated
//! reference string while it does so.
//!
//! It also provides a [`Frontier`]: a byte-radix trie over the shortest
//! prefixes excluded from a set, in the style of Micali, Rabin and Kilian's
//! "Zero Knowledge Sets". The frontier's in-order enumeration is hashed into
//! a merkle root that commits to non-membership.
//!
//! The crate supports:
//! - Online root computation in `O(log n)` memory
//! - Inclusion proofs recorded during the same pass
//! - Adaptive trie nodes (single edge, sorted vector, dense array)
//! - Any hash primitive through the [`Hasher`] trait

mod error;
mod frontier;
mod hasher;
mod proof;
mod tier;
mod tree;

pub use error::TreeError;
pub use frontier::Frontier;
pub use hasher::{interior_hash, leaf_hash, Hasher};
pub use proof::{Proof, ProofStep, Side};
pub use tier::{DenseTier, SparseTier, Tier, UniTier};
pub use tree::{HTree, Tree};

#[cfg(test)]
mod tests;
