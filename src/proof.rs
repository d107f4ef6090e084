//! Inclusion proofs for streaming merkle trees.
//!
//! A proof is the ordered list of sibling digests on the path from a leaf to
//! the root, each tagged with the side the sibling occupies. Applying the
//! steps bottom-up to the leaf digest reproduces the root.
//!
//! A proof can be encoded into a compact byte string with the side bits
//! packed into a bitvector.

use std::fmt::Display;

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::hasher::{interior_hash, leaf_hash, Hasher};
use crate::TreeError;

/// Which side of the accumulator a recorded sibling occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// One step of a merkle proof: a sibling digest and its side.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep<const HASH_SIZE: usize> {
    #[serde_as(as = "Bytes")]
    pub sibling: [u8; HASH_SIZE],
    pub side: Side,
}

impl<const HASH_SIZE: usize> ProofStep<HASH_SIZE> {
    /// A step whose sibling sits to the left of the accumulator.
    pub fn left(sibling: [u8; HASH_SIZE]) -> Self {
        Self {
            sibling,
            side: Side::Left,
        }
    }

    /// A step whose sibling sits to the right of the accumulator.
    pub fn right(sibling: [u8; HASH_SIZE]) -> Self {
        Self {
            sibling,
            side: Side::Right,
        }
    }
}

impl<const HASH_SIZE: usize> Display for ProofStep<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = match self.side {
            Side::Left => "L",
            Side::Right => "R",
        };
        write!(f, "{}:{}", side, hex::encode(self.sibling.as_slice()))
    }
}

/// A merkle inclusion proof for a reference leaf.
///
/// Proofs produced by [`Tree`](crate::Tree) expect the raw reference string
/// at verification time and leaf-hash it first; proofs produced by
/// [`HTree`](crate::HTree) expect the leaf hash itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof<const HASH_SIZE: usize> {
    steps: Vec<ProofStep<HASH_SIZE>>,
    hash_leaf: bool,
}

impl<const HASH_SIZE: usize> Proof<HASH_SIZE> {
    /// Creates a new proof from a list of steps.
    ///
    /// `hash_leaf` marks a proof whose reference is a raw string that must
    /// be leaf-hashed before the steps are applied.
    pub fn new(steps: Vec<ProofStep<HASH_SIZE>>, hash_leaf: bool) -> Self {
        Self { steps, hash_leaf }
    }

    /// Returns the steps in the proof, bottom-up.
    pub fn steps(&self) -> &[ProofStep<HASH_SIZE>] {
        &self.steps
    }

    /// Returns whether verification leaf-hashes the reference first.
    pub fn hash_leaf(&self) -> bool {
        self.hash_leaf
    }

    /// Folds the proof steps over `reference` and returns the resulting
    /// digest. Verification succeeds iff it equals the tree root.
    ///
    /// For a proof that does not leaf-hash, `reference` must be a digest of
    /// exactly `HASH_SIZE` bytes; anything else is misuse and panics.
    pub fn hash<H: Hasher<HASH_SIZE>>(&self, hasher: &mut H, reference: &[u8]) -> [u8; HASH_SIZE] {
        let mut acc = if self.hash_leaf {
            leaf_hash(hasher, reference)
        } else {
            let mut digest = [0u8; HASH_SIZE];
            digest.copy_from_slice(reference);
            digest
        };
        for step in &self.steps {
            acc = match step.side {
                Side::Left => interior_hash(hasher, &step.sibling, &acc),
                Side::Right => interior_hash(hasher, &acc, &step.sibling),
            };
        }
        acc
    }

    /// Verifies the proof against an expected root.
    pub fn verify<H: Hasher<HASH_SIZE>>(
        &self,
        hasher: &mut H,
        reference: &[u8],
        root: [u8; HASH_SIZE],
    ) -> Result<(), TreeError> {
        if self.hash(hasher, reference) == root {
            Ok(())
        } else {
            Err(TreeError::InvalidMerkleProof)
        }
    }

    /// Encodes the proof into a byte vector: a flags byte, a big-endian step
    /// count, the sibling digests in order, then the side bits packed into a
    /// bitvector (a set bit marks a left sibling).
    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::new();
        encoded.push(self.hash_leaf as u8);
        encoded.extend_from_slice(&(self.steps.len() as u16).to_be_bytes());
        let mut sides = BitVec::<u8, Lsb0>::with_capacity(self.steps.len());
        for step in &self.steps {
            encoded.extend_from_slice(&step.sibling);
            sides.push(step.side == Side::Left);
        }
        encoded.extend_from_slice(sides.as_raw_slice());
        encoded
    }

    /// Decodes a proof from a byte vector.
    pub fn decode(data: &[u8]) -> Result<Self, TreeError> {
        if data.len() < 3 {
            return Err(TreeError::InvalidProofEncoding);
        }
        let hash_leaf = match data[0] {
            0 => false,
            1 => true,
            _ => return Err(TreeError::InvalidProofEncoding),
        };
        let count = u16::from_be_bytes([data[1], data[2]]) as usize;
        if data.len() != 3 + count * HASH_SIZE + (count + 7) / 8 {
            return Err(TreeError::InvalidProofEncoding);
        }
        let sides = BitVec::<u8, Lsb0>::from_slice(&data[3 + count * HASH_SIZE..]);
        let mut steps = Vec::with_capacity(count);
        let mut offset = 3;
        for i in 0..count {
            let mut sibling = [0u8; HASH_SIZE];
            sibling.copy_from_slice(&data[offset..offset + HASH_SIZE]);
            offset += HASH_SIZE;
            let side = if sides[i] { Side::Left } else { Side::Right };
            steps.push(ProofStep { sibling, side });
        }
        Ok(Self { steps, hash_leaf })
    }
}

impl<const HASH_SIZE: usize> Display for Proof<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Proof {{ hash_leaf: {}, steps: [", self.hash_leaf)?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", step)?;
        }
        f.write_str("] }")
    }
}

#[cfg(test)]
mod test {
    use super::{Proof, ProofStep, Side};
    use crate::TreeError;
    use hex_literal::hex;

    fn sample() -> Proof<32> {
        Proof::new(
            vec![
                ProofStep::right(hex!(
                    "76ab70dc46775b641a8e71507b07145aed11ae5efc0baa94ac06876af2b3bf5c"
                )),
                ProofStep::left(hex!(
                    "1dad5e07e988e0e446e2cce0b77d2ea44a1801efea272d2e2bc374037a5bc1a8"
                )),
            ],
            true,
        )
    }

    #[test]
    fn test_encode_decode() {
        let proof = sample();
        let encoded = proof.encode();
        assert_eq!(encoded.len(), 3 + 2 * 32 + 1);
        let decoded = Proof::<32>::decode(&encoded).unwrap();
        assert_eq!(proof, decoded);
    }

    #[test]
    fn test_decode_rejects_truncated_input() {
        let mut encoded = sample().encode();
        encoded.pop();
        assert_eq!(
            Proof::<32>::decode(&encoded),
            Err(TreeError::InvalidProofEncoding)
        );
        assert_eq!(
            Proof::<32>::decode(&[1]),
            Err(TreeError::InvalidProofEncoding)
        );
    }

    #[test]
    fn test_decode_rejects_bad_flags() {
        let mut encoded = sample().encode();
        encoded[0] = 7;
        assert_eq!(
            Proof::<32>::decode(&encoded),
            Err(TreeError::InvalidProofEncoding)
        );
    }

    #[test]
    fn test_decode_empty_proof() {
        let proof = Proof::<32>::new(Vec::new(), false);
        let decoded = Proof::<32>::decode(&proof.encode()).unwrap();
        assert_eq!(proof, decoded);
        assert!(decoded.steps().is_empty());
        assert!(!decoded.hash_leaf());
    }

    #[test]
    fn test_serde_round_trip() {
        let proof = sample();
        let json = serde_json::to_string(&proof).unwrap();
        let back: Proof<32> = serde_json::from_str(&json).unwrap();
        assert_eq!(proof, back);
    }

    #[test]
    fn test_step_display() {
        let step = ProofStep::<32>::left(hex!(
            "76ab70dc46775b641a8e71507b07145aed11ae5efc0baa94ac06876af2b3bf5c"
        ));
        assert_eq!(
            format!("{}", step),
            "L:76ab70dc46775b641a8e71507b07145aed11ae5efc0baa94ac06876af2b3bf5c"
        );
        assert_eq!(step.side, Side::Left);
    }
}
