//! Streaming merkle builder over pre-hashed leaves

use crate::hasher::{empty_hash, interior_hash, Hasher};
use crate::proof::{Proof, ProofStep};
use crate::TreeError;

/// Records the path from a reference leaf to the root while the tree is
/// built. `current` is the digest of the subtree known to contain the
/// reference leaf; whenever it turns up as an operand of an interior hash,
/// the sibling operand is appended and `current` advances to the parent.
#[derive(Debug, Clone)]
struct ProofRecorder<const HASH_SIZE: usize> {
    current: [u8; HASH_SIZE],
    steps: Vec<ProofStep<HASH_SIZE>>,
}

/// HTree accepts a sequence of leaf hashes via its `add` method.
/// A leaf hash is the result of calling [`leaf_hash`](crate::leaf_hash) on a
/// string. After adding all leaf hashes in the sequence, their merkle root
/// hash may be read via the `root` method.
///
/// The builder keeps one pending digest per power-of-two subtree, at most
/// `⌈log₂(n+1)⌉` at a time. `levels[i]`, when occupied, is the root of a
/// balanced subtree of exactly `2^i` leaves; the occupied set follows the
/// binary representation of the number of leaves added so far.
///
/// Note that a [`Tree`](crate::Tree) works by converting its input from a
/// sequence of strings to the corresponding sequence of leaf hashes and
/// feeding those to an HTree.
#[derive(Debug, Clone)]
pub struct HTree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> {
    hasher: H,
    levels: Vec<Option<[u8; HASH_SIZE]>>,
    recorder: Option<ProofRecorder<HASH_SIZE>>,
    root: Option<[u8; HASH_SIZE]>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> HTree<HASH_SIZE, H> {
    /// Creates a new HTree in the zero-leaf state.
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            levels: Vec::new(),
            recorder: None,
            root: None,
        }
    }

    /// Creates a new HTree that also records an inclusion proof for the
    /// leaf whose hash is `reference`.
    pub fn new_proof(hasher: H, reference: [u8; HASH_SIZE]) -> Self {
        Self {
            hasher,
            levels: Vec::new(),
            recorder: Some(ProofRecorder {
                current: reference,
                steps: Vec::new(),
            }),
            root: None,
        }
    }

    /// Adds a leaf hash to the sequence.
    ///
    /// Returns [`TreeError::AlreadyFinalized`] once `root` or `proof` has
    /// been called, and [`TreeError::ZeroLeafHash`] for the all-zero digest,
    /// which is never a valid leaf hash.
    pub fn add(&mut self, leaf: [u8; HASH_SIZE]) -> Result<(), TreeError> {
        if self.root.is_some() {
            return Err(TreeError::AlreadyFinalized);
        }
        if leaf == [0u8; HASH_SIZE] {
            return Err(TreeError::ZeroLeafHash);
        }

        // Find the lowest level where this hash fits. Each occupied level on
        // the way combines with the incoming hash, vacates, and the search
        // continues one level higher with the combined hash.
        let mut hash = leaf;
        let mut level = 0;
        loop {
            if level == self.levels.len() {
                self.levels.push(Some(hash));
                return Ok(());
            }
            match self.levels[level].take() {
                None => {
                    self.levels[level] = Some(hash);
                    return Ok(());
                }
                // The earlier subtree becomes the left child.
                Some(left) => hash = self.interior_hash(left, hash),
            }
            level += 1;
        }
    }

    /// Returns the merkle root hash for the sequence of leaf hashes added
    /// so far. The first call finalises the tree; afterwards `add` is
    /// refused and repeated calls return the same root.
    pub fn root(&mut self) -> [u8; HASH_SIZE] {
        if let Some(root) = self.root {
            return root;
        }
        let root = self.finalize();
        self.root = Some(root);
        root
    }

    /// Returns the recorded inclusion proof, finalising the tree if `root`
    /// has not been called yet.
    ///
    /// Returns [`TreeError::NotAProofTree`] if the tree was created with
    /// [`HTree::new`]. The proof is empty iff the reference leaf was never
    /// added, in which case it does not verify against the root.
    pub fn proof(&mut self) -> Result<Proof<HASH_SIZE>, TreeError> {
        if self.recorder.is_some() {
            self.root();
        }
        match &self.recorder {
            Some(recorder) => Ok(Proof::new(recorder.steps.clone(), false)),
            None => Err(TreeError::NotAProofTree),
        }
    }

    /// Combines the pending levels upward, lowest first, each higher level
    /// folding in as the left child above the smaller subtrees.
    fn finalize(&mut self) -> [u8; HASH_SIZE] {
        if self.levels.is_empty() {
            return empty_hash(&mut self.hasher);
        }
        let levels = std::mem::take(&mut self.levels);
        let mut acc: Option<[u8; HASH_SIZE]> = None;
        for hash in levels.into_iter().flatten() {
            acc = Some(match acc {
                None => hash,
                Some(lower) => self.interior_hash(hash, lower),
            });
        }
        match acc {
            Some(root) => root,
            // The highest level is occupied whenever any level is.
            None => unreachable!("level stack held no digest"),
        }
    }

    fn interior_hash(
        &mut self,
        left: [u8; HASH_SIZE],
        right: [u8; HASH_SIZE],
    ) -> [u8; HASH_SIZE] {
        let parent = interior_hash(&mut self.hasher, &left, &right);
        if let Some(recorder) = self.recorder.as_mut() {
            if recorder.current == left {
                recorder.steps.push(ProofStep::right(right));
                recorder.current = parent;
            } else if recorder.current == right {
                recorder.steps.push(ProofStep::left(left));
                recorder.current = parent;
            }
        }
        parent
    }
}
