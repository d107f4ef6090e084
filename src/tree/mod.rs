mod htree;

pub use htree::HTree;

use crate::hasher::{leaf_hash, Hasher};
use crate::proof::Proof;
use crate::TreeError;

/// Tree accepts a sequence of strings via its `add` method and builds a
/// merkle hash tree from them. After adding all strings in the sequence,
/// their merkle root hash may be read via the `root` method.
///
/// Each string is leaf-hashed with a `0x00` domain separator and forwarded
/// to an owned [`HTree`].
#[derive(Debug, Clone)]
pub struct Tree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> {
    hasher: H,
    htree: HTree<HASH_SIZE, H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Tree<HASH_SIZE, H> {
    /// Creates a new Tree.
    pub fn new(hasher: H) -> Self {
        Self {
            hasher: hasher.clone(),
            htree: HTree::new(hasher),
        }
    }

    /// Creates a new Tree that records an inclusion proof for `reference`,
    /// a string expected to be added later via `add`.
    ///
    /// The resulting proof verifies against the raw reference string: its
    /// `hash` method leaf-hashes the reference before applying the steps.
    pub fn new_proof(hasher: H, reference: &[u8]) -> Self {
        let mut leaf_hasher = hasher.clone();
        let reference = leaf_hash(&mut leaf_hasher, reference);
        Self {
            hasher: leaf_hasher,
            htree: HTree::new_proof(hasher, reference),
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Tree<HASH_SIZE, H> {
    /// Adds a string to the sequence.
    ///
    /// It is an error to call `add` after a call to `root` or `proof`.
    pub fn add(&mut self, data: &[u8]) -> Result<(), TreeError> {
        let leaf = leaf_hash(&mut self.hasher, data);
        self.htree.add(leaf)
    }

    /// Returns the merkle root hash for the sequence of strings that have
    /// been added. The first call finalises the tree.
    pub fn root(&mut self) -> [u8; HASH_SIZE] {
        self.htree.root()
    }

    /// Returns the recorded inclusion proof, or
    /// [`TreeError::NotAProofTree`] if the tree was created with
    /// [`Tree::new`].
    pub fn proof(&mut self) -> Result<Proof<HASH_SIZE>, TreeError> {
        let proof = self.htree.proof()?;
        Ok(Proof::new(proof.steps().to_vec(), true))
    }
}

#[cfg(test)]
mod test {
    use super::Tree;
    use crate::TreeError;
    use sha2::{Digest, Sha256};

    #[test]
    fn test_tree_and_htree_agree() {
        use super::HTree;
        use crate::hasher::leaf_hash;

        let inputs: [&[u8]; 3] = [b"one", b"two", b"three"];
        let mut tree = Tree::new(Sha256::new());
        let mut htree = HTree::new(Sha256::new());
        let mut hasher = Sha256::new();
        for input in inputs {
            tree.add(input).unwrap();
            htree.add(leaf_hash(&mut hasher, input)).unwrap();
        }
        assert_eq!(tree.root(), htree.root());
    }

    #[test]
    fn test_proof_leaf_hashes_the_reference() {
        let inputs: [&[u8]; 5] = [b"a", b"b", b"c", b"d", b"e"];
        let mut tree = Tree::new_proof(Sha256::new(), b"c");
        for input in inputs {
            tree.add(input).unwrap();
        }
        let root = tree.root();
        let proof = tree.proof().unwrap();
        assert!(proof.hash_leaf());
        assert_eq!(proof.hash(&mut Sha256::new(), b"c"), root);
    }

    #[test]
    fn test_add_after_root_is_refused() {
        let mut tree = Tree::new(Sha256::new());
        tree.add(b"only").unwrap();
        tree.root();
        assert_eq!(tree.add(b"late"), Err(TreeError::AlreadyFinalized));
    }

    #[test]
    fn test_proof_from_plain_tree_is_refused() {
        let mut tree = Tree::new(Sha256::new());
        tree.add(b"only").unwrap();
        assert_eq!(tree.proof().unwrap_err(), TreeError::NotAProofTree);
    }
}
