//! Error types for tree and proof operations

/// Error type for tree and proof operations
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// A leaf was added after the root was computed
    AlreadyFinalized,
    /// A proof was requested from a tree that records none
    NotAProofTree,
    /// The all-zero digest was passed to `HTree::add`
    ZeroLeafHash,
    /// The bytes given to `Proof::decode` are not a valid encoding
    InvalidProofEncoding,
    /// The proof does not produce the expected root
    InvalidMerkleProof,
}
