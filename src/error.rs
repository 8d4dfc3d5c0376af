use thiserror::Error;

/// Errors from fixed-capacity Merkle tree operations.
///
/// All variants are checked preconditions detected before any state is
/// mutated; none of them leaves a tree in a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleTreeError {
    /// Insertion was attempted on a tree that already holds `capacity`
    /// leaves.
    #[error("tree is full (capacity {capacity})")]
    TreeFull {
        /// Fixed leaf capacity of the tree, `2^height`.
        capacity: u32,
    },
    /// The root hash or a proof was requested from a tree with no leaves.
    #[error("tree is empty")]
    TreeEmpty,
    /// A proof was requested for a leaf index at or beyond the current
    /// size. The bound is the number of inserted leaves, not the capacity:
    /// a proof for an unfilled slot would be meaningless.
    #[error("leaf index {index} is out of range (size {size})")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: u32,
        /// Number of leaves inserted so far.
        size: u32,
    },
    /// Tree construction with a height outside the supported range.
    #[error("height must be between 1 and {}, got {height}", crate::hash::MAX_HEIGHT)]
    InvalidHeight {
        /// The rejected height.
        height: u8,
    },
    /// A serialized proof could not be decoded or failed structural
    /// validation. Note that proof *verification* never errors — a proof
    /// that decodes but does not match simply verifies as `false`.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
