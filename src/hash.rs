//! Pluggable hash backend for the tree.

use std::fmt::Debug;

use crate::MerkleTreeError;

/// Maximum supported tree height. Capacity is `2^height` leaves, so height
/// 16 gives 65 536 leaf slots — already past the point where the
/// recompute-from-leaves strategy stops being a good idea.
pub const MAX_HEIGHT: u8 = 16;

/// Validate that height is in the allowed range [1, MAX_HEIGHT].
pub(crate) fn validate_height(height: u8) -> Result<(), MerkleTreeError> {
    if !(1..=MAX_HEIGHT).contains(&height) {
        return Err(MerkleTreeError::InvalidHeight { height });
    }
    Ok(())
}

/// Hash backend used by [`MerkleTree`](crate::MerkleTree).
///
/// Both functions must be deterministic and produce values in the same
/// fixed-width domain. Collision resistance is not required for the tree to
/// operate, only for its security properties to mean anything.
///
/// Proof verification folds `combine(accumulator, sibling)` in that fixed
/// argument order at every level, while the path node being proved may sit
/// on either side of its parent. The fold therefore reconstructs the root
/// only if `combine` gives the same result for both operand orders, the way
/// [`Blake3Hasher`] does by hashing the sum of its operands. A backend
/// whose combine is order-sensitive will fail verification for every leaf
/// whose path passes through a right child.
pub trait TreeHasher {
    /// Fixed-width hash value, the output domain of both [`hash_data`]
    /// (applied to raw data) and [`combine`] (applied to two hashes).
    ///
    /// [`hash_data`]: TreeHasher::hash_data
    /// [`combine`]: TreeHasher::combine
    type Hash: Copy + Eq + Debug;

    /// Placeholder hash held by unfilled leaf slots.
    ///
    /// A parent with one real child and one placeholder child combines
    /// deterministically using this value. It is not an identity element
    /// of `combine`; see the crate docs for the accepted weaknesses.
    fn empty_leaf() -> Self::Hash;

    /// Hash a raw data item into the tree's hash domain.
    fn hash_data(data: &[u8]) -> Self::Hash;

    /// Derive a parent hash from its two children's hashes.
    fn combine(left: &Self::Hash, right: &Self::Hash) -> Self::Hash;
}

/// Default hash backend: Blake3 with 32-byte hashes.
///
/// `combine` hashes the byte-wise wrapping sum of the two child hashes,
/// which makes it insensitive to operand order as the proof protocol
/// requires.
#[derive(Debug, Clone, Copy)]
pub struct Blake3Hasher;

impl TreeHasher for Blake3Hasher {
    type Hash = [u8; 32];

    fn empty_leaf() -> [u8; 32] {
        [0u8; 32]
    }

    fn hash_data(data: &[u8]) -> [u8; 32] {
        *blake3::hash(data).as_bytes()
    }

    fn combine(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        let mut sum = [0u8; 32];
        for (i, byte) in sum.iter_mut().enumerate() {
            *byte = left[i].wrapping_add(right[i]);
        }
        *blake3::hash(&sum).as_bytes()
    }
}
