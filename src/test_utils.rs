//! Test utilities: an alternate hash backend.

use crate::TreeHasher;

/// Backend with a 64-bit hash domain, truncating Blake3 output.
///
/// Exercises the tree over a hash width other than the default backend's.
/// Combine hashes the wrapping sum of the operands, so it is
/// order-insensitive as the proof protocol requires.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TruncatedHasher;

impl TruncatedHasher {
    fn truncate(hash: blake3::Hash) -> u64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl TreeHasher for TruncatedHasher {
    type Hash = u64;

    fn empty_leaf() -> u64 {
        0
    }

    fn hash_data(data: &[u8]) -> u64 {
        Self::truncate(blake3::hash(data))
    }

    fn combine(left: &u64, right: &u64) -> u64 {
        Self::truncate(blake3::hash(&left.wrapping_add(*right).to_le_bytes()))
    }
}
