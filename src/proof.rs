//! Inclusion proofs.
//!
//! A [`Proof`] carries the sibling subtree hash at each level along the
//! path from one leaf to the root, ordered leaf-adjacent sibling first.
//! It is a value detached from the tree that produced it: verification
//! (see [`verify_proof`](crate::verify_proof)) needs only the claimed
//! data, the proof, and a root hash. Proofs are immutable snapshots — a
//! proof generated before an insertion will not verify against the root
//! hash computed after it.

use std::fmt;

use crate::{hash::MAX_HEIGHT, MerkleTreeError, TreeHasher};

/// An inclusion proof for a single leaf.
///
/// The sibling list is `pub(crate)` so proofs can only come from
/// [`generate_proof`](crate::MerkleTree::generate_proof) or from
/// [`decode_from_slice`](Proof::decode_from_slice).
pub struct Proof<H: TreeHasher> {
    /// Sibling hashes from the leaf level up to the level below the root.
    pub(crate) sibling_hashes: Vec<H::Hash>,
}

impl<H: TreeHasher> Proof<H> {
    pub(crate) fn new(sibling_hashes: Vec<H::Hash>) -> Self {
        Proof { sibling_hashes }
    }

    /// Height of the tree this proof was generated against — one sibling
    /// hash per level.
    pub fn height(&self) -> u8 {
        self.sibling_hashes.len() as u8
    }

    /// The sibling hashes, leaf-adjacent first.
    pub fn sibling_hashes(&self) -> &[H::Hash] {
        &self.sibling_hashes
    }
}

impl<H: TreeHasher> Proof<H>
where
    H::Hash: bincode::Encode,
{
    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(&self.sibling_hashes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("encode error: {}", e)))
    }
}

impl<H: TreeHasher> Proof<H>
where
    H::Hash: bincode::Decode<()>,
{
    /// Decode from bytes using bincode.
    ///
    /// Validates that the decoded sibling count corresponds to a valid
    /// tree height before accepting the payload. A decoded proof that
    /// passes this check can still fail verification, which reports
    /// `false` rather than an error.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (sibling_hashes, _): (Vec<H::Hash>, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if sibling_hashes.is_empty() || sibling_hashes.len() > MAX_HEIGHT as usize {
            return Err(MerkleTreeError::InvalidProof(format!(
                "proof holds {} sibling hashes, expected between 1 and {}",
                sibling_hashes.len(),
                MAX_HEIGHT
            )));
        }
        Ok(Proof { sibling_hashes })
    }
}

// Manual impls: deriving would put bounds on the hasher type itself, which
// is only a namespace for the hash functions.

impl<H: TreeHasher> Clone for Proof<H> {
    fn clone(&self) -> Self {
        Proof {
            sibling_hashes: self.sibling_hashes.clone(),
        }
    }
}

impl<H: TreeHasher> fmt::Debug for Proof<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proof")
            .field("sibling_hashes", &self.sibling_hashes)
            .finish()
    }
}

impl<H: TreeHasher> PartialEq for Proof<H> {
    fn eq(&self, other: &Self) -> bool {
        self.sibling_hashes == other.sibling_hashes
    }
}

impl<H: TreeHasher> Eq for Proof<H> {}
