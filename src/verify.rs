//! Proof verification.
//!
//! Pure function — no access to any tree instance. Recomputes a candidate
//! root hash from the claimed data and the proof and compares it to the
//! expected root.

use crate::{proof::Proof, TreeHasher};

/// Verify whether `data` was in the tree with the given root hash.
///
/// Starting from `hash(data)`, each sibling hash in the proof is folded in
/// with `combine(accumulator, sibling)`, leaf-adjacent sibling first: the
/// data hash combined with its sibling gives their parent's hash, that
/// parent combined with the next sibling gives the grandparent's hash, and
/// so on up to the root.
///
/// The fold uses the same fixed operand order at every level even though
/// the path node may be either child of its parent; backends must keep
/// `combine` order-insensitive for this to hold (see
/// [`TreeHasher`](crate::TreeHasher)). Do not change the order here without
/// changing proof generation to match.
///
/// Never fails: any mismatch — tampered data, a wrong or stale root, a
/// wrong-length proof — yields `false`.
pub fn verify_proof<H: TreeHasher>(root_hash: &H::Hash, proof: &Proof<H>, data: &[u8]) -> bool {
    let mut computed_hash = H::hash_data(data);

    for sibling_hash in proof.sibling_hashes() {
        computed_hash = H::combine(&computed_hash, sibling_hash);
    }

    computed_hash == *root_hash
}
