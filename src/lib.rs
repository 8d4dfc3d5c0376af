//! Fixed-capacity Merkle tree with inclusion proofs.
//!
//! A binary hash tree over a bounded sequence of inserted data items. The
//! tree has a fixed capacity of `2^height` leaves, stores only the leaf
//! hashes (never the data), and computes every non-leaf hash on the fly by
//! recursive descent — no intermediate hashes are cached, so a root hash
//! query costs O(capacity). This is intentional for the small heights the
//! tree is built for; a caching scheme invalidated along the insertion path
//! would be the scaling fix and is deliberately out of scope.
//!
//! Unfilled leaf slots hold the backend's placeholder hash, so a parent
//! with one real child still combines deterministically. The placeholder is
//! not a true identity under the combine operation; an attacker able to
//! find a preimage of the placeholder could forge a leaf, and garbage
//! inserts can exhaust the fixed capacity. Both are known, accepted
//! weaknesses of the scheme.
//!
//! The hash backend is pluggable via [`TreeHasher`]; [`Blake3Hasher`] is
//! the default. Proof verification replays `combine(accumulator, sibling)`
//! in one fixed order, so a backend's combine must not depend on operand
//! order (see the trait docs).
//!
//! The tree is single-threaded: no operation blocks and no synchronization
//! is built in. Wrapping an instance for multiple-reader/single-writer use
//! is the caller's concern — `root_hash` and `generate_proof` are read-only,
//! `add_hash_of` is the sole writer, and [`verify_proof`] touches no tree
//! state at all.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub(crate) mod node;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::MerkleTreeError;
pub use hash::{Blake3Hasher, TreeHasher, MAX_HEIGHT};
pub use proof::Proof;
pub use tree::MerkleTree;
pub use verify::verify_proof;
