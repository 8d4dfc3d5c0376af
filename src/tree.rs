use crate::{
    hash::{validate_height, Blake3Hasher, TreeHasher},
    node::NodeAddress,
    proof::Proof,
    MerkleTreeError,
};

/// A fixed-capacity Merkle tree.
///
/// Holds `2^height` leaf hash slots, filled sequentially by insertion: the
/// k-th successful insertion occupies leaf index k, and indices are never
/// reassigned or reused. Only leaf hashes are stored — the original data
/// never enters the tree, and no intermediate hashes are kept.
///
/// Note: the root hash is recomputed from the leaves on every insertion,
/// O(capacity) per insert, since nothing below the root is cached. Suitable
/// for the small heights this tree targets.
#[derive(Debug, Clone)]
pub struct MerkleTree<H: TreeHasher = Blake3Hasher> {
    height: u8,
    size: u32,
    /// Cached root, kept equal to `node_hash(ROOT)` after every insertion.
    /// Holds the placeholder until the first insertion and is never
    /// observable while the tree is empty.
    root_hash: H::Hash,
    leaf_hashes: Vec<H::Hash>,
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Create a new empty tree with the given height.
    ///
    /// Height must be between 1 and [`MAX_HEIGHT`](crate::MAX_HEIGHT)
    /// inclusive; capacity is `2^height` leaves.
    pub fn new(height: u8) -> Result<Self, MerkleTreeError> {
        validate_height(height)?;
        let capacity = Self::capacity_for_height(height);
        Ok(MerkleTree {
            height,
            size: 0,
            root_hash: H::empty_leaf(),
            leaf_hashes: vec![H::empty_leaf(); capacity as usize],
        })
    }

    /// Reconstitute a tree from previously exported leaf hashes.
    ///
    /// The slice holds the hashes of the filled slots in insertion order;
    /// its length becomes the tree size and must not exceed the capacity
    /// for the given height. The root hash is recomputed from the leaves.
    pub fn from_leaf_hashes(height: u8, leaves: &[H::Hash]) -> Result<Self, MerkleTreeError> {
        validate_height(height)?;
        let capacity = Self::capacity_for_height(height);
        if leaves.len() > capacity as usize {
            return Err(MerkleTreeError::TreeFull { capacity });
        }

        let mut leaf_hashes = vec![H::empty_leaf(); capacity as usize];
        leaf_hashes[..leaves.len()].copy_from_slice(leaves);

        let mut tree = MerkleTree {
            height,
            size: leaves.len() as u32,
            root_hash: H::empty_leaf(),
            leaf_hashes,
        };
        if !tree.is_empty() {
            tree.root_hash = tree.node_hash(NodeAddress::ROOT);
        }
        Ok(tree)
    }

    /// Compute capacity from height. Height must be 1..=16, so the shift
    /// cannot overflow u32.
    fn capacity_for_height(height: u8) -> u32 {
        1u32 << height
    }

    /// Maximum number of leaves this tree can hold.
    pub fn capacity(&self) -> u32 {
        Self::capacity_for_height(self.height)
    }

    /// Height of the tree: leaves sit at this level, the root at level 0.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of leaves inserted so far.
    pub fn len(&self) -> u32 {
        self.size
    }

    /// True if no leaves have been inserted.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// True if every leaf slot is filled.
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Hash `data` and insert the hash at the next free leaf slot.
    ///
    /// Returns `(root_hash, leaf_index)` where `leaf_index` is the 0-based
    /// slot the hash landed in: the first insertion gets index 0, the next
    /// index 1, and so on. Fails with [`MerkleTreeError::TreeFull`] when
    /// every slot is taken, mutating nothing.
    pub fn add_hash_of(&mut self, data: &[u8]) -> Result<(H::Hash, u32), MerkleTreeError> {
        if self.is_full() {
            return Err(MerkleTreeError::TreeFull {
                capacity: self.capacity(),
            });
        }

        let leaf_index = self.size;
        self.leaf_hashes[leaf_index as usize] = H::hash_data(data);
        self.size += 1;

        self.root_hash = self.node_hash(NodeAddress::ROOT);
        Ok((self.root_hash, leaf_index))
    }

    /// Get the root hash of the tree.
    ///
    /// The value changes (modulo hash collisions) whenever a new hash is
    /// inserted. Fails with [`MerkleTreeError::TreeEmpty`] before the first
    /// insertion.
    pub fn root_hash(&self) -> Result<H::Hash, MerkleTreeError> {
        if self.is_empty() {
            return Err(MerkleTreeError::TreeEmpty);
        }
        Ok(self.root_hash)
    }

    /// Generate an inclusion proof for the leaf at `leaf_index`.
    ///
    /// The proof holds the sibling subtree hash at each level along the
    /// path from the leaf to the root, leaf-adjacent sibling first. It is
    /// independent of this tree instance: verification needs only the
    /// claimed data, the proof, and a root hash (see
    /// [`verify_proof`](crate::verify_proof)).
    ///
    /// Fails with [`MerkleTreeError::TreeEmpty`] on an empty tree and with
    /// [`MerkleTreeError::IndexOutOfRange`] when `leaf_index >= len()` —
    /// the bound is the number of inserted leaves, not the capacity, since
    /// a proof for an unfilled slot proves nothing.
    pub fn generate_proof(&self, leaf_index: u32) -> Result<Proof<H>, MerkleTreeError> {
        if self.is_empty() {
            return Err(MerkleTreeError::TreeEmpty);
        }
        if leaf_index >= self.size {
            return Err(MerkleTreeError::IndexOutOfRange {
                index: leaf_index,
                size: self.size,
            });
        }

        let mut sibling_hashes = Vec::with_capacity(self.height as usize);
        for path_node in NodeAddress::path_to_root(self.height, leaf_index) {
            sibling_hashes.push(self.node_hash(path_node.sibling()));
        }

        Ok(Proof::new(sibling_hashes))
    }

    /// Recursively compute the hash of a node.
    ///
    /// A leaf's hash is its stored slot value (the placeholder for
    /// unfilled slots); an internal node's hash is the combination of its
    /// children's hashes, found recursively. Recursion depth is bounded by
    /// the tree height.
    pub(crate) fn node_hash(&self, node: NodeAddress) -> H::Hash {
        if node.is_leaf(self.height) {
            return self.leaf_hashes[node.index as usize];
        }

        let left_hash = self.node_hash(node.left_child());
        let right_hash = self.node_hash(node.right_child());
        H::combine(&left_hash, &right_hash)
    }
}
