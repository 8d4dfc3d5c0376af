//! Logical node addressing.
//!
//! Nodes are identified by `(level, index)`: the root is at level 0, its
//! children at level 1, and the leaves at level `height`. Level `L` has
//! `2^L` valid indices, `0` being the leftmost node of the level. Nothing
//! here is ever materialized as a tree structure — the address is pure
//! arithmetic used to drive hash recomputation and proof generation.
//!
//! `NodeAddress` performs no input validation (for example that `sibling`
//! is not called on the root); callers in `tree.rs` guarantee correct use.

/// Address of a single logical node, by level and index within the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeAddress {
    pub(crate) level: u8,
    pub(crate) index: u32,
}

impl NodeAddress {
    /// The root node, level 0 index 0.
    pub(crate) const ROOT: NodeAddress = NodeAddress { level: 0, index: 0 };

    /// Address of the leaf at `leaf_index` in a tree of the given height.
    pub(crate) fn leaf(height: u8, leaf_index: u32) -> Self {
        NodeAddress {
            level: height,
            index: leaf_index,
        }
    }

    /// A node is a leaf when it sits on the last level of the tree.
    pub(crate) fn is_leaf(&self, height: u8) -> bool {
        self.level == height
    }

    /// Left child, one level down at twice the index.
    pub(crate) fn left_child(&self) -> Self {
        NodeAddress {
            level: self.level + 1,
            index: 2 * self.index,
        }
    }

    /// Right child, one level down at twice the index plus one.
    pub(crate) fn right_child(&self) -> Self {
        NodeAddress {
            level: self.level + 1,
            index: 2 * self.index + 1,
        }
    }

    /// The other child of this node's parent.
    ///
    /// Siblings pair up as (0, 1), (2, 3), (4, 5), ... so the sibling index
    /// is this index with its lowest bit flipped. Must not be called on the
    /// root, which has no sibling.
    pub(crate) fn sibling(&self) -> Self {
        NodeAddress {
            level: self.level,
            index: self.index ^ 1,
        }
    }

    /// Parent node, one level up at half the index (integer division maps
    /// both children onto the same parent).
    pub(crate) fn parent(&self) -> Self {
        NodeAddress {
            level: self.level - 1,
            index: self.index / 2,
        }
    }

    /// Path from the leaf at `leaf_index` up to (but not including) the
    /// root: `height` nodes, the leaf itself first, each followed by its
    /// parent, ending with a direct child of the root.
    pub(crate) fn path_to_root(height: u8, leaf_index: u32) -> Vec<NodeAddress> {
        let mut path = Vec::with_capacity(height as usize);
        let mut node = NodeAddress::leaf(height, leaf_index);
        while node.level > 0 {
            path.push(node);
            node = node.parent();
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_and_parent_are_inverse() {
        let node = NodeAddress { level: 3, index: 5 };
        assert_eq!(node.left_child(), NodeAddress { level: 4, index: 10 });
        assert_eq!(node.right_child(), NodeAddress { level: 4, index: 11 });
        assert_eq!(node.left_child().parent(), node);
        assert_eq!(node.right_child().parent(), node);
    }

    #[test]
    fn sibling_flips_lowest_index_bit() {
        let even = NodeAddress { level: 2, index: 2 };
        let odd = NodeAddress { level: 2, index: 3 };
        assert_eq!(even.sibling(), odd);
        assert_eq!(odd.sibling(), even);
        // Siblings share a parent by definition.
        assert_eq!(even.parent(), odd.parent());
    }

    #[test]
    fn is_leaf_only_on_last_level() {
        let height = 5;
        assert!(NodeAddress::leaf(height, 0).is_leaf(height));
        assert!(!NodeAddress { level: 4, index: 0 }.is_leaf(height));
        assert!(!NodeAddress::ROOT.is_leaf(height));
    }

    #[test]
    fn path_to_root_shape() {
        let height = 5;
        let path = NodeAddress::path_to_root(height, 13);
        assert_eq!(path.len(), height as usize);

        // Starts at the leaf itself.
        assert_eq!(path[0], NodeAddress::leaf(height, 13));
        // Each subsequent node is the parent of the previous one.
        for pair in path.windows(2) {
            assert_eq!(pair[0].parent(), pair[1]);
        }
        // Ends with a direct child of the root; the root itself is excluded.
        let last = path[height as usize - 1];
        assert_eq!(last.level, 1);
        assert_eq!(last.parent(), NodeAddress::ROOT);
    }

    #[test]
    fn path_to_root_index_halves_each_level() {
        let path = NodeAddress::path_to_root(3, 6);
        let indices: Vec<u32> = path.iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![6, 3, 1]);
    }
}
