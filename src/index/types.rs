use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Zero-based position of a word in dictionary load order.
///
/// This is the only identifier used to reference words throughout the trie;
/// callers resolve it back to a string via [`crate::index::WordStore::word`].
pub type WordIndex = u32;

/// Index of a node in the trie's arena. Node 0 is always the root.
pub type NodeId = u32;

/// Arena slot reserved for the root node
pub const ROOT: NodeId = 0;

/// A single node of the suffix trie.
///
/// Each node represents the suffix spelled by the byte path from the root.
/// Nodes are stored in a flat arena owned by the trie; children reference
/// their slots by [`NodeId`], so dropping the arena frees the whole tree
/// without any recursive walk.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// One child per distinct next byte on any suffix passing through here
    pub children: FxHashMap<u8, NodeId>,
    /// Indices of words having this node's suffix, in insertion order.
    /// Invariant: two consecutive entries are never equal (adjacent-duplicate
    /// suppression applied at insert time); non-adjacent duplicates are not
    /// forbidden by this structure.
    pub word_indices: Vec<WordIndex>,
    /// Number of suffix-occurrence insertions that reached this node. Counts
    /// every insertion, so it can exceed `word_indices.len()`.
    pub words_with_suffix: u64,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child slot for `byte`, if one exists
    #[inline]
    pub fn child(&self, byte: u8) -> Option<NodeId> {
        self.children.get(&byte).copied()
    }
}

/// Summary statistics for a built trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Number of dictionary words loaded
    pub word_count: usize,
    /// Number of nodes in the arena, root included
    pub node_count: usize,
    /// Total suffix-occurrence insertions across all nodes at depth 1
    /// (equals the number of distinct suffixes inserted, duplicates counted)
    pub suffix_count: u64,
    /// Length of the longest suffix path, in bytes
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = TrieNode::new();
        assert!(node.children.is_empty());
        assert!(node.word_indices.is_empty());
        assert_eq!(node.words_with_suffix, 0);
    }

    #[test]
    fn test_child_lookup() {
        let mut node = TrieNode::new();
        node.children.insert(b'a', 7);
        assert_eq!(node.child(b'a'), Some(7));
        assert_eq!(node.child(b'b'), None);
    }
}
