//! Suffix trie builder
//!
//! Builds the trie by inserting every suffix of every word:
//! for a word of length L, each starting offset i contributes the suffix
//! `word[i..]`, walked byte by byte from the root with missing children
//! created on the way down. Every node on a suffix path records the word's
//! index and bumps its occurrence counter, so a node at depth d aggregates
//! all words sharing that depth-d suffix.
//!
//! Total construction work is O(sum of L^2) node visits over the dictionary.

use crate::index::types::{NodeId, TrieNode, WordIndex, ROOT};

/// Builder accumulating trie nodes in a flat arena
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
}

impl TrieBuilder {
    /// Create a builder holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
        }
    }

    /// Register every suffix of `word` under `word_index`.
    ///
    /// Empty words must be filtered out at load time and never reach here.
    pub fn insert(&mut self, word_index: WordIndex, word: &str) {
        let bytes = word.as_bytes();

        for i in 0..bytes.len() {
            let mut current = ROOT;

            for &byte in &bytes[i..] {
                current = self.child_or_insert(current, byte);
                self.record(current, word_index);
            }
        }
    }

    /// Finish building and hand back the node arena
    pub fn finish(self) -> Vec<TrieNode> {
        self.nodes
    }

    /// Number of nodes allocated so far, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Descend into the child of `parent` for `byte`, allocating it if absent
    fn child_or_insert(&mut self, parent: NodeId, byte: u8) -> NodeId {
        if let Some(child) = self.nodes[parent as usize].child(byte) {
            return child;
        }
        let child = self.nodes.len() as NodeId;
        self.nodes.push(TrieNode::new());
        self.nodes[parent as usize].children.insert(byte, child);
        child
    }

    /// Record one suffix occurrence of `word_index` at `node`
    fn record(&mut self, node: NodeId, word_index: WordIndex) {
        let node = &mut self.nodes[node as usize];

        node.word_indices.push(word_index);

        // Adjacent-duplicate suppression: drop the append if it repeats the
        // previous entry. This collapses the repeated visits a self-similar
        // word (e.g. "aa") makes to the same node within one insert call; it
        // is deliberately not full set dedup.
        let n = node.word_indices.len();
        if n > 1 && node.word_indices[n - 1] == node.word_indices[n - 2] {
            node.word_indices.pop();
        }

        // The counter tracks every insertion, suppressed or not
        node.words_with_suffix += 1;
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
