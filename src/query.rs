//! Query engine: read-only suffix lookups over a built trie
//!
//! Both operations are a single descent, O(length of the query suffix), and
//! never mutate the trie, so they can be issued any number of times and
//! interleaved freely across threads.

use crate::index::{SuffixTrie, WordIndex};

/// Read-only query interface over a [`SuffixTrie`]
pub struct QueryEngine<'a> {
    trie: &'a SuffixTrie,
}

impl<'a> QueryEngine<'a> {
    pub fn new(trie: &'a SuffixTrie) -> Self {
        Self { trie }
    }

    /// Indices of all words ending with `suffix`, in word-index order.
    ///
    /// Returns an empty slice when no word has the suffix. The empty suffix
    /// resolves to the root, which stores no indices, so it yields an empty
    /// slice as well.
    pub fn search(&self, suffix: &str) -> &'a [WordIndex] {
        match self.trie.descend(suffix) {
            Some(node) => &self.trie.node(node).word_indices,
            None => &[],
        }
    }

    /// Number of suffix occurrences ending with `suffix`, or 0 when the
    /// suffix is absent.
    ///
    /// This is the per-node insertion counter, which can exceed the number
    /// of distinct words when a word contains the suffix at several offsets.
    pub fn count_words_with_suffix(&self, suffix: &str) -> u64 {
        match self.trie.descend(suffix) {
            Some(node) => self.trie.node(node).words_with_suffix,
            None => 0,
        }
    }

    /// Resolve result indices back to the dictionary words
    pub fn resolve(&self, indices: &[WordIndex]) -> Vec<&'a str> {
        indices
            .iter()
            .filter_map(|&i| self.trie.store().word(i))
            .collect()
    }
}
