//! Suffix trie index
//!
//! The trie is built once from a dictionary and is immutable afterwards,
//! so any number of readers may query it concurrently with no locking.
//! Nodes live in a flat arena referenced by [`NodeId`]; the arena and the
//! word store are both owned by [`SuffixTrie`] and freed together when it
//! drops.

pub mod builder;
pub mod stats;
pub mod store;
pub mod types;

pub use builder::TrieBuilder;
pub use store::WordStore;
pub use types::*;

use anyhow::Result;
use std::io::BufRead;
use std::path::Path;

/// A suffix trie over a fixed dictionary.
///
/// Every suffix of every word is indexed. Each node aggregates, for the
/// suffix spelled by its path from the root, the indices of words having
/// that suffix and a count of suffix occurrences.
#[derive(Debug)]
pub struct SuffixTrie {
    store: WordStore,
    nodes: Vec<TrieNode>,
}

impl SuffixTrie {
    /// Load a dictionary file and build the trie from it.
    ///
    /// Returns an error if the file cannot be opened or read; whether that
    /// is fatal is the caller's call.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::from_store(WordStore::from_path(path)?))
    }

    /// Build from any line-oriented reader
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        Ok(Self::from_store(WordStore::from_reader(reader)?))
    }

    /// Build from an already-loaded word store
    pub fn from_store(store: WordStore) -> Self {
        let mut builder = TrieBuilder::new();
        for (index, word) in store.iter() {
            builder.insert(index, word);
        }
        Self {
            store,
            nodes: builder.finish(),
        }
    }

    /// The word store this trie was built from
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// The node at `id`. Panics on an out-of-arena id; all ids handed out by
    /// [`Self::descend`] are valid.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id as usize]
    }

    /// Number of nodes in the arena, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow `suffix` byte by byte from the root.
    ///
    /// Returns the node spelling `suffix`, or `None` as soon as a byte has
    /// no child. The empty suffix resolves to the root, which stores no
    /// indices of its own (it is only the traversal origin).
    pub fn descend(&self, suffix: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for &byte in suffix.as_bytes() {
            current = self.node(current).child(byte)?;
        }
        Some(current)
    }

    /// Summary statistics over the built trie
    pub fn stats(&self) -> TrieStats {
        let root = self.node(ROOT);
        let suffix_count = root
            .children
            .values()
            .map(|&child| self.node(child).words_with_suffix)
            .sum();

        TrieStats {
            word_count: self.store.len(),
            node_count: self.nodes.len(),
            suffix_count,
            max_depth: self.max_depth(),
        }
    }

    fn max_depth(&self) -> usize {
        // Iterative DFS; suffix paths can be as long as the longest word
        let mut max = 0;
        let mut stack = vec![(ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            for &child in self.node(id).children.values() {
                stack.push((child, depth + 1));
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn trie(words: &[&str]) -> SuffixTrie {
        SuffixTrie::from_store(WordStore::from_words(
            words.iter().map(|w| w.to_string()).collect(),
        ))
    }

    #[test]
    fn test_descend_present_and_absent() {
        let trie = trie(&["cat", "hat"]);
        assert!(trie.descend("at").is_some());
        assert!(trie.descend("cat").is_some());
        assert!(trie.descend("dog").is_none());
    }

    #[test]
    fn test_empty_suffix_resolves_to_root() {
        let trie = trie(&["cat"]);
        assert_eq!(trie.descend(""), Some(ROOT));
        assert!(trie.node(ROOT).word_indices.is_empty());
    }

    #[test]
    fn test_from_reader_builds_full_index() {
        let trie = SuffixTrie::from_reader(Cursor::new("cat\nhat\nrat\n")).unwrap();
        let at = trie.node(trie.descend("at").unwrap());
        assert_eq!(at.word_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_stats() {
        let trie = trie(&["cat", "hat"]);
        let stats = trie.stats();
        assert_eq!(stats.word_count, 2);
        // "cat": c, ca, cat, a, at, t; "hat": h, ha, hat; plus the root
        assert_eq!(stats.node_count, 10);
        // 3 suffixes per word
        assert_eq!(stats.suffix_count, 6);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_trie_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SuffixTrie>();
    }
}
