//! Word store: the ordered dictionary backing the trie
//!
//! Words are loaded once from a newline-delimited source. Each non-blank line
//! (after trimming surrounding whitespace) becomes one word, identified by
//! its load-order index. Duplicate lines are kept: the same word appearing
//! twice yields two indices.

use crate::index::types::WordIndex;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered sequence of dictionary words, referenced by index everywhere else
#[derive(Debug, Default)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    /// Load words from a dictionary file, one per line.
    ///
    /// Fails if the file cannot be opened or read; the caller decides whether
    /// that is fatal.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open dictionary file {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not read dictionary file {}", path.display()))
    }

    /// Load words from any line-oriented reader.
    ///
    /// Lines are trimmed of leading/trailing whitespace (space, tab, CR, LF,
    /// form feed, vertical tab); blank lines are skipped. Surviving lines get
    /// sequential indices starting at 0.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.context("Failed to read dictionary line")?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(Self { words })
    }

    /// Build a store directly from owned words (used by tests and benches).
    /// Assumes the words are already trimmed and non-empty.
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Number of words loaded
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`, or `None` if out of range
    pub fn word(&self, index: WordIndex) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /// Iterate over `(index, word)` pairs in load order
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (i as WordIndex, w.as_str()))
    }
}
