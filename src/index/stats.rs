use crate::index::SuffixTrie;
use anyhow::Result;
use std::path::Path;

/// Display statistics for a dictionary's suffix trie
pub fn show_stats(dict_path: &Path) -> Result<()> {
    let trie = SuffixTrie::from_path(dict_path)?;
    let stats = trie.stats();

    println!("Suffix Trie Statistics");
    println!("======================");
    println!();
    println!("Dictionary:       {}", dict_path.display());
    println!("Word count:       {}", stats.word_count);
    println!("Node count:       {}", stats.node_count);
    println!("Suffixes indexed: {}", stats.suffix_count);
    println!("Max suffix depth: {}", stats.max_depth);

    Ok(())
}
