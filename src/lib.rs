//! # sxi - Suffix-Membership Query Engine
//!
//! sxi answers suffix-membership queries over a fixed dictionary of words:
//! given a suffix, it returns the indices of the dictionary entries ending
//! with that suffix, or a count of them.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Dictionary loading and suffix trie construction
//! - [`query`] - Read-only suffix lookups over a built trie
//! - [`server`] - Line-oriented JSON request loop
//!
//! ## Quick Start
//!
//! ```ignore
//! use sxi::index::SuffixTrie;
//! use sxi::query::QueryEngine;
//! use std::path::Path;
//!
//! // Load a dictionary and build the trie once
//! let trie = SuffixTrie::from_path(Path::new("words.txt")).unwrap();
//!
//! // Query it any number of times
//! let engine = QueryEngine::new(&trie);
//! for &index in engine.search("at") {
//!     println!("{}", trie.store().word(index).unwrap());
//! }
//! ```
//!
//! ## Design
//!
//! Every suffix of every word is inserted into the trie, so lookup cost is
//! O(length of the query suffix) regardless of dictionary size. Construction
//! pays O(L²) node visits per word of length L. Nodes live in a flat arena
//! owned by the trie; the structure is immutable after construction, so
//! concurrent readers need no locking.

pub mod index;
pub mod query;
pub mod server;
