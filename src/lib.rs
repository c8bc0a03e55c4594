//! Fuzzy dictionary lookup.
//!
//! Dictionary words go into a [`Trie`]; a query is answered by a single walk
//! of the trie that carries one Levenshtein row per node and skips every
//! subtree that can no longer come within the distance bound.
//!
//! ```
//! let index = trie_suggest::build(vec!["cat", "cats", "bat", "hat"]);
//! assert_eq!(trie_suggest::search(&index, "cet", 1), vec!["bat", "cat", "hat"]);
//! ```

pub mod alphabet;
pub mod error;
pub mod levenshtein;
pub mod wordlist;

pub use crate::wordlist::trie::{Candidate, Trie};

/// Builds an index over already-normalized words.
pub fn build<'f, I>(words: I) -> Trie
    where I: IntoIterator<Item = &'f str> {
    Trie::build(words)
}

/// Indexed words within `max_distance` edits of `query`, in trie order.
pub fn search(index: &Trie, query: &str, max_distance: isize) -> Vec<String> {
    index.search(query, max_distance)
}
