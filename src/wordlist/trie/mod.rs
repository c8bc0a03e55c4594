pub mod trie;
pub mod search;
pub mod multithreaded_search;
pub mod searchconfig;
pub mod node;
pub mod iterators;

mod row;

pub use self::search::Candidate;
pub use self::trie::Trie;
