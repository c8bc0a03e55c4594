use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::TrieNode;

/// Prefix tree over a dictionary.
///
/// Words are inserted as given; callers normalize them first. Once built the
/// trie is only read, so a `&Trie` can be shared across threads.
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        self.insert(word);
    }

    fn contains(&self, word: &str) -> bool {
        self.root.get_node(word)
            .and_then(|x| x.terminal())
            .map(|x| x == word)
            .unwrap_or(false)
    }
}

impl Trie {
    pub fn new() -> Trie {
        Default::default()
    }

    pub fn build<'f, I>(words: I) -> Trie
        where I: IntoIterator<Item = &'f str> {
        let mut trie = Trie::new();
        trie.add_all(words);
        trie
    }

    pub fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        if current.terminal.is_none() {
            current.terminal = Some(word.to_string());
            self.len += 1;
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Every indexed word in edge order.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.root)
    }
}

impl<'f> FromIterator<&'f str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'f str>>(iter: I) -> Self {
        Trie::build(iter)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(&x);
            stack.extend(x.children().rev().map(|(_, child)| child));
        }
        l.finish()
    }
}
