use crate::wordlist::trie::node::TrieNode;

/// Pre-order walk over every word stored below a node, in edge order.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Words<'a> {
        Words { stack: vec![root] }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // reversed so the smallest edge is popped first
            self.stack.extend(node.children().rev().map(|(_, child)| child));
            if let Some(word) = node.terminal() {
                return Some(word);
            }
        }
        None
    }
}
