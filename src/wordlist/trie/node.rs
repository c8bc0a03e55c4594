use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// One character position in the trie.
///
/// Children are owned by their parent and keyed by the edge character;
/// `terminal` holds the complete word when a word ends here.
#[derive(Default, PartialEq, Eq)]
pub struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) terminal: Option<String>,
}

impl TrieNode {
    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Children in edge order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    pub(crate) fn get_node(&self, word: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in word.chars() {
            node = node.get_child(c)?;
        }
        Some(node)
    }
}

// Children are detached onto a heap stack so dropping a long chain of
// single-child nodes does not recurse once per character.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
