use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

use crate::alphabet::normalize;
use crate::wordlist::index::Index;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::{NodeArena, NodeId, TrieNode};

/// A case-insensitive set of words stored as a prefix tree.
///
/// Words can be added but not removed. Mutation is not synchronized:
/// searches may run concurrently through `&Trie` only while nothing holds
/// it mutably.
#[derive(Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) arena: NodeArena,
    words: usize,
    longest: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Default::default()
    }

    /// Adds `word` (lower-cased). Returns false for an empty word.
    /// Adding a word twice changes nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut current = NodeId::ROOT;
        for c in normalize(word).chars() {
            current = match self.arena.get_or_create_child(current, c) {
                Some(child) => child,
                None => return false,
            };
        }
        if let Some(end) = self.arena.get_mut(current) {
            if !end.is_terminal() {
                end.set_terminal(true);
                self.words += 1;
                self.longest = self.longest.max(end.depth());
            }
        }
        true
    }

    /// True only if `word` itself was inserted; a bare prefix of a longer
    /// word does not count.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.get_node(&normalize(word))
            .map(|x| self.arena[x].is_terminal())
            .unwrap_or(false)
    }

    /// Letters that follow `prefix` somewhere in the trie, or `None` if no
    /// stored word starts with it. The empty prefix yields the first letters.
    pub fn next_characters(&self, prefix: &str) -> Option<BTreeSet<char>> {
        self.get_node(&normalize(prefix))
            .map(|x| self.arena[x].child_letters().collect())
    }

    /// Every stored word in sorted order.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.arena, NodeId::ROOT, String::new())
    }

    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Length in characters of the longest stored word.
    pub fn longest_word_len(&self) -> usize {
        self.longest
    }

    /// Nodes including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn root(&self) -> &TrieNode {
        &self.arena[NodeId::ROOT]
    }

    pub(crate) fn get_node(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(NodeId::ROOT, |node, c| self.arena.get(node)?.get_child(c))
    }
}

impl Index for Trie {
    fn insert(&mut self, word: &str) -> bool {
        Trie::insert(self, word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

impl<'f> FromIterator<&'f str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'f str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.insert_all(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.arena[id];
            l.entry(node);
            stack.extend(node.child_ids().rev());
        }
        l.finish()
    }
}
