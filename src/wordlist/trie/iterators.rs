use crate::wordlist::trie::node::{NodeArena, NodeId};

/// Pre-order walk over every stored word, in sorted order.
#[derive(Debug)]
pub struct Words<'a> {
    arena: &'a NodeArena,
    stack: Vec<(NodeId, String)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(arena: &'a NodeArena, start: NodeId, prefix: String) -> Words<'a> {
        Words { arena, stack: vec![(start, prefix)] }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some((id, word)) = self.stack.pop() {
            let node = &arena[id];
            for (c, child) in node.children().rev() {
                let mut next = word.clone();
                next.push(c);
                self.stack.push((child, next));
            }
            if node.is_terminal() && !word.is_empty() {
                return Some(word);
            }
        }
        None
    }
}
