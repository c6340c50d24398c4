use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

use derive_new::new;

/// Position of a node inside its [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// A single character slot of the trie.
///
/// Children are kept in a sorted map so that expanding "every child" always
/// visits letters in the same order.
#[derive(new, PartialEq, Eq)]
pub struct TrieNode {
    letter: Option<char>,
    depth: usize,
    #[new(default)]
    is_terminal: bool,
    #[new(default)]
    children: BTreeMap<char, NodeId>,
}

impl TrieNode {
    /// `None` only for the root.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn set_terminal(&mut self, is_terminal: bool) {
        self.is_terminal = is_terminal;
    }

    pub fn get_child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_letters(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(c, id)| (*c, *id))
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("depth", &self.depth)
            .field("children", &self.child_letters().collect::<Vec<_>>())
            .finish()
    }
}

/// Owns every node of one trie. Nodes refer to their children by [`NodeId`]
/// and never to their parent, so the structure is a strict tree.
#[derive(Debug, PartialEq, Eq)]
pub struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl Default for NodeArena {
    fn default() -> Self {
        NodeArena { nodes: vec![TrieNode::new(None, 0)] }
    }
}

impl NodeArena {
    pub fn new() -> NodeArena {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: the root always exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TrieNode> {
        self.nodes.get_mut(id.0)
    }

    /// Creates a child of `parent` for `c` unless one already exists.
    /// Returns whether a node was created; an existing child is left untouched.
    pub fn add_child(&mut self, parent: NodeId, c: char) -> bool {
        let depth = match self.nodes.get(parent.0) {
            Some(node) if node.get_child(c).is_none() => node.depth + 1,
            _ => return false,
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(Some(c), depth));
        self.nodes[parent.0].children.insert(c, id);
        true
    }

    pub fn get_or_create_child(&mut self, parent: NodeId, c: char) -> Option<NodeId> {
        self.add_child(parent, c);
        self.get(parent)?.get_child(c)
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TrieNode;

    fn index(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }
}
