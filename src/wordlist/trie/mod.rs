pub mod trie;
pub mod node;
pub mod iterators;
pub mod searchconfig;

mod search;
