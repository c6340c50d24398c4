//! Wildcard word search over a fixed vocabulary.
//!
//! Words go into a [`Trie`]; queries use `?` for exactly one character and
//! `*` for zero or more:
//!
//! ```
//! use wordsearch::Trie;
//!
//! let trie: Trie = vec!["cat", "cats", "car"].into_iter().collect();
//! assert!(trie.contains("CAT"));
//! assert!(!trie.contains("ca"));
//!
//! let found = trie.search("ca?").unwrap();
//! assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["car", "cat"]);
//!
//! // malformed queries are told apart from queries with no matches
//! assert!(trie.search("p@").is_none());
//! assert!(trie.search("z?").unwrap().is_empty());
//! ```

pub mod alphabet;
pub mod error;
pub mod pattern;
pub mod wordlist;

pub use error::{Error, PatternError, Result};
pub use pattern::{Element, Pattern};
pub use wordlist::index::Index;
pub use wordlist::trie::searchconfig::SearchConfig;
pub use wordlist::trie::trie::Trie;
pub use wordlist::wordlist::{FileFormat, LoadStats, Wordlist};
