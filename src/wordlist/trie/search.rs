use std::collections::{BTreeSet, HashSet};

use derive_new::new;
use log::debug;
use metrics::{counter, increment_counter};

use crate::error::PatternError;
use crate::pattern::{Element, Pattern};
use crate::wordlist::trie::node::{NodeId, TrieNode};
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;

/// One pending step of the walk: the word spelled so far ends at `node`
/// and `idx` elements of the pattern are consumed.
#[derive(new, Debug)]
struct Frame {
    node: NodeId,
    idx: usize,
    word: String,
}

fn push_children(stack: &mut Vec<Frame>, node: &TrieNode, idx: usize, word: &str) {
    // reversed so the smallest letter is popped first
    for (c, child) in node.children().rev() {
        let mut next = String::with_capacity(word.len() + c.len_utf8());
        next.push_str(word);
        next.push(c);
        stack.push(Frame::new(child, idx, next));
    }
}

impl Trie {
    /// Words matching `pattern`, where `?` stands for one character and `*`
    /// for any run of characters. `None` means the pattern itself is invalid.
    pub fn search(&self, pattern: &str) -> Option<BTreeSet<String>> {
        self.try_search(pattern).ok()
    }

    pub fn try_search(&self, pattern: &str) -> Result<BTreeSet<String>, PatternError> {
        self.try_search_with(pattern, &SearchConfig::default())
    }

    pub fn try_search_with(&self, pattern: &str, config: &SearchConfig) -> Result<BTreeSet<String>, PatternError> {
        let pattern = Pattern::parse(pattern)?;
        Ok(self.search_pattern(&pattern, config))
    }

    pub fn search_pattern(&self, pattern: &Pattern, config: &SearchConfig) -> BTreeSet<String> {
        increment_counter!("wordsearch_searches");
        let limit = config.max_results.unwrap_or(usize::MAX);
        let mut results = BTreeSet::new();
        if limit == 0 {
            return results;
        }

        if pattern.is_exact() {
            let word = pattern.to_string();
            if self.contains(&word) {
                results.insert(word);
            }
            return results;
        }

        if pattern.min_len() > self.longest_word_len() {
            return results;
        }

        let elements = pattern.elements();
        // fewest characters still needed once `idx` elements are consumed
        let mut needed = vec![0; elements.len() + 1];
        for (idx, element) in elements.iter().enumerate().rev() {
            needed[idx] = needed[idx + 1] + usize::from(*element != Element::AnyMany);
        }

        let mut visited = HashSet::new();
        let mut stack = vec![Frame::new(NodeId::ROOT, 0, String::new())];
        let mut expanded: u64 = 0;

        while let Some(Frame { node: id, idx, word }) = stack.pop() {
            // a node spells exactly one word, so a repeated state adds nothing new
            if config.memoize && !visited.insert((id, idx)) {
                continue;
            }
            let node = &self.arena[id];
            if node.depth() + needed[idx] > self.longest_word_len() {
                continue;
            }
            expanded += 1;

            match elements.get(idx) {
                None => {
                    if node.is_terminal() && !word.is_empty() {
                        results.insert(word);
                        if results.len() >= limit {
                            break;
                        }
                    }
                }
                Some(Element::Literal(c)) => {
                    if let Some(child) = node.get_child(*c) {
                        let mut next = word;
                        next.push(*c);
                        stack.push(Frame::new(child, idx + 1, next));
                    }
                }
                Some(Element::AnyOne) => push_children(&mut stack, node, idx + 1, &word),
                Some(Element::AnyMany) => {
                    push_children(&mut stack, node, idx, &word);
                    stack.push(Frame::new(id, idx + 1, word));
                }
            }
        }

        counter!("wordsearch_states_visited", expanded);
        debug!("search {:?}: {} states expanded, {} matches", pattern.to_string(), expanded, results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use maplit::btreeset;

    use crate::error::PatternError;
    use crate::wordlist::trie::searchconfig::SearchConfig;
    use crate::wordlist::trie::trie::Trie;

    fn cats() -> Trie {
        vec!["cat", "cats", "car"].into_iter().collect()
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn exact_membership() {
        let trie = cats();
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
    }

    #[test]
    fn question_mark_matches_one() {
        let trie = cats();
        assert_eq!(trie.search("ca?"), Some(set(&["car", "cat"])));
        assert_eq!(trie.search("?a?"), Some(set(&["car", "cat"])));
        assert_eq!(trie.search("????"), Some(set(&["cats"])));
        assert_eq!(trie.search("c?"), Some(btreeset! {}));
    }

    #[test]
    fn asterisk_matches_any_run() {
        let trie = cats();
        assert_eq!(trie.search("ca*"), Some(set(&["car", "cat", "cats"])));
        assert_eq!(trie.search("*"), Some(set(&["car", "cat", "cats"])));
        assert_eq!(trie.search("*s"), Some(set(&["cats"])));
        assert_eq!(trie.search("c*t*"), Some(set(&["cat", "cats"])));
        assert_eq!(trie.search("**A**"), Some(set(&["car", "cat", "cats"])));
        assert_eq!(trie.search("cat*"), Some(set(&["cat", "cats"])));
    }

    #[test]
    fn asterisk_at_a_leaf_matches_empty_run() {
        let trie = cats();
        assert_eq!(trie.search("cats*"), Some(set(&["cats"])));
        assert_eq!(trie.search("car*"), Some(set(&["car"])));
        assert_eq!(trie.search("*cats*"), Some(set(&["cats"])));
    }

    #[test]
    fn mixed_wildcards() {
        let trie: Trie = vec!["path", "peach", "pitch", "push", "ph", "pa"].into_iter().collect();
        assert_eq!(trie.search("p***h"), Some(set(&["path", "peach", "pitch", "push", "ph"])));
        assert_eq!(trie.search("p?*h"), Some(set(&["path", "peach", "pitch", "push"])));
        assert_eq!(trie.search("p*?h"), Some(set(&["path", "peach", "pitch", "push"])));
        assert_eq!(trie.search("pa?*"), Some(set(&["path"])));
        assert_eq!(trie.search("?"), Some(btreeset! {}));
    }

    #[test]
    fn no_match_is_empty_not_invalid() {
        let trie = cats();
        assert_eq!(trie.search("z?"), Some(btreeset! {}));
        assert_eq!(trie.search("dog"), Some(btreeset! {}));
        assert_eq!(Trie::new().search("*"), Some(btreeset! {}));
    }

    #[test]
    fn invalid_pattern_is_none() {
        let trie = cats();
        assert_eq!(trie.search("p@"), None);
        assert_eq!(trie.search(""), None);
        assert_eq!(trie.try_search("c t"), Err(PatternError::InvalidCharacter { character: ' ', position: 1 }));
        assert_eq!(trie.try_search(""), Err(PatternError::Empty));
    }

    #[test]
    fn exact_pattern_needs_terminal() {
        let trie = cats();
        assert_eq!(trie.search("CAT"), Some(set(&["cat"])));
        assert_eq!(trie.search("ca"), Some(btreeset! {}));
    }

    #[test]
    fn unicode_case_folds_like_insert() {
        let mut trie = Trie::new();
        trie.insert("İstanbul");
        trie.insert("ΟΔΟΣA");

        assert!(trie.contains("İstanbul"));
        assert_eq!(trie.search("İstanbul"), Some(set(&["i\u{307}stanbul"])));
        assert_eq!(trie.search("İ*"), Some(set(&["i\u{307}stanbul"])));
        assert_eq!(trie.search("ΟΔΟΣ?"), Some(set(&["οδοσa"])));
        assert_eq!(trie.search("οδοσA"), Some(set(&["οδοσa"])));
    }

    #[test]
    fn digits_are_literals() {
        let trie: Trie = vec!["r2d2", "c3po", "r2"].into_iter().collect();
        assert_eq!(trie.search("r2*"), Some(set(&["r2", "r2d2"])));
        assert_eq!(trie.search("?3??"), Some(set(&["c3po"])));
    }

    #[test]
    fn memoization_does_not_change_results() {
        let words = vec!["banana", "bandana", "cabana", "ban", "an", "a", "nab", "anna"];
        let trie: Trie = words.into_iter().collect();
        let plain = SearchConfig::builder().memoize(false).build();
        for pattern in ["*a*n*a*", "*an*", "?a*", "*a", "b*a*a", "*", "a*a"] {
            assert_eq!(
                trie.try_search_with(pattern, &plain).unwrap(),
                trie.try_search(pattern).unwrap(),
                "pattern {}", pattern
            );
        }
        assert_eq!(trie.search("b*a*a"), Some(set(&["banana", "bandana"])));
    }

    #[test]
    fn max_results_caps_matches() {
        let trie: Trie = vec!["aa", "ab", "ac", "ad"].into_iter().collect();
        let config = SearchConfig::builder().max_results(2).build();
        assert_eq!(trie.try_search_with("a?", &config).unwrap(), set(&["aa", "ab"]));

        let config = SearchConfig::builder().max_results(0).build();
        assert!(trie.try_search_with("a?", &config).unwrap().is_empty());
    }

    #[test]
    fn patterns_longer_than_any_word_match_nothing() {
        let trie = cats();
        assert_eq!(trie.search("?????"), Some(btreeset! {}));
        assert_eq!(trie.search("*c?????*"), Some(btreeset! {}));
        assert_eq!(trie.search("?*???"), Some(set(&["cats"])));
        assert_eq!(trie.search("c*???"), Some(set(&["cats"])));
    }

    #[test]
    fn deep_words_do_not_overflow() {
        let long = "a".repeat(5_000);
        let mut trie = Trie::new();
        trie.insert(&long);
        trie.insert("ab");
        assert_eq!(trie.search("a*a").map(|x| x.len()), Some(1));
        assert_eq!(trie.search("*b"), Some(set(&["ab"])));
    }
}
