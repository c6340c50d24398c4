use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{info, warn};
use rayon::prelude::*;
use typed_builder::TypedBuilder;

use crate::alphabet::strip_whitespace;
use crate::error::{PatternError, Result};
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;

/// Layout of a word list file. By default every line is one word; with a
/// delimiter the word is taken from `word_column` (0 if unset).
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line(&self, line: &str) -> Option<String> {
        match self.delimiter {
            None => Some(strip_whitespace(line)),
            Some(delimiter) => line
                .split(delimiter)
                .nth(self.word_column.unwrap_or(0))
                .map(strip_whitespace),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub words: usize,
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
    config: SearchConfig,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn with_config(config: SearchConfig) -> Wordlist {
        Wordlist { trie: Trie::new(), config }
    }

    delegate! {
        to self.trie {
            pub fn insert(&mut self, word: &str) -> bool;
            pub fn contains(&self, word: &str) -> bool;
            pub fn next_characters(&self, prefix: &str) -> Option<BTreeSet<char>>;
            pub fn words(&self) -> Words<'_>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist> {
        let mut wl = Wordlist::new();
        wl.load_file(path, format)?;
        Ok(wl)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<LoadStats> {
        info!("Reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        self.load(BufReader::new(file), format)
    }

    /// Adds one word per non-blank line. Whitespace inside a word is
    /// dropped. Read errors are returned as they occur.
    pub fn load<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadStats> {
        let start = Instant::now();
        let mut stats = LoadStats::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match format.parse_line(&line) {
                Some(word) if self.trie.insert(&word) => stats.words += 1,
                _ => {
                    warn!("Skipping line #{}: {:?}", number + 1, line);
                    stats.skipped += 1;
                }
            }
        }

        info!("Read {} words in {:.3}s [{} skipped], {} distinct",
              stats.words, start.elapsed().as_secs_f64(), stats.skipped, self.trie.len());
        Ok(stats)
    }

    pub fn search(&self, pattern: &str) -> Option<BTreeSet<String>> {
        self.try_search(pattern).ok()
    }

    pub fn try_search(&self, pattern: &str) -> std::result::Result<BTreeSet<String>, PatternError> {
        self.trie.try_search_with(pattern, &self.config)
    }

    /// Runs independent searches in parallel over the shared trie.
    pub fn search_many<S>(&self, patterns: &[S]) -> Vec<Option<BTreeSet<String>>>
        where S: AsRef<str> + Sync {
        patterns.par_iter()
            .map(|x| self.search(x.as_ref()))
            .collect()
    }
}
