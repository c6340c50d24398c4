use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use typed_builder::TypedBuilder;

use crate::error::Result;

/// Tuning knobs for wildcard searches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop the walk once this many words have matched.
    #[builder(default, setter(strip_option))]
    pub max_results: Option<usize>,
    /// Skip (node, pattern position) states that were already expanded.
    #[builder(default = true)]
    pub memoize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { max_results: None, memoize: true }
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub fn from_json_str(json: &str) -> Result<SearchConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<SearchConfig> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
