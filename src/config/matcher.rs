//! Matcher configuration module.
//!
//! Selects the matching strategy and tunes the trie's child tables.

use super::{ConfigResult, Validate};
use crate::matcher::{MatcherStrategy, TrieConfig};
use serde::{Deserialize, Serialize};

/// Matcher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatcherSection {
    /// Strategy used to build the matcher
    pub strategy: MatcherStrategy,

    /// Child table settings for the trie strategy
    pub trie: TrieConfig,
}

impl Validate for MatcherSection {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()
    }
}
