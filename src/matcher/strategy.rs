// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Runtime selection of a matching strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The available matcher implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherStrategy {
    /// Scan every directory prefix
    Linear,
    /// Scan directory prefixes longest first
    Sorted,
    /// Walk a segment trie
    #[default]
    Trie,
    /// Ordered-map baseline
    BTree,
}

impl MatcherStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [MatcherStrategy; 4] = [
        MatcherStrategy::Linear,
        MatcherStrategy::Sorted,
        MatcherStrategy::Trie,
        MatcherStrategy::BTree,
    ];

    /// Lowercase name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatcherStrategy::Linear => "linear",
            MatcherStrategy::Sorted => "sorted",
            MatcherStrategy::Trie => "trie",
            MatcherStrategy::BTree => "btree",
        }
    }
}

impl fmt::Display for MatcherStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatcherStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatcherStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("Unknown matcher strategy {s:?}, expected one of linear, sorted, trie, btree")
            })
    }
}
