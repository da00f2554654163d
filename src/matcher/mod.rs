// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Longest-prefix path matching.
//!
//! A matcher is built once from a mapping of URL-path patterns to values and
//! then resolves request paths. A pattern ending in `/` is a directory prefix
//! and matches itself and every path nested below it; any other pattern only
//! matches itself. An exact match always wins; otherwise the longest matching
//! directory prefix does.
//!
//! Four interchangeable strategies implement [`PathMatcher`]:
//!
//! - [`LinearPrefixMatcher`] scans every directory prefix.
//! - [`SortedPrefixMatcher`] scans prefixes longest first and stops early.
//! - [`TriePathMatcher`] walks a segment trie, independent of prefix count.
//! - [`BTreePrefixMatcher`] uses an ordered map, kept as a baseline.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use prefix_matcher::matcher::{MatcherStrategy, PathMatcher, PrefixMatcher};
//!
//! let mapping = HashMap::from([
//!     ("/".to_string(), 'A'),
//!     ("/products/".to_string(), 'B'),
//!     ("/products/3".to_string(), 'C'),
//!     ("/admin/products/".to_string(), 'D'),
//! ]);
//!
//! let matcher = PrefixMatcher::build(MatcherStrategy::Trie, mapping).unwrap();
//!
//! assert_eq!(matcher.match_path("/products/3").unwrap(), Some(&'C'));
//! assert_eq!(matcher.match_path("/products/4").unwrap(), Some(&'B'));
//! assert_eq!(matcher.match_path("/admin/products/create").unwrap(), Some(&'D'));
//! assert_eq!(matcher.match_path("/unknown").unwrap(), Some(&'A'));
//! assert!(matcher.match_path("unknown").is_err());
//! ```

mod btree;
mod error;
mod exact;
mod linear;
pub mod path;
mod sorted;
mod strategy;
pub mod trie;

#[cfg(test)]
mod tests;

pub use btree::BTreePrefixMatcher;
pub use error::{MatcherError, MatcherResult};
pub use linear::LinearPrefixMatcher;
pub use sorted::SortedPrefixMatcher;
pub use strategy::MatcherStrategy;
pub use trie::{TrieBuilder, TrieConfig, TriePathMatcher};

/// Resolves request paths against a fixed set of patterns.
pub trait PathMatcher<T> {
    /// Returns the value registered for `path`, or `None` if neither an exact
    /// pattern nor any directory prefix matches.
    ///
    /// # Errors
    ///
    /// `InvalidPath` if `path` is empty or does not begin with `/`.
    fn match_path(&self, path: &str) -> MatcherResult<Option<&T>>;

    /// Number of registered patterns.
    fn len(&self) -> usize;

    /// Whether no patterns are registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable strategy name.
    fn name(&self) -> &'static str;
}

/// A matcher of any strategy, chosen at runtime.
#[derive(Debug, Clone)]
pub enum PrefixMatcher<T> {
    /// Linear scan over directory prefixes
    Linear(LinearPrefixMatcher<T>),
    /// Longest-first scan over directory prefixes
    Sorted(SortedPrefixMatcher<T>),
    /// Segment trie
    Trie(TriePathMatcher<T>),
    /// Ordered-map baseline
    BTree(BTreePrefixMatcher<T>),
}

impl<T> PrefixMatcher<T> {
    /// Builds a matcher of the given strategy with default trie settings.
    pub fn build<I, K>(strategy: MatcherStrategy, mapping: I) -> MatcherResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Self::build_with_config(strategy, &TrieConfig::default(), mapping)
    }

    /// Builds a matcher of the given strategy.
    ///
    /// `trie_config` only applies to [`MatcherStrategy::Trie`].
    pub fn build_with_config<I, K>(
        strategy: MatcherStrategy,
        trie_config: &TrieConfig,
        mapping: I,
    ) -> MatcherResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Ok(match strategy {
            MatcherStrategy::Linear => Self::Linear(LinearPrefixMatcher::new(mapping)?),
            MatcherStrategy::Sorted => Self::Sorted(SortedPrefixMatcher::new(mapping)?),
            MatcherStrategy::Trie => {
                Self::Trie(TriePathMatcher::with_config(trie_config.clone(), mapping)?)
            }
            MatcherStrategy::BTree => Self::BTree(BTreePrefixMatcher::new(mapping)?),
        })
    }

    /// The strategy this matcher was built with.
    pub fn strategy(&self) -> MatcherStrategy {
        match self {
            Self::Linear(_) => MatcherStrategy::Linear,
            Self::Sorted(_) => MatcherStrategy::Sorted,
            Self::Trie(_) => MatcherStrategy::Trie,
            Self::BTree(_) => MatcherStrategy::BTree,
        }
    }

    fn inner(&self) -> &dyn PathMatcher<T> {
        match self {
            Self::Linear(m) => m,
            Self::Sorted(m) => m,
            Self::Trie(m) => m,
            Self::BTree(m) => m,
        }
    }
}

impl<T> PathMatcher<T> for PrefixMatcher<T> {
    #[inline]
    fn match_path(&self, path: &str) -> MatcherResult<Option<&T>> {
        self.inner().match_path(path)
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
