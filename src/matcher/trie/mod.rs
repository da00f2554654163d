// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Segment trie strategy.
//!
//! Directory prefixes are split into segments (`"/admin/products/"` becomes
//! `"admin/"`, `"products/"`) and inserted into a trie rooted at `/`. A query
//! walks the trie one segment at a time and remembers the deepest node with a
//! bound value, so construction and lookup cost O(path length) regardless of
//! how many prefixes are registered.
//!
//! Construction happens in a [`TrieBuilder`]; [`TriePathMatcher`] is the frozen
//! result and exposes no mutation.
//!
//! # Example
//!
//! ```
//! use prefix_matcher::matcher::{PathMatcher, TriePathMatcher};
//!
//! let matcher = TriePathMatcher::new(vec![
//!     ("/", "root"),
//!     ("/products/", "catalog"),
//!     ("/products/3", "product three"),
//! ])
//! .unwrap();
//!
//! assert_eq!(matcher.match_path("/products/3").unwrap(), Some(&"product three"));
//! assert_eq!(matcher.match_path("/products/4").unwrap(), Some(&"catalog"));
//! assert_eq!(matcher.match_path("/about").unwrap(), Some(&"root"));
//! ```

mod config;
mod hash;
mod node;
mod table;

pub use config::TrieConfig;
pub use hash::segment_hash;

use super::error::{MatcherError, MatcherResult};
use super::exact::ExactTable;
use super::path::{is_directory, validate_path, validate_pattern, Segments};
use super::PathMatcher;
use crate::config::Validate;
use node::TrieNode;

/// Index of the root node in the arena.
const ROOT: usize = 0;

/// Mutable construction state for a [`TriePathMatcher`].
#[derive(Debug)]
pub struct TrieBuilder<T> {
    config: TrieConfig,
    exact: ExactTable<T>,
    nodes: Vec<TrieNode>,
    prefixes: usize,
    depth: usize,
}

impl<T> TrieBuilder<T> {
    /// Creates an empty builder with default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(TrieConfig::default())
    }

    /// Creates an empty builder with the specified configuration.
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - the configuration fails validation.
    pub fn with_config(config: TrieConfig) -> MatcherResult<Self> {
        config
            .validate()
            .map_err(|e| MatcherError::InvalidConfig(e.to_string()))?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TrieConfig) -> Self {
        Self {
            config,
            exact: ExactTable::with_capacity(0),
            nodes: vec![TrieNode::new()],
            prefixes: 0,
            depth: 0,
        }
    }

    /// Registers a pattern.
    ///
    /// Every pattern goes into the exact table; directory prefixes are also
    /// bound to their trie node. A rejected pattern leaves the builder
    /// unchanged.
    ///
    /// # Errors
    ///
    /// * `InvalidPattern` - the pattern is empty or does not begin with `/`.
    /// * `DuplicatePattern` - the pattern, or its trie node, is already bound.
    /// * `StructuralConflict` - a fixed-capacity child table has no home slot
    ///   left for one of the pattern's segments.
    pub fn insert(&mut self, pattern: &str, value: T) -> MatcherResult<()> {
        validate_pattern(pattern)?;
        let directory = is_directory(pattern);
        if directory {
            self.check_placement(pattern)?;
        }

        let slot = self.exact.insert(pattern, value)?;
        if !directory {
            return Ok(());
        }

        let mut current = ROOT;
        let mut depth = 0;
        for segment in Segments::new(pattern) {
            current = match self.nodes[current].children.get(segment) {
                Some(child) => child,
                None => self.add_child(current, pattern, segment)?,
            };
            depth += 1;
        }

        self.nodes[current].value = Some(slot);
        self.prefixes += 1;
        self.depth = self.depth.max(depth);
        Ok(())
    }

    /// Walks the existing nodes for `pattern` and fails if binding it would
    /// conflict. Only the first missing segment can collide; the nodes created
    /// below it start with empty tables.
    fn check_placement(&self, pattern: &str) -> MatcherResult<()> {
        let mut current = ROOT;
        for segment in Segments::new(pattern) {
            let children = &self.nodes[current].children;
            match children.get(segment) {
                Some(child) => current = child,
                None => {
                    return children
                        .check_insert(segment, &self.config)
                        .map_err(|_| conflict(pattern, segment))
                }
            }
        }

        if self.nodes[current].value.is_some() {
            return Err(MatcherError::DuplicatePattern(pattern.to_string()));
        }
        Ok(())
    }

    fn add_child(&mut self, parent: usize, pattern: &str, segment: &str) -> MatcherResult<usize> {
        let child = self.nodes.len();
        self.nodes[parent]
            .children
            .insert(segment, child, &self.config)
            .map_err(|_| conflict(pattern, segment))?;
        self.nodes.push(TrieNode::new());
        Ok(child)
    }

    /// Freezes the builder into a read-only matcher.
    pub fn build(self) -> TriePathMatcher<T> {
        tracing::debug!(
            strategy = "trie",
            exact = self.exact.len(),
            prefixes = self.prefixes,
            nodes = self.nodes.len(),
            depth = self.depth,
            "Built path matcher"
        );

        TriePathMatcher {
            exact: self.exact,
            nodes: self.nodes.into_boxed_slice(),
            depth: self.depth,
        }
    }
}

fn conflict(pattern: &str, segment: &str) -> MatcherError {
    MatcherError::StructuralConflict {
        pattern: pattern.to_string(),
        segment: segment.to_string(),
    }
}

impl<T> Default for TrieBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact table plus a segment trie of directory prefixes.
#[derive(Debug, Clone)]
pub struct TriePathMatcher<T> {
    exact: ExactTable<T>,
    nodes: Box<[TrieNode]>,
    depth: usize,
}

impl<T> TriePathMatcher<T> {
    /// Builds the matcher from a pattern to value mapping with default
    /// configuration.
    pub fn new<I, K>(mapping: I) -> MatcherResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Self::with_config(TrieConfig::default(), mapping)
    }

    /// Builds the matcher from a pattern to value mapping.
    ///
    /// Construction aborts on an invalid configuration or the first invalid
    /// pattern; nothing partially built is returned.
    pub fn with_config<I, K>(config: TrieConfig, mapping: I) -> MatcherResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mut builder = TrieBuilder::with_config(config)?;
        for (pattern, value) in mapping {
            builder.insert(&pattern.into(), value)?;
        }
        Ok(builder.build())
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth, in segments, of the deepest bound directory prefix.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<T> PathMatcher<T> for TriePathMatcher<T> {
    fn match_path(&self, path: &str) -> MatcherResult<Option<&T>> {
        validate_path(path)?;
        if let Some(value) = self.exact.get(path) {
            return Ok(Some(value));
        }

        let mut node = &self.nodes[ROOT];
        let mut best = node.value;
        for segment in Segments::new(path) {
            match node.children.get(segment) {
                Some(child) => {
                    node = &self.nodes[child];
                    if node.value.is_some() {
                        best = node.value;
                    }
                }
                None => break,
            }
        }

        Ok(best.map(|slot| self.exact.value(slot)))
    }

    fn len(&self) -> usize {
        self.exact.len()
    }

    fn name(&self) -> &'static str {
        "TriePathMatcher"
    }
}
