// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered-map baseline strategy.
//!
//! Directory prefixes live in a `BTreeMap`. Every prefix of a path sorts at or
//! before the path, and a prefix sorts before anything it prefixes, so walking
//! the keys `<= path` backwards reaches the longest matching prefix first.
//! Worst case is still linear; this strategy exists to cross-check the others.

use std::collections::BTreeMap;
use std::ops::Bound;

use super::error::MatcherResult;
use super::exact::ExactTable;
use super::path::{is_directory, validate_path};
use super::PathMatcher;

/// Exact table plus an ordered map of directory prefixes.
#[derive(Debug, Clone)]
pub struct BTreePrefixMatcher<T> {
    exact: ExactTable<T>,
    prefixes: BTreeMap<Box<str>, usize>,
}

impl<T> BTreePrefixMatcher<T> {
    /// Builds the matcher from a pattern to value mapping.
    pub fn new<I, K>(mapping: I) -> MatcherResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mapping = mapping.into_iter();
        let mut exact = ExactTable::with_capacity(mapping.size_hint().0);
        let mut prefixes = BTreeMap::new();

        for (pattern, value) in mapping {
            let pattern = pattern.into();
            let slot = exact.insert(&pattern, value)?;
            if is_directory(&pattern) {
                prefixes.insert(pattern.into_boxed_str(), slot);
            }
        }

        tracing::debug!(
            strategy = "btree",
            exact = exact.len(),
            prefixes = prefixes.len(),
            "Built path matcher"
        );

        Ok(Self { exact, prefixes })
    }

    fn longest_prefix(&self, path: &str) -> Option<usize> {
        self.prefixes
            .range::<str, _>((Bound::Unbounded, Bound::Included(path)))
            .rev()
            .find(|(prefix, _)| path.starts_with(&***prefix))
            .map(|(_, slot)| *slot)
    }
}

impl<T> PathMatcher<T> for BTreePrefixMatcher<T> {
    fn match_path(&self, path: &str) -> MatcherResult<Option<&T>> {
        validate_path(path)?;
        if let Some(value) = self.exact.get(path) {
            return Ok(Some(value));
        }
        Ok(self.longest_prefix(path).map(|slot| self.exact.value(slot)))
    }

    fn len(&self) -> usize {
        self.exact.len()
    }

    fn name(&self) -> &'static str {
        "BTreePrefixMatcher"
    }
}
