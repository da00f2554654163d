// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Sorted-scan strategy.
//!
//! Same layout as the linear scan, but directory prefixes are ordered once by
//! descending length, then ascending byte order. The first prefix the path
//! starts with is therefore the longest, and the scan stops there.

use std::cmp::Reverse;

use super::error::MatcherResult;
use super::exact::ExactTable;
use super::path::{is_directory, validate_path};
use super::PathMatcher;

/// Exact table plus directory prefixes sorted longest first.
#[derive(Debug, Clone)]
pub struct SortedPrefixMatcher<T> {
    exact: ExactTable<T>,
    prefixes: Vec<(Box<str>, usize)>,
}

impl<T> SortedPrefixMatcher<T> {
    /// Builds the matcher from a pattern to value mapping.
    ///
    /// # Errors
    ///
    /// * `InvalidPattern` - a pattern is empty or does not begin with `/`.
    /// * `DuplicatePattern` - the same pattern appears twice.
    pub fn new<I, K>(mapping: I) -> MatcherResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mapping = mapping.into_iter();
        let mut exact = ExactTable::with_capacity(mapping.size_hint().0);
        let mut prefixes = Vec::new();

        for (pattern, value) in mapping {
            let pattern = pattern.into();
            let slot = exact.insert(&pattern, value)?;
            if is_directory(&pattern) {
                prefixes.push((pattern.into_boxed_str(), slot));
            }
        }
        prefixes.sort_unstable_by(|(a, _), (b, _)| {
            (Reverse(a.len()), a).cmp(&(Reverse(b.len()), b))
        });

        tracing::debug!(
            strategy = "sorted",
            exact = exact.len(),
            prefixes = prefixes.len(),
            "Built path matcher"
        );

        Ok(Self { exact, prefixes })
    }

    /// Directory prefixes in scan order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.prefixes.iter().map(|(prefix, _)| &**prefix)
    }
}

impl<T> PathMatcher<T> for SortedPrefixMatcher<T> {
    fn match_path(&self, path: &str) -> MatcherResult<Option<&T>> {
        validate_path(path)?;
        if let Some(value) = self.exact.get(path) {
            return Ok(Some(value));
        }
        Ok(self
            .prefixes
            .iter()
            .find(|(prefix, _)| path.starts_with(&**prefix))
            .map(|(_, slot)| self.exact.value(*slot)))
    }

    fn len(&self) -> usize {
        self.exact.len()
    }

    fn name(&self) -> &'static str {
        "SortedPrefixMatcher"
    }
}
