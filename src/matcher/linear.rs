// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Linear-scan strategy.
//!
//! Directory prefixes are kept in registration order and every query scans all
//! of them, keeping the longest one the path starts with. Query cost is
//! O(P) in the number of directory prefixes.

use super::error::MatcherResult;
use super::exact::ExactTable;
use super::path::{is_directory, validate_path};
use super::PathMatcher;

/// Exact table plus an unsorted list of directory prefixes.
#[derive(Debug, Clone)]
pub struct LinearPrefixMatcher<T> {
    exact: ExactTable<T>,
    prefixes: Vec<(Box<str>, usize)>,
}

impl<T> LinearPrefixMatcher<T> {
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

        tracing::debug!(
            strategy = "linear",
            exact = exact.len(),
            prefixes = prefixes.len(),
            "Built path matcher"
        );

        Ok(Self { exact, prefixes })
    }
}

impl<T> PathMatcher<T> for LinearPrefixMatcher<T> {
    fn match_path(&self, path: &str) -> MatcherResult<Option<&T>> {
        validate_path(path)?;
        if let Some(value) = self.exact.get(path) {
            return Ok(Some(value));
        }

        // Two distinct prefixes of equal length cannot both prefix `path`,
        // so strict `>` never has to break a tie.
        let mut longest: Option<(usize, usize)> = None;
        for (prefix, slot) in &self.prefixes {
            let longer = longest.map_or(true, |(len, _)| prefix.len() > len);
            if longer && path.starts_with(&**prefix) {
                longest = Some((prefix.len(), *slot));
            }
        }

        Ok(longest.map(|(_, slot)| self.exact.value(slot)))
    }

    fn len(&self) -> usize {
        self.exact.len()
    }

    fn name(&self) -> &'static str {
        "LinearPrefixMatcher"
    }
}
