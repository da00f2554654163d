// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact-match table shared by every strategy.
//!
//! Each registered value is stored once, in registration order. Strategies refer
//! to values by their slot index, which lets the prefix tier point at the same
//! value without requiring `T: Clone`.

use fnv::FnvHashMap;

use super::error::{MatcherError, MatcherResult};
use super::path::validate_pattern;

/// Exact pattern to value lookup backed by an FNV hash map.
#[derive(Debug, Clone)]
pub(crate) struct ExactTable<T> {
    index: FnvHashMap<Box<str>, usize>,
    values: Vec<T>,
}

impl<T> ExactTable<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Validates and registers a pattern, returning the slot of its value.
    pub(crate) fn insert(&mut self, pattern: &str, value: T) -> MatcherResult<usize> {
        validate_pattern(pattern)?;
        if self.index.contains_key(pattern) {
            return Err(MatcherError::DuplicatePattern(pattern.to_string()));
        }
        let slot = self.values.len();
        self.values.push(value);
        self.index.insert(pattern.into(), slot);
        Ok(slot)
    }

    #[inline]
    pub(crate) fn get(&self, path: &str) -> Option<&T> {
        self.index.get(path).map(|&slot| &self.values[slot])
    }

    #[inline]
    pub(crate) fn value(&self, slot: usize) -> &T {
        &self.values[slot]
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}
