// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path validation and segment splitting shared by every strategy.

use std::iter::FusedIterator;

use super::error::{MatcherError, MatcherResult};

fn is_rooted(s: &str) -> bool {
    s.as_bytes().first() == Some(&b'/')
}

/// Checks that a pattern supplied at construction is non-empty and rooted.
pub fn validate_pattern(pattern: &str) -> MatcherResult<()> {
    if is_rooted(pattern) {
        Ok(())
    } else {
        Err(MatcherError::InvalidPattern(pattern.to_string()))
    }
}

/// Checks that a queried path is non-empty and rooted.
pub fn validate_path(path: &str) -> MatcherResult<()> {
    if is_rooted(path) {
        Ok(())
    } else {
        Err(MatcherError::InvalidPath(path.to_string()))
    }
}

/// Returns `true` if the pattern is a directory prefix (ends in `/`).
#[inline]
pub fn is_directory(pattern: &str) -> bool {
    pattern.ends_with('/')
}

/// Iterator over the segments of a rooted path.
///
/// Each segment keeps its trailing `/`, so `"/admin/products/create"` yields
/// `"admin/"`, `"products/"` and `"create"`. The leading `/` belongs to the
/// trie root and is never yielded; `"/"` yields nothing.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    /// Splits `path`, which must already have passed validation.
    pub fn new(path: &'a str) -> Self {
        Self {
            rest: path.get(1..).unwrap_or(""),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = match self.rest.find('/') {
            Some(slash) => slash + 1,
            None => self.rest.len(),
        };
        let (segment, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(segment)
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(path: &str) -> Vec<&str> {
        Segments::new(path).collect()
    }

    #[test]
    fn test_validation() {
        assert!(validate_pattern("/").is_ok());
        assert!(validate_pattern("/a/b").is_ok());
        assert_eq!(
            validate_pattern(""),
            Err(MatcherError::InvalidPattern(String::new()))
        );
        assert_eq!(
            validate_pattern("foo"),
            Err(MatcherError::InvalidPattern("foo".to_string()))
        );
        assert_eq!(
            validate_path("foo/"),
            Err(MatcherError::InvalidPath("foo/".to_string()))
        );
        assert!(validate_path("/foo").is_ok());
    }

    #[test]
    fn test_directory_detection() {
        assert!(is_directory("/"));
        assert!(is_directory("/products/"));
        assert!(!is_directory("/products"));
    }

    #[test]
    fn test_segments() {
        assert!(split("/").is_empty());
        assert_eq!(split("/admin/products/"), vec!["admin/", "products/"]);
        assert_eq!(
            split("/admin/products/create"),
            vec!["admin/", "products/", "create"]
        );
        assert_eq!(split("/a//b"), vec!["a/", "/", "b"]);
        assert_eq!(split("/robots.txt"), vec!["robots.txt"]);
    }

    #[test]
    fn test_segments_reassemble() {
        for path in ["/", "/a", "/a/", "/a/b/c", "//x//", "/café/menü/"] {
            let joined: String = split(path).concat();
            assert_eq!(format!("/{joined}"), path);
        }
    }
}
