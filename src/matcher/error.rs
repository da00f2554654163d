// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for path matcher construction and lookup.

/// Errors that can occur while building or querying a path matcher.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MatcherError {
    /// A registered pattern is empty or does not begin with `/`.
    #[error("Pattern doesn't begin with '/': {0:?}")]
    InvalidPattern(String),

    /// A queried path is empty or does not begin with `/`.
    #[error("Path doesn't begin with '/': {0:?}")]
    InvalidPath(String),

    /// The same pattern was supplied more than once.
    #[error("Pattern registered more than once: {0}")]
    DuplicatePattern(String),

    /// The trie configuration is out of range.
    #[error("Invalid trie configuration: {0}")]
    InvalidConfig(String),

    /// A fixed-capacity child table could not place a segment.
    #[error("Segment {segment:?} of pattern {pattern:?} conflicts with an existing child slot")]
    StructuralConflict {
        /// The pattern being inserted.
        pattern: String,
        /// The segment that could not be placed.
        segment: String,
    },
}

/// Result type for matcher operations
pub type MatcherResult<T> = std::result::Result<T, MatcherError>;
