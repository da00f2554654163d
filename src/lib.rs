//! Longest-prefix URL path matching.
//!
//! This library resolves request paths against a static mapping of path
//! patterns to values. Patterns ending in `/` match everything nested below
//! them; other patterns match only themselves. Exact matches win, then the
//! longest directory prefix.
//!
//! # Architecture
//!
//! - [`matcher`] holds the matcher contract and its strategies (linear scan,
//!   sorted scan, segment trie, ordered-map baseline).
//! - [`config`] loads layered settings and route tables.
//! - [`error`] gathers component errors and reports them.
//!
//! Matchers are built once and never mutated, so a built matcher can be shared
//! across threads behind an `Arc` without locking.

pub mod config;
pub mod error;
pub mod matcher;

#[cfg(test)]
pub(crate) mod tests;

pub use matcher::{MatcherError, MatcherStrategy, PathMatcher, PrefixMatcher};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
