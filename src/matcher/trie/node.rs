// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the segment trie.
//!
//! Nodes live in an arena owned by the trie and refer to their children by
//! index. The node for a directory prefix holds the slot of the value bound to
//! that prefix, if any.

use super::table::SegmentTable;

/// A node in the segment trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Slot in the exact table of the value bound to this prefix
    pub(crate) value: Option<usize>,

    /// Child nodes keyed by segment
    pub(crate) children: SegmentTable,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self {
            value: None,
            children: SegmentTable::new(),
        }
    }
}
