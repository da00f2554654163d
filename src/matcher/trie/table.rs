// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Open-addressed child table keyed by path segment.
//!
//! Tables start empty and allocate on the first insert. Slots are found by
//! linear probing from the segment's home slot. In fixed mode every segment
//! must sit in its home slot, so probing never has to move past it.

use super::config::TrieConfig;
use super::hash::{home_slot, segment_hash};

#[derive(Debug, Clone)]
struct Slot {
    hash: u32,
    segment: Box<str>,
    node: usize,
}

/// A segment could not be placed in a fixed-capacity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotConflict;

/// Maps segments to trie node indices.
#[derive(Debug, Clone, Default)]
pub(crate) struct SegmentTable {
    slots: Vec<Option<Slot>>,
    len: usize,
}

impl SegmentTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Looks up the child node registered for `segment`.
    #[inline]
    pub(crate) fn get(&self, segment: &str) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let hash = segment_hash(segment);
        let capacity = self.slots.len();
        let mut index = home_slot(hash, capacity);
        for _ in 0..capacity {
            match &self.slots[index] {
                None => return None,
                Some(slot) if slot.hash == hash && &*slot.segment == segment => {
                    return Some(slot.node)
                }
                Some(_) => index = (index + 1) & (capacity - 1),
            }
        }
        None
    }

    /// Reports whether `segment` could be inserted without touching the table.
    pub(crate) fn check_insert(
        &self,
        segment: &str,
        config: &TrieConfig,
    ) -> Result<(), SlotConflict> {
        if !config.fixed_capacity || self.slots.is_empty() {
            return Ok(());
        }
        let index = home_slot(segment_hash(segment), self.slots.len());
        match self.slots[index] {
            Some(_) => Err(SlotConflict),
            None => Ok(()),
        }
    }

    /// Registers `node` under `segment`, which must not already be present.
    pub(crate) fn insert(
        &mut self,
        segment: &str,
        node: usize,
        config: &TrieConfig,
    ) -> Result<(), SlotConflict> {
        debug_assert!(self.get(segment).is_none());
        if self.slots.is_empty() {
            self.slots = empty_slots(config.initial_child_capacity.max(1).next_power_of_two());
        }

        let hash = segment_hash(segment);
        let slot = Slot {
            hash,
            segment: segment.into(),
            node,
        };

        if config.fixed_capacity {
            self.check_insert(segment, config)?;
            let index = home_slot(hash, self.slots.len());
            self.slots[index] = Some(slot);
            self.len += 1;
            return Ok(());
        }

        let needed = self.len + 1;
        if needed as f64 > self.slots.len() as f64 * config.max_load_factor {
            self.grow(needed, config.max_load_factor);
        }
        self.place(slot);
        self.len += 1;
        Ok(())
    }

    fn grow(&mut self, needed: usize, max_load_factor: f64) {
        let mut capacity = self.slots.len() * 2;
        while needed as f64 > capacity as f64 * max_load_factor {
            capacity *= 2;
        }
        tracing::trace!(
            from = self.slots.len(),
            to = capacity,
            "Growing segment table"
        );

        let old = std::mem::replace(&mut self.slots, empty_slots(capacity));
        for slot in old.into_iter().flatten() {
            self.place(slot);
        }
    }

    // Caller guarantees at least one free slot.
    fn place(&mut self, slot: Slot) {
        let mask = self.slots.len() - 1;
        let mut index = home_slot(slot.hash, self.slots.len());
        while self.slots[index].is_some() {
            index = (index + 1) & mask;
        }
        self.slots[index] = Some(slot);
    }
}

fn empty_slots(capacity: usize) -> Vec<Option<Slot>> {
    (0..capacity).map(|_| None).collect()
}
