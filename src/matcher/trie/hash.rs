// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Segment hashing for the per-node child tables.

/// Multiplier of the polynomial rolling hash.
const SEGMENT_HASH_MULTIPLIER: u32 = 31;

/// Computes `h = h * 31 + c` over the characters of a segment, wrapping on
/// overflow.
///
/// `c` is a Unicode scalar value, so segments with characters outside the
/// Basic Multilingual Plane hash differently from a UTF-16 code unit hash.
///
/// Segments are short and hashed on every trie step, so this stays a plain
/// loop rather than going through `std::hash::Hasher`.
#[inline]
pub fn segment_hash(segment: &str) -> u32 {
    segment.chars().fold(0u32, |h, c| {
        h.wrapping_mul(SEGMENT_HASH_MULTIPLIER)
            .wrapping_add(c as u32)
    })
}

/// Maps a hash onto a power-of-two table.
#[inline]
pub fn home_slot(hash: u32, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (hash as usize) & (capacity - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(segment_hash(""), 0);
        assert_eq!(segment_hash("a"), 97);
        assert_eq!(segment_hash("ab"), 97 * 31 + 98);
        // Same value as the usual string hash for "hello".
        assert_eq!(segment_hash("hello"), 99_162_322);
    }

    #[test]
    fn test_wraps_on_long_segments() {
        let long = "z".repeat(1_000);
        // Must not panic in debug builds.
        let _ = segment_hash(&long);
    }

    #[test]
    fn test_home_slot_masks() {
        assert_eq!(home_slot(97, 8), 1);
        assert_eq!(home_slot(8, 8), 0);
        assert_eq!(home_slot(u32::MAX, 16), 15);
        assert_eq!(home_slot(12_345, 1), 0);
    }
}
