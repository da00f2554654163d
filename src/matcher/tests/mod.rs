// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Differential and property-based tests run against every strategy.


use super::{MatcherStrategy, PathMatcher, PrefixMatcher};

/// Builds one matcher per strategy from the same mapping.
pub(super) fn all_matchers<T: Clone>(mapping: &[(String, T)]) -> Vec<PrefixMatcher<T>> {
    MatcherStrategy::ALL
        .into_iter()
        .map(|strategy| PrefixMatcher::build(strategy, mapping.iter().cloned()).unwrap())
        .collect()
}

/// Longest-prefix resolution by brute force over the raw mapping.
pub(super) fn brute_force<'a, T>(mapping: &'a [(String, T)], path: &str) -> Option<&'a T> {
    let mut best: Option<&'a (String, T)> = None;
    for entry in mapping {
        let pattern = entry.0.as_str();
        let matches = pattern == path || (pattern.ends_with('/') && path.starts_with(pattern));
        if matches && best.map_or(true, |b| b.0.len() < pattern.len()) {
            best = Some(entry);
        }
    }
    best.map(|(_, value)| value)
}

/// Asserts that a matcher agrees with brute force for `path`.
pub(super) fn assert_resolves<T>(matcher: &PrefixMatcher<T>, mapping: &[(String, T)], path: &str)
where
    T: PartialEq + std::fmt::Debug,
{
    assert_eq!(
        matcher.match_path(path).unwrap(),
        brute_force(mapping, path),
        "{} resolved {path:?} differently",
        matcher.name()
    );
}
