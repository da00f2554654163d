// Copyright (c) 2025 Prefix Matcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the trie strategy's child tables.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;
const MIN_LOAD_FACTOR: f64 = 0.1;
const MAX_LOAD_FACTOR: f64 = 1.0;

/// Configuration for the per-node segment tables of the trie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Number of child slots allocated for a node's first child.
    /// Must be a power of two.
    pub initial_child_capacity: usize,

    /// Maximum fraction of occupied slots before a table doubles.
    /// Ignored when `fixed_capacity` is set.
    pub max_load_factor: f64,

    /// Never grow child tables. A segment whose home slot is already taken by
    /// another segment fails construction with a structural conflict.
    pub fixed_capacity: bool,
}

impl TrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of child slots, rounded up to a power of two.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Requested slot count (at least 1).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_child_capacity(mut self, capacity: usize) -> Self {
        self.initial_child_capacity = capacity.max(1).next_power_of_two();
        self
    }

    /// Sets the maximum load factor before a child table grows.
    ///
    /// # Arguments
    ///
    /// * `max_load_factor` - The maximum load factor (0.1 to 1.0). NaN keeps
    ///   the default.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = if max_load_factor.is_nan() {
            DEFAULT_MAX_LOAD_FACTOR
        } else {
            max_load_factor.clamp(MIN_LOAD_FACTOR, MAX_LOAD_FACTOR)
        };
        self
    }

    /// Sets whether child tables keep their initial capacity forever.
    pub fn with_fixed_capacity(mut self, fixed_capacity: bool) -> Self {
        self.fixed_capacity = fixed_capacity;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            initial_child_capacity: 8,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            fixed_capacity: false,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !self.initial_child_capacity.is_power_of_two() {
            return Err(ConfigError::ValueOutOfRange {
                key: "initial_child_capacity".to_string(),
                message: format!("{} is not a power of two", self.initial_child_capacity),
            });
        }

        // Also rejects NaN.
        if !(MIN_LOAD_FACTOR..=MAX_LOAD_FACTOR).contains(&self.max_load_factor) {
            return Err(ConfigError::ValueOutOfRange {
                key: "max_load_factor".to_string(),
                message: format!(
                    "{} is outside [{MIN_LOAD_FACTOR}, {MAX_LOAD_FACTOR}]",
                    self.max_load_factor
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_normalizes() {
        let config = TrieConfig::new()
            .with_initial_child_capacity(5)
            .with_max_load_factor(3.0)
            .with_fixed_capacity(true);

        assert_eq!(config.initial_child_capacity, 8);
        assert_eq!(config.max_load_factor, 1.0);
        assert!(config.fixed_capacity);
        assert!(config.validate().is_ok());

        assert_eq!(TrieConfig::new().with_initial_child_capacity(0).initial_child_capacity, 1);
        assert_eq!(TrieConfig::new().with_max_load_factor(f64::NAN).max_load_factor, 0.75);
        assert_eq!(TrieConfig::new().with_max_load_factor(0.0).max_load_factor, 0.1);
    }

    #[test]
    fn test_validation() {
        assert!(TrieConfig::default().validate().is_ok());

        let config = TrieConfig {
            initial_child_capacity: 6,
            ..TrieConfig::default()
        };
        assert!(config.validate().is_err());

        for max_load_factor in [0.0, 0.05, 2.0, f64::NAN, f64::INFINITY] {
            let config = TrieConfig {
                max_load_factor,
                ..TrieConfig::default()
            };
            assert!(config.validate().is_err(), "{max_load_factor}");
        }
    }
}
