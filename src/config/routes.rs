//! Route table loading.
//!
//! A route table is the pattern to value mapping a matcher is built from. It is
//! read from a TOML file with a `[routes]` table or a JSON object with a
//! `routes` member:
//!
//! ```toml
//! [routes]
//! "/" = "home"
//! "/products/" = "catalog"
//! "/products/3" = "featured"
//! ```
//!
//! Patterns are not checked here; the matcher validates them on construction.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigResult;
use crate::error::config::ConfigError;
use crate::matcher::{MatcherResult, MatcherStrategy, PrefixMatcher, TrieConfig};

/// Pattern to value mapping loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteTable {
    /// Registered patterns and their values
    pub routes: BTreeMap<String, String>,
}

impl RouteTable {
    /// Reads a route table, choosing the format from the file extension.
    ///
    /// # Errors
    ///
    /// * `FileNotFound` - the file does not exist.
    /// * `FileReadError` - the file could not be read.
    /// * `ParseError` - unsupported extension or malformed content.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(format!("{}: {e}", path.display())))?;

        let table = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            Some("json") => Self::from_json(&content)?,
            _ => {
                return Err(ConfigError::ParseError(format!(
                    "Unsupported route table extension for: {path:?}"
                )))
            }
        };

        tracing::debug!(routes = table.len(), path = %path.display(), "Loaded route table");
        Ok(table)
    }

    /// Parses a route table from TOML text.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Parses a route table from JSON text.
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no patterns.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over the registered patterns in byte order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    /// Builds a matcher over this table.
    pub fn build(
        &self,
        strategy: MatcherStrategy,
        trie_config: &TrieConfig,
    ) -> MatcherResult<PrefixMatcher<String>> {
        PrefixMatcher::build_with_config(strategy, trie_config, self.routes.clone())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            routes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
