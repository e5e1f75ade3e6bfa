// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule configuration parsing.
//!
//! Handles attest.toml parsing with unknown-key warnings.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::resolve::DEFAULT_ROOT_MARKER;

/// Default config file name.
pub const CONFIG_FILE: &str = "attest.toml";

/// Keys the parser understands; anything else warns.
const KNOWN_KEYS: &[&str] = &["checked_classes", "excluded_methods", "root_marker"];

/// Rule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Class names, `*` globs, or supertype names subject to the rule.
    /// Empty means nothing is checked.
    #[serde(default)]
    pub checked_classes: Vec<String>,

    /// Method names never checked.
    #[serde(default = "RuleConfig::default_excluded_methods")]
    pub excluded_methods: Vec<String>,

    /// Manifest file that anchors `@root/` paths.
    #[serde(default = "RuleConfig::default_root_marker")]
    pub root_marker: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            checked_classes: Vec::new(),
            excluded_methods: Self::default_excluded_methods(),
            root_marker: Self::default_root_marker(),
        }
    }
}

impl RuleConfig {
    /// Lifecycle and string-conversion hooks are exempt by default.
    /// `__invoke` is deliberately not here: callable objects carry
    /// behavior worth testing.
    fn default_excluded_methods() -> Vec<String> {
        ["__construct", "__destruct", "__clone", "__toString"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn default_root_marker() -> String {
        DEFAULT_ROOT_MARKER.to_string()
    }

    /// Parse configuration from a TOML string.
    ///
    /// Unknown keys warn for forward compatibility; they never fail
    /// the load.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| Error::Config {
            message: e.to_string(),
            path: None,
        })?;

        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                tracing::warn!("unknown config key `{key}` ignored");
            }
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| Error::Config {
                message: e.to_string(),
                path: None,
            })
    }

    /// Load configuration from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|err| match err {
            Error::Config { message, .. } => Error::Config {
                message,
                path: Some(path.to_path_buf()),
            },
            other => other,
        })
    }

    pub fn is_excluded(&self, method: &str) -> bool {
        self.excluded_methods.iter().any(|name| name == method)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
