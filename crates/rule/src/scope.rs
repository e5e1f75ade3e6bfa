// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Class scope matching.
//!
//! Decides whether a type is subject to the rule. Checking is opt-in:
//! an empty pattern list matches nothing.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{Error, Result};
use crate::marker::short_name;

/// One configured class pattern, compiled for matching.
#[derive(Debug, Clone)]
enum Pattern {
    /// Exact type, short, or supertype name.
    Exact(String),
    /// Glob where `*` means "zero or more characters".
    Wildcard(Regex),
}

/// Compiled matcher over the configured class patterns.
#[derive(Debug, Clone, Default)]
pub struct ScopeMatcher {
    patterns: Vec<Pattern>,
}

impl ScopeMatcher {
    /// Compile configured patterns. A glob that fails to compile is a
    /// configuration error, not a silently dropped pattern.
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for raw in patterns {
            if raw.contains('*') {
                compiled.push(Pattern::Wildcard(wildcard_regex(raw)?));
            } else {
                compiled.push(Pattern::Exact(raw.clone()));
            }
        }
        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a type is subject to the rule.
    ///
    /// A pattern matches on the fully qualified name, the short name,
    /// a whole-string wildcard match against either, or membership in
    /// the type's supertype set. Case-sensitive; first hit wins.
    pub fn matches(&self, type_name: &str, supertypes: &BTreeSet<String>) -> bool {
        let short = short_name(type_name);
        self.patterns.iter().any(|pattern| match pattern {
            Pattern::Exact(name) => {
                name == type_name || name == short || supertypes.contains(name)
            }
            Pattern::Wildcard(regex) => {
                regex.is_match(type_name) || regex.is_match(short)
            }
        })
    }
}

/// Translate a `*` glob into an anchored regex. Every character except
/// `*` stays literal.
fn wildcard_regex(pattern: &str) -> Result<Regex> {
    let escaped = regex::escape(pattern).replace(r"\*", ".*");
    Regex::new(&format!("^{escaped}$")).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
