// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-file path resolution.
//!
//! A declared path selects one of three addressing schemes by prefix:
//! `@root/` resolves against the discovered project root, a leading
//! `/` is taken as already absolute, and anything else resolves
//! against the directory of the declaring file.

use std::path::{Path, PathBuf};

/// Prefix selecting project-root-relative addressing.
pub const ROOT_PREFIX: &str = "@root/";

/// Default manifest file that anchors the project root.
pub const DEFAULT_ROOT_MARKER: &str = "composer.json";

/// Parent directories searched for the manifest before giving up.
const MAX_ASCENT: usize = 10;

/// Build a `@root/`-prefixed declaration from a root-relative path.
pub fn root(path: &str) -> String {
    format!("{ROOT_PREFIX}{}", path.trim_start_matches('/'))
}

/// Discovers the project root for `@root/` declarations.
///
/// The working-directory fallback is injected at construction so
/// callers can pin resolution to a synthetic tree.
#[derive(Debug, Clone)]
pub struct ProjectLocator {
    marker: String,
    working_dir: Option<PathBuf>,
}

impl Default for ProjectLocator {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_MARKER)
    }
}

impl ProjectLocator {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            working_dir: std::env::current_dir().ok(),
        }
    }

    /// Replace the working-directory fallback.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Drop the working-directory fallback. Discovery then fails when
    /// no manifest is within reach.
    pub fn without_working_dir(mut self) -> Self {
        self.working_dir = None;
        self
    }

    /// Nearest ancestor of `start` containing the marker file.
    ///
    /// The ascent is bounded: analysis may run against files deep in a
    /// nested source tree and must not scan the whole filesystem. Past
    /// the bound, resolution falls back to the working directory.
    pub fn find_root(&self, start: &Path) -> Option<PathBuf> {
        let mut dir = start;
        for _ in 0..MAX_ASCENT {
            if dir.join(&self.marker).is_file() {
                return Some(dir.to_path_buf());
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        tracing::debug!(
            "no {} within {} levels of {}, falling back to working directory",
            self.marker,
            MAX_ASCENT,
            start.display()
        );
        self.working_dir.clone()
    }
}

/// Resolve a declared path against its addressing scheme.
///
/// `current_file` is the file declaring the attribute. Returns `None`
/// when no scheme can produce an absolute path.
pub fn resolve(raw: &str, current_file: &Path, locator: &ProjectLocator) -> Option<PathBuf> {
    if let Some(rest) = raw.strip_prefix(ROOT_PREFIX) {
        let start = current_file.parent()?;
        let project_root = locator.find_root(start)?;
        return Some(project_root.join(rest.trim_start_matches('/')));
    }

    if raw.starts_with('/') {
        return Some(PathBuf::from(raw));
    }

    let dir = current_file.parent()?;
    Some(dir.join(raw))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
