// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::expr::Expr;
use crate::host::{AttrArg, AttrNode, ClassLookup, MethodNode, Visibility};

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Lookup backed by a fixed table of known classes.
#[derive(Debug, Default)]
pub struct FixedClasses {
    qualified: BTreeMap<String, String>,
    files: BTreeMap<String, PathBuf>,
}

impl FixedClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class under both its short and qualified names.
    pub fn class(mut self, qualified: &str, file: impl Into<PathBuf>) -> Self {
        let short = crate::marker::short_name(qualified).to_string();
        self.qualified.insert(short, qualified.to_string());
        self.qualified
            .insert(qualified.to_string(), qualified.to_string());
        self.files.insert(qualified.to_string(), file.into());
        self
    }
}

impl ClassLookup for FixedClasses {
    fn qualify(&self, name: &str) -> Option<String> {
        self.qualified.get(name).cloned()
    }

    fn declaring_file(&self, qualified: &str) -> Option<PathBuf> {
        self.files.get(qualified).cloned()
    }
}

pub fn public_method(name: &str) -> MethodNode {
    MethodNode::new(name, Visibility::Public, 10)
}

pub fn behaviour(path: &str) -> AttrNode {
    AttrNode::with_args("Behaviour", vec![AttrArg::positional(Expr::literal(path))])
}

pub fn unit(path: &str) -> AttrNode {
    AttrNode::with_args("Unit", vec![AttrArg::positional(Expr::literal(path))])
}

pub fn no_test(description: &str) -> AttrNode {
    AttrNode::with_args(
        "NoTest",
        vec![AttrArg::positional(Expr::literal(description))],
    )
}

pub fn no_test_bare() -> AttrNode {
    AttrNode::new("NoTest")
}
