// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The verification rule.
//!
//! Per method: scope check, attribute lookup, shape validation, path
//! resolution, existence check. Each method is judged independently;
//! the rule holds no state across invocations beyond its compiled
//! configuration.

use std::collections::BTreeSet;
use std::path::Path;

use crate::config::RuleConfig;
use crate::diagnostic::{Diagnostic, Identifier};
use crate::error::Result;
use crate::host::{ClassLookup, MethodNode, TypeContext};
use crate::marker::{self, Defect, Marker, MarkerKind};
use crate::resolve::{self, ProjectLocator};
use crate::scope::ScopeMatcher;

/// Per-invocation context supplied by the host.
pub struct AnalysisContext<'a> {
    /// File containing the method under review.
    pub file: &'a Path,
    /// Host name-resolution capability.
    pub classes: &'a dyn ClassLookup,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(file: &'a Path, classes: &'a dyn ClassLookup) -> Self {
        Self { file, classes }
    }
}

/// Checks that public methods of selected classes declare how they are
/// tested.
pub struct TestAttributeRule {
    scope: ScopeMatcher,
    excluded_methods: BTreeSet<String>,
    locator: ProjectLocator,
}

impl TestAttributeRule {
    /// Build the rule from configuration, compiling scope patterns.
    pub fn new(config: &RuleConfig) -> Result<Self> {
        Ok(Self {
            scope: ScopeMatcher::compile(&config.checked_classes)?,
            excluded_methods: config.excluded_methods.iter().cloned().collect(),
            locator: ProjectLocator::new(config.root_marker.clone()),
        })
    }

    /// Replace the project locator. Tests pin its working directory to
    /// a synthetic tree.
    pub fn with_locator(mut self, locator: ProjectLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Judge one method declaration.
    ///
    /// Out-of-scope methods yield no diagnostics: not public, excluded
    /// by name, no enclosing type, or an unmatched class.
    pub fn check_method(
        &self,
        method: &MethodNode,
        class: Option<&TypeContext>,
        ctx: &AnalysisContext<'_>,
    ) -> Vec<Diagnostic> {
        if !method.visibility.is_public() {
            return Vec::new();
        }
        if self.excluded_methods.contains(&method.name) {
            return Vec::new();
        }
        let Some(class) = class else {
            return Vec::new();
        };
        if !self.scope.matches(&class.name, &class.supertypes) {
            return Vec::new();
        }

        let Some((kind, attr)) = marker::first_recognized(&method.attrs) else {
            return vec![Diagnostic::new(
                Identifier::MissingAttribute,
                format!(
                    "Public method {}::{}() must have one of the following attributes: {}, {}, or {}.",
                    class.name,
                    method.name,
                    marker::BEHAVIOUR,
                    marker::UNIT,
                    marker::NO_TEST,
                ),
                method.line,
            )];
        };

        match marker::validate(kind, attr, ctx.classes) {
            Ok(Marker::NoTest { .. }) => Vec::new(),
            Ok(Marker::Behaviour { path } | Marker::Unit { path }) => {
                self.check_path(kind, &path, method, class, ctx)
            }
            Err(defect) => vec![defect_diagnostic(kind, defect, method, class)],
        }
    }

    /// Resolve a declared path and require the target to exist.
    fn check_path(
        &self,
        kind: MarkerKind,
        raw: &str,
        method: &MethodNode,
        class: &TypeContext,
        ctx: &AnalysisContext<'_>,
    ) -> Vec<Diagnostic> {
        let resolved = resolve::resolve(raw, ctx.file, &self.locator);

        if let Some(path) = &resolved
            && path.exists()
        {
            return Vec::new();
        }

        let mut message = format!(
            "File path specified in {} attribute on method {}::{}() does not exist: {}",
            kind.as_str(),
            class.name,
            method.name,
            raw,
        );

        // Resolution failure reads differently from a missing target.
        let diagnostic = match resolved {
            Some(path) => {
                message.push_str(&format!(" (resolved to: {})", path.display()));
                Diagnostic::new(Identifier::InvalidFilePath, message, method.line)
                    .with_file(ctx.file)
                    .with_tip(format!("Expected file: {}", path.display()))
            }
            None => {
                message.push_str(" (could not resolve path)");
                Diagnostic::new(Identifier::InvalidFilePath, message, method.line)
                    .with_file(ctx.file)
            }
        };

        vec![diagnostic]
    }
}

fn defect_diagnostic(
    kind: MarkerKind,
    defect: Defect,
    method: &MethodNode,
    class: &TypeContext,
) -> Diagnostic {
    match defect {
        Defect::MissingDescription => Diagnostic::new(
            Identifier::MissingDescription,
            format!(
                "Attribute NoTest on method {}::{}() requires a description parameter.",
                class.name, method.name,
            ),
            method.line,
        ),
        Defect::EmptyDescription => Diagnostic::new(
            Identifier::EmptyDescription,
            format!(
                "Attribute NoTest on method {}::{}() requires a non-empty description \
                 explaining why this method does not require a test.",
                class.name, method.name,
            ),
            method.line,
        ),
        Defect::MissingPath => Diagnostic::new(
            Identifier::MissingFilePath,
            format!(
                "Attribute {} on method {}::{}() requires a filePath parameter.",
                kind.as_str(),
                class.name,
                method.name,
            ),
            method.line,
        ),
        Defect::UnresolvablePath => Diagnostic::new(
            Identifier::InvalidFilePath,
            format!(
                "File path specified in {} attribute on method {}::{}() could not be \
                 evaluated to a constant string.",
                kind.as_str(),
                class.name,
                method.name,
            ),
            method.line,
        ),
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
