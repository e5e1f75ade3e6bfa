// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Marker model: the three test attributes and their validation.

use crate::expr;
use crate::host::{AttrNode, ClassLookup};

/// Attribute naming a behavioural-test file.
pub const BEHAVIOUR: &str = "Behaviour";
/// Attribute naming a unit-test file.
pub const UNIT: &str = "Unit";
/// Attribute justifying the absence of a test.
pub const NO_TEST: &str = "NoTest";

/// Keyword accepted for the path argument of `Behaviour`/`Unit`.
pub const PATH_KEYWORD: &str = "filePath";
/// Keyword accepted for the description argument of `NoTest`.
pub const DESCRIPTION_KEYWORD: &str = "description";

/// Namespace separator in the host language's qualified names.
pub const NS_SEPARATOR: char = '\\';

/// Last segment of a possibly-qualified name.
///
/// Shared by attribute recognition and class scope matching so the two
/// call sites cannot drift.
pub fn short_name(name: &str) -> &str {
    name.rsplit(NS_SEPARATOR).next().unwrap_or(name)
}

/// The three marker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Behaviour,
    Unit,
    NoTest,
}

impl MarkerKind {
    /// Recognize an attribute name: the bare short name or any
    /// qualified form whose last segment matches.
    pub fn recognize(attribute_name: &str) -> Option<Self> {
        match short_name(attribute_name) {
            BEHAVIOUR => Some(MarkerKind::Behaviour),
            UNIT => Some(MarkerKind::Unit),
            NO_TEST => Some(MarkerKind::NoTest),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerKind::Behaviour => BEHAVIOUR,
            MarkerKind::Unit => UNIT,
            MarkerKind::NoTest => NO_TEST,
        }
    }
}

/// A marker whose arguments passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Behaviour { path: String },
    Unit { path: String },
    NoTest { description: String },
}

/// Why a recognized attribute failed shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    /// `NoTest` without a usable description argument.
    MissingDescription,
    /// `NoTest` description blank after trimming.
    EmptyDescription,
    /// `Behaviour`/`Unit` without a path argument.
    MissingPath,
    /// Path argument present but not statically evaluable.
    UnresolvablePath,
}

/// First recognized attribute on the method, in declaration order.
///
/// Later recognized attributes are inert for this rule.
pub fn first_recognized(attrs: &[AttrNode]) -> Option<(MarkerKind, &AttrNode)> {
    attrs
        .iter()
        .find_map(|attr| MarkerKind::recognize(&attr.name).map(|kind| (kind, attr)))
}

/// Validate a recognized attribute's arguments into a marker.
pub fn validate(
    kind: MarkerKind,
    attr: &AttrNode,
    classes: &dyn ClassLookup,
) -> Result<Marker, Defect> {
    match kind {
        MarkerKind::NoTest => {
            let value = attr
                .arg(DESCRIPTION_KEYWORD)
                .ok_or(Defect::MissingDescription)?;
            let description =
                expr::literal(value).map_err(|_| Defect::MissingDescription)?;
            if description.trim().is_empty() {
                return Err(Defect::EmptyDescription);
            }
            Ok(Marker::NoTest { description })
        }
        MarkerKind::Behaviour => {
            let path = path_argument(attr, classes)?;
            Ok(Marker::Behaviour { path })
        }
        MarkerKind::Unit => {
            let path = path_argument(attr, classes)?;
            Ok(Marker::Unit { path })
        }
    }
}

fn path_argument(attr: &AttrNode, classes: &dyn ClassLookup) -> Result<String, Defect> {
    let value = attr.arg(PATH_KEYWORD).ok_or(Defect::MissingPath)?;
    expr::literal_or_class_file(value, classes).map_err(|_| Defect::UnresolvablePath)
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
