// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics emitted by the rule, formatted for host consumption.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Stable identifier for each violation the rule can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Identifier {
    MissingAttribute,
    MissingDescription,
    EmptyDescription,
    MissingFilePath,
    InvalidFilePath,
}

impl Identifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Identifier::MissingAttribute => "missingAttribute",
            Identifier::MissingDescription => "missingDescription",
            Identifier::EmptyDescription => "emptyDescription",
            Identifier::MissingFilePath => "missingFilePath",
            Identifier::InvalidFilePath => "invalidFilePath",
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violation tied to a method's declaration line.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Stable identifier for tooling.
    pub identifier: Identifier,

    /// Human-readable message.
    pub message: String,

    /// 1-based declaration line.
    pub line: u32,

    /// File attribution (set when the diagnostic names a file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Suggested or expected file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Diagnostic {
    pub fn new(identifier: Identifier, message: impl Into<String>, line: u32) -> Self {
        Self {
            identifier,
            message: message.into(),
            line,
            file: None,
            tip: None,
        }
    }

    /// Attribute the diagnostic to a file.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach an expected-file tip.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
