// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Constrained evaluation of attribute-argument expressions.
//!
//! Attribute arguments arrive as expression trees. Only a closed subset
//! evaluates to a string: literals, concatenations of literals, and
//! class references standing in for their declaring file. Everything
//! else fails closed so that dynamic content is never accepted as a
//! test reference.

use crate::host::ClassLookup;

/// Closed set of expression forms the extractor understands.
///
/// Hosts map their own AST onto these variants; any node that does not
/// fit maps to [`Expr::Opaque`].
#[derive(Debug, Clone)]
pub enum Expr {
    /// A string literal.
    Literal(String),
    /// Binary concatenation of two sub-expressions.
    Concat(Box<Expr>, Box<Expr>),
    /// A class reference used as a file designator (`SomeTest::class`).
    ClassRef(String),
    /// A form the rule does not evaluate: variable, call, interpolation.
    Opaque,
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn concat(left: Expr, right: Expr) -> Self {
        Expr::Concat(Box::new(left), Box::new(right))
    }

    pub fn class_ref(name: impl Into<String>) -> Self {
        Expr::ClassRef(name.into())
    }
}

/// The expression has no statically known string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expression does not evaluate to a constant string")]
pub struct Unresolvable;

/// Concatenation nesting cap. Deeper trees fail extraction.
const MAX_DEPTH: usize = 64;

/// Evaluate a literal-or-concatenation expression to its string value.
///
/// Class references are rejected here; descriptions never name files.
pub fn literal(expr: &Expr) -> Result<String, Unresolvable> {
    eval(expr, None, 0)
}

/// Evaluate an expression that may also be a top-level class reference,
/// which resolves to the referenced type's declaring file path.
pub fn literal_or_class_file(
    expr: &Expr,
    classes: &dyn ClassLookup,
) -> Result<String, Unresolvable> {
    eval(expr, Some(classes), 0)
}

fn eval(
    expr: &Expr,
    classes: Option<&dyn ClassLookup>,
    depth: usize,
) -> Result<String, Unresolvable> {
    if depth > MAX_DEPTH {
        return Err(Unresolvable);
    }
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Concat(left, right) => {
            // Concatenation operands must themselves be literal content;
            // a class reference is only meaningful as the whole argument.
            let mut value = eval(left, None, depth + 1)?;
            value.push_str(&eval(right, None, depth + 1)?);
            Ok(value)
        }
        Expr::ClassRef(name) => {
            let classes = classes.ok_or(Unresolvable)?;
            let qualified = classes.qualify(name).ok_or(Unresolvable)?;
            let file = classes.declaring_file(&qualified).ok_or(Unresolvable)?;
            file.into_os_string().into_string().map_err(|_| Unresolvable)
        }
        Expr::Opaque => Err(Unresolvable),
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
