pub mod config;
pub mod diagnostic;
pub mod error;
pub mod expr;
pub mod host;
pub mod marker;
pub mod resolve;
pub mod rule;
pub mod scope;

pub use config::RuleConfig;
pub use diagnostic::{Diagnostic, Identifier};
pub use error::{Error, Result};
pub use expr::{Expr, Unresolvable};
pub use host::{AttrArg, AttrNode, ClassLookup, MethodNode, NoClasses, TypeContext, Visibility};
pub use marker::{Marker, MarkerKind};
pub use resolve::ProjectLocator;
pub use rule::{AnalysisContext, TestAttributeRule};
pub use scope::ScopeMatcher;

#[cfg(test)]
pub mod test_utils;
