//! Behavioral specs for marker recognition and shape validation.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Every in-scope public method must self-declare its test status.
#[test]
fn missing_attribute_names_the_alternatives() {
    let project = Project::new();
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");

    let diagnostics = project.check(
        &rule,
        "src/UserService.php",
        &class,
        &public_method("createUser"),
    );
    assert_eq!(diagnostics.len(), 1);
    let message = &diagnostics[0].message;
    assert!(message.contains("App\\Service\\UserService::createUser()"));
    assert!(message.contains("Behaviour"));
    assert!(message.contains("Unit"));
    assert!(message.contains("NoTest"));
}

/// An empty justification is equivalent to no justification.
#[test]
fn no_test_description_requirements() {
    let project = Project::new();
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");
    let source = "src/UserService.php";

    let bare = public_method("getConfig").with_attr(no_test_bare());
    assert_eq!(
        identifiers(&project.check(&rule, source, &class, &bare)),
        [Identifier::MissingDescription]
    );

    let blank = public_method("getConfig").with_attr(no_test(" \t "));
    assert_eq!(
        identifiers(&project.check(&rule, source, &class, &blank)),
        [Identifier::EmptyDescription]
    );

    let justified = public_method("getConfig").with_attr(no_test("configuration accessor"));
    assert!(project.check(&rule, source, &class, &justified).is_empty());
}

/// The description may arrive as a keyword argument.
#[test]
fn no_test_keyword_description_is_accepted() {
    let project = Project::new();
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");

    let method = public_method("getConfig").with_attr(AttrNode::with_args(
        "NoTest",
        vec![AttrArg::keyword(
            "description",
            Expr::literal("configuration accessor"),
        )],
    ));
    assert!(project
        .check(&rule, "src/UserService.php", &class, &method)
        .is_empty());
}

/// With `NoTest` declared first, the `Behaviour` path is never checked.
#[test]
fn first_marker_wins() {
    let project = Project::new();
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");

    let method = public_method("multipleAttributes")
        .with_attr(no_test("covered by acceptance suite"))
        .with_attr(behaviour("features/nonexistent.feature"));
    assert!(project
        .check(&rule, "src/UserService.php", &class, &method)
        .is_empty());
}

/// The first marker's defects are reported even when a later marker
/// would have validated.
#[test]
fn first_marker_defect_still_reported() {
    let project = Project::new();
    project.file("src/features/user_creation.feature", "Feature: user creation");
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");

    let method = public_method("multipleAttributes")
        .with_attr(no_test_bare())
        .with_attr(behaviour("features/user_creation.feature"));
    assert_eq!(
        identifiers(&project.check(&rule, "src/UserService.php", &class, &method)),
        [Identifier::MissingDescription]
    );
}

/// Attributes are recognized under qualified names too.
#[test]
fn qualified_and_suffixed_names_are_recognized() {
    let project = Project::new();
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");

    for name in [
        "Acme\\Attest\\Attribute\\NoTest",
        "Vendor\\Markers\\NoTest",
        "NoTest",
    ] {
        let method = public_method("getConfig").with_attr(AttrNode::with_args(
            name,
            vec![AttrArg::positional(Expr::literal("configuration accessor"))],
        ));
        assert!(
            project
                .check(&rule, "src/UserService.php", &class, &method)
                .is_empty(),
            "{name} should be recognized"
        );
    }
}

/// Unrelated attributes neither satisfy nor confuse the rule.
#[test]
fn unrelated_attributes_are_ignored() {
    let project = Project::new();
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");

    let method = public_method("createUser")
        .with_attr(AttrNode::new("Deprecated"))
        .with_attr(AttrNode::new("Route"));
    assert_eq!(
        identifiers(&project.check(&rule, "src/UserService.php", &class, &method)),
        [Identifier::MissingAttribute]
    );
}

/// A path marker without its argument is a shape defect.
#[test]
fn path_markers_require_an_argument() {
    let project = Project::new();
    let rule = project.rule(&["*Service"]);
    let class = service("UserService");
    let source = "src/UserService.php";

    for name in ["Behaviour", "Unit"] {
        let method = public_method("createUser").with_attr(AttrNode::new(name));
        let diagnostics = project.check(&rule, source, &class, &method);
        assert_eq!(identifiers(&diagnostics), [Identifier::MissingFilePath]);
        assert!(diagnostics[0].message.contains(name));
    }
}
