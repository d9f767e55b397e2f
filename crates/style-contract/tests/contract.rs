//! End-to-end checks of the default rule set over built stylesheet trees.

use style_contract::{
    default_rule_set, rule, Component, Combinator, Selector, SelectorGroup, Stylesheet,
    RELATIVE_TO_PARENT_CLASS,
};

fn relative_to_parent_selector() -> Selector {
    SelectorGroup::new(vec![
        Component::Nesting,
        Component::Combinator(Combinator::Child),
        Component::Class(RELATIVE_TO_PARENT_CLASS.to_string()),
    ])
    .into()
}

#[test]
fn clean_component_stylesheet_passes() {
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("menu"))
                .decl("display", "flex")
                .decl("background-color", "white")
                .nested(
                    rule(Selector::nested_class("item"))
                        .decl("flex-grow", "1")
                        .decl("margin", "0"),
                ),
        )
        .rule(
            rule(Selector::class("item"))
                .decl("color", "black")
                .decl("font-size", "1rem"),
        )
        .build();

    let result = default_rule_set().check(&sheet).unwrap();
    assert!(result.is_clean(), "{}", result.format_report());
}

#[test]
fn stacking_context_scenarios() {
    // root z-index without position: relative
    let sheet = Stylesheet::builder()
        .rule(rule(Selector::class("bad")).decl("z-index", "0"))
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].rule, "parent-child-policy");
    assert!(result.violations[0]
        .message
        .contains("missing `position: relative;`"));

    // nested z-index without a stacking context in the root block
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("bad"))
                .nested(rule(Selector::nested_class("x")).decl("z-index", "0")),
        )
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0]
        .message
        .contains("missing stacking context"));

    // the exception granted: a complete non invasive stacking context
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("good"))
                .decl("position", "relative")
                .decl("z-index", "0"),
        )
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert!(result.is_clean());
}

#[test]
fn intrinsic_size_exception() {
    let sheet = Stylesheet::builder()
        .rule(rule(Selector::class("logo")).important_decl("width", "100px"))
        .build();
    assert!(default_rule_set().check(&sheet).unwrap().is_clean());

    let sheet = Stylesheet::builder()
        .rule(rule(Selector::class("logo")).decl("width", "100px"))
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].rule, "layout-related-properties");
}

#[test]
fn aspect_ratio_exception() {
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("video"))
                .decl("padding-bottom", "56%")
                .decl("height", "0"),
        )
        .build();
    assert!(default_rule_set().check(&sheet).unwrap().is_clean());

    let sheet = Stylesheet::builder()
        .rule(rule(Selector::class("video")).decl("height", "0"))
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].message.contains("`height`"));
}

#[test]
fn pointer_events_double_report_prevention() {
    // valid context: the policy is satisfied and the classification rule
    // does not flag `pointer-events` as a stray prop either
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("overlay"))
                .decl("pointer-events", "none")
                .nested(rule(Selector::nested_class("button")).decl("pointer-events", "auto")),
        )
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert!(result.is_clean(), "{}", result.format_report());

    // invalid context: exactly one violation, from the policy rule only
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("overlay"))
                .nested(rule(Selector::nested_class("button")).decl("pointer-events", "auto")),
        )
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].rule, "parent-child-policy");
}

#[test]
fn position_static_is_not_reported_twice() {
    // the classification rule would flag `position: static` in a nested
    // rule as a non-layout prop; the policy rule accounts for it instead
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("card"))
                .decl("position", "relative")
                .nested(rule(relative_to_parent_selector()).decl("position", "static")),
        )
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert!(result.is_clean(), "{}", result.format_report());

    // with a broken context, every violation still comes from the policy
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("card"))
                .nested(rule(Selector::nested_class("inner")).decl("position", "static")),
        )
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert_eq!(result.violations.len(), 2);
    assert!(result
        .violations
        .iter()
        .all(|v| v.rule == "parent-child-policy"));
}

#[test]
fn violations_are_sorted_by_source_span() {
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("card"))
                .decl_at("width", "100%", 12, 3)
                .nested(rule(Selector::nested_class("media")).decl_at("color", "red", 3, 5)),
        )
        .build();
    let result = default_rule_set().check(&sheet).unwrap();
    assert_eq!(result.violations.len(), 2);
    assert_eq!(result.violations[0].span.line, 3);
    assert_eq!(result.violations[1].span.line, 12);
}

#[test]
fn checking_twice_yields_the_identical_sequence() {
    let sheet = Stylesheet::builder()
        .rule(
            rule(Selector::class("menu"))
                .decl("width", "100%")
                .nested(
                    rule(Selector::nested_class("item"))
                        .decl("z-index", "1")
                        .decl("flex-grow", "1")
                        .decl("color", "red"),
                ),
        )
        .build();
    let set = default_rule_set();
    let first = set.check(&sheet).unwrap();
    let second = set.check(&sheet).unwrap();
    assert_eq!(first.violations, second.violations);
    assert!(!first.violations.is_empty());
}

#[test]
fn rule_metadata_is_exposed_to_hosts() {
    for rule in style_contract::default_rules() {
        assert!(!rule.name().is_empty());
        assert!(!rule.code().is_empty());
        assert!(!rule.description().is_empty());
        assert!(rule.messages().keys().count() > 0);
    }

    let layout = style_contract::LayoutRelatedProperties::new();
    let requirements = style_contract::StyleRule::css_requirements(&layout);
    assert!(requirements.resolved_custom_properties);
    assert!(!requirements.normalized_css);

    let policy = style_contract::ParentChildPolicy::new();
    assert!(style_contract::StyleRule::css_requirements(&policy).normalized_css);
}
