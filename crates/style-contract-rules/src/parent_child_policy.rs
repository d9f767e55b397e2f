//! Rule enforcing the contracts between nested declarations and their
//! governing root rules.
//!
//! # Rationale
//!
//! Several declarations only behave when the parent sets up a context for
//! them: `z-index` needs a stacking context, `position: absolute` needs a
//! positioned parent, flex and grid child properties need the matching
//! `display`. Each contract is a declarative trigger/required relation; a
//! nested declaration activating a relation obliges every governing root
//! block to carry the required declarations.

use style_contract_core::structure::{nested_rules, with_root_rules};
use style_contract_core::PropertyMatcher::{Property, PropertyWithValue, PropertyWithValues};
use style_contract_core::{
    check_child_parent_relation, find_decls, CheckContext, CssRequirements, Declaration,
    InteractionAllowance, Message, MessageCatalog, PreconditionError, PropertyTable, RuleRelation,
    Severity, StyleRule, Stylesheet, Violation, FLEX_CHILD_PROPS, FLEX_OR_GRID_CHILD_PROPS,
    GRID_CHILD_PROPS,
};
use tracing::debug;

/// Rule code for parent-child-policy.
pub const CODE: &str = "SC002";

/// Rule name for parent-child-policy.
pub const NAME: &str = "parent-child-policy";

/// Class name that must select nested `position: static` declarations.
pub const RELATIVE_TO_PARENT_CLASS: &str = "relativeToParent";

const VALID_STACKING_CONTEXT_IN_ROOT: RuleRelation = RuleRelation {
    trigger: PropertyTable::new(&[Property("z-index")]),
    required: PropertyTable::new(&[
        PropertyWithValue("z-index", "0"),
        PropertyWithValue("position", "relative"),
    ]),
};

const ABSOLUTE_HAS_RELATIVE_PARENT: RuleRelation = RuleRelation {
    trigger: PropertyTable::new(&[PropertyWithValue("position", "absolute")]),
    required: PropertyTable::new(&[PropertyWithValue("position", "relative")]),
};

const ROOT_HAS_DISPLAY_FLEX: RuleRelation = RuleRelation {
    trigger: FLEX_CHILD_PROPS,
    required: PropertyTable::new(&[PropertyWithValue("display", "flex")]),
};

const ROOT_HAS_DISPLAY_GRID: RuleRelation = RuleRelation {
    trigger: GRID_CHILD_PROPS,
    required: PropertyTable::new(&[PropertyWithValue("display", "grid")]),
};

const ROOT_HAS_DISPLAY_FLEX_OR_GRID: RuleRelation = RuleRelation {
    trigger: FLEX_OR_GRID_CHILD_PROPS,
    required: PropertyTable::new(&[PropertyWithValues("display", &["flex", "grid"])]),
};

const VALID_POINTER_EVENTS: RuleRelation = RuleRelation {
    trigger: PropertyTable::new(&[PropertyWithValue("pointer-events", "auto")]),
    required: PropertyTable::new(&[PropertyWithValue("pointer-events", "none")]),
};

const RELATIVE_TO_PARENT: RuleRelation = RuleRelation {
    trigger: PropertyTable::new(&[PropertyWithValue("position", "static")]),
    required: PropertyTable::new(&[PropertyWithValue("position", "relative")]),
};

/// Declarations this rule accounts for in nested rules; the property
/// classification rule must not flag them a second time.
const CHILD_ALLOWED_DECLS: PropertyTable = PropertyTable::new(&[
    PropertyWithValue("pointer-events", "auto"),
    PropertyWithValue("position", "static"),
]);

const MESSAGES: MessageCatalog = MessageCatalog::new(&[
    (
        "nested - missing stacking context in parent",
        Message::Static(
            "missing stacking context (`position: relative; z-index: 0;`)\n\
             `z-index` can only be used when the containing root rule creates a new stacking \
             context - add `position: relative;` and `z-index: 0;` to the containing root rule",
        ),
    ),
    (
        "root - z-index without position relative",
        Message::Static(
            "missing `position: relative;`\n\
             `z-index` can only be used at the root level to create a non invasive stacking \
             context - add `position: relative;` or set the `z-index` with a nested selector \
             in another root rule",
        ),
    ),
    (
        "root - z-index not 0",
        Message::Static(
            "not 0\n\
             `z-index` can only be used at the root level when creating a non invasive stacking \
             context - set to 0 or set the `z-index` with a nested selector in another root rule",
        ),
    ),
    (
        "nested - absolute has relative parent",
        Message::Static(
            "missing `position: relative;` in parent\n\
             `position: absolute` is only allowed when the containing root rule is set to \
             `position: relative` - add `position: relative;` to the containing root rule",
        ),
    ),
    (
        "nested - require display flex in parent",
        Message::WithArg(require_display_flex),
    ),
    (
        "nested - require display grid in parent",
        Message::WithArg(require_display_grid),
    ),
    (
        "nested - require display flex or grid in parent",
        Message::WithArg(require_display_flex_or_grid),
    ),
    (
        "invalid pointer events",
        Message::Static(
            "incorrect pointer events combination\n\
             you can only set pointer events in a child if the parent disables pointer events - \
             add `pointer-events: none;` to the containing root rule",
        ),
    ),
    (
        "missing position relative",
        Message::Static(
            "missing `position: relative;` in parent\n\
             `position: static` is only allowed when the containing root rule is set to \
             `position: relative` - add `position: relative;` to the containing root rule",
        ),
    ),
    (
        "missing relativeToParent className",
        Message::Static(
            "missing `.relativeToParent` className\n\
             `position: static` can only be used when selecting on `.relativeToParent` - \
             add the `.relativeToParent` className",
        ),
    ),
]);

fn require_display_flex(prop: &str) -> String {
    format!(
        "missing `display: flex;`\n\
         `{prop}` can only be used when the containing root rule has `display: flex;` - \
         add `display: flex;` to the containing root rule or, if this is caused by a media \
         query that overrides `display: flex;`, use `{prop}: unset`"
    )
}

fn require_display_grid(prop: &str) -> String {
    format!(
        "missing `display: grid;`\n\
         `{prop}` can only be used when the containing root rule has `display: grid;` - \
         add `display: grid;` to the containing root rule or, if this is caused by a media \
         query that overrides `display: grid;`, use `{prop}: unset`"
    )
}

fn require_display_flex_or_grid(prop: &str) -> String {
    format!(
        "missing `display: flex;` or `display: grid;`\n\
         `{prop}` can only be used when the containing root rule has `display: flex;` or \
         `display: grid;` - add `display: flex;` or `display: grid;` to the containing root \
         rule or, if this is caused by a media query that overrides them, use `{prop}: unset`"
    )
}

/// Enforces the parent-child contracts between nested and root rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentChildPolicy;

impl ParentChildPolicy {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn violation(decl: &Declaration, key: &str, arg: Option<&str>) -> Violation {
        Violation::new(
            CODE,
            NAME,
            Severity::Error,
            decl.span,
            MESSAGES.format(key, arg).unwrap_or_default(),
        )
    }

    /// Relations whose diagnostics do not mention the triggering property.
    fn check_plain_relation(
        sheet: &Stylesheet,
        relation: &RuleRelation,
        key: &'static str,
        violations: &mut Vec<Violation>,
    ) -> Result<(), PreconditionError> {
        for (rule_id, _) in nested_rules(sheet) {
            for candidate in check_child_parent_relation(sheet, rule_id, relation)? {
                violations.push(Self::violation(candidate.trigger_decl, key, None));
            }
        }
        Ok(())
    }

    /// Relations whose diagnostics name the triggering property.
    fn check_prop_relation(
        sheet: &Stylesheet,
        relation: &RuleRelation,
        key: &'static str,
        violations: &mut Vec<Violation>,
    ) -> Result<(), PreconditionError> {
        for (rule_id, _) in nested_rules(sheet) {
            for candidate in check_child_parent_relation(sheet, rule_id, relation)? {
                violations.push(Self::violation(
                    candidate.trigger_decl,
                    key,
                    Some(candidate.trigger_decl.property.as_str()),
                ));
            }
        }
        Ok(())
    }

    /// `position: static` additionally requires selecting on
    /// `.relativeToParent` in every comma alternative.
    fn relative_to_parent(
        sheet: &Stylesheet,
        violations: &mut Vec<Violation>,
    ) -> Result<(), PreconditionError> {
        for (rule_id, _) in nested_rules(sheet) {
            for candidate in check_child_parent_relation(sheet, rule_id, &RELATIVE_TO_PARENT)? {
                violations.push(Self::violation(
                    candidate.trigger_decl,
                    "missing position relative",
                    None,
                ));
            }

            let rule = sheet.rule(rule_id);
            for decl in find_decls(rule, RELATIVE_TO_PARENT.trigger) {
                if rule
                    .selector()
                    .every_group_has_class(RELATIVE_TO_PARENT_CLASS)
                {
                    continue;
                }
                violations.push(Self::violation(
                    decl,
                    "missing relativeToParent className",
                    None,
                ));
            }
        }
        Ok(())
    }

    /// A root rule may only use `z-index` to open a non invasive stacking
    /// context: `position: relative` plus `z-index: 0`.
    fn valid_stacking_context_in_root(sheet: &Stylesheet, violations: &mut Vec<Violation>) {
        with_root_rules(sheet, |_, rule| {
            let Some(decl) = rule.decl("z-index") else {
                return;
            };

            let positioned = rule
                .decl("position")
                .is_some_and(|d| d.value == "relative");
            if !positioned {
                violations.push(Self::violation(
                    decl,
                    "root - z-index without position relative",
                    None,
                ));
            }

            if decl.value != "0" {
                violations.push(Self::violation(decl, "root - z-index not 0", None));
            }
        });
    }
}

impl StyleRule for ParentChildPolicy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires root rules to set up the context their nested declarations rely on"
    }

    fn css_requirements(&self) -> CssRequirements {
        CssRequirements {
            normalized_css: true,
            ..CssRequirements::default()
        }
    }

    fn messages(&self) -> &MessageCatalog {
        &MESSAGES
    }

    fn interactions(&self) -> Vec<InteractionAllowance> {
        vec![InteractionAllowance::new(
            "layout-related-properties",
            NAME,
            |decl| CHILD_ALLOWED_DECLS.matches(decl),
        )]
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Violation>, PreconditionError> {
        let sheet = ctx.stylesheet;
        let mut violations = Vec::new();

        Self::check_plain_relation(
            sheet,
            &VALID_STACKING_CONTEXT_IN_ROOT,
            "nested - missing stacking context in parent",
            &mut violations,
        )?;
        Self::check_plain_relation(
            sheet,
            &ABSOLUTE_HAS_RELATIVE_PARENT,
            "nested - absolute has relative parent",
            &mut violations,
        )?;
        Self::check_prop_relation(
            sheet,
            &ROOT_HAS_DISPLAY_FLEX,
            "nested - require display flex in parent",
            &mut violations,
        )?;
        Self::check_prop_relation(
            sheet,
            &ROOT_HAS_DISPLAY_GRID,
            "nested - require display grid in parent",
            &mut violations,
        )?;
        Self::check_prop_relation(
            sheet,
            &ROOT_HAS_DISPLAY_FLEX_OR_GRID,
            "nested - require display flex or grid in parent",
            &mut violations,
        )?;
        Self::check_plain_relation(
            sheet,
            &VALID_POINTER_EVENTS,
            "invalid pointer events",
            &mut violations,
        )?;
        Self::relative_to_parent(sheet, &mut violations)?;
        Self::valid_stacking_context_in_root(sheet, &mut violations);

        debug!(rule = NAME, violations = violations.len(), "check complete");
        Ok(violations)
    }
}
