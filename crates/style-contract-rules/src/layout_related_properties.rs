//! Rule keeping layout placement out of root rules and cosmetics out of
//! nested rules.
//!
//! # Rationale
//!
//! A component must not decide its own place in its parent's layout. Size
//! and position belong in nested selectors, where the parent lays out its
//! children; color, typography and other cosmetics belong in root rules,
//! where the component styles itself. Kept apart this way, any element can
//! be lifted into its own component without untangling its styles.
//!
//! # Configuration
//!
//! - `allow_decl_in_root`: accept a specific declaration at the root
//! - `allow_non_layout_related_properties`: skip the nested pass entirely
//! - `allow_layout_related_properties_in_rule`: accept a whole root rule

use std::fmt;

use style_contract_core::structure::{with_nested_rules, with_root_rules};
use style_contract_core::{
    find_decls, find_invalid_decls, is_aspect_ratio_hack, is_intrinsic_size, CheckContext,
    CssRequirements, Declaration, Message, MessageCatalog, PreconditionError, RuleNode, Severity,
    StyleRule, Stylesheet, Violation, ALLOWED_IN_ROOT_AND_NESTED, INTRINSIC_PROPS,
    INTRINSIC_UNITS, LAYOUT_RELATED_PROPS,
};
use tracing::debug;

/// Rule code for layout-related-properties.
pub const CODE: &str = "SC001";

/// Rule name for layout-related-properties.
pub const NAME: &str = "layout-related-properties";

const MESSAGES: MessageCatalog = MessageCatalog::new(&[
    (
        "root - no layout related props",
        Message::WithArg(root_no_layout_related_props),
    ),
    (
        "nested - only layout related props in nested",
        Message::WithArg(nested_only_layout_related_props),
    ),
]);

fn root_no_layout_related_props(prop: &str) -> String {
    let mut message = format!(
        "illegal layout related prop\n\
         `{prop}` can only be used by root rules in nested selectors - \
         move to a nested selector in another root rule, if you are forced by a third party \
         library, you can rename your selector to `_rootXyz` or `component_rootXyz`"
    );
    if INTRINSIC_PROPS.contains_property(prop) {
        let units = INTRINSIC_UNITS.join("`, `");
        message.push_str(&format!(
            "\nif you are trying to define an intrinsic {prop}, make sure you set the unit to \
             one of `{units}` and add `!important`"
        ));
    }
    message
}

fn nested_only_layout_related_props(prop: &str) -> String {
    format!(
        "illegal non-layout related prop\n\
         `{prop}` can only be used by root rules - \
         move to another root rule"
    )
}

type DeclAllow = Box<dyn Fn(&Declaration) -> bool + Send + Sync>;
type SheetAllow = Box<dyn Fn(&Stylesheet) -> bool + Send + Sync>;
type RuleAllow = Box<dyn Fn(&RuleNode) -> bool + Send + Sync>;

/// Keeps layout placement out of root rules and cosmetics out of nested
/// rules.
#[derive(Default)]
pub struct LayoutRelatedProperties {
    allow_decl_in_root: Option<DeclAllow>,
    allow_non_layout_related_properties: Option<SheetAllow>,
    allow_layout_related_properties_in_rule: Option<RuleAllow>,
}

impl LayoutRelatedProperties {
    /// Creates the rule with no configured exceptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts specific declarations at the root.
    #[must_use]
    pub fn allow_decl_in_root(
        mut self,
        predicate: impl Fn(&Declaration) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.allow_decl_in_root = Some(Box::new(predicate));
        self
    }

    /// Skips the nested pass for a whole stylesheet.
    #[must_use]
    pub fn allow_non_layout_related_properties(
        mut self,
        predicate: impl Fn(&Stylesheet) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.allow_non_layout_related_properties = Some(Box::new(predicate));
        self
    }

    /// Accepts whole root rules, declarations unseen.
    #[must_use]
    pub fn allow_layout_related_properties_in_rule(
        mut self,
        predicate: impl Fn(&RuleNode) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.allow_layout_related_properties_in_rule = Some(Box::new(predicate));
        self
    }

    fn violation(&self, decl: &Declaration, key: &str, arg: &str) -> Violation {
        Violation::new(
            CODE,
            NAME,
            Severity::Error,
            decl.span,
            MESSAGES.format(key, Some(arg)).unwrap_or_default(),
        )
    }

    fn no_layout_related_props_in_root(
        &self,
        ctx: &CheckContext<'_>,
        violations: &mut Vec<Violation>,
    ) {
        with_root_rules(ctx.stylesheet, |_, rule| {
            if self
                .allow_layout_related_properties_in_rule
                .as_ref()
                .is_some_and(|allow| allow(rule))
            {
                return;
            }

            for decl in find_decls(rule, LAYOUT_RELATED_PROPS) {
                if is_intrinsic_size(decl) {
                    continue;
                }
                if is_aspect_ratio_hack(decl, rule) {
                    continue;
                }
                if self
                    .allow_decl_in_root
                    .as_ref()
                    .is_some_and(|allow| allow(decl))
                {
                    continue;
                }
                if ALLOWED_IN_ROOT_AND_NESTED.matches(decl) {
                    continue;
                }
                if ctx.interactions.is_allowed(NAME, decl) {
                    continue;
                }
                let arg = if LAYOUT_RELATED_PROPS.value_qualified(&decl.property) {
                    format!("{}: {}", decl.property, decl.value)
                } else {
                    decl.property.clone()
                };
                violations.push(self.violation(decl, "root - no layout related props", &arg));
            }
        });
    }

    fn only_layout_related_props_in_nested(
        &self,
        ctx: &CheckContext<'_>,
        violations: &mut Vec<Violation>,
    ) {
        if self
            .allow_non_layout_related_properties
            .as_ref()
            .is_some_and(|allow| allow(ctx.stylesheet))
        {
            debug!(rule = NAME, "nested pass disabled by configuration");
            return;
        }

        with_nested_rules(ctx.stylesheet, |_, rule, _, _| {
            // content and cosmetics inside `&::before` and friends are
            // legitimate
            if rule.selector().is_pseudo_element_rule() {
                return;
            }
            for decl in find_invalid_decls(rule, LAYOUT_RELATED_PROPS) {
                if ctx.interactions.is_allowed(NAME, decl) {
                    continue;
                }
                violations.push(self.violation(
                    decl,
                    "nested - only layout related props in nested",
                    &decl.property,
                ));
            }
        });
    }
}

impl fmt::Debug for LayoutRelatedProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRelatedProperties")
            .field(
                "allow_decl_in_root",
                &self.allow_decl_in_root.is_some(),
            )
            .field(
                "allow_non_layout_related_properties",
                &self.allow_non_layout_related_properties.is_some(),
            )
            .field(
                "allow_layout_related_properties_in_rule",
                &self.allow_layout_related_properties_in_rule.is_some(),
            )
            .finish()
    }
}

impl StyleRule for LayoutRelatedProperties {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Keeps layout placement in nested rules and cosmetics in root rules"
    }

    fn css_requirements(&self) -> CssRequirements {
        CssRequirements {
            normalized_media_queries: true,
            resolved_custom_properties: true,
            resolved_module_values: true,
            resolved_calc: true,
            ..CssRequirements::default()
        }
    }

    fn messages(&self) -> &MessageCatalog {
        &MESSAGES
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Violation>, PreconditionError> {
        let mut violations = Vec::new();
        self.no_layout_related_props_in_root(ctx, &mut violations);
        self.only_layout_related_props_in_nested(ctx, &mut violations);
        Ok(violations)
    }
}
