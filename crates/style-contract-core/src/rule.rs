//! The rule trait: what a contract check looks like to its host.

use crate::interaction::{InteractionAllowance, InteractionRegistry};
use crate::messages::MessageCatalog;
use crate::tree::Stylesheet;
use crate::types::{PreconditionError, Severity, Violation};

/// Normalization passes a rule expects to have run on the tree it receives.
///
/// This is a declaration towards the host; the core does not verify it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssRequirements {
    /// Nesting under media queries has been flattened away.
    pub normalized_css: bool,
    /// Media-query variants have been merged into plain rules.
    pub normalized_media_queries: bool,
    /// Custom properties have been substituted.
    pub resolved_custom_properties: bool,
    /// `@value` module imports have been substituted.
    pub resolved_module_values: bool,
    /// `calc()` expressions have been evaluated.
    pub resolved_calc: bool,
}

/// Context handed to a rule for one check run.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// The stylesheet tree under analysis.
    pub stylesheet: &'a Stylesheet,
    /// The assembled cross-rule allowance table.
    pub interactions: &'a InteractionRegistry,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    #[must_use]
    pub fn new(stylesheet: &'a Stylesheet, interactions: &'a InteractionRegistry) -> Self {
        Self {
            stylesheet,
            interactions,
        }
    }
}

/// A stylesheet contract rule.
///
/// Implementations analyze one stylesheet tree per call and return the
/// violations they find; they hold no state across trees, so a rule
/// instance can be shared between parallel runs on different stylesheets.
///
/// # Example
///
/// ```ignore
/// use style_contract_core::{CheckContext, StyleRule, Violation};
///
/// pub struct NoEmptyRules;
///
/// impl StyleRule for NoEmptyRules {
///     fn name(&self) -> &'static str { "no-empty-rules" }
///     fn code(&self) -> &'static str { "SC900" }
///     fn messages(&self) -> &MessageCatalog { &MESSAGES }
///
///     fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Violation>, PreconditionError> {
///         // walk ctx.stylesheet, collect violations
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait StyleRule: Send + Sync {
    /// Returns the kebab-case name of this rule
    /// (e.g., "layout-related-properties").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "SC001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the normalization passes this rule expects from the host.
    fn css_requirements(&self) -> CssRequirements {
        CssRequirements::default()
    }

    /// Returns the closed catalog of messages this rule can report.
    fn messages(&self) -> &MessageCatalog;

    /// Returns the allowances this rule grants towards other rules.
    ///
    /// Collected once at rule-set assembly into the shared registry.
    fn interactions(&self) -> Vec<InteractionAllowance> {
        Vec::new()
    }

    /// Checks one stylesheet tree and returns any violations found.
    ///
    /// # Errors
    ///
    /// Returns a [`PreconditionError`] only for broken wiring inside the
    /// rule itself; stylesheet authoring problems are violations, never
    /// errors.
    fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Violation>, PreconditionError>;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn StyleRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Message;
    use crate::selector::Selector;
    use crate::tree::rule;
    use crate::types::Span;

    const TEST_MESSAGES: MessageCatalog =
        MessageCatalog::new(&[("empty rule", Message::Static("rule has no declarations"))]);

    struct NoEmptyRules;

    impl StyleRule for NoEmptyRules {
        fn name(&self) -> &'static str {
            "no-empty-rules"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "Flags rules without declarations"
        }
        fn messages(&self) -> &MessageCatalog {
            &TEST_MESSAGES
        }

        fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Violation>, PreconditionError> {
            let mut violations = Vec::new();
            for (_, node) in ctx.stylesheet.rules() {
                if node.declarations().is_empty() && node.children().is_empty() {
                    violations.push(Violation::new(
                        self.code(),
                        self.name(),
                        self.default_severity(),
                        node.span(),
                        TEST_MESSAGES
                            .format("empty rule", None)
                            .unwrap_or_default(),
                    ));
                }
            }
            Ok(violations)
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = NoEmptyRules;
        assert_eq!(rule.name(), "no-empty-rules");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.css_requirements(), CssRequirements::default());
        assert!(rule.interactions().is_empty());
    }

    #[test]
    fn check_runs_against_a_context() {
        let sheet = Stylesheet::builder()
            .rule(rule(Selector::class("empty")).at(4, 1))
            .rule(rule(Selector::class("full")).decl("color", "red"))
            .build();
        let registry = InteractionRegistry::new();
        let ctx = CheckContext::new(&sheet, &registry);

        let violations = NoEmptyRules.check(&ctx).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].span, Span::new(4, 1));
        assert_eq!(violations[0].message, "rule has no declarations");
    }
}
