//! Rule-set assembly and execution.
//!
//! A [`RuleSet`] owns its rules and the interaction registry assembled from
//! their declared allowances. Assembly happens once; afterwards the set is
//! read-only and can check any number of stylesheet trees, including
//! concurrently from several threads.

use style_contract_core::{
    CheckContext, InteractionRegistry, LintResult, PreconditionError, RuleBox, StyleRule,
    Stylesheet,
};
use tracing::{debug, info};

/// Builder for configuring a [`RuleSet`].
#[derive(Default)]
pub struct RuleSetBuilder {
    rules: Vec<RuleBox>,
}

impl RuleSetBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the set.
    #[must_use]
    pub fn rule<R: StyleRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the set.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the set.
    #[must_use]
    pub fn rule_boxes(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Assembles the rule set, collecting every declared allowance into the
    /// shared interaction registry.
    #[must_use]
    pub fn build(self) -> RuleSet {
        let mut interactions = InteractionRegistry::new();
        for rule in &self.rules {
            for allowance in rule.interactions() {
                debug!(
                    consumer = allowance.consumer,
                    producer = allowance.producer,
                    "registering allowance"
                );
                interactions.register(allowance);
            }
        }
        RuleSet {
            rules: self.rules,
            interactions,
        }
    }
}

/// An assembled, immutable set of contract rules.
pub struct RuleSet {
    rules: Vec<RuleBox>,
    interactions: InteractionRegistry,
}

impl RuleSet {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Returns the number of rules in the set.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the assembled allowance table.
    #[must_use]
    pub fn interactions(&self) -> &InteractionRegistry {
        &self.interactions
    }

    /// Checks one stylesheet tree with every rule in the set.
    ///
    /// Violations are sorted by source span; the sort is stable, so
    /// candidates a single rule yields for the same span keep their order.
    ///
    /// # Errors
    ///
    /// Returns a [`PreconditionError`] if a rule's own wiring is broken;
    /// stylesheet authoring problems are reported as violations in the
    /// result instead.
    pub fn check(&self, stylesheet: &Stylesheet) -> Result<LintResult, PreconditionError> {
        let ctx = CheckContext::new(stylesheet, &self.interactions);
        let mut result = LintResult::new();
        result.rules_run = self.rules.len();

        for rule in &self.rules {
            debug!(rule = rule.name(), "running");
            let violations = rule.check(&ctx)?;
            result.violations.extend(violations);
        }

        result
            .violations
            .sort_by_key(|v| (v.span.line, v.span.column, v.span.offset));

        info!(
            rules = self.rules.len(),
            violations = result.violations.len(),
            "check complete"
        );
        Ok(result)
    }
}

/// Returns the default rule set: every built-in rule, no configured
/// exceptions.
#[must_use]
pub fn default_rule_set() -> RuleSet {
    RuleSet::builder()
        .rule_boxes(style_contract_rules::default_rules())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_set_assembles_the_allowance_table() {
        let set = default_rule_set();
        assert_eq!(set.rule_count(), 2);
        // parent-child-policy grants one allowance towards
        // layout-related-properties
        assert_eq!(set.interactions().len(), 1);
    }

    #[test]
    fn empty_rule_set_reports_nothing() {
        let set = RuleSet::builder().build();
        let sheet = Stylesheet::builder().build();
        let result = set.check(&sheet).unwrap();
        assert!(result.is_clean());
        assert_eq!(result.rules_run, 0);
    }
}
