//! Cross-rule allowances.
//!
//! One rule can declare that another rule must not flag a declaration it
//! already accounts for. Allowances are collected once at rule-set assembly
//! and the registry is read-only afterwards; this is a fixed table, not a
//! pub/sub channel.

use crate::tree::Declaration;
use std::fmt;

/// Predicate deciding whether a declaration is covered by an allowance.
pub type DeclPredicate = Box<dyn Fn(&Declaration) -> bool + Send + Sync>;

/// A registered "do not flag this declaration" grant.
pub struct InteractionAllowance {
    /// Name of the rule that must suppress its diagnostic.
    pub consumer: &'static str,
    /// Name of the rule that accounts for the declaration.
    pub producer: &'static str,
    predicate: DeclPredicate,
}

impl InteractionAllowance {
    /// Creates an allowance from `producer` towards `consumer`.
    #[must_use]
    pub fn new(
        consumer: &'static str,
        producer: &'static str,
        predicate: impl Fn(&Declaration) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            consumer,
            producer,
            predicate: Box::new(predicate),
        }
    }

    /// Returns true if the declaration is covered by this allowance.
    #[must_use]
    pub fn allows(&self, declaration: &Declaration) -> bool {
        (self.predicate)(declaration)
    }
}

impl fmt::Debug for InteractionAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionAllowance")
            .field("consumer", &self.consumer)
            .field("producer", &self.producer)
            .finish_non_exhaustive()
    }
}

/// The assembled allowance table for one rule set.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    allowances: Vec<InteractionAllowance>,
}

impl InteractionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an allowance; only called while assembling a rule set.
    pub fn register(&mut self, allowance: InteractionAllowance) {
        self.allowances.push(allowance);
    }

    /// Returns true if any allowance towards `consumer` covers the
    /// declaration.
    #[must_use]
    pub fn is_allowed(&self, consumer: &str, declaration: &Declaration) -> bool {
        self.allowances
            .iter()
            .any(|a| a.consumer == consumer && a.allows(declaration))
    }

    /// Returns the number of registered allowances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allowances.len()
    }

    /// Returns true if no allowances are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer_events_auto(decl: &Declaration) -> bool {
        decl.property == "pointer-events" && decl.value == "auto"
    }

    #[test]
    fn empty_registry_allows_nothing() {
        let registry = InteractionRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_allowed("some-rule", &Declaration::new("width", "10px")));
    }

    #[test]
    fn allowance_is_scoped_to_its_consumer() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractionAllowance::new(
            "layout-related-properties",
            "parent-child-policy",
            pointer_events_auto,
        ));
        assert_eq!(registry.len(), 1);

        let covered = Declaration::new("pointer-events", "auto");
        assert!(registry.is_allowed("layout-related-properties", &covered));
        assert!(!registry.is_allowed("some-other-rule", &covered));
    }

    #[test]
    fn predicate_decides_per_declaration() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractionAllowance::new(
            "layout-related-properties",
            "parent-child-policy",
            pointer_events_auto,
        ));
        assert!(!registry.is_allowed(
            "layout-related-properties",
            &Declaration::new("pointer-events", "none")
        ));
    }

    #[test]
    fn debug_omits_the_predicate() {
        let allowance =
            InteractionAllowance::new("consumer-rule", "producer-rule", pointer_events_auto);
        let debug = format!("{allowance:?}");
        assert!(debug.contains("consumer-rule"));
        assert!(debug.contains("producer-rule"));
    }
}
