//! Rule presets.

use crate::{LayoutRelatedProperties, ParentChildPolicy};
use style_contract_core::RuleBox;

/// Returns the default rule set: both contract rules, no configured
/// exceptions.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(LayoutRelatedProperties::new()),
        Box::new(ParentChildPolicy::new()),
    ]
}

/// Returns every available rule.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    default_rules()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_complete() {
        let rules = default_rules();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["layout-related-properties", "parent-child-policy"]);
    }

    #[test]
    fn rule_codes_are_unique() {
        let rules = all_rules();
        let mut codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), rules.len());
    }
}
