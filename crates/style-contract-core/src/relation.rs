//! The trigger/required relation checker.
//!
//! One algorithm, parameterized by property tables, implements every
//! parent-child policy: if a nested rule contains a declaration matching
//! the trigger table, every governing root must satisfy the whole required
//! table, and each root that does not yields one violation candidate.

use crate::structure::{governing_roots, is_root};
use crate::taxonomy::{first_matching_decl, PropertyTable};
use crate::tree::{Declaration, RuleId, RuleNode, Stylesheet};
use crate::types::PreconditionError;

/// A declarative trigger/required relation between nested and root rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleRelation {
    /// Declarations in the nested rule that activate the relation.
    pub trigger: PropertyTable,
    /// Declarations every governing root must then carry; entries are
    /// conjunctive.
    pub required: PropertyTable,
}

/// One governing root that failed a relation, with the activating
/// declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelationCandidate<'a> {
    /// The nested declaration that activated the relation.
    pub trigger_decl: &'a Declaration,
    /// The root rule that does not satisfy the required table.
    pub governing_root: RuleId,
}

/// Checks a relation for a nested rule against an explicit root list.
///
/// Returns one candidate per rule in `rules_to_check` whose effective
/// declarations do not satisfy every required entry, in `rules_to_check`
/// order, each referencing the first trigger declaration. Returns an empty
/// list when the rule contains no trigger declaration.
///
/// # Errors
///
/// Returns [`PreconditionError::RelationOnRootRule`] when `rule` is a root
/// rule; relations only ever run on nested rules.
pub fn check_rule_relation<'a>(
    sheet: &'a Stylesheet,
    rule: RuleId,
    relation: &RuleRelation,
    rules_to_check: &[RuleId],
) -> Result<Vec<RelationCandidate<'a>>, PreconditionError> {
    if is_root(sheet, rule) {
        return Err(PreconditionError::RelationOnRootRule);
    }

    let Some(trigger_decl) = first_matching_decl(sheet.rule(rule), relation.trigger) else {
        return Ok(Vec::new());
    };
    tracing::debug!(
        trigger = %trigger_decl.property,
        roots = rules_to_check.len(),
        "relation triggered"
    );

    Ok(rules_to_check
        .iter()
        .filter(|&&root| !satisfies_required(sheet.rule(root), relation.required))
        .map(|&root| RelationCandidate {
            trigger_decl,
            governing_root: root,
        })
        .collect())
}

/// Checks a relation for a nested rule against its governing roots.
///
/// # Errors
///
/// Returns a [`PreconditionError`] when `rule` is a root rule.
pub fn check_child_parent_relation<'a>(
    sheet: &'a Stylesheet,
    rule: RuleId,
    relation: &RuleRelation,
) -> Result<Vec<RelationCandidate<'a>>, PreconditionError> {
    let roots = governing_roots(sheet, rule)?;
    check_rule_relation(sheet, rule, relation, &roots)
}

/// Returns true if the rule's effective declarations satisfy every entry.
fn satisfies_required(rule: &RuleNode, required: PropertyTable) -> bool {
    required
        .entries()
        .iter()
        .all(|entry| rule.decl(entry.property()).is_some_and(|d| entry.matches(d)))
}
