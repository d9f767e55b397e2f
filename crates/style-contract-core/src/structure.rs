//! Structural queries over a stylesheet tree.
//!
//! Free functions over the arena: root/nested classification, the
//! governing-root lookup, and document-order traversals. Nesting depth is
//! an upstream invariant; everything here reads at most the immediate
//! parent and stays total over malformed trees.

use crate::tree::{RuleId, RuleNode, Stylesheet};
use crate::types::PreconditionError;

/// Returns true if the rule has no enclosing rule.
#[must_use]
pub fn is_root(sheet: &Stylesheet, id: RuleId) -> bool {
    sheet.rule(id).parent().is_none()
}

/// Iterates over all root rules in document order.
pub fn root_rules(sheet: &Stylesheet) -> impl Iterator<Item = RuleId> + '_ {
    sheet
        .rules()
        .filter(|(_, rule)| rule.parent().is_none())
        .map(|(id, _)| id)
}

/// Iterates over all nested rules in document order, with their parents.
pub fn nested_rules(sheet: &Stylesheet) -> impl Iterator<Item = (RuleId, RuleId)> + '_ {
    sheet
        .rules()
        .filter_map(|(id, rule)| rule.parent().map(|parent| (id, parent)))
}

/// Visits every root rule in document order.
pub fn with_root_rules(sheet: &Stylesheet, mut visit: impl FnMut(RuleId, &RuleNode)) {
    for id in root_rules(sheet) {
        visit(id, sheet.rule(id));
    }
}

/// Visits every nested rule in document order, with its enclosing rule.
pub fn with_nested_rules(
    sheet: &Stylesheet,
    mut visit: impl FnMut(RuleId, &RuleNode, RuleId, &RuleNode),
) {
    for (id, parent) in nested_rules(sheet) {
        visit(id, sheet.rule(id), parent, sheet.rule(parent));
    }
}

/// Resolves the root rules governing a nested rule, in document order.
///
/// A nested rule is governed by every root-level rule whose selector equals
/// its enclosing rule's selector: the structural parent itself, plus any
/// other root block authored with the same selector elsewhere in the sheet.
/// Each governing root must independently satisfy required properties.
///
/// When the enclosing rule is itself nested (a tree the upstream
/// no-double-nesting invariant should have rejected), no root-level rule
/// can match and the result is empty; relation checks then simply do not
/// apply.
///
/// # Errors
///
/// Returns [`PreconditionError::GoverningRootsOfRootRule`] when called on a
/// root rule; that is a defect in the caller's wiring, not a lint finding.
pub fn governing_roots(sheet: &Stylesheet, id: RuleId) -> Result<Vec<RuleId>, PreconditionError> {
    let Some(parent) = sheet.rule(id).parent() else {
        return Err(PreconditionError::GoverningRootsOfRootRule);
    };
    let context_selector = sheet.rule(parent).selector();
    Ok(root_rules(sheet)
        .filter(|&root| sheet.rule(root).selector() == context_selector)
        .collect())
}
