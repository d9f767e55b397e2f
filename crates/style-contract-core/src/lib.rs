//! # style-contract-core
//!
//! Core framework for enforcing structural contracts on stylesheet trees.
//!
//! A stylesheet is held as an arena of rules (root rules and their nested
//! rules); static property tables classify declarations; a generic
//! trigger/required relation checker evaluates parent-child policies; and
//! an interaction registry lets independently defined rules cooperate so
//! the same declaration is never reported twice.
//!
//! This crate provides:
//!
//! - [`Stylesheet`] / [`RuleNode`] / [`Declaration`] — the tree model
//! - [`PropertyTable`] and the static taxonomy tables
//! - [`structure`] — root/nested queries and governing-root resolution
//! - [`check_rule_relation`] — the trigger/required relation checker
//! - [`StyleRule`] — the trait concrete rules implement
//! - [`InteractionRegistry`] — cross-rule allowances
//! - [`Violation`] and friends — what rules hand back to the host
//!
//! Parsing CSS text, resolving the cascade, and reporting to the user are
//! the host's business; the core consumes a pre-parsed tree and produces
//! violations with source spans.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod interaction;
mod messages;
mod relation;
mod rule;
mod selector;
mod taxonomy;
mod tree;
mod types;
mod value;

pub mod structure;

pub use interaction::{DeclPredicate, InteractionAllowance, InteractionRegistry};
pub use messages::{Message, MessageCatalog};
pub use relation::{check_child_parent_relation, check_rule_relation, RelationCandidate, RuleRelation};
pub use rule::{CheckContext, CssRequirements, RuleBox, StyleRule};
pub use selector::{Combinator, Component, Selector, SelectorGroup};
pub use taxonomy::{
    classify, find_decls, find_invalid_decls, first_matching_decl, is_aspect_ratio_hack,
    is_intrinsic_size, Classification, PropertyMatcher, PropertyTable, ALLOWED_IN_ROOT_AND_NESTED,
    FLEX_CHILD_PROPS, FLEX_OR_GRID_CHILD_PROPS, GRID_CHILD_PROPS, INTRINSIC_PROPS,
    INTRINSIC_UNITS, LAYOUT_RELATED_PROPS,
};
pub use tree::{rule, Declaration, RuleBuilder, RuleId, RuleNode, Stylesheet, StylesheetBuilder};
pub use types::{LintResult, PreconditionError, Severity, Span, Violation, ViolationDiagnostic};
pub use value::{first_dimension, is_percentage, Dimension};
