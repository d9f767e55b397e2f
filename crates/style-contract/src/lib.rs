//! # style-contract
//!
//! Structural contract linter for component stylesheets.
//!
//! This is the main facade crate that re-exports the core framework and the
//! built-in rules, and provides the [`RuleSet`] runner.
//!
//! The contract: layout placement (size, position, flex/grid child
//! behavior) lives in nested rules, where the parent lays out its children;
//! cosmetics live in root rules, where a component styles itself; and a
//! nested declaration that relies on parent context (`z-index`,
//! `position: absolute`, flex/grid child props, pointer events) obliges
//! every governing root block to set that context up.
//!
//! ## Quick Start
//!
//! ```ignore
//! use style_contract::{default_rule_set, rule, Selector, Stylesheet};
//!
//! let sheet = Stylesheet::builder()
//!     .rule(
//!         rule(Selector::class("menu"))
//!             .decl("display", "flex")
//!             .nested(rule(Selector::nested_class("item")).decl("flex-grow", "1")),
//!     )
//!     .build();
//!
//! let result = default_rule_set().check(&sheet)?;
//! if result.has_errors() {
//!     eprintln!("{}", result.format_report());
//! }
//! ```
//!
//! Parsing CSS text into the tree and attributing violations to files is
//! the embedding host's business; this crate analyzes trees it is handed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod runner;

pub use runner::{default_rule_set, RuleSet, RuleSetBuilder};

pub use style_contract_core::{
    check_child_parent_relation, check_rule_relation, classify, find_decls, find_invalid_decls,
    first_matching_decl, rule, structure, CheckContext, Classification, Combinator, Component,
    CssRequirements, Declaration, InteractionAllowance, InteractionRegistry, LintResult, Message,
    MessageCatalog, PreconditionError, PropertyMatcher, PropertyTable, RelationCandidate,
    RuleBox, RuleBuilder, RuleId, RuleNode, RuleRelation, Selector, SelectorGroup, Severity, Span,
    StyleRule, Stylesheet, StylesheetBuilder, Violation, ViolationDiagnostic,
};
pub use style_contract_rules::{
    all_rules, default_rules, LayoutRelatedProperties, ParentChildPolicy,
    RELATIVE_TO_PARENT_CLASS,
};
