//! Property taxonomy: static tables classifying declarations.
//!
//! Tables are process-wide constants, defined once and never mutated.
//! Lookups are total: a property that appears in no table is simply "not a
//! member", never an error.

use crate::tree::{Declaration, RuleNode};
use crate::value;

/// One entry of a property table.
///
/// A bare property matches any value; a value-qualified entry matches only
/// the listed value(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyMatcher {
    /// Matches the property with any value.
    Property(&'static str),
    /// Matches the property only with exactly this value.
    PropertyWithValue(&'static str, &'static str),
    /// Matches the property with any of the listed values.
    PropertyWithValues(&'static str, &'static [&'static str]),
}

impl PropertyMatcher {
    /// Returns the property name this entry is keyed on.
    #[must_use]
    pub const fn property(&self) -> &'static str {
        match self {
            Self::Property(name)
            | Self::PropertyWithValue(name, _)
            | Self::PropertyWithValues(name, _) => name,
        }
    }

    /// Returns true if this entry constrains the value.
    #[must_use]
    pub const fn has_value_constraint(&self) -> bool {
        !matches!(self, Self::Property(_))
    }

    /// Returns true if the declaration satisfies this entry.
    #[must_use]
    pub fn matches(&self, declaration: &Declaration) -> bool {
        match self {
            Self::Property(name) => declaration.property == *name,
            Self::PropertyWithValue(name, val) => {
                declaration.property == *name && declaration.value == *val
            }
            Self::PropertyWithValues(name, vals) => {
                declaration.property == *name && vals.contains(&declaration.value.as_str())
            }
        }
    }
}

/// An ordered, immutable set of [`PropertyMatcher`] entries.
#[derive(Debug, Clone, Copy)]
pub struct PropertyTable {
    entries: &'static [PropertyMatcher],
}

impl PropertyTable {
    /// Creates a table from a static entry slice.
    #[must_use]
    pub const fn new(entries: &'static [PropertyMatcher]) -> Self {
        Self { entries }
    }

    /// Returns the entries in definition order.
    #[must_use]
    pub fn entries(&self) -> &'static [PropertyMatcher] {
        self.entries
    }

    /// Returns true if any entry matches the declaration.
    #[must_use]
    pub fn matches(&self, declaration: &Declaration) -> bool {
        self.entries.iter().any(|m| m.matches(declaration))
    }

    /// Returns true if the property appears in the table, value aside.
    #[must_use]
    pub fn contains_property(&self, property: &str) -> bool {
        self.entries.iter().any(|m| m.property() == property)
    }

    /// Returns true if the property only appears with value constraints.
    ///
    /// Used to decide whether a diagnostic should print `prop: value`
    /// instead of the bare property name.
    #[must_use]
    pub fn value_qualified(&self, property: &str) -> bool {
        let mut found = false;
        for entry in self.entries {
            if entry.property() == property {
                if !entry.has_value_constraint() {
                    return false;
                }
                found = true;
            }
        }
        found
    }
}

use PropertyMatcher::{Property, PropertyWithValue};

/// Properties positioning a flex child, only meaningful under `display: flex`.
pub const FLEX_CHILD_PROPS: PropertyTable = PropertyTable::new(&[
    Property("flex"),
    Property("flex-grow"),
    Property("flex-shrink"),
    Property("flex-basis"),
    Property("order"),
]);

/// Properties placing a grid child, only meaningful under `display: grid`.
pub const GRID_CHILD_PROPS: PropertyTable = PropertyTable::new(&[
    Property("grid-area"),
    Property("grid-column"),
    Property("grid-column-start"),
    Property("grid-column-end"),
    Property("grid-row"),
    Property("grid-row-start"),
    Property("grid-row-end"),
]);

/// Properties valid under either a flex or a grid container.
pub const FLEX_OR_GRID_CHILD_PROPS: PropertyTable = PropertyTable::new(&[
    Property("align-self"),
    Property("justify-self"),
]);

/// Declarations tolerated in root rules even though they touch layout.
///
/// z-index is governed by the stacking-context policy instead, and
/// pointer-events by the parent-child policy.
pub const ALLOWED_IN_ROOT_AND_NESTED: PropertyTable = PropertyTable::new(&[
    Property("z-index"),
    PropertyWithValue("position", "relative"),
    Property("overflow"),
    Property("pointer-events"),
    PropertyWithValue("display", "none"),
]);

/// Every declaration that places or sizes an element within its parent.
///
/// These belong in nested rules: the parent decides the child's layout.
/// The allowed-in-both entries are members on purpose, so the nested-side
/// membership scan does not treat them as foreign.
pub const LAYOUT_RELATED_PROPS: PropertyTable = PropertyTable::new(&[
    Property("width"),
    Property("height"),
    PropertyWithValue("position", "absolute"),
    PropertyWithValue("position", "fixed"),
    Property("top"),
    Property("right"),
    Property("bottom"),
    Property("left"),
    Property("margin"),
    Property("margin-top"),
    Property("margin-right"),
    Property("margin-bottom"),
    Property("margin-left"),
    Property("max-width"),
    Property("min-width"),
    Property("max-height"),
    Property("min-height"),
    Property("justify-self"),
    Property("align-self"),
    // flex child
    Property("flex"),
    Property("flex-grow"),
    Property("flex-shrink"),
    Property("flex-basis"),
    Property("order"),
    // grid child
    Property("grid-area"),
    Property("grid-column"),
    Property("grid-column-start"),
    Property("grid-column-end"),
    Property("grid-row"),
    Property("grid-row-start"),
    Property("grid-row-end"),
    // allowed in root and nested
    Property("z-index"),
    PropertyWithValue("position", "relative"),
    Property("overflow"),
    Property("pointer-events"),
    PropertyWithValue("display", "none"),
]);

/// Size properties that may describe an intrinsic dimension.
pub const INTRINSIC_PROPS: PropertyTable = PropertyTable::new(&[
    Property("width"),
    Property("height"),
    Property("max-width"),
    Property("min-width"),
    Property("max-height"),
    Property("min-height"),
]);

/// Units accepted for an intrinsic dimension declared at the root.
pub const INTRINSIC_UNITS: &[&str] = &["px", "em", "rem", "vw", "vh"];

/// Semantic group of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Layout placement; belongs in nested rules only.
    LayoutOnly,
    /// Tolerated in root and nested rules alike.
    AllowedInRootAndNested,
    /// Not a property the contract tracks.
    Unclassified,
}

/// Classifies a declaration against the static tables.
///
/// The allowed-in-both group wins over plain layout membership for the
/// entries present in both tables.
#[must_use]
pub fn classify(declaration: &Declaration) -> Classification {
    if ALLOWED_IN_ROOT_AND_NESTED.matches(declaration) {
        Classification::AllowedInRootAndNested
    } else if LAYOUT_RELATED_PROPS.matches(declaration) {
        Classification::LayoutOnly
    } else {
        Classification::Unclassified
    }
}

/// Collects the declarations of a rule that match the table, in order.
#[must_use]
pub fn find_decls<'a>(rule: &'a RuleNode, table: PropertyTable) -> Vec<&'a Declaration> {
    rule.declarations()
        .iter()
        .filter(|d| table.matches(d))
        .collect()
}

/// Collects the declarations of a rule that do NOT match the table.
///
/// The "only invalid targets" scan: find what fails membership rather than
/// what passes it.
#[must_use]
pub fn find_invalid_decls<'a>(rule: &'a RuleNode, table: PropertyTable) -> Vec<&'a Declaration> {
    rule.declarations()
        .iter()
        .filter(|d| !table.matches(d))
        .collect()
}

/// Returns the first declaration of a rule matching the table.
#[must_use]
pub fn first_matching_decl<'a>(rule: &'a RuleNode, table: PropertyTable) -> Option<&'a Declaration> {
    rule.declarations().iter().find(|d| table.matches(d))
}

/// Returns true if the declaration is an intrinsic fixed dimension.
///
/// A size property is accepted at the root when it is `!important` and its
/// unit pins a fixed dimension rather than a layout relationship.
#[must_use]
pub fn is_intrinsic_size(declaration: &Declaration) -> bool {
    INTRINSIC_PROPS.matches(declaration)
        && declaration.important
        && value::first_dimension(&declaration.value)
            .is_some_and(|d| INTRINSIC_UNITS.contains(&d.unit))
}

/// Returns true for the `height: 0` half of the padding aspect-ratio trick.
///
/// The rule must also declare `padding-bottom` and/or `padding-top`, and
/// every such padding must be a percentage.
#[must_use]
pub fn is_aspect_ratio_hack(declaration: &Declaration, rule: &RuleNode) -> bool {
    if declaration.property != "height" || declaration.value != "0" {
        return false;
    }
    let paddings: Vec<&Declaration> = rule
        .declarations()
        .iter()
        .filter(|d| d.property == "padding-bottom" || d.property == "padding-top")
        .collect();
    !paddings.is_empty() && paddings.iter().all(|d| value::is_percentage(&d.value))
}
