//! Read-only selector AST.
//!
//! Selectors arrive pre-parsed from the host's CSS parser: a selector is an
//! ordered list of comma-separated groups, each group an ordered list of
//! simple selector components. This module only stores that shape and
//! answers the structural questions rules ask of it.

use std::fmt;

/// A combinator between two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `>` direct child.
    Child,
    /// Whitespace descendant.
    Descendant,
    /// `+` next sibling.
    NextSibling,
    /// `~` subsequent sibling.
    SubsequentSibling,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Child => write!(f, " > "),
            Self::Descendant => write!(f, " "),
            Self::NextSibling => write!(f, " + "),
            Self::SubsequentSibling => write!(f, " ~ "),
        }
    }
}

/// A single component of a selector group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// The nesting placeholder `&`.
    Nesting,
    /// A combinator between compounds.
    Combinator(Combinator),
    /// An element type selector, e.g. `div`.
    Tag(String),
    /// A class selector, e.g. `.item` (stored without the dot).
    Class(String),
    /// An id selector, e.g. `#main` (stored without the hash).
    Id(String),
    /// An attribute selector, e.g. `[hidden]` (stored without brackets).
    Attribute(String),
    /// A pseudo-class, e.g. `:hover` (stored without the colon).
    PseudoClass(String),
    /// A pseudo-element, e.g. `::before` (stored without the colons).
    PseudoElement(String),
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nesting => write!(f, "&"),
            Self::Combinator(c) => write!(f, "{c}"),
            Self::Tag(name) => write!(f, "{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Attribute(expr) => write!(f, "[{expr}]"),
            Self::PseudoClass(name) => write!(f, ":{name}"),
            Self::PseudoElement(name) => write!(f, "::{name}"),
        }
    }
}

/// One comma-separated alternative of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorGroup {
    components: Vec<Component>,
}

impl SelectorGroup {
    /// Creates a new group from its components, in source order.
    #[must_use]
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Returns the components in source order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns true if any component is a pseudo-element.
    #[must_use]
    pub fn has_pseudo_element(&self) -> bool {
        self.components
            .iter()
            .any(|c| matches!(c, Component::PseudoElement(_)))
    }

    /// Returns true if any component is a pseudo-class.
    #[must_use]
    pub fn has_pseudo_class(&self) -> bool {
        self.components
            .iter()
            .any(|c| matches!(c, Component::PseudoClass(_)))
    }

    /// Returns true if any component is the given class.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.components
            .iter()
            .any(|c| matches!(c, Component::Class(n) if n == name))
    }
}

// Display for a group is its components back to back; the combinator
// variants carry their own surrounding whitespace.
impl fmt::Display for SelectorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// A full selector: ordered comma-separated groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    groups: Vec<SelectorGroup>,
}

impl Selector {
    /// Creates a selector from its groups, in source order.
    #[must_use]
    pub fn new(groups: Vec<SelectorGroup>) -> Self {
        Self { groups }
    }

    /// A single-class selector, `.name`.
    #[must_use]
    pub fn class(name: &str) -> Self {
        SelectorGroup::new(vec![Component::Class(name.to_string())]).into()
    }

    /// A direct-child-of-nesting selector, `& > .name`.
    #[must_use]
    pub fn nested_class(name: &str) -> Self {
        SelectorGroup::new(vec![
            Component::Nesting,
            Component::Combinator(Combinator::Child),
            Component::Class(name.to_string()),
        ])
        .into()
    }

    /// Returns the groups in source order.
    #[must_use]
    pub fn groups(&self) -> &[SelectorGroup] {
        &self.groups
    }

    /// Returns the first group, if any.
    #[must_use]
    pub fn first_group(&self) -> Option<&SelectorGroup> {
        self.groups.first()
    }

    /// Returns true if the first group targets a pseudo-element.
    ///
    /// Rules use this to exempt `&::before`-style rules from checks that
    /// only make sense for element rules.
    #[must_use]
    pub fn is_pseudo_element_rule(&self) -> bool {
        self.first_group().is_some_and(SelectorGroup::has_pseudo_element)
    }

    /// Returns true if every comma-separated alternative contains the class.
    ///
    /// An empty selector has no alternative that lacks the class, so this
    /// returns true for it; rule nodes always carry at least one group in
    /// practice.
    #[must_use]
    pub fn every_group_has_class(&self, name: &str) -> bool {
        self.groups.iter().all(|g| g.has_class(name))
    }
}

impl From<SelectorGroup> for Selector {
    fn from(group: SelectorGroup) -> Self {
        Self::new(vec![group])
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pseudo_before_group() -> SelectorGroup {
        SelectorGroup::new(vec![
            Component::Nesting,
            Component::Combinator(Combinator::Child),
            Component::Class("icon".to_string()),
            Component::PseudoElement("before".to_string()),
        ])
    }

    #[test]
    fn class_selector_renders() {
        assert_eq!(Selector::class("good").to_string(), ".good");
    }

    #[test]
    fn nested_class_selector_renders() {
        assert_eq!(Selector::nested_class("item").to_string(), "& > .item");
    }

    #[test]
    fn multi_group_selector_renders_with_commas() {
        let selector = Selector::new(vec![
            SelectorGroup::new(vec![Component::Class("a".to_string())]),
            SelectorGroup::new(vec![Component::Class("b".to_string())]),
        ]);
        assert_eq!(selector.to_string(), ".a, .b");
    }

    #[test]
    fn pseudo_element_detected_in_first_group() {
        let selector: Selector = pseudo_before_group().into();
        assert!(selector.is_pseudo_element_rule());
        assert!(!Selector::nested_class("item").is_pseudo_element_rule());
    }

    #[test]
    fn pseudo_class_is_not_a_pseudo_element() {
        let group = SelectorGroup::new(vec![
            Component::Class("link".to_string()),
            Component::PseudoClass("hover".to_string()),
        ]);
        assert!(group.has_pseudo_class());
        assert!(!group.has_pseudo_element());
        let selector: Selector = group.into();
        assert!(!selector.is_pseudo_element_rule());
    }

    #[test]
    fn every_group_has_class_requires_all_alternatives() {
        let both = Selector::new(vec![
            SelectorGroup::new(vec![
                Component::Nesting,
                Component::Combinator(Combinator::Child),
                Component::Class("relativeToParent".to_string()),
            ]),
            SelectorGroup::new(vec![
                Component::Class("relativeToParent".to_string()),
                Component::Class("open".to_string()),
            ]),
        ]);
        assert!(both.every_group_has_class("relativeToParent"));

        let one_missing = Selector::new(vec![
            SelectorGroup::new(vec![Component::Class("relativeToParent".to_string())]),
            SelectorGroup::new(vec![Component::Class("open".to_string())]),
        ]);
        assert!(!one_missing.every_group_has_class("relativeToParent"));
    }

    #[test]
    fn selectors_compare_structurally() {
        assert_eq!(Selector::class("good"), Selector::class("good"));
        assert_ne!(Selector::class("good"), Selector::nested_class("good"));
    }
}
