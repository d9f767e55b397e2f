//! Arena-backed stylesheet tree.
//!
//! Rules are stored in a flat vector in document order with integer parent
//! indices, so parent back-references never form ownership cycles. The tree
//! is immutable once built; hosts construct it through [`StylesheetBuilder`]
//! from whatever parser they use.

use crate::selector::Selector;
use crate::types::Span;
use serde::{Deserialize, Serialize};

/// Handle to a rule stored in a [`Stylesheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(usize);

impl RuleId {
    /// Returns the position of this rule in document order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Property name, lowercase as parsed.
    pub property: String,
    /// Raw declaration value, without any `!important` marker.
    pub value: String,
    /// Whether the declaration carried `!important`.
    pub important: bool,
    /// Source span of the declaration.
    pub span: Span,
}

impl Declaration {
    /// Creates a plain declaration with an unknown span.
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
            span: Span::default(),
        }
    }

    /// Marks the declaration `!important`.
    #[must_use]
    pub fn with_important(mut self) -> Self {
        self.important = true;
        self
    }

    /// Sets the source span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A style rule: selector, declarations, and tree links.
#[derive(Debug, Clone)]
pub struct RuleNode {
    selector: Selector,
    declarations: Vec<Declaration>,
    parent: Option<RuleId>,
    children: Vec<RuleId>,
    span: Span,
}

impl RuleNode {
    /// Returns the rule's selector.
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Returns the declarations in source order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Returns the enclosing rule, if any.
    #[must_use]
    pub fn parent(&self) -> Option<RuleId> {
        self.parent
    }

    /// Returns the ids of directly nested rules, in source order.
    #[must_use]
    pub fn children(&self) -> &[RuleId] {
        &self.children
    }

    /// Returns the source span of the rule.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the effective declaration for a property.
    ///
    /// When a property is declared more than once in the same block, the
    /// last declaration wins, consistent with CSS override semantics within
    /// one rule. Returns `None` when the property is absent.
    #[must_use]
    pub fn decl(&self, property: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
    }

    /// Returns true if the rule declares the property at all.
    #[must_use]
    pub fn has_decl(&self, property: &str) -> bool {
        self.decl(property).is_some()
    }
}

/// An immutable stylesheet tree.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<RuleNode>,
}

impl Stylesheet {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> StylesheetBuilder {
        StylesheetBuilder::new()
    }

    /// Returns the rule for a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this stylesheet.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> &RuleNode {
        &self.rules[id.0]
    }

    /// Iterates over all rules in document order.
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &RuleNode)> {
        self.rules.iter().enumerate().map(|(i, r)| (RuleId(i), r))
    }

    /// Returns the number of rules in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the tree holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Starts building a rule; shorthand for [`RuleBuilder::new`].
#[must_use]
pub fn rule(selector: impl Into<Selector>) -> RuleBuilder {
    RuleBuilder::new(selector)
}

/// Builder for one rule and its nested rules.
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    selector: Selector,
    span: Span,
    declarations: Vec<Declaration>,
    children: Vec<RuleBuilder>,
}

impl RuleBuilder {
    /// Creates a builder for a rule with the given selector.
    #[must_use]
    pub fn new(selector: impl Into<Selector>) -> Self {
        Self {
            selector: selector.into(),
            span: Span::default(),
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the rule's source position.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.span = Span::new(line, column);
        self
    }

    /// Appends a declaration.
    #[must_use]
    pub fn decl(mut self, property: &str, value: &str) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Appends a declaration with a source position.
    #[must_use]
    pub fn decl_at(mut self, property: &str, value: &str, line: usize, column: usize) -> Self {
        self.declarations
            .push(Declaration::new(property, value).with_span(Span::new(line, column)));
        self
    }

    /// Appends an `!important` declaration.
    #[must_use]
    pub fn important_decl(mut self, property: &str, value: &str) -> Self {
        self.declarations
            .push(Declaration::new(property, value).with_important());
        self
    }

    /// Appends a fully built declaration.
    #[must_use]
    pub fn push_decl(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Appends a nested rule.
    #[must_use]
    pub fn nested(mut self, child: RuleBuilder) -> Self {
        self.children.push(child);
        self
    }
}

/// Builder for a whole stylesheet.
#[derive(Debug, Clone, Default)]
pub struct StylesheetBuilder {
    rules: Vec<RuleNode>,
}

impl StylesheetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level rule and its nested rules, pre-order.
    #[must_use]
    pub fn rule(mut self, builder: RuleBuilder) -> Self {
        self.insert(builder, None);
        self
    }

    /// Finishes the stylesheet.
    #[must_use]
    pub fn build(self) -> Stylesheet {
        Stylesheet { rules: self.rules }
    }

    fn insert(&mut self, builder: RuleBuilder, parent: Option<RuleId>) -> RuleId {
        let id = RuleId(self.rules.len());
        self.rules.push(RuleNode {
            selector: builder.selector,
            declarations: builder.declarations,
            parent,
            children: Vec::new(),
            span: builder.span,
        });
        for child in builder.children {
            let child_id = self.insert(child, Some(id));
            self.rules[id.0].children.push(child_id);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_document_order() {
        let sheet = Stylesheet::builder()
            .rule(
                rule(Selector::class("menu"))
                    .decl("display", "flex")
                    .nested(rule(Selector::nested_class("item")).decl("flex-grow", "1")),
            )
            .rule(rule(Selector::class("footer")).decl("color", "gray"))
            .build();

        let selectors: Vec<String> = sheet
            .rules()
            .map(|(_, r)| r.selector().to_string())
            .collect();
        assert_eq!(selectors, vec![".menu", "& > .item", ".footer"]);
    }

    #[test]
    fn parent_and_children_are_linked() {
        let sheet = Stylesheet::builder()
            .rule(
                rule(Selector::class("menu"))
                    .nested(rule(Selector::nested_class("item")))
                    .nested(rule(Selector::nested_class("badge"))),
            )
            .build();

        let (menu_id, menu) = sheet.rules().next().unwrap();
        assert_eq!(menu.children().len(), 2);
        assert!(menu.parent().is_none());
        for &child_id in menu.children() {
            assert_eq!(sheet.rule(child_id).parent(), Some(menu_id));
        }
    }

    #[test]
    fn last_declaration_wins_within_a_rule() {
        let sheet = Stylesheet::builder()
            .rule(
                rule(Selector::class("panel"))
                    .decl("color", "red")
                    .decl("display", "block")
                    .decl("color", "blue"),
            )
            .build();

        let (_, panel) = sheet.rules().next().unwrap();
        assert_eq!(panel.decl("color").map(|d| d.value.as_str()), Some("blue"));
        assert_eq!(panel.declarations().len(), 3);
        assert!(panel.has_decl("display"));
        assert!(!panel.has_decl("width"));
    }

    #[test]
    fn declaration_builders_set_flags_and_spans() {
        let decl = Declaration::new("width", "100px")
            .with_important()
            .with_span(Span::new(3, 5));
        assert!(decl.important);
        assert_eq!(decl.span.line, 3);

        let sheet = Stylesheet::builder()
            .rule(
                rule(Selector::class("logo"))
                    .at(1, 1)
                    .decl_at("height", "0", 2, 3)
                    .important_decl("width", "120px"),
            )
            .build();
        let (_, logo) = sheet.rules().next().unwrap();
        assert_eq!(logo.span().line, 1);
        assert_eq!(logo.declarations()[0].span.line, 2);
        assert!(logo.declarations()[1].important);
    }

    #[test]
    fn empty_stylesheet() {
        let sheet = Stylesheet::builder().build();
        assert!(sheet.is_empty());
        assert_eq!(sheet.len(), 0);
        assert_eq!(sheet.rules().count(), 0);
    }
}
