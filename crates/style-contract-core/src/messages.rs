//! Message catalogs as pure data.
//!
//! Each rule keys its diagnostics by a fixed set of message keys mapping to
//! either a literal string or a one-argument formatter. Catalogs are closed:
//! tests assert that every key a rule reports exists in its catalog.

/// A message template: literal, or parameterized by one argument.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A fixed message.
    Static(&'static str),
    /// A message built from one argument (usually the offending property).
    WithArg(fn(&str) -> String),
}

impl Message {
    /// Renders the message.
    ///
    /// A missing argument formats as the empty string; rendering is total.
    #[must_use]
    pub fn format(&self, arg: Option<&str>) -> String {
        match self {
            Self::Static(text) => (*text).to_string(),
            Self::WithArg(f) => f(arg.unwrap_or("")),
        }
    }
}

/// A closed mapping from message key to template.
#[derive(Debug, Clone, Copy)]
pub struct MessageCatalog {
    entries: &'static [(&'static str, Message)],
}

impl MessageCatalog {
    /// Creates a catalog from a static entry slice.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, Message)]) -> Self {
        Self { entries }
    }

    /// Looks up a template by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, m)| m)
    }

    /// Returns true if the catalog defines the key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over all defined keys.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Renders the message for a key; `None` for an unknown key.
    #[must_use]
    pub fn format(&self, key: &str, arg: Option<&str>) -> Option<String> {
        self.get(key).map(|m| m.format(arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_prop(prop: &str) -> String {
        format!("`{prop}` is misplaced")
    }

    const CATALOG: MessageCatalog = MessageCatalog::new(&[
        ("plain", Message::Static("a fixed message")),
        ("parameterized", Message::WithArg(with_prop)),
    ]);

    #[test]
    fn static_message_ignores_argument() {
        assert_eq!(
            CATALOG.format("plain", Some("width")),
            Some("a fixed message".to_string())
        );
    }

    #[test]
    fn parameterized_message_receives_argument() {
        assert_eq!(
            CATALOG.format("parameterized", Some("width")),
            Some("`width` is misplaced".to_string())
        );
    }

    #[test]
    fn missing_argument_formats_as_empty() {
        assert_eq!(
            CATALOG.format("parameterized", None),
            Some("`` is misplaced".to_string())
        );
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(CATALOG.format("nope", None), None);
        assert!(!CATALOG.contains("nope"));
    }

    #[test]
    fn keys_enumerate_the_catalog() {
        let keys: Vec<&str> = CATALOG.keys().collect();
        assert_eq!(keys, vec!["plain", "parameterized"]);
    }
}
