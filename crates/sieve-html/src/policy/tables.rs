//! Built-in lookup tables.

use std::collections::BTreeSet;

/// Tags that never have content or a matching close tag.
///
/// `textarea` and `object` are listed even though HTML5 does not treat them
/// as void elements; existing whitelists rely on them being here.
pub const SELF_CLOSING_TAGS: [&str; 15] = [
    "meta", "base", "link", "hr", "br", "wbr", "col", "img", "area", "input", "textarea", "embed",
    "param", "source", "object",
];

/// Attributes whose presence alone carries meaning. Their serialized value is
/// always their own name.
pub const BOOLEAN_ATTRIBUTES: [&str; 13] = [
    "checked", "compact", "declare", "defer", "disabled", "ismap", "multiple", "nohref",
    "noresize", "noshade", "nowrap", "readonly", "selected",
];

/// Exact-case membership test against [`BOOLEAN_ATTRIBUTES`].
#[must_use]
pub fn is_default_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

/// The self-closing and boolean-attribute tables an engine is built with.
///
/// [`BuiltinTables::default`] holds [`SELF_CLOSING_TAGS`] and
/// [`BOOLEAN_ATTRIBUTES`]. Custom tables exist for testing and for callers
/// with unusual vocabularies; they are fixed once the engine is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinTables {
    self_closing: BTreeSet<String>,
    boolean_attributes: BTreeSet<String>,
}

impl Default for BuiltinTables {
    fn default() -> Self {
        Self::new(SELF_CLOSING_TAGS, BOOLEAN_ATTRIBUTES)
    }
}

impl BuiltinTables {
    /// Build custom tables. Self-closing tag names are lower-cased; boolean
    /// attribute names are kept as given because attribute names are matched
    /// exactly.
    pub fn new<S, B>(self_closing: S, boolean_attributes: B) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self {
            self_closing: self_closing
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect(),
            boolean_attributes: boolean_attributes
                .into_iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
        }
    }

    /// Is `name` (case-insensitive) a self-closing tag?
    #[must_use]
    pub fn is_self_closing(&self, name: &str) -> bool {
        self.self_closing.contains(&name.to_ascii_lowercase())
    }

    /// Is `name` (exact case) a boolean attribute?
    #[must_use]
    pub fn is_boolean_attribute(&self, name: &str) -> bool {
        self.boolean_attributes.contains(name)
    }
}
