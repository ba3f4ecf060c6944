//! Attribute parsing for opening tags.
//!
//! The tokenizer hands over the raw attribute blob of each opening tag; this
//! module turns it into an ordered [`AttributeMap`]. Attribute names keep the
//! case they were written in.

use core::slice;

use crate::policy::tables::is_default_boolean_attribute;
use crate::tokenizer::helpers::{char_at, is_attribute_name_char, match_assignment, skip_while};

/// A single attribute on an opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, case as written.
    pub name: String,
    /// Attribute value with quotes removed. Bare attributes have an empty
    /// value unless they are boolean attributes.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// Ordered mapping from attribute name to value.
///
/// Keys are unique. Inserting an existing name replaces its value but keeps
/// the position where the name was first seen, so serialization follows the
/// order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<Attribute>,
}

impl AttributeMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite an attribute.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => value.clone_into(&mut existing.value),
            None => self
                .entries
                .push(Attribute::new(name.to_string(), value.to_string())),
        }
    }

    /// Look up a value by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Returns true if an attribute with exactly this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|attr| attr.name == name)
    }

    /// Number of attributes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in first-seen order.
    pub fn iter(&self) -> slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Attribute names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|attr| attr.name.as_str())
    }

    /// Build a new map holding only the attributes whose name satisfies
    /// `keep`, in the same order. `self` is left untouched.
    #[must_use]
    pub fn filtered(&self, keep: impl Fn(&str) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|attr| keep(&attr.name))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a Attribute;
    type IntoIter = slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AttributeMap {
    type Item = Attribute;
    type IntoIter = std::vec::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parse a raw attribute blob using the built-in boolean-attribute table.
///
/// ```
/// use sieve_html::parse_attributes;
///
/// let attrs = parse_attributes(r#" src="a.png" checked='no' alt=x"#);
/// assert_eq!(attrs.get("src"), Some("a.png"));
/// assert_eq!(attrs.get("checked"), Some("checked"));
/// assert_eq!(attrs.get("alt"), Some("x"));
/// ```
#[must_use]
pub fn parse_attributes(raw: &str) -> AttributeMap {
    parse_attributes_with(raw, is_default_boolean_attribute)
}

/// Parse a raw attribute blob, deciding boolean attributes with `is_boolean`.
///
/// Recognizes `name`, `name=value`, `name="value"` and `name='value'`, with
/// optional whitespace around `=`. Names are runs of letters, digits, `-`,
/// `_` and `:`. Any other character between attributes is skipped. For a
/// boolean attribute the stored value is its own name, whatever the markup
/// said.
#[must_use]
pub fn parse_attributes_with(raw: &str, is_boolean: impl Fn(&str) -> bool) -> AttributeMap {
    let mut map = AttributeMap::new();
    let mut pos = 0;

    while let Some(c) = char_at(raw, pos) {
        if !is_attribute_name_char(c) {
            pos += c.len_utf8();
            continue;
        }

        let name_end = skip_while(raw, pos, is_attribute_name_char);
        let name = &raw[pos..name_end];
        let (value, next) = match_assignment(raw, name_end)
            .map_or(("", name_end), |value| (&raw[value.content], value.span.end));

        if is_boolean(name) {
            map.insert(name, name);
        } else {
            map.insert(name, value);
        }
        pos = next;
    }

    map
}
