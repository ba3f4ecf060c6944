//! Whitelist policy.
//!
//! Pure lookups over a [`WhitelistConfig`] and the [`BuiltinTables`]. Tag
//! names are compared case-insensitively; attribute names are compared
//! exactly as written, so whitelists should list attribute names in the case
//! documents use (normally lower case).

/// JSON loading for whitelists.
pub mod config;
/// Self-closing tag and boolean attribute tables.
pub mod tables;
/// Whitelist configuration types.
pub mod whitelist;

use std::collections::BTreeSet;

pub use config::WhitelistError;
pub use tables::{BOOLEAN_ATTRIBUTES, BuiltinTables, SELF_CLOSING_TAGS};
pub use whitelist::{TagRule, WhitelistConfig};

/// What happens to the attributes of an allowed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFilter<'a> {
    /// Keep every attribute (whitelist disabled).
    KeepAll,
    /// Emit the tag bare.
    StripAll,
    /// Keep only attributes with these exact names.
    Only(&'a BTreeSet<String>),
}

/// A whitelist together with the built-in tables it is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    whitelist: WhitelistConfig,
    tables: BuiltinTables,
}

impl Policy {
    /// Combine a whitelist with the default tables.
    #[must_use]
    pub fn new(whitelist: WhitelistConfig) -> Self {
        Self::with_tables(whitelist, BuiltinTables::default())
    }

    /// Combine a whitelist with custom tables.
    #[must_use]
    pub const fn with_tables(whitelist: WhitelistConfig, tables: BuiltinTables) -> Self {
        Self { whitelist, tables }
    }

    /// The whitelist in effect.
    #[must_use]
    pub const fn whitelist(&self) -> &WhitelistConfig {
        &self.whitelist
    }

    /// Replace the whitelist, keeping the tables.
    pub fn set_whitelist(&mut self, whitelist: WhitelistConfig) {
        self.whitelist = whitelist;
    }

    /// Is `name` allowed? Always true when the whitelist is disabled.
    /// Otherwise true iff the tag has a rule, whatever that rule says.
    #[must_use]
    pub fn is_tag_allowed(&self, name: &str) -> bool {
        self.whitelist.is_disabled() || self.whitelist.rule(name).is_some()
    }

    /// The explicit attribute set for `name`, if it has one.
    ///
    /// `None` covers both a missing tag and [`TagRule::StripAllAttributes`],
    /// and means "strip every attribute", never "keep all". An explicit empty
    /// set strips everything too. When the whitelist is disabled there is no
    /// rule either; use [`Policy::attribute_filter`] to tell that case apart.
    #[must_use]
    pub fn allowed_attributes_for(&self, name: &str) -> Option<&BTreeSet<String>> {
        match self.whitelist.rule(name)? {
            TagRule::StripAllAttributes => None,
            TagRule::AllowedSet(names) => Some(names),
        }
    }

    /// How the attributes of an allowed `name` tag are filtered.
    #[must_use]
    pub fn attribute_filter(&self, name: &str) -> AttributeFilter<'_> {
        if self.whitelist.is_disabled() {
            return AttributeFilter::KeepAll;
        }
        self.allowed_attributes_for(name)
            .map_or(AttributeFilter::StripAll, AttributeFilter::Only)
    }

    /// Is `name` (case-insensitive) in the self-closing table?
    #[must_use]
    pub fn is_self_closing(&self, name: &str) -> bool {
        self.tables.is_self_closing(name)
    }

    /// Is `name` (exact case) in the boolean attribute table?
    #[must_use]
    pub fn is_boolean_attribute(&self, name: &str) -> bool {
        self.tables.is_boolean_attribute(name)
    }
}
