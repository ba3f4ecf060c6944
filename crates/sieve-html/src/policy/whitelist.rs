//! The caller-supplied whitelist.

use std::collections::{BTreeMap, BTreeSet};

/// What a whitelisted tag may keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRule {
    /// The tag is allowed but every attribute is dropped.
    StripAllAttributes,
    /// The tag is allowed with exactly these attribute names (exact case).
    AllowedSet(BTreeSet<String>),
}

impl TagRule {
    /// Build an [`TagRule::AllowedSet`] from attribute names.
    pub fn attributes<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::AllowedSet(names.into_iter().map(Into::into).collect())
    }

    /// Would an attribute with this exact name survive?
    #[must_use]
    pub fn allows(&self, attribute: &str) -> bool {
        match self {
            Self::StripAllAttributes => false,
            Self::AllowedSet(names) => names.contains(attribute),
        }
    }
}

/// Mapping from lower-cased tag name to [`TagRule`].
///
/// Tags absent from the mapping are disallowed. [`WhitelistConfig::Disabled`]
/// is the pass-through state in which every tag and attribute is kept.
///
/// ```
/// use sieve_html::WhitelistConfig;
///
/// let whitelist = WhitelistConfig::new()
///     .allow_tag("p")
///     .allow_tag_with("IMG", ["src", "alt"]);
/// assert!(whitelist.rule("img").is_some());
/// assert!(whitelist.rule("script").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistConfig {
    /// No filtering at all.
    Disabled,
    /// Only the listed tags are allowed.
    Tags(BTreeMap<String, TagRule>),
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WhitelistConfig {
    /// An empty whitelist: every tag is disallowed.
    #[must_use]
    pub const fn new() -> Self {
        Self::Tags(BTreeMap::new())
    }

    /// The pass-through configuration.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::Disabled
    }

    /// Returns true for the pass-through configuration.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Allow `tag` with every attribute stripped.
    #[must_use]
    pub fn allow_tag(self, tag: &str) -> Self {
        self.with_rule(tag, TagRule::StripAllAttributes)
    }

    /// Allow `tag` with the given attribute names.
    #[must_use]
    pub fn allow_tag_with<I>(self, tag: &str, attributes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.with_rule(tag, TagRule::attributes(attributes))
    }

    /// Set the rule for `tag`, replacing any earlier one.
    ///
    /// Adding a rule to a disabled whitelist turns it into an explicit
    /// whitelist holding only that rule.
    #[must_use]
    pub fn with_rule(mut self, tag: &str, rule: TagRule) -> Self {
        self.insert(tag, rule);
        self
    }

    /// In-place form of [`WhitelistConfig::with_rule`].
    pub fn insert(&mut self, tag: &str, rule: TagRule) {
        let key = tag.to_ascii_lowercase();
        match self {
            Self::Tags(tags) => {
                let _ = tags.insert(key, rule);
            }
            Self::Disabled => *self = Self::Tags(BTreeMap::from([(key, rule)])),
        }
    }

    /// The rule for `tag` (case-insensitive). Always `None` when disabled.
    #[must_use]
    pub fn rule(&self, tag: &str) -> Option<&TagRule> {
        match self {
            Self::Disabled => None,
            Self::Tags(tags) => tags.get(&tag.to_ascii_lowercase()),
        }
    }

    /// Number of whitelisted tags (zero when disabled).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Tags(tags) => tags.len(),
        }
    }

    /// Returns true if no tag is whitelisted. A disabled whitelist is empty
    /// but still allows everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Option<WhitelistConfig>> for WhitelistConfig {
    /// `None` means "no whitelist", i.e. [`WhitelistConfig::Disabled`].
    fn from(config: Option<Self>) -> Self {
        config.unwrap_or(Self::Disabled)
    }
}
