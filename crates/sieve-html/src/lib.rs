//! Whitelist-driven HTML sanitizer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - a single forward scan that recognizes opening tags,
//!   closing tags and comments, leaving everything else as text
//! - **Attribute Parser** - ordered attribute maps from raw attribute blobs,
//!   with boolean attribute normalization
//! - **Whitelist Policy** - tag and attribute lookups against a
//!   caller-supplied whitelist and fixed built-in tables
//! - **Sanitizing Engine** - rewrites markup so that only whitelisted tags and
//!   attributes survive, discarding disallowed elements with their content
//!
//! # Not a validating parser
//!
//! Malformed markup is tolerated on a best-effort basis and never rejected.
//! Nesting is tracked by depth only, without building a tree. Text is not
//! entity-decoded and attribute values are not inspected; only attribute
//! names are whitelisted.
//!
//! ```
//! use sieve_html::{HtmlFilter, WhitelistConfig};
//!
//! let whitelist = WhitelistConfig::new().allow_tag("b");
//! let filter = HtmlFilter::new(whitelist);
//! assert_eq!(filter.filter("<div><b>bold</b></div>text").html(), "text");
//! ```

/// Attribute maps and the attribute parser.
pub mod attributes;
/// Whitelist configuration and policy lookups.
pub mod policy;
/// The sanitizing engine.
pub mod sanitizer;
/// Markup tokenizer.
pub mod tokenizer;

pub use attributes::{Attribute, AttributeMap, parse_attributes, parse_attributes_with};
pub use policy::{
    AttributeFilter, BOOLEAN_ATTRIBUTES, BuiltinTables, Policy, SELF_CLOSING_TAGS, TagRule,
    WhitelistConfig, WhitelistError,
};
pub use sanitizer::{
    FilterState, HtmlFilter, IssueKind, SanitizeIssue, SanitizedResult, Segments,
    SuppressionStack,
};
pub use tokenizer::{Span, Token, Tokenizer, tokenize};

/// Sanitize `html` against `whitelist` in one call.
#[must_use]
pub fn sanitize(html: &str, whitelist: WhitelistConfig) -> String {
    HtmlFilter::new(whitelist).filter(html).into_html()
}
