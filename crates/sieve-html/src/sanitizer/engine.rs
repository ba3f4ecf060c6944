use sieve_common::warning::warn_once;
use strum_macros::Display;
use tracing::{debug, trace};

use super::result::{IssueKind, SanitizeIssue, SanitizedResult};
use super::segments::Segments;
use super::stack::SuppressionStack;
use crate::attributes::{AttributeMap, parse_attributes_with};
use crate::policy::{AttributeFilter, BuiltinTables, Policy, WhitelistConfig};
use crate::tokenizer::Token;

const WARNING_COMPONENT: &str = "Sanitizer";
/// Carries no input-derived text, so the warning set stays at one entry.
const UNCLOSED_WARNING: &str = "input ended inside a suppressed element";

/// Whether output is currently being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FilterState {
    /// The suppression stack is empty; accepted content is emitted.
    Normal,
    /// Inside a disallowed element; everything is discarded.
    Suppressing,
}

/// The sanitizing engine.
///
/// Holds a read-only [`Policy`]. Every [`HtmlFilter::filter`] call builds its
/// own output buffer and suppression stack, so a single engine can be reused
/// and shared between threads.
///
/// ```
/// use sieve_html::{HtmlFilter, WhitelistConfig};
///
/// let filter = HtmlFilter::new(WhitelistConfig::new().allow_tag_with("img", ["src"]));
/// let result = filter.filter(r#"<img src="x.png" onerror="bad()"><script>alert(1)</script>ok"#);
/// assert_eq!(result.html(), r#"<img src="x.png" />ok"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlFilter {
    policy: Policy,
}

impl HtmlFilter {
    /// Create an engine with the default built-in tables.
    #[must_use]
    pub fn new(whitelist: WhitelistConfig) -> Self {
        Self {
            policy: Policy::new(whitelist),
        }
    }

    /// Create an engine with custom self-closing and boolean tables.
    #[must_use]
    pub const fn with_tables(whitelist: WhitelistConfig, tables: BuiltinTables) -> Self {
        Self {
            policy: Policy::with_tables(whitelist, tables),
        }
    }

    /// Replace the whitelist. `None` disables filtering.
    pub fn configure(&mut self, whitelist: Option<WhitelistConfig>) {
        self.policy.set_whitelist(whitelist.into());
    }

    /// Sanitize `html`.
    ///
    /// Never fails: malformed markup is handled on a best-effort basis and
    /// left as text.
    #[must_use]
    pub fn filter(&self, html: &str) -> SanitizedResult {
        let mut run = FilterRun::new(&self.policy, html.len());
        for (token, span) in Segments::new(html) {
            run.process(token, span.start);
        }
        run.finish(html.len())
    }
}

/// Working state of a single filter call.
struct FilterRun<'p> {
    policy: &'p Policy,
    output: String,
    stack: SuppressionStack,
    issues: Vec<SanitizeIssue>,
}

impl<'p> FilterRun<'p> {
    fn new(policy: &'p Policy, capacity: usize) -> Self {
        Self {
            policy,
            output: String::with_capacity(capacity),
            stack: SuppressionStack::new(),
            issues: Vec::new(),
        }
    }

    const fn state(&self) -> FilterState {
        if self.stack.is_empty() {
            FilterState::Normal
        } else {
            FilterState::Suppressing
        }
    }

    fn record(&mut self, kind: IssueKind, name: &str, offset: usize) {
        self.issues.push(SanitizeIssue {
            kind,
            name: name.to_string(),
            offset,
        });
    }

    fn process(&mut self, token: Token, offset: usize) {
        match token {
            // Comments lose their delimiters and are treated as plain text.
            Token::Text { content: text } | Token::Comment { body: text } => self.on_text(&text),
            Token::OpenTag {
                name,
                raw_attributes,
                ..
            } => self.on_open(&name, &raw_attributes, offset),
            Token::CloseTag { name } => self.on_close(&name),
        }
    }

    fn on_text(&mut self, text: &str) {
        if self.state() == FilterState::Normal {
            push_text(&mut self.output, text);
        }
    }

    fn on_open(&mut self, name: &str, raw_attributes: &str, offset: usize) {
        let name = name.to_ascii_lowercase();
        let allowed = self.policy.is_tag_allowed(&name);
        let self_closing = self.policy.is_self_closing(&name);
        let state = self.state();
        trace!(tag = %name, allowed, self_closing, %state, "open tag");

        if allowed && state == FilterState::Normal {
            self.emit_open_tag(&name, raw_attributes, self_closing, offset);
            return;
        }

        // Self-closing tags have no body, so there is nothing to suppress.
        if self_closing {
            if state == FilterState::Normal {
                self.record(IssueKind::DroppedTag, &name, offset);
            }
            return;
        }

        if state == FilterState::Normal {
            self.record(IssueKind::SuppressedSubtree, &name, offset);
        }
        self.stack.push(&name);
    }

    fn emit_open_tag(&mut self, name: &str, raw_attributes: &str, self_closing: bool, offset: usize) {
        let policy = self.policy;
        let attributes = parse_attributes_with(raw_attributes, |attr| {
            policy.is_boolean_attribute(attr)
        });

        let kept = match policy.attribute_filter(name) {
            AttributeFilter::KeepAll => attributes.clone(),
            AttributeFilter::StripAll => AttributeMap::new(),
            AttributeFilter::Only(allowed) => attributes.filtered(|attr| allowed.contains(attr)),
        };
        for dropped in attributes_missing_from(&attributes, &kept) {
            self.record(IssueKind::DroppedAttribute, dropped, offset);
        }

        self.output.push('<');
        self.output.push_str(name);
        for attr in &kept {
            self.output.push(' ');
            self.output.push_str(&attr.name);
            self.output.push_str("=\"");
            push_attribute_value(&mut self.output, &attr.value);
            self.output.push('"');
        }
        if self_closing {
            self.output.push_str(" /");
        }
        self.output.push('>');
    }

    fn on_close(&mut self, name: &str) {
        // Suppression counts depth only; any closing tag ends one level.
        if let Some(opened_by) = self.stack.pop() {
            trace!(tag = %name, %opened_by, depth = self.stack.depth(), "close tag suppressed");
            return;
        }

        self.output.push_str("</");
        self.output.push_str(&name.to_lowercase());
        self.output.push('>');
    }

    fn finish(mut self, input_len: usize) -> SanitizedResult {
        let ended_suppressing = !self.stack.is_empty();
        if let Some(head) = self.stack.head().map(str::to_string) {
            let _ = warn_once(WARNING_COMPONENT, UNCLOSED_WARNING);
            debug!(tag = %head, depth = self.stack.depth(), "input ended while suppressing");
            self.record(IssueKind::UnclosedSuppression, &head, input_len);
        }

        debug!(
            input_len,
            output_len = self.output.len(),
            issues = self.issues.len(),
            ended_suppressing,
            "filter run complete"
        );

        SanitizedResult {
            html: self.output,
            issues: self.issues,
            ended_suppressing,
        }
    }
}

/// Names present in `all` but not in `kept`, in order.
fn attributes_missing_from<'a>(
    all: &'a AttributeMap,
    kept: &'a AttributeMap,
) -> impl Iterator<Item = &'a str> {
    all.names().filter(|name| !kept.contains(name))
}

/// Append text with every `<` written as `&lt;`, so that dropping a token can
/// never splice surrounding characters into a new tag.
fn push_text(output: &mut String, text: &str) {
    let mut parts = text.split('<');
    if let Some(first) = parts.next() {
        output.push_str(first);
    }
    for part in parts {
        output.push_str("&lt;");
        output.push_str(part);
    }
}

/// Append an attribute value for a double-quoted context.
fn push_attribute_value(output: &mut String, value: &str) {
    let mut parts = value.split('"');
    if let Some(first) = parts.next() {
        output.push_str(first);
    }
    for part in parts {
        output.push_str("&quot;");
        output.push_str(part);
    }
}
