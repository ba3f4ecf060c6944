//! Property tests for the sanitizing engine.
#![allow(clippy::needless_pass_by_value)]

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use sieve_html::{
    HtmlFilter, Policy, Segments, TagRule, Token, WhitelistConfig, parse_attributes, tokenize,
};

/// Markup-heavy input assembled from fragments that exercise every token
/// shape, including broken ones.
#[derive(Debug, Clone)]
struct Markup(String);

const FRAGMENTS: &[&str] = &[
    "<b>",
    "</b>",
    "<B>",
    "<div>",
    "</div>",
    "<p class=a>",
    "</P>",
    r#"<a href="x" title='t' onclick=y>"#,
    "</a>",
    "<img src=x onerror=y>",
    "<br>",
    "<br/>",
    "<input checked=no disabled>",
    "<script>",
    "</script>",
    "<x/>",
    r#"<i title="1>2">"#,
    r#"<i title="a>b"#,
    "<!-- c -->",
    "<!--",
    "-->",
    "</",
    "<",
    ">",
    "\"",
    "'",
    "=",
    " ",
    "\n",
    "text",
    "&amp;",
    "é",
];

impl Arbitrary for Markup {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 24;
        let mut markup = String::new();
        for _ in 0..len {
            if bool::arbitrary(g) {
                markup.push_str(g.choose(FRAGMENTS).copied().unwrap_or_default());
            } else {
                markup.push(char::arbitrary(g));
            }
        }
        Self(markup)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

/// Helper to build the whitelist the properties run against
fn whitelist() -> WhitelistConfig {
    WhitelistConfig::new()
        .allow_tag("b")
        .allow_tag("p")
        .allow_tag_with("a", ["href", "title"])
        .allow_tag_with("img", ["src"])
        .allow_tag_with("input", ["checked"])
}

/// Helper to run the engine
fn filter(whitelist: WhitelistConfig, html: &str) -> String {
    HtmlFilter::new(whitelist).filter(html).into_html()
}

/// Helper to apply the text escaping the engine applies
fn escaped(text: &str) -> String {
    text.replace('<', "&lt;")
}

#[quickcheck]
fn prop_idempotent_on_markup(markup: Markup) -> bool {
    let once = filter(whitelist(), &markup.0);
    filter(whitelist(), &once) == once
}

#[quickcheck]
fn prop_idempotent_on_any_string(input: String) -> bool {
    let once = filter(whitelist(), &input);
    filter(whitelist(), &once) == once
}

#[quickcheck]
fn prop_idempotent_when_disabled(markup: Markup) -> bool {
    let once = filter(WhitelistConfig::disabled(), &markup.0);
    filter(WhitelistConfig::disabled(), &once) == once
}

#[quickcheck]
fn prop_only_whitelisted_tags_are_emitted(markup: Markup) -> bool {
    let policy = Policy::new(whitelist());
    let output = filter(whitelist(), &markup.0);
    tokenize(&output).iter().all(|(token, _)| match token {
        Token::OpenTag { name, .. } => policy.is_tag_allowed(name),
        _ => true,
    })
}

#[quickcheck]
fn prop_only_whitelisted_attributes_are_emitted(markup: Markup) -> bool {
    let whitelist = whitelist();
    let output = filter(whitelist.clone(), &markup.0);
    tokenize(&output).iter().all(|(token, _)| match token {
        Token::OpenTag {
            name,
            raw_attributes,
            ..
        } => {
            let rule = whitelist.rule(name).unwrap_or(&TagRule::StripAllAttributes);
            parse_attributes(raw_attributes)
                .names()
                .all(|attr| rule.allows(attr))
        }
        _ => true,
    })
}

#[quickcheck]
fn prop_disallowed_subtree_is_elided(content: String) -> bool {
    let content = content.replace('<', "");
    filter(whitelist(), &format!("<div>{content}</div>")).is_empty()
}

#[quickcheck]
fn prop_self_closing_does_not_suppress_siblings(text: String) -> bool {
    let text = text.replace('<', "");
    filter(WhitelistConfig::new(), &format!("{text}<br>{text}")) == format!("{text}{text}")
}

#[quickcheck]
fn prop_boolean_attribute_value_is_its_name(value: String) -> bool {
    let value = value.replace('"', "");
    filter(whitelist(), &format!(r#"<input checked="{value}">"#))
        == r#"<input checked="checked" />"#
}

#[quickcheck]
fn prop_pass_through_keeps_all_text(markup: Markup) -> bool {
    let expected: String = Segments::new(&markup.0)
        .filter_map(|(token, _)| match token {
            Token::Text { content } => Some(escaped(&content)),
            Token::Comment { body } => Some(escaped(&body)),
            Token::OpenTag { .. } | Token::CloseTag { .. } => None,
        })
        .collect();

    let output = filter(WhitelistConfig::disabled(), &markup.0);
    let actual: String = Segments::new(&output)
        .filter_map(|(token, _)| match token {
            Token::Text { content } => Some(content),
            _ => None,
        })
        .collect();

    actual == expected
}
