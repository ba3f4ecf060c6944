//! Integration tests for the markup tokenizer.

use std::time::{Duration, Instant};

use sieve_html::{Segments, Token, Tokenizer, tokenize};

/// Helper to tokenize a string and return the tokens without spans
fn tokens(input: &str) -> Vec<Token> {
    tokenize(input).into_iter().map(|(token, _)| token).collect()
}

/// Helper to segment a string, text included
fn segments(input: &str) -> Vec<Token> {
    Segments::new(input).map(|(token, _)| token).collect()
}

#[test]
fn test_plain_text() {
    assert!(tokens("Hello").is_empty());
    assert_eq!(segments("Hello"), vec![Token::text("Hello")]);
}

#[test]
fn test_empty_input() {
    assert!(tokens("").is_empty());
    assert!(segments("").is_empty());
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].0, Token::open_tag("div", "", false));
    assert_eq!(tokens[0].1, 0..5);
}

#[test]
fn test_end_tag() {
    assert_eq!(tokens("</div>"), vec![Token::close_tag("div")]);
}

#[test]
fn test_end_tag_name_is_raw() {
    assert_eq!(tokens("</ DIV x>"), vec![Token::close_tag(" DIV x")]);
}

#[test]
fn test_empty_end_tag_is_text() {
    assert!(tokens("</>").is_empty());
}

#[test]
fn test_self_closing_tag() {
    match &tokens("<br/>")[0] {
        Token::OpenTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        other => panic!("Expected OpenTag token, got {other:?}"),
    }
}

#[test]
fn test_self_closing_tag_after_attributes() {
    assert_eq!(
        tokens(r#"<img src="a.png" />"#),
        vec![Token::open_tag("img", r#" src="a.png""#, true)]
    );
}

#[test]
fn test_comment() {
    assert_eq!(tokens("<!-- note -->"), vec![Token::comment(" note ")]);
}

#[test]
fn test_comment_is_shortest_match() {
    assert_eq!(
        segments("<!--a-->b-->"),
        vec![Token::comment("a"), Token::text("b-->")]
    );
}

#[test]
fn test_comment_may_contain_markup() {
    assert_eq!(tokens("<!--<b>x</b>-->"), vec![Token::comment("<b>x</b>")]);
}

#[test]
fn test_unterminated_comment_is_text() {
    assert_eq!(segments("<!-- open"), vec![Token::text("<!-- open")]);
}

#[test]
fn test_attribute_double_quoted() {
    assert_eq!(
        tokens(r#"<div class="container">"#),
        vec![Token::open_tag("div", r#" class="container""#, false)]
    );
}

#[test]
fn test_attribute_single_quoted() {
    assert_eq!(
        tokens("<div class='c'>"),
        vec![Token::open_tag("div", " class='c'", false)]
    );
}

#[test]
fn test_attribute_unquoted() {
    assert_eq!(
        tokens("<div class=c id = x>"),
        vec![Token::open_tag("div", " class=c id = x", false)]
    );
}

#[test]
fn test_quoted_value_may_contain_gt() {
    assert_eq!(
        tokens(r#"<a title="x>y">z"#),
        vec![Token::open_tag("a", r#" title="x>y""#, false)]
    );
}

#[test]
fn test_trailing_junk_is_not_part_of_attributes() {
    let tokens = tokens(r#"<p a="1" $% b>"#);
    assert_eq!(tokens, vec![Token::open_tag("p", r#" a="1""#, false)]);
}

#[test]
fn test_unterminated_tag_recovers_inside_quoted_value() {
    assert_eq!(
        segments(r#"<a title="x>y""#),
        vec![
            Token::open_tag("a", " title=\"x", false),
            Token::text("y\""),
        ]
    );
}

#[test]
fn test_stray_less_than_is_text() {
    assert_eq!(segments("1 < 2 <> 3"), vec![Token::text("1 < 2 <> 3")]);
}

#[test]
fn test_unterminated_quote_reads_as_unquoted_value() {
    assert_eq!(
        segments(r#"<a title="x>y"#),
        vec![Token::open_tag("a", " title=\"x", false), Token::text("y")]
    );
}

#[test]
fn test_unterminated_tag_is_text() {
    assert_eq!(segments("a <b c"), vec![Token::text("a <b c")]);
}

#[test]
fn test_tag_name_must_start_right_after_less_than() {
    assert!(tokens("< b>").is_empty());
}

#[test]
fn test_tag_with_text_content() {
    assert_eq!(
        segments("<p>Hello</p>"),
        vec![
            Token::open_tag("p", "", false),
            Token::text("Hello"),
            Token::close_tag("p"),
        ]
    );
}

#[test]
fn test_nested_less_than_restarts_match() {
    assert_eq!(
        segments("<<br>script>"),
        vec![
            Token::text("<"),
            Token::open_tag("br", "", false),
            Token::text("script>"),
        ]
    );
}

#[test]
fn test_segments_tile_the_input() {
    let input = "x<div a=1>y<!--z--></div><br/>tail <";
    let mut rebuilt = String::new();
    let mut last_end = 0;
    for (_, span) in Segments::new(input) {
        assert_eq!(span.start, last_end);
        rebuilt.push_str(&input[span.clone()]);
        last_end = span.end;
    }
    assert_eq!(rebuilt, input);
}

#[test]
fn test_multibyte_text_spans() {
    let input = "héllo<b>wörld</b>";
    let spans: Vec<_> = Segments::new(input).map(|(_, span)| span).collect();
    assert_eq!(&input[spans[0].clone()], "héllo");
    assert_eq!(&input[spans[2].clone()], "wörld");
}

#[test]
fn test_token_display() {
    assert_eq!(Token::open_tag("img", " src=x", true).to_string(), "<img src=x />");
    assert_eq!(Token::close_tag("p").to_string(), "</p>");
    assert_eq!(Token::comment("c").to_string(), "<!--c-->");
    assert_eq!(Token::text("t").to_string(), "Text(\"t\")");
}

#[test]
fn test_token_kind() {
    assert_eq!(Token::open_tag("b", "", false).kind(), "OpenTag");
    assert_eq!(Token::close_tag("b").kind(), "CloseTag");
    assert_eq!(Token::comment("x").kind(), "Comment");
    assert_eq!(Token::text("x").kind(), "Text");
}

#[test]
fn test_many_unterminated_tags() {
    let input = "<a ".repeat(2_000);
    assert_eq!(segments(&input), vec![Token::text(&input)]);
}

#[test]
fn test_unclosed_tags_with_tag_like_values_scan_in_linear_time() {
    // Each unquoted value starts another `<a`; with no `>` anywhere none of
    // them can match.
    let input = "<a x=".repeat(40_000);
    let start = Instant::now();
    assert_eq!(Tokenizer::new(&input).count(), 0);
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_trailing_gt_after_tag_like_values() {
    let input = format!("{}>", "<a x=".repeat(1_000));
    let tokens = tokenize(&input);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].1, 0..input.len());
}
