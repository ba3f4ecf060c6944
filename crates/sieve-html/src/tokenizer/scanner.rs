use core::iter::FusedIterator;

use super::helpers::{is_word_char, recover_blob_end, scan_attribute_blob, skip_while};
use super::token::{Span, Token};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const CLOSE_TAG_OPEN: &str = "</";

/// Remembers the answer to the last "next occurrence of X at or after P"
/// query. The tokenizer only moves forward, so a cached hit stays valid until
/// the scan passes it, and a cached miss stays valid forever.
#[derive(Debug, Clone, Copy, Default)]
struct FindMemo {
    from: usize,
    found: Option<usize>,
    valid: bool,
}

impl FindMemo {
    fn find(&mut self, haystack: &str, needle: &str, from: usize) -> Option<usize> {
        let reusable =
            self.valid && self.from <= from && self.found.is_none_or(|found| found >= from);
        if !reusable {
            self.from = from;
            self.found = haystack[from..].find(needle).map(|i| from + i);
            self.valid = true;
        }
        self.found
    }
}

/// Single forward-pass tokenizer over raw markup.
///
/// Yields `(Token, Span)` pairs for every opening tag, closing tag and comment
/// in source order. Text between matches is not yielded; wrap the tokenizer in
/// [`crate::sanitizer::Segments`] to get it. Malformed constructs (a stray `<`,
/// an unterminated tag or comment) never produce an error: they are simply
/// not matched and remain part of the surrounding text.
///
/// ```
/// use sieve_html::{Token, Tokenizer};
///
/// let tokens: Vec<Token> = Tokenizer::new("a<b>c</b>").map(|(token, _)| token).collect();
/// assert_eq!(tokens, vec![Token::open_tag("b", "", false), Token::close_tag("b")]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    next_gt: FindMemo,
    next_comment_close: FindMemo,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            next_gt: FindMemo::default(),
            next_comment_close: FindMemo::default(),
        }
    }

    /// The input being scanned.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    fn find_gt(&mut self, from: usize) -> Option<usize> {
        self.next_gt.find(self.input, ">", from)
    }

    /// Try every construct at `start`, which holds a `<`. The second character
    /// decides which one can apply, so the order of attempts never matters.
    fn match_at(&mut self, start: usize) -> Option<(Token, usize)> {
        let rest = &self.input[start..];
        if rest.starts_with(COMMENT_OPEN) {
            self.match_comment(start)
        } else if rest.starts_with(CLOSE_TAG_OPEN) {
            self.match_close_tag(start)
        } else {
            self.match_open_tag(start)
        }
    }

    /// `<name blob junk /?>`
    fn match_open_tag(&mut self, start: usize) -> Option<(Token, usize)> {
        let input = self.input;
        let name_start = start + 1;
        let name_end = skip_while(input, name_start, is_word_char);
        if name_end == name_start {
            return None;
        }
        // No blob can close without a later `>`; bail before scanning it.
        let _ = self.find_gt(name_end)?;

        let scan = scan_attribute_blob(input, name_end);
        let (blob_end, gt) = match self.find_gt(scan.end) {
            Some(gt) => (scan.end, gt),
            None => recover_blob_end(input, &scan)?,
        };

        let self_closing = gt > blob_end && input.as_bytes()[gt - 1] == b'/';
        let token = Token::open_tag(
            &input[name_start..name_end],
            &input[name_end..blob_end],
            self_closing,
        );
        Some((token, gt + 1))
    }

    /// `</name>` where the name is one or more non-`>` characters.
    fn match_close_tag(&mut self, start: usize) -> Option<(Token, usize)> {
        let name_start = start + CLOSE_TAG_OPEN.len();
        let gt = self.find_gt(name_start)?;
        if gt == name_start {
            return None;
        }
        let token = Token::close_tag(&self.input[name_start..gt]);
        Some((token, gt + 1))
    }

    /// `<!--body-->` with the shortest possible body.
    fn match_comment(&mut self, start: usize) -> Option<(Token, usize)> {
        let body_start = start + COMMENT_OPEN.len();
        let body_end = self
            .next_comment_close
            .find(self.input, COMMENT_CLOSE, body_start)?;
        let token = Token::comment(&self.input[body_start..body_end]);
        Some((token, body_end + COMMENT_CLOSE.len()))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (Token, Span);

    fn next(&mut self) -> Option<Self::Item> {
        let mut search = self.pos;
        while let Some(offset) = self.input[search..].find('<') {
            let start = search + offset;
            if let Some((token, end)) = self.match_at(start) {
                self.pos = end;
                return Some((token, start..end));
            }
            search = start + 1;
        }
        self.pos = self.input.len();
        None
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenize `input` into its recognized matches.
#[must_use]
pub fn tokenize(input: &str) -> Vec<(Token, Span)> {
    Tokenizer::new(input).collect()
}
