use core::iter::FusedIterator;

use crate::tokenizer::{Span, Token, Tokenizer};

/// The tokenizer's matches with the text between them filled in.
///
/// Every byte of the input belongs to exactly one yielded span, in order, so
/// concatenating the spans reproduces the input.
///
/// ```
/// use sieve_html::Segments;
///
/// let kinds: Vec<&str> = Segments::new("a<b>c").map(|(token, _)| token.kind()).collect();
/// assert_eq!(kinds, ["Text", "OpenTag", "Text"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    tokenizer: Tokenizer<'a>,
    last_end: usize,
    pending: Option<(Token, Span)>,
}

impl<'a> Segments<'a> {
    /// Segment `input` from the start.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            last_end: 0,
            pending: None,
        }
    }

    fn text_until(&mut self, end: usize) -> (Token, Span) {
        let span = self.last_end..end;
        self.last_end = end;
        (Token::text(&self.tokenizer.input()[span.clone()]), span)
    }
}

impl Iterator for Segments<'_> {
    type Item = (Token, Span);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((token, span)) = self.pending.take() {
            self.last_end = span.end;
            return Some((token, span));
        }

        match self.tokenizer.next() {
            Some((token, span)) if span.start > self.last_end => {
                let start = span.start;
                self.pending = Some((token, span));
                Some(self.text_until(start))
            }
            Some((token, span)) => {
                self.last_end = span.end;
                Some((token, span))
            }
            None => {
                let len = self.tokenizer.input().len();
                (self.last_end < len).then(|| self.text_until(len))
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}
