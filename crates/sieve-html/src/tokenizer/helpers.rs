//! Scanning primitives shared by the tokenizer and the attribute parser.
//!
//! All functions work on byte offsets into a `&str`. Every delimiter the
//! grammar cares about is ASCII, so offsets returned here always fall on
//! character boundaries.

use core::ops::Range;

// =============================================================================
// Character Classes
// =============================================================================

/// Tag-name characters: ASCII letters, digits and underscore.
pub(crate) const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Attribute-name characters: word characters plus `-` and `:`.
pub(crate) const fn is_attribute_name_char(c: char) -> bool {
    is_word_char(c) || c == '-' || c == ':'
}

/// Unicode whitespace, plus the byte-order mark.
pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Characters allowed in an unquoted attribute value.
fn is_unquoted_value_char(c: char) -> bool {
    c != '>' && !is_whitespace(c)
}

// =============================================================================
// Cursor Helpers
// =============================================================================

/// Advance from `from` while `pred` holds, returning the first offset where
/// it does not (or the end of input).
pub(crate) fn skip_while(input: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(input.len(), |(i, _)| from + i)
}

/// The character starting at `at`, if any.
pub(crate) fn char_at(input: &str, at: usize) -> Option<char> {
    input[at..].chars().next()
}

// =============================================================================
// Attribute Values
// =============================================================================

/// How an attribute value was delimited in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quote {
    Double,
    Single,
    Unquoted,
}

/// A matched attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValueMatch {
    pub(crate) quote: Quote,
    /// Full extent, including the quotes.
    pub(crate) span: Range<usize>,
    /// The value text without quotes.
    pub(crate) content: Range<usize>,
}

/// Match a value at `from`: `"..."`, `'...'`, or a run of characters that are
/// neither whitespace nor `>`. An unterminated quote falls back to the
/// unquoted form, which then starts with the quote character.
pub(crate) fn match_value(input: &str, from: usize) -> Option<ValueMatch> {
    let rest = &input[from..];
    let quote = match rest.chars().next()? {
        '"' => Some(('"', Quote::Double)),
        '\'' => Some(('\'', Quote::Single)),
        _ => None,
    };

    if let Some((delimiter, quote)) = quote
        && let Some(len) = rest[1..].find(delimiter)
    {
        return Some(ValueMatch {
            quote,
            span: from..from + len + 2,
            content: from + 1..from + 1 + len,
        });
    }

    let end = skip_while(input, from, is_unquoted_value_char);
    (end > from).then(|| ValueMatch {
        quote: Quote::Unquoted,
        span: from..end,
        content: from..end,
    })
}

/// Match `ws* = ws* value` starting right after an attribute name.
pub(crate) fn match_assignment(input: &str, from: usize) -> Option<ValueMatch> {
    let equals = skip_while(input, from, is_whitespace);
    if char_at(input, equals) != Some('=') {
        return None;
    }
    let value_start = skip_while(input, equals + 1, is_whitespace);
    match_value(input, value_start)
}

// =============================================================================
// Attribute Blob
// =============================================================================

/// Result of scanning the attribute blob of an opening tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BlobScan {
    /// Offset just past the last attribute.
    pub(crate) end: usize,
    /// Quoted values inside the blob, in source order.
    pub(crate) quoted_values: Vec<ValueMatch>,
}

/// Greedily scan `(ws+ name (ws* = ws* value)?)*` starting at `from`.
///
/// Scanning stops at the first position where another attribute cannot
/// start; whatever follows is junk as far as the blob is concerned.
pub(crate) fn scan_attribute_blob(input: &str, from: usize) -> BlobScan {
    let mut scan = BlobScan {
        end: from,
        quoted_values: Vec::new(),
    };

    loop {
        let name_start = skip_while(input, scan.end, is_whitespace);
        if name_start == scan.end {
            break;
        }
        let name_end = skip_while(input, name_start, is_attribute_name_char);
        if name_end == name_start {
            break;
        }
        scan.end = name_end;

        if let Some(value) = match_assignment(input, name_end) {
            scan.end = value.span.end;
            if value.quote != Quote::Unquoted {
                scan.quoted_values.push(value);
            }
        }
    }

    scan
}

/// Where an opening tag ends when no `>` follows its greedy attribute blob.
///
/// The only `>` characters left are inside quoted values of the blob. The
/// last such value is re-read as an unquoted value, which stops at its first
/// `>`; the tag closes there. Returns `(blob_end, gt)`.
pub(crate) fn recover_blob_end(input: &str, scan: &BlobScan) -> Option<(usize, usize)> {
    let value = scan
        .quoted_values
        .iter()
        .rev()
        .find(|value| input[value.content.clone()].contains('>'))?;

    let start = value.span.start;
    let blob_end = skip_while(input, start, is_unquoted_value_char);
    let gt = start + input[start..].find('>')?;
    Some((blob_end, gt))
}
