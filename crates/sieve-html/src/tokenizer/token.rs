use core::fmt;
use core::ops::Range;

use strum_macros::IntoStaticStr;

/// Half-open byte range of a token in the scanned input.
pub type Span = Range<usize>;

/// A piece of markup recognized by the tokenizer.
///
/// The tokenizer itself only produces [`Token::OpenTag`], [`Token::CloseTag`]
/// and [`Token::Comment`]. [`Token::Text`] is synthesized from the gaps between
/// those matches by [`crate::sanitizer::Segments`], so that the spans of a
/// full segment stream tile the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum Token {
    /// `<name attr... >` or `<name attr... />`
    OpenTag {
        /// Tag name as written (ASCII letters, digits and underscore).
        name: String,
        /// Everything between the tag name and the end of the last attribute,
        /// including leading whitespace. Not interpreted by the tokenizer.
        raw_attributes: String,
        /// Whether the tag was written with a trailing `/>`.
        self_closing: bool,
    },

    /// `</name>`. The name is everything between `</` and `>`, untrimmed.
    CloseTag {
        /// Raw closing-tag name.
        name: String,
    },

    /// `<!-- body -->`
    Comment {
        /// Comment body with the delimiters stripped.
        body: String,
    },

    /// A run of input between two recognized matches.
    Text {
        /// Verbatim input text.
        content: String,
    },
}

impl Token {
    /// Create an opening-tag token.
    #[must_use]
    pub fn open_tag(name: &str, raw_attributes: &str, self_closing: bool) -> Self {
        Self::OpenTag {
            name: name.to_string(),
            raw_attributes: raw_attributes.to_string(),
            self_closing,
        }
    }

    /// Create a closing-tag token.
    #[must_use]
    pub fn close_tag(name: &str) -> Self {
        Self::CloseTag {
            name: name.to_string(),
        }
    }

    /// Create a comment token.
    #[must_use]
    pub fn comment(body: &str) -> Self {
        Self::Comment {
            body: body.to_string(),
        }
    }

    /// Create a text token.
    #[must_use]
    pub fn text(content: &str) -> Self {
        Self::Text {
            content: content.to_string(),
        }
    }

    /// Variant name, e.g. `"OpenTag"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenTag {
                name,
                raw_attributes,
                self_closing,
            } => {
                write!(f, "<{name}{raw_attributes}")?;
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::CloseTag { name } => write!(f, "</{name}>"),
            Self::Comment { body } => write!(f, "<!--{body}-->"),
            Self::Text { content } => write!(f, "Text({content:?})"),
        }
    }
}
