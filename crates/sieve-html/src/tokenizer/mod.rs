//! Markup tokenizer.
//!
//! Splits raw markup into opening tags, closing tags and comments in a single
//! forward pass. This is not an HTML5 tokenizer: it recognizes
//! only those three shapes and leaves everything else as text.

/// Scanning primitives for tag names, attribute blobs and values.
pub(crate) mod helpers;
/// The tokenizer iterator.
pub mod scanner;
/// Token types produced by the tokenizer.
pub mod token;

pub use scanner::{Tokenizer, tokenize};
pub use token::{Span, Token};
