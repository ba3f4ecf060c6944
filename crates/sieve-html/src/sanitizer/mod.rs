//! The sanitizing engine.
//!
//! Drives the tokenizer over the input, consults the [`crate::Policy`] for
//! every tag, and appends accepted content to a fresh output buffer. A
//! disallowed element is removed together with everything nested inside it,
//! tracked by a depth-only [`SuppressionStack`] rather than a document tree.
//!
//! | State       | Token                           | Action                          |
//! |-------------|---------------------------------|---------------------------------|
//! | Normal      | text / comment body             | emit (with `<` as `&lt;`)       |
//! | Normal      | allowed open tag                | emit with filtered attributes   |
//! | Normal      | disallowed self-closing tag     | drop                            |
//! | Normal      | disallowed open tag             | drop, push, enter Suppressing   |
//! | Normal      | close tag                       | emit lower-cased                |
//! | Suppressing | self-closing open tag           | drop                            |
//! | Suppressing | other open tag                  | drop, push                      |
//! | Suppressing | close tag                       | drop, pop                       |
//! | Suppressing | text / comment body             | drop                            |
//!
//! The `<` escape in text applies in pass-through mode too, so a disabled
//! whitelist still turns a stray `a<b` into `a&lt;b`.

/// Engine and per-run state machine.
pub mod engine;
/// Filter results and the issue report.
pub mod result;
/// Token stream with synthesized text.
pub mod segments;
/// Depth-only suppression tracking.
pub mod stack;

pub use engine::{FilterState, HtmlFilter};
pub use result::{IssueKind, SanitizeIssue, SanitizedResult};
pub use segments::Segments;
pub use stack::SuppressionStack;
