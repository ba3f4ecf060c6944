use core::fmt;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// What the filter removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// A disallowed self-closing tag was dropped on its own.
    DroppedTag,
    /// An attribute of an allowed tag was dropped.
    DroppedAttribute,
    /// A disallowed element was dropped together with its content.
    SuppressedSubtree,
    /// The input ended while a suppressed element was still open.
    UnclosedSuppression,
}

/// One recoverable event recorded during a filter run.
///
/// Issues are informational. They never change the sanitized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeIssue {
    /// What happened.
    pub kind: IssueKind,
    /// Tag or attribute name involved.
    pub name: String,
    /// Byte offset in the input of the token that caused the issue.
    pub offset: usize,
}

impl fmt::Display for SanitizeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} `{}`", self.offset, self.kind, self.name)
    }
}

/// The outcome of one `filter` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedResult {
    pub(super) html: String,
    pub(super) issues: Vec<SanitizeIssue>,
    pub(super) ended_suppressing: bool,
}

impl SanitizedResult {
    /// The sanitized markup.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Take ownership of the sanitized markup.
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }

    /// Everything the filter removed, in input order.
    #[must_use]
    pub fn issues(&self) -> &[SanitizeIssue] {
        &self.issues
    }

    /// True if the input ended inside a disallowed element. Its content was
    /// discarded up to the end of the input.
    #[must_use]
    pub const fn ended_suppressing(&self) -> bool {
        self.ended_suppressing
    }

    /// Number of issues of each kind, in declaration order, skipping kinds
    /// that did not occur.
    #[must_use]
    pub fn issue_counts(&self) -> Vec<(IssueKind, usize)> {
        IssueKind::iter()
            .map(|kind| {
                let count = self.issues.iter().filter(|issue| issue.kind == kind).count();
                (kind, count)
            })
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}

impl fmt::Display for SanitizedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

impl From<SanitizedResult> for String {
    fn from(result: SanitizedResult) -> Self {
        result.html
    }
}
