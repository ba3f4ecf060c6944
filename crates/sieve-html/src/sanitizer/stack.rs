use core::fmt;

/// Tag names of the disallowed subtree currently being discarded.
///
/// Only the depth matters: any closing tag pops one entry, whatever its name.
/// The names are kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressionStack {
    names: Vec<String>,
}

impl SuppressionStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Enter one more level of suppression.
    pub fn push(&mut self, name: &str) {
        self.names.push(name.to_string());
    }

    /// Leave one level of suppression, returning the name that opened it.
    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.names.len()
    }

    /// Returns true when nothing is being suppressed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The outermost suppressed tag, i.e. the disallowed element that started
    /// suppression.
    #[must_use]
    pub fn head(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

impl fmt::Display for SuppressionStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for name in &self.names {
            write!(f, " {name}")?;
        }
        write!(f, " ]")
    }
}
