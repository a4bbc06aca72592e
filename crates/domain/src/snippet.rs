//! Generated snippet type

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of generated source lines.
///
/// Immutable once assembled; the assembler produces a fresh value per
/// invocation and nothing is retained between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Snippet {
    lines: Vec<String>,
}

impl Snippet {
    /// Creates a snippet from its lines.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Returns the lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when the snippet has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the snippet as a single newline-joined string.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_joins_lines() {
        let snippet = Snippet::from_lines(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(snippet.text(), "a\nb");
        assert_eq!(snippet.line_count(), 2);
    }

    #[test]
    fn test_empty_snippet() {
        let snippet = Snippet::default();
        assert!(snippet.is_empty());
        assert_eq!(snippet.text(), "");
    }
}
