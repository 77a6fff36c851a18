//! Inline text container.

use std::fmt;

/// A run of raw text lines carrying inline markup.
///
/// The parser never interprets inline markup itself; it collects the raw
/// lines of a paragraph, title, or list item into a `Span` and forwards
/// it to the rendering stage, which owns the inline-style rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    lines: Vec<String>,
}

impl Span {
    /// Create a span from raw lines, in order.
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Create a span from a single line.
    #[must_use]
    pub fn from_line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// The raw lines, unmodified.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The raw text with lines rejoined by `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_text_joins_lines() {
        let span = Span::new(vec!["one".to_owned(), "two".to_owned()]);
        assert_eq!(span.text(), "one\ntwo");
    }

    #[test]
    fn test_from_line() {
        let span = Span::from_line("only");
        assert_eq!(span.lines(), ["only"]);
        assert_eq!(span.to_string(), "only");
    }
}
