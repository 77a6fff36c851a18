//! Typed block nodes produced by the parser.

use crate::span::Span;

/// One item of a [`Node::List`].
///
/// Ordered-ness and depth are recorded per item, not per list: depth
/// changes do not build nested sub-lists, each item is a flat entry at
/// its own depth value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListItem {
    /// Item text, including continuation lines.
    pub text: Span,
    /// True for `1.`-style markers, false for `*`.
    pub ordered: bool,
    /// Indentation depth of the item marker.
    pub depth: usize,
}

/// A block-level node of the document tree.
///
/// This is the closed set of node kinds the parser produces. Block text
/// (`Quote`, `Code`) is stored raw; HTML escaping is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Node {
    /// A heading: text line followed by a recognized underline.
    Title {
        /// Heading text.
        text: Span,
        /// Heading level derived from the underline character (1-4).
        level: usize,
    },
    /// A horizontal separator: an underline with no heading text.
    Separator,
    /// An indented block not announced as code.
    Quote {
        /// Verbatim block content, lines joined by `\n`.
        text: String,
    },
    /// An indented block announced by a preceding `::` or directive.
    Code {
        /// Verbatim block content, whitespace preserved.
        text: String,
        /// Language hint, set by the `code-block` directive when present.
        language: Option<String>,
    },
    /// A run of list item lines.
    List {
        /// Items in document order.
        items: Vec<ListItem>,
    },
    /// Anything that matched no more specific interpretation.
    Paragraph {
        /// Paragraph text.
        text: Span,
    },
}

impl Node {
    /// Short name of the node kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Title { .. } => "title",
            Node::Separator => "separator",
            Node::Quote { .. } => "quote",
            Node::Code { .. } => "code",
            Node::List { .. } => "list",
            Node::Paragraph { .. } => "paragraph",
        }
    }
}
