//! Line-oriented reStructuredText-style block parser.
//!
//! Parses a plain-text document into a [`Document`]: an ordered sequence
//! of typed block nodes (titles, separators, quote and code blocks, lists,
//! paragraphs) ready for rendering by a backend such as the one in
//! `rst-renderer`.
//!
//! # Architecture
//!
//! The parser is a single-pass, line-oriented state machine. Lines are
//! classified one at a time ([`line`] helpers), accumulated into a buffer,
//! and converted to at most one node per *flush* — the boundary event
//! triggered by blank lines, title underlines, the end of an indented
//! block, or end of input.
//!
//! Directives (`.. name:: data` plus `:option: value` lines) are not
//! resolved by the buffer that contains them: a parsed directive becomes
//! *pending* state and governs the node produced by the next flush. The
//! [`directive::DirectiveHandler`] trait is the extension point for
//! consuming them.
//!
//! Parsing never fails: unrecognized structure degrades to a plain
//! paragraph, and anything suspicious is reported through
//! [`ParseResult::warnings`].
//!
//! # Example
//!
//! ```
//! use rst_parser::{Node, Parser};
//!
//! let mut parser = Parser::new();
//! let result = parser.parse("Title\n=====\n\nSome *text*.");
//!
//! assert_eq!(result.document.len(), 2);
//! assert!(matches!(result.document.nodes()[0], Node::Title { level: 1, .. }));
//! ```
//!
//! A `Parser` owns all parse state: reuse one instance sequentially, but
//! give each concurrent parse its own instance.

pub mod directive;
mod document;
mod line;
mod node;
mod parser;
mod span;

pub use directive::{Directive, DirectiveHandler};
pub use document::Document;
pub use line::{ListItemLine, is_block_line, parse_list_line, special_level};
pub use node::{ListItem, Node};
pub use parser::{ParseResult, Parser, UnknownDirectivePolicy};
pub use span::Span;
