//! The line-oriented parsing state machine.

use tracing::{debug, trace};

use crate::directive::{self, CodeBlockDirective, Directive, DirectiveHandler};
use crate::document::Document;
use crate::line::{is_block_line, parse_list_line, special_level};
use crate::node::{ListItem, Node};
use crate::span::Span;

/// What to do with a pending directive no handler consumed.
///
/// The parser resolves a directive one flush after parsing it; when no
/// registered handler accepts it, the directive's source text is already
/// gone from the buffer. This policy decides whether that is silent,
/// surfaced, or recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownDirectivePolicy {
    /// Discard the directive silently.
    Drop,
    /// Discard the directive but record a warning.
    #[default]
    Warn,
    /// Record a warning and keep the directive's data as a paragraph.
    Paragraph,
}

/// Outcome of a parse: the node tree plus any warnings.
///
/// Parsing never fails — malformed structure degrades to a less specific
/// node kind — so there is no error variant, only warnings.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// The parsed document, nodes in input order.
    pub document: Document,
    /// Human-readable warnings, e.g. dropped directives.
    pub warnings: Vec<String>,
}

/// The document parser.
///
/// Consumes a document line by line, accumulating contiguous lines into
/// a buffer and converting the buffer to at most one node at each flush
/// boundary. One instance owns all parse state: reuse it sequentially,
/// never share it across concurrent parses.
pub struct Parser {
    buffer: Vec<String>,
    special_level: usize,
    is_block: bool,
    is_code: bool,
    pending: Option<Directive>,
    handlers: Vec<Box<dyn DirectiveHandler>>,
    policy: UnknownDirectivePolicy,
    document: Document,
    warnings: Vec<String>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the built-in `code-block` handler registered
    /// and the default [`UnknownDirectivePolicy`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            special_level: 0,
            is_block: false,
            is_code: false,
            pending: None,
            handlers: vec![Box::new(CodeBlockDirective)],
            policy: UnknownDirectivePolicy::default(),
            document: Document::new(),
            warnings: Vec::new(),
        }
    }

    /// Register a directive handler.
    ///
    /// Handlers are consulted in registration order; the first whose
    /// [`matches`](DirectiveHandler::matches) accepts the directive name
    /// wins.
    #[must_use]
    pub fn with_handler(mut self, handler: impl DirectiveHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Set the policy for directives no handler consumes.
    #[must_use]
    pub fn with_policy(mut self, policy: UnknownDirectivePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse a document.
    ///
    /// The input is trimmed of leading and trailing whitespace and split
    /// on `\n`; carriage returns are treated as line content, so
    /// normalize CRLF input first.
    pub fn parse(&mut self, input: &str) -> ParseResult {
        self.reset();

        for line in input.trim().split('\n') {
            self.parse_line(line);
        }

        // Flushed twice: a directive parsed by the first flush is only
        // resolved (or dropped) by the second.
        self.flush();
        self.flush();

        let document = std::mem::take(&mut self.document);
        let warnings = std::mem::take(&mut self.warnings);
        debug!(
            nodes = document.len(),
            warnings = warnings.len(),
            "parse complete"
        );
        ParseResult { document, warnings }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.special_level = 0;
        self.is_block = false;
        self.is_code = false;
        self.pending = None;
        self.document = Document::new();
        self.warnings = Vec::new();
    }

    /// Process one input line.
    fn parse_line(&mut self, line: &str) {
        trace!(line, in_block = self.is_block, "parse line");

        if is_block_line(line) {
            // A continuation line starting a fresh buffer opens a block.
            if self.buffer.is_empty() && !line.trim().is_empty() {
                self.is_block = true;
            }
        } else if self.is_block {
            // First non-continuation line closes the block, even without
            // a blank separator.
            self.flush();
        }

        if self.is_block {
            self.buffer.push(line.to_owned());
        } else if line.trim().is_empty() {
            self.flush();
        } else {
            let level = special_level(line);
            if level > 0 {
                // The line just preceding the underline is the heading
                // text. Split the buffer in two: flush everything before
                // it as a normal block, then flush the heading line alone
                // with the special level set.
                let heading = self.buffer.pop().unwrap_or_default();
                self.flush();

                self.special_level = level;
                self.buffer.push(heading);
                self.flush();
            } else {
                self.buffer.push(line.to_owned());
            }
        }
    }

    /// Convert the buffer to at most one node and reset buffer state.
    fn flush(&mut self) {
        let mut produced: Option<Node> = None;
        let mut parsed: Option<Directive> = None;

        if !self.buffer.is_empty() {
            if self.special_level > 0 {
                produced = Some(if self.buffer.join("\n").is_empty() {
                    Node::Separator
                } else {
                    Node::Title {
                        text: Span::new(self.buffer.clone()),
                        level: self.special_level,
                    }
                });
            } else if self.is_block {
                let text = self.buffer.join("\n");
                produced = Some(if self.is_code {
                    Node::Code {
                        text,
                        language: None,
                    }
                } else {
                    Node::Quote { text }
                });
            } else if parse_list_line(&self.buffer[0]).is_some() {
                produced = Some(self.build_list());
            } else {
                parsed = directive::parse_buffer(&self.buffer);
                if parsed.is_none() {
                    produced = Some(Node::Paragraph {
                        text: Span::new(self.buffer.clone()),
                    });
                }
            }
        }

        // A directive parsed by the previous flush governs the node this
        // flush produced; resolve it now, or apply the unknown policy.
        if let Some(directive) = self.pending.take() {
            for node in self.resolve_pending(&directive, produced.take()) {
                self.document.push_node(node);
            }
        }
        self.pending = parsed;

        if let Some(node) = produced {
            trace!(kind = node.kind(), "flushed node");
            self.document.push_node(node);
        }

        // State for the next buffer: an upcoming indented block is code
        // when this buffer announced it with a trailing `::` or a
        // directive is now pending.
        self.is_code = self.announces_code() || self.pending.is_some();
        self.is_block = false;
        self.special_level = 0;
        self.buffer.clear();
    }

    /// True when the buffer's last line announces a code block.
    fn announces_code(&self) -> bool {
        self.buffer.last().is_some_and(|line| {
            let trimmed = line.trim();
            trimmed.len() >= 2 && trimmed.ends_with("::")
        })
    }

    /// Resolve a pending directive against the node that followed it.
    fn resolve_pending(&mut self, directive: &Directive, following: Option<Node>) -> Vec<Node> {
        if let Some(handler) = self
            .handlers
            .iter_mut()
            .find(|h| h.matches(&directive.name))
        {
            debug!(name = %directive.name, "resolving directive");
            return handler.resolve(directive, following);
        }

        let mut nodes = Vec::new();
        match self.policy {
            UnknownDirectivePolicy::Drop => {}
            UnknownDirectivePolicy::Warn => {
                self.warnings
                    .push(format!("unhandled directive `{}` dropped", directive.name));
            }
            UnknownDirectivePolicy::Paragraph => {
                self.warnings.push(format!(
                    "unhandled directive `{}` kept as paragraph",
                    directive.name
                ));
                if !directive.data.trim().is_empty() {
                    nodes.push(Node::Paragraph {
                        text: Span::from_line(directive.data.clone()),
                    });
                }
            }
        }
        nodes.extend(following);
        nodes
    }

    /// Build a list node from a buffer whose first line is a list item.
    ///
    /// A fold over the buffered lines: each item-start line closes the
    /// current item and opens a new one; other lines are continuation
    /// text appended verbatim to the current item.
    fn build_list(&self) -> Node {
        let mut items = Vec::new();
        let mut current: Option<(bool, usize, Vec<String>)> = None;

        for line in &self.buffer {
            match parse_list_line(line) {
                Some(item) => {
                    if let Some((ordered, depth, lines)) = current.take() {
                        items.push(ListItem {
                            text: Span::new(lines),
                            ordered,
                            depth,
                        });
                    }
                    current = Some((item.ordered, item.depth, vec![item.text]));
                }
                None => {
                    if let Some((_, _, lines)) = current.as_mut() {
                        lines.push(line.clone());
                    }
                }
            }
        }
        if let Some((ordered, depth, lines)) = current {
            items.push(ListItem {
                text: Span::new(lines),
                ordered,
                depth,
            });
        }

        Node::List { items }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(input: &str) -> ParseResult {
        Parser::new().parse(input)
    }

    #[test]
    fn test_blank_only_document_is_empty() {
        let result = parse("\n \n\t\n");
        assert!(result.document.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").document.is_empty());
    }

    #[test]
    fn test_title_level_one() {
        let result = parse("Title\n=====");
        assert_eq!(
            result.document.nodes(),
            [Node::Title {
                text: Span::from_line("Title"),
                level: 1,
            }]
        );
    }

    #[test]
    fn test_title_levels_follow_underline_char() {
        let result = parse("A\n===\n\nB\n---\n\nC\n***\n\nD\n~~~");
        let levels: Vec<usize> = result
            .document
            .nodes()
            .iter()
            .map(|node| match node {
                Node::Title { level, .. } => *level,
                other => panic!("expected title, got {other:?}"),
            })
            .collect();
        assert_eq!(levels, [1, 2, 3, 4]);
    }

    #[test]
    fn test_title_after_paragraph() {
        let result = parse("intro text\nTitle\n=====");
        assert_eq!(result.document.len(), 2);
        assert_eq!(
            result.document.nodes()[0],
            Node::Paragraph {
                text: Span::from_line("intro text"),
            }
        );
        assert!(matches!(
            result.document.nodes()[1],
            Node::Title { level: 1, .. }
        ));
    }

    #[test]
    fn test_isolated_underline_is_separator() {
        let result = parse("before\n\n----\n\nafter");
        assert_eq!(result.document.len(), 3);
        assert_eq!(result.document.nodes()[1], Node::Separator);
    }

    #[test]
    fn test_code_block_announced_by_double_colon() {
        let result = parse("Example::\n\n    fn main() {}\n        indented");
        assert_eq!(result.document.len(), 2);
        assert_eq!(
            result.document.nodes()[1],
            Node::Code {
                text: "    fn main() {}\n        indented".to_owned(),
                language: None,
            }
        );
    }

    #[test]
    fn test_indented_block_without_announcement_is_quote() {
        let result = parse("Someone said:\n\n    to be\n    or not to be");
        assert_eq!(
            result.document.nodes()[1],
            Node::Quote {
                text: "    to be\n    or not to be".to_owned(),
            }
        );
    }

    #[test]
    fn test_block_keeps_interior_blank_lines() {
        let result = parse("quoth:\n\n    first\n\n    second");
        assert_eq!(
            result.document.nodes()[1],
            Node::Quote {
                text: "    first\n\n    second".to_owned(),
            }
        );
    }

    #[test]
    fn test_block_closed_by_unindented_line() {
        // No blank separator needed: the first flush-left line ends the block.
        let result = parse("intro\n\n    quoted\nafter");
        assert_eq!(result.document.len(), 3);
        assert!(matches!(result.document.nodes()[1], Node::Quote { .. }));
        assert_eq!(
            result.document.nodes()[2],
            Node::Paragraph {
                text: Span::from_line("after"),
            }
        );
    }

    #[test]
    fn test_unordered_list() {
        let result = parse("* item one\n* item two");
        assert_eq!(
            result.document.nodes(),
            [Node::List {
                items: vec![
                    ListItem {
                        text: Span::from_line("item one"),
                        ordered: false,
                        depth: 0,
                    },
                    ListItem {
                        text: Span::from_line("item two"),
                        ordered: false,
                        depth: 0,
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_ordered_list() {
        let result = parse("1. first\n2. second");
        match &result.document.nodes()[0] {
            Node::List { items } => {
                assert_eq!(items.len(), 2);
                assert!(items.iter().all(|item| item.ordered));
                assert_eq!(items[0].text.text(), "first");
                assert_eq!(items[1].text.text(), "second");
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_list_continuation_lines() {
        let result = parse("* first line\n  continued\n* second");
        match &result.document.nodes()[0] {
            Node::List { items } => {
                assert_eq!(items[0].text.lines(), ["first line", "  continued"]);
                assert_eq!(items[1].text.text(), "second");
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_list_item_depth_is_per_item() {
        let result = parse("* outer\n  * inner");
        match &result.document.nodes()[0] {
            Node::List { items } => {
                assert_eq!(items[0].depth, 0);
                assert_eq!(items[1].depth, 2);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_paragraph_reparse_is_idempotent() {
        let first = parse("some *styled* text\nover two lines");
        let Node::Paragraph { text } = &first.document.nodes()[0] else {
            panic!("expected paragraph");
        };

        let second = parse(&text.text());
        assert_eq!(first.document, second.document);
    }

    #[test]
    fn test_trailing_directive_dropped_with_warning() {
        let result = parse(".. note:: some text");
        assert!(result.document.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("note"));
    }

    #[test]
    fn test_unknown_directive_policy_drop_is_silent() {
        let mut parser = Parser::new().with_policy(UnknownDirectivePolicy::Drop);
        let result = parser.parse(".. note:: some text");
        assert!(result.document.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unknown_directive_policy_paragraph_recovers_data() {
        let mut parser = Parser::new().with_policy(UnknownDirectivePolicy::Paragraph);
        let result = parser.parse(".. note:: some text");
        assert_eq!(
            result.document.nodes(),
            [Node::Paragraph {
                text: Span::from_line("some text"),
            }]
        );
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_two_directives_in_a_row() {
        let result = parse(".. foo:: a\n\n.. bar:: b");
        assert!(result.document.is_empty());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_malformed_option_line_degrades_to_paragraph() {
        let result = parse(".. image:: pic.png\nnot an option line");
        assert_eq!(
            result.document.nodes(),
            [Node::Paragraph {
                text: Span::new(vec![
                    ".. image:: pic.png".to_owned(),
                    "not an option line".to_owned(),
                ]),
            }]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_code_block_directive_sets_language() {
        let result = parse(".. code-block:: rust\n\n    fn main() {}");
        assert_eq!(
            result.document.nodes(),
            [Node::Code {
                text: "    fn main() {}".to_owned(),
                language: Some("rust".to_owned()),
            }]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_custom_directive_handler() {
        struct NoteHandler;

        impl DirectiveHandler for NoteHandler {
            fn name(&self) -> &str {
                "note"
            }

            fn resolve(&mut self, directive: &Directive, following: Option<Node>) -> Vec<Node> {
                let mut nodes = vec![Node::Quote {
                    text: directive.data.clone(),
                }];
                nodes.extend(following);
                nodes
            }
        }

        let mut parser = Parser::new().with_handler(NoteHandler);
        let result = parser.parse(".. note:: be careful\n\nnext paragraph");
        assert_eq!(result.document.len(), 2);
        assert_eq!(
            result.document.nodes()[0],
            Node::Quote {
                text: "be careful".to_owned(),
            }
        );
        assert!(matches!(
            result.document.nodes()[1],
            Node::Paragraph { .. }
        ));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_directive_with_options_consumed() {
        // Options must not invalidate the directive when well-formed.
        let result = parse(".. code:: text\n    :linenos: yes\n\n    body");
        assert_eq!(
            result.document.nodes(),
            [Node::Code {
                text: "    body".to_owned(),
                language: Some("text".to_owned()),
            }]
        );
    }

    #[test]
    fn test_arbitrary_input_never_fails() {
        let junk = "=\n==\n.. ::\n*\n1.\n\t\n   ::\n```\n> quote?\n.. [x] y:: z";
        let result = parse(junk);
        // Whatever structure was found, parsing completed.
        assert!(!result.document.is_empty() || !result.warnings.is_empty());
    }

    #[test]
    fn test_parser_reuse_is_clean() {
        let mut parser = Parser::new();
        let first = parser.parse("one\n\n.. note:: pending at eof");
        assert_eq!(first.document.len(), 1);
        assert_eq!(first.warnings.len(), 1);

        let second = parser.parse("two");
        assert_eq!(second.document.len(), 1);
        assert!(second.warnings.is_empty());
    }
}
