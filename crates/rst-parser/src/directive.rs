//! Directive syntax parsing and the resolution extension point.
//!
//! A directive is a control block of the form:
//!
//! ```text
//! .. [variable] name:: data
//!     :option: value
//!     :other: value
//! ```
//!
//! The bracketed variable is optional and the data may be empty. A
//! directive never produces a node by itself: the parser holds it as
//! *pending* state and offers it, together with the node produced by the
//! next flush, to a registered [`DirectiveHandler`]. Directive resolution
//! is therefore a two-step state machine; what happens to a pending
//! directive that is never consumed is governed by
//! [`UnknownDirectivePolicy`](crate::UnknownDirectivePolicy).

use std::collections::BTreeMap;

use crate::node::Node;

/// A parsed directive descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Directive {
    /// Optional variable name from the `[variable]` bracket, or empty.
    pub variable: String,
    /// The directive name before `::`.
    pub name: String,
    /// Everything after `::`, possibly empty.
    pub data: String,
    /// Option lines, keyed by option name. Keys are unique.
    pub options: BTreeMap<String, String>,
}

/// Handler for a named directive: the resolution extension point.
///
/// When a pending directive reaches the next flush boundary, the parser
/// looks up a handler accepting its name and passes it the descriptor
/// together with the node that flush produced (if any). The handler
/// returns the nodes to emit in its place — it may rewrite the following
/// node, return it unchanged, replace it, or produce nothing.
pub trait DirectiveHandler {
    /// Primary directive name this handler accepts.
    fn name(&self) -> &str;

    /// Whether this handler accepts the given directive name.
    ///
    /// Defaults to an exact match on [`name`](Self::name); override to
    /// accept aliases.
    fn matches(&self, name: &str) -> bool {
        self.name() == name
    }

    /// Resolve the directive against the node that followed it.
    fn resolve(&mut self, directive: &Directive, following: Option<Node>) -> Vec<Node>;
}

/// Built-in `code-block` directive (alias `code`).
///
/// Tags the indented block that follows the directive with the language
/// given as directive data, e.g. `.. code-block:: rust`.
#[derive(Debug, Default)]
pub struct CodeBlockDirective;

impl DirectiveHandler for CodeBlockDirective {
    fn name(&self) -> &str {
        "code-block"
    }

    fn matches(&self, name: &str) -> bool {
        name == "code-block" || name == "code"
    }

    fn resolve(&mut self, directive: &Directive, following: Option<Node>) -> Vec<Node> {
        match following {
            Some(Node::Code { text, .. }) => {
                let data = directive.data.trim();
                let language = (!data.is_empty()).then(|| data.to_owned());
                vec![Node::Code { text, language }]
            }
            // Not a block we can tag; pass it through untouched.
            Some(node) => vec![node],
            None => Vec::new(),
        }
    }
}

/// Parse a directive header line: `.. [variable] name:: data`.
///
/// The name is everything up to the first `::` and must be non-empty.
/// Data, when present, is separated from `::` by a single space; the
/// space is not required when the data is empty (`.. note::`).
pub fn parse_header(line: &str) -> Option<Directive> {
    let rest = line.strip_prefix(".. ")?;

    let (variable, rest) = if let Some(after) = rest.strip_prefix('[') {
        let close = after.find(']')?;
        let variable = &after[..close];
        if variable.is_empty() {
            return None;
        }
        (variable.to_owned(), after[close + 1..].strip_prefix(' ')?)
    } else {
        (String::new(), rest)
    };

    let sep = rest.find("::")?;
    let name = &rest[..sep];
    if name.is_empty() {
        return None;
    }

    let after = &rest[sep + 2..];
    let data = if after.is_empty() {
        String::new()
    } else {
        after.strip_prefix(' ')?.to_owned()
    };

    Some(Directive {
        variable,
        name: name.to_owned(),
        data,
        options: BTreeMap::new(),
    })
}

/// Parse a directive option line: `<spaces>:name: value`.
pub fn parse_option(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix(' ')?.trim_start_matches(' ');
    let rest = rest.strip_prefix(':')?;

    let colon = rest.find(':')?;
    let name = &rest[..colon];
    if name.is_empty() {
        return None;
    }

    let value = rest[colon + 1..].strip_prefix(' ')?;
    if value.is_empty() {
        return None;
    }

    Some((name.to_owned(), value.to_owned()))
}

/// Parse a whole buffer as a directive.
///
/// The first line must be a header and every subsequent line a valid
/// option line; any non-conforming line invalidates the directive as a
/// whole, and the buffer falls back to its paragraph interpretation.
pub fn parse_buffer(lines: &[String]) -> Option<Directive> {
    let (first, rest) = lines.split_first()?;
    let mut directive = parse_header(first)?;

    for line in rest {
        let (name, value) = parse_option(line)?;
        directive.options.insert(name, value);
    }

    Some(directive)
}
