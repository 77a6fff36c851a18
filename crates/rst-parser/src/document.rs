//! Document node sink.

use crate::node::Node;

/// An ordered sequence of block nodes.
///
/// Nodes are appended in document order and never reordered; the
/// rendering stage relies on insertion order being preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node at the end of the document.
    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// All nodes, in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut document = Document::new();
        document.push_node(Node::Separator);
        document.push_node(Node::Quote {
            text: "q".to_owned(),
        });

        assert_eq!(document.len(), 2);
        assert_eq!(document.nodes()[0], Node::Separator);
        assert!(matches!(document.nodes()[1], Node::Quote { .. }));
    }

    #[test]
    fn test_empty() {
        let document = Document::new();
        assert!(document.is_empty());
        assert_eq!(document.into_iter().count(), 0);
    }
}
