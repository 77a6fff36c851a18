//! Generic document renderer with pluggable backend.

use std::marker::PhantomData;

use rst_parser::{Document, ListItem, Node};

use crate::backend::RenderBackend;
use crate::inline::render_inline;
use crate::state::{TocEntry, slugify};

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered output, one element per line.
    pub html: String,
    /// Text of the first level-1 title, if any.
    pub title: Option<String>,
    /// Table of contents, one entry per title node.
    pub toc: Vec<TocEntry>,
}

/// Generic document renderer.
///
/// Walks a parsed [`Document`] in order and delegates element production
/// to the [`RenderBackend`]. Inline decoration, title extraction, the
/// table of contents, and list grouping are handled here.
pub struct DocumentRenderer<B: RenderBackend> {
    initial_header_level: usize,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> Default for DocumentRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> DocumentRenderer<B> {
    /// Create a renderer with headings starting at `<h1>`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_header_level: 1,
            _backend: PhantomData,
        }
    }

    /// Shift heading levels so a level-1 title renders as `<h{level}>`.
    ///
    /// Shifted levels are clamped to the 1..=6 heading range.
    #[must_use]
    pub fn with_initial_header_level(mut self, level: usize) -> Self {
        self.initial_header_level = level;
        self
    }

    /// Render a document.
    pub fn render(&self, document: &Document) -> RenderResult {
        let mut html = String::with_capacity(4096);
        let mut title = None;
        let mut toc = Vec::new();

        for node in document {
            match node {
                Node::Title { text, level } => {
                    let plain = text.text();
                    let anchor = slugify(&plain);
                    if title.is_none() && *level == 1 {
                        title = Some(plain.clone());
                    }
                    let shifted = (level + self.initial_header_level - 1).clamp(1, 6);
                    B::title(shifted, &anchor, &render_inline(&plain), &mut html);
                    toc.push(TocEntry {
                        level: *level,
                        text: plain,
                        anchor,
                    });
                }
                Node::Separator => B::separator(&mut html),
                Node::Quote { text } => B::quote(text, &mut html),
                Node::Code { text, language } => {
                    B::code_block(language.as_deref(), text, &mut html);
                }
                Node::List { items } => {
                    Self::render_list(items, &mut html);
                    continue;
                }
                Node::Paragraph { text } => {
                    B::paragraph(&render_inline(&text.text()), &mut html);
                }
            }
            html.push('\n');
        }

        RenderResult { html, title, toc }
    }

    /// Render list items, grouping consecutive items of the same
    /// ordered-ness under one list element. Depth is not used for
    /// nesting.
    fn render_list(items: &[ListItem], out: &mut String) {
        let mut open: Option<bool> = None;
        for item in items {
            if open != Some(item.ordered) {
                if let Some(ordered) = open {
                    B::list_end(ordered, out);
                    out.push('\n');
                }
                B::list_start(item.ordered, out);
                out.push('\n');
                open = Some(item.ordered);
            }
            B::list_item(&render_inline(&item.text.text()), out);
            out.push('\n');
        }
        if let Some(ordered) = open {
            B::list_end(ordered, out);
            out.push('\n');
        }
    }
}
