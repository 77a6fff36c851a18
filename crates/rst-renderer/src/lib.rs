//! Trait-based document renderer with pluggable backends.
//!
//! This crate turns the node tree produced by `rst-parser` into output
//! markup. The generic [`DocumentRenderer`] walks the tree and delegates
//! element production to a [`RenderBackend`]; [`HtmlBackend`] is the
//! backend shipped here.
//!
//! Shared functionality (inline text decoration, list grouping, title
//! extraction, table-of-contents collection) lives in the generic
//! renderer, while the markup for each element is the backend's job.
//!
//! # Example
//!
//! ```
//! use rst_parser::Parser;
//! use rst_renderer::{DocumentRenderer, HtmlBackend};
//!
//! let result = Parser::new().parse("Hello\n=====\n\nSome **bold** text.");
//! let rendered = DocumentRenderer::<HtmlBackend>::new().render(&result.document);
//! assert_eq!(rendered.title.as_deref(), Some("Hello"));
//! assert!(rendered.html.contains("<strong>bold</strong>"));
//! ```

mod backend;
mod html;
mod inline;
mod renderer;
mod state;

pub use backend::RenderBackend;
pub use html::HtmlBackend;
pub use inline::render_inline;
pub use renderer::{DocumentRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
