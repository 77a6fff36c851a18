//! HTML backend.
//!
//! Produces semantic HTML5 output suitable for web display.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::state::escape_html;

/// HTML render backend.
///
/// - `<h1>`..`<h6>` with anchor ids for headings
/// - `<blockquote>` with escaped text and `<br />` line breaks
/// - `<pre><code>` for code blocks, `class="language-..."` when known
/// - `<ul>`/`<ol>`/`<li>` for lists
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn title(level: usize, anchor: &str, inner: &str, out: &mut String) {
        if anchor.is_empty() {
            write!(out, "<h{level}>{inner}</h{level}>").unwrap();
        } else {
            write!(out, r#"<h{level} id="{anchor}">{inner}</h{level}>"#).unwrap();
        }
    }

    fn separator(out: &mut String) {
        out.push_str("<hr />");
    }

    fn quote(text: &str, out: &mut String) {
        let escaped = escape_html(text).replace('\n', "<br />\n");
        write!(out, "<blockquote>{escaped}</blockquote>").unwrap();
    }

    fn code_block(language: Option<&str>, content: &str, out: &mut String) {
        if let Some(language) = language {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(language),
                escape_html(content)
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
        }
    }

    fn list_start(ordered: bool, out: &mut String) {
        out.push_str(if ordered { "<ol>" } else { "<ul>" });
    }

    fn list_end(ordered: bool, out: &mut String) {
        out.push_str(if ordered { "</ol>" } else { "</ul>" });
    }

    fn list_item(inner: &str, out: &mut String) {
        write!(out, "<li>{inner}</li>").unwrap();
    }

    fn paragraph(inner: &str, out: &mut String) {
        write!(out, "<p>{inner}</p>").unwrap();
    }
}
