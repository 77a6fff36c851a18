//! Inline text decoration.
//!
//! Turns raw span text into inline HTML: ` ``literal`` ` becomes
//! `<code>`, `**text**` becomes `<strong>`, `*text*` becomes `<em>`, and
//! `` `label <url>`_ `` becomes a link. Everything else is escaped and
//! passed through, so malformed markers degrade to literal text.

use crate::state::escape_html;

/// Render raw inline text to HTML.
#[must_use]
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(body) = rest.strip_prefix("``") {
            if let Some(end) = body.find("``") {
                out.push_str("<code>");
                out.push_str(&escape_html(&body[..end]));
                out.push_str("</code>");
                rest = &body[end + 2..];
                continue;
            }
        }

        if let Some(body) = rest.strip_prefix("**") {
            if let Some(end) = body.find("**") {
                out.push_str("<strong>");
                out.push_str(&escape_html(&body[..end]));
                out.push_str("</strong>");
                rest = &body[end + 2..];
                continue;
            }
        }

        if let Some(body) = rest.strip_prefix('`') {
            if let Some((link, remainder)) = parse_link(body) {
                out.push_str(&link);
                rest = remainder;
                continue;
            }
        }

        if let Some(body) = rest.strip_prefix('*') {
            if let Some(end) = body.find('*') {
                if end > 0 {
                    out.push_str("<em>");
                    out.push_str(&escape_html(&body[..end]));
                    out.push_str("</em>");
                    rest = &body[end + 1..];
                    continue;
                }
            }
        }

        if let Some(c) = rest.chars().next() {
            out.push_str(&escape_html(&rest[..c.len_utf8()]));
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}

/// Parse `label <url>`_ with the opening backtick already consumed.
///
/// Returns the rendered anchor element and the remaining input.
fn parse_link(body: &str) -> Option<(String, &str)> {
    let end = body.find('`')?;
    let remainder = body[end + 1..].strip_prefix('_')?;

    let inner = &body[..end];
    let open = inner.rfind('<')?;
    let url = inner[open + 1..].strip_suffix('>')?;
    let label = inner[..open].trim_end();
    if url.is_empty() || label.is_empty() {
        return None;
    }

    let anchor = format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(url),
        escape_html(label)
    );
    Some((anchor, remainder))
}
