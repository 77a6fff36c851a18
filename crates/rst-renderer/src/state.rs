//! Shared rendering helpers and table-of-contents entries.

use std::borrow::Cow;

/// One table-of-contents entry, collected per title node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Title level as parsed (1-4), before any header-level shift.
    pub level: usize,
    /// Plain title text.
    pub text: String,
    /// Anchor id emitted on the heading element.
    pub anchor: String,
}

/// Escape `&`, `<`, `>` and `"` for HTML output.
///
/// Borrows the input when nothing needs escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Derive an anchor slug from heading text.
///
/// Lowercases, keeps alphanumerics, and collapses runs of anything else
/// into single hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"a < b && c > "d""#),
            "a &lt; b &amp;&amp; c &gt; &quot;d&quot;"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("  What's new?  "), "what-s-new");
        assert_eq!(slugify("HTTP/2"), "http-2");
        assert_eq!(slugify("---"), "");
    }
}
