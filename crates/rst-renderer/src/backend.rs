//! Backend trait for format-specific rendering.

/// Render backend trait for producing output in different formats.
///
/// Backends are stateless: all methods are associated functions that
/// append markup to the output buffer. The generic
/// [`DocumentRenderer`](crate::DocumentRenderer) handles tree walking,
/// inline decoration, and list grouping; backends only produce elements.
pub trait RenderBackend {
    /// Render a heading. `inner` is already inline-rendered HTML.
    fn title(level: usize, anchor: &str, inner: &str, out: &mut String);

    /// Render a horizontal separator.
    fn separator(out: &mut String);

    /// Render a quote block. `text` is raw and must be escaped.
    fn quote(text: &str, out: &mut String);

    /// Render a code block. `content` is raw and must be escaped.
    fn code_block(language: Option<&str>, content: &str, out: &mut String);

    /// Open a list.
    fn list_start(ordered: bool, out: &mut String);

    /// Close a list.
    fn list_end(ordered: bool, out: &mut String);

    /// Render one list item. `inner` is already inline-rendered HTML.
    fn list_item(inner: &str, out: &mut String);

    /// Render a paragraph. `inner` is already inline-rendered HTML.
    fn paragraph(inner: &str, out: &mut String);
}
