//! Single-line classification.
//!
//! Pure helpers that answer categorical questions about one raw input
//! line: does it continue an indented block, is it a title/separator
//! underline, is it a list item.

/// A successfully parsed list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemLine {
    /// True for `1.`-style markers, false for `*`.
    pub ordered: bool,
    /// Indentation depth before the marker: 1 per space, 2 per tab.
    pub depth: usize,
    /// Item text after the marker and its single separating space.
    pub text: String,
}

/// Tell whether a line continues an indented block (quote or code).
///
/// A line is a block continuation if it is empty or starts with a space
/// or tab. Block content accumulates verbatim until the first line whose
/// first character is non-whitespace.
pub fn is_block_line(line: &str) -> bool {
    match line.chars().next() {
        Some(c) => c == ' ' || c == '\t',
        None => true,
    }
}

/// Return the priority level of a title/separator underline, or 0.
///
/// A line is special when it is at least 3 characters long and every
/// character equals the first, which must be one of the recognized
/// underline symbols: `=` (level 1), `-` (2), `*` (3), `~` (4).
pub fn special_level(line: &str) -> usize {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    let level = match first {
        '=' => 1,
        '-' => 2,
        '*' => 3,
        '~' => 4,
        _ => return 0,
    };
    if line.chars().count() < 3 {
        return 0;
    }
    if chars.all(|c| c == first) { level } else { 0 }
}

/// Parse a line as a list item: `* text` or `<digits>. text`.
///
/// The marker must be followed by exactly one space and non-empty text.
/// Returns `None` when the trimmed line does not match.
pub fn parse_list_line(line: &str) -> Option<ListItemLine> {
    let depth = line
        .chars()
        .take_while(|c| matches!(c, ' ' | '\t'))
        .map(|c| if c == '\t' { 2 } else { 1 })
        .sum();

    let trimmed = line.trim();
    let (ordered, after_marker) = if let Some(rest) = trimmed.strip_prefix('*') {
        (false, rest)
    } else {
        let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        (true, trimmed[digits..].strip_prefix('.')?)
    };

    let text = after_marker.strip_prefix(' ')?;
    if text.is_empty() {
        return None;
    }

    Some(ListItemLine {
        ordered,
        depth,
        text: text.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_is_block_line_empty() {
        assert!(is_block_line(""));
    }

    #[test]
    fn test_is_block_line_indented() {
        assert!(is_block_line("    code"));
        assert!(is_block_line("\tcode"));
        assert!(is_block_line(" x"));
    }

    #[test]
    fn test_is_block_line_flush_left() {
        assert!(!is_block_line("text"));
        assert!(!is_block_line("* item"));
    }

    #[test]
    fn test_special_level_recognized_chars() {
        assert_eq!(special_level("==="), 1);
        assert_eq!(special_level("----"), 2);
        assert_eq!(special_level("*****"), 3);
        assert_eq!(special_level("~~~~~~"), 4);
    }

    #[test]
    fn test_special_level_too_short() {
        assert_eq!(special_level("=="), 0);
        assert_eq!(special_level("-"), 0);
        assert_eq!(special_level(""), 0);
    }

    #[test]
    fn test_special_level_mixed_chars() {
        assert_eq!(special_level("==-="), 0);
        assert_eq!(special_level("=== "), 0);
    }

    #[test]
    fn test_special_level_unrecognized_char() {
        assert_eq!(special_level("+++"), 0);
        assert_eq!(special_level("###"), 0);
    }

    #[test]
    fn test_parse_list_line_unordered() {
        let item = parse_list_line("* hello").unwrap();
        assert_eq!(
            item,
            ListItemLine {
                ordered: false,
                depth: 0,
                text: "hello".to_owned(),
            }
        );
    }

    #[test]
    fn test_parse_list_line_ordered() {
        let item = parse_list_line("12. twelfth").unwrap();
        assert!(item.ordered);
        assert_eq!(item.text, "twelfth");
    }

    #[test]
    fn test_parse_list_line_depth() {
        assert_eq!(parse_list_line("  * a").unwrap().depth, 2);
        assert_eq!(parse_list_line("\t* a").unwrap().depth, 2);
        assert_eq!(parse_list_line(" \t* a").unwrap().depth, 3);
    }

    #[test]
    fn test_parse_list_line_rejects_missing_space() {
        assert!(parse_list_line("*bold* text").is_none());
        assert!(parse_list_line("1.first").is_none());
    }

    #[test]
    fn test_parse_list_line_rejects_empty_text() {
        assert!(parse_list_line("* ").is_none());
        assert!(parse_list_line("1. ").is_none());
    }

    #[test]
    fn test_parse_list_line_rejects_plain_text() {
        assert!(parse_list_line("just a sentence").is_none());
        assert!(parse_list_line("").is_none());
    }
}
