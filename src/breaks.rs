//! Line-structure normalization for prose
//!
//! Authors write descriptions with blank lines between paragraphs and single
//! newlines wherever their editor wrapped. How those survive depends on where
//! the text lands:
//!
//! - **Table cells** cannot hold raw newlines. The field is trimmed, each line
//!   loses its trailing whitespace, and every newline becomes the inline break
//!   marker (`<br>`, or a space when inline HTML is disabled). A blank line
//!   therefore turns into two markers.
//! - **Document prose** keeps its newlines. Blank lines stay paragraph breaks.
//!   A line followed by a line that starts with a word character gets two
//!   trailing spaces, so Markdown renders the author's line break instead of
//!   joining the lines, unless the next line starts a numbered list item.
//!
//! In both contexts a `<br>` the author typed at the end of a line is dropped in
//! favour of the newline that follows it.

use crate::settings::{RenderContext, Settings};

/// Inline line break used in table cells when HTML is allowed
pub const BREAK_MARKER: &str = "<br>";

/// Markdown hard line break suffix
const HARD_BREAK: &str = "  ";

/// Normalize line structure of escaped prose for the settings' context
///
/// # Arguments
///
/// * `text` - Escaped prose (no fenced code)
/// * `settings` - Provides the render context and the HTML switch
///
/// # Examples
///
/// ```rust
/// use terradoc_sanitizer::breaks::normalize_breaks;
/// use terradoc_sanitizer::settings::{RenderContext, Settings};
///
/// let document = Settings::default();
/// let table = document.with_context(RenderContext::Table);
///
/// assert_eq!(normalize_breaks("line one\n\nline two", &table), "line one<br><br>line two");
/// assert_eq!(normalize_breaks("line one\n\nline two", &document), "line one\n\nline two");
/// assert_eq!(normalize_breaks("wrapped\nline", &document), "wrapped  \nline");
/// ```
pub fn normalize_breaks(text: &str, settings: &Settings) -> String {
    match settings.context {
        RenderContext::Table => {
            let marker = if settings.html { BREAK_MARKER } else { " " };
            table_breaks(text, marker)
        }
        RenderContext::Document => document_breaks(text),
    }
}

/// Collapse all line structure onto one line joined by `marker`
fn table_breaks(text: &str, marker: &str) -> String {
    text.trim()
        .split('\n')
        .map(|line| strip_break_marker(line.trim_end()))
        .collect::<Vec<_>>()
        .join(marker)
}

/// Add hard breaks between lines that would otherwise be joined
fn document_breaks(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut output = String::with_capacity(text.len() + lines.len() * 2);

    for (index, line) in lines.iter().enumerate() {
        let (content, line_ending) = split_carriage_return(line);
        let next = lines.get(index + 1);

        if next.is_none() {
            output.push_str(content);
            output.push_str(line_ending);
            break;
        }

        let content = strip_break_marker(content);
        if next.is_some_and(|next| continues_paragraph(content, next)) {
            output.push_str(content.trim_end());
            output.push_str(HARD_BREAK);
        } else {
            output.push_str(content);
        }
        output.push_str(line_ending);
        output.push('\n');
    }

    output
}

/// Whether `line` must end in a hard break because `next` continues it
///
/// `line` must have content, and `next` must start (after indentation) with
/// an ASCII word character (`[A-Za-z0-9_]`) without being a numbered list item.
pub fn continues_paragraph(line: &str, next: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }

    let next = next.trim_start_matches([' ', '\t']);
    let starts_with_word = next
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_');

    starts_with_word && !starts_list_item(next)
}

/// Whether `line` starts an ordered list item (`1. item`, `2) item`)
///
/// Bullet items start with punctuation and never count as word continuations,
/// so only the numbered form needs detecting.
pub fn starts_list_item(line: &str) -> bool {
    let line = line.trim_start_matches([' ', '\t']);
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }

    let rest = &line[digits..];
    let Some(after) = rest.strip_prefix(['.', ')']) else {
        return false;
    };
    after.is_empty() || after.starts_with([' ', '\t'])
}

/// Drop an inline break marker ending the line
fn strip_break_marker(line: &str) -> &str {
    line.trim_end()
        .strip_suffix(BREAK_MARKER)
        .unwrap_or(line)
}

/// Split a trailing `\r` off a line so CRLF text keeps its line endings
fn split_carriage_return(line: &str) -> (&str, &str) {
    match line.strip_suffix('\r') {
        Some(content) => (content, "\r"),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Settings {
        Settings::default()
    }

    fn table() -> Settings {
        Settings::default().with_context(RenderContext::Table)
    }

    #[test]
    fn test_table_paragraphs() {
        assert_eq!(
            normalize_breaks("line one\n\nline two", &table()),
            "line one<br><br>line two"
        );
    }

    #[test]
    fn test_table_single_newline_and_trim() {
        assert_eq!(
            normalize_breaks("\n  first  \nsecond\r\n", &table()),
            "first<br>second"
        );
    }

    #[test]
    fn test_table_without_html_uses_spaces() {
        let settings = table().with_html(false);
        assert_eq!(normalize_breaks("a\nb\n\nc", &settings), "a b  c");
    }

    #[test]
    fn test_table_typed_break_marker_not_doubled() {
        assert_eq!(normalize_breaks("a<br>\nb", &table()), "a<br>b");
    }

    #[test]
    fn test_document_keeps_paragraphs() {
        assert_eq!(
            normalize_breaks("line one\n\nline two", &document()),
            "line one\n\nline two"
        );
    }

    #[test]
    fn test_document_soft_wrap_becomes_hard_break() {
        assert_eq!(
            normalize_breaks("first line\nsecond line\n  indented", &document()),
            "first line  \nsecond line  \n  indented"
        );
    }

    #[test]
    fn test_document_existing_trailing_spaces_normalized() {
        assert_eq!(normalize_breaks("a    \nb", &document()), "a  \nb");
    }

    #[test]
    fn test_document_non_ascii_line_start_not_joined() {
        assert_eq!(normalize_breaks("a\nüber", &document()), "a\nüber");
        assert_eq!(normalize_breaks("a\nUber", &document()), "a  \nUber");
    }

    #[test]
    fn test_document_lists_not_merged() {
        let input = "Options:\n- one\n* two\n1. three\n2) four";
        assert_eq!(normalize_breaks(input, &document()), input);
    }

    #[test]
    fn test_document_crlf() {
        assert_eq!(normalize_breaks("a\r\nb\r\n", &document()), "a  \r\nb\r\n");
    }

    #[test]
    fn test_document_typed_break_marker_becomes_newline() {
        assert_eq!(normalize_breaks("a<br>\n- b", &document()), "a\n- b");
        assert_eq!(normalize_breaks("a<br>\nb", &document()), "a  \nb");
        assert_eq!(normalize_breaks("end<br>", &document()), "end<br>");
    }

    #[test]
    fn test_continues_paragraph() {
        assert!(continues_paragraph("text", "more"));
        assert!(continues_paragraph("text", "_under"));
        assert!(continues_paragraph("text", "42 is the answer"));
        assert!(!continues_paragraph("", "more"));
        assert!(!continues_paragraph("   ", "more"));
        assert!(!continues_paragraph("text", ""));
        assert!(!continues_paragraph("text", "- item"));
        assert!(!continues_paragraph("text", "\\_escaped"));
        assert!(!continues_paragraph("text", "3. item"));
        assert!(!continues_paragraph("text", "über"));
        assert!(!continues_paragraph("text", "«quoted»"));
    }

    #[test]
    fn test_starts_list_item() {
        assert!(starts_list_item("1. one"));
        assert!(starts_list_item("  10) ten"));
        assert!(starts_list_item("3."));
        assert!(!starts_list_item("1.5 release"));
        assert!(!starts_list_item("2024 was"));
        assert!(!starts_list_item("- dash"));
    }
}
