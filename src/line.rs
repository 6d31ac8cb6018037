//! Line extraction helpers over a [`TextBuffer`].
//!
//! Normalizes the "last line may have no terminator" asymmetry: extracted
//! lines always carry a trailing newline so downstream length arithmetic is
//! uniform.

use crate::buffer::TextBuffer;

/// Extract a line including its terminator. If the line has a zero-length
/// terminator (end of buffer without trailing newline), one is synthesized.
pub fn extract_line(buf: &impl TextBuffer, line: usize) -> String {
    let terminator_len = buf.line_terminator_len(line);
    let start = buf.line_start_offset(line);
    let end = buf.line_end_offset(line) + terminator_len;

    let mut text = buf.text_between(start, end);
    if terminator_len == 0 {
        text.push('\n');
    }

    text
}

/// Extract the lines `start_line..=end_line`, each with terminator.
/// Returns an empty list when `end_line < start_line`.
pub fn extract_lines(buf: &impl TextBuffer, start_line: usize, end_line: usize) -> Vec<String> {
    if end_line < start_line {
        return Vec::new();
    }
    (start_line..=end_line)
        .map(|line| extract_line(buf, line))
        .collect()
}

/// Text between two offsets, or `None` when the buffer is empty (so callers
/// can tell "nothing to extract" apart from an empty match).
pub fn substring(buf: &impl TextBuffer, start: usize, end: usize) -> Option<String> {
    if buf.is_empty() {
        return None;
    }
    Some(buf.text_between(start, end))
}

/// The string with leading whitespace removed
pub fn ltrim(text: &str) -> &str {
    text.trim_start()
}

/// The leading whitespace of the string (indentation)
pub fn leading_whitespace(text: &str) -> &str {
    &text[..text.len() - ltrim(text).len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RopeBuffer;

    #[test]
    fn test_extract_line_with_terminator() {
        let buf = RopeBuffer::from_text("foo\nbar\n");
        assert_eq!(extract_line(&buf, 0), "foo\n");
        assert_eq!(extract_line(&buf, 1), "bar\n");
    }

    #[test]
    fn test_extract_line_synthesizes_terminator() {
        let buf = RopeBuffer::from_text("foo\nbar");
        assert_eq!(extract_line(&buf, 1), "bar\n");
    }

    #[test]
    fn test_extract_lines() {
        let buf = RopeBuffer::from_text("a\nb\nc");
        assert_eq!(extract_lines(&buf, 0, 2), vec!["a\n", "b\n", "c\n"]);
    }

    #[test]
    fn test_extract_lines_inverted_range_is_empty() {
        let buf = RopeBuffer::from_text("a\nb");
        assert!(extract_lines(&buf, 1, 0).is_empty());
    }

    #[test]
    fn test_substring() {
        let buf = RopeBuffer::from_text("hello");
        assert_eq!(substring(&buf, 1, 4), Some("ell".to_string()));
    }

    #[test]
    fn test_substring_empty_buffer_is_none() {
        let buf = RopeBuffer::new();
        assert_eq!(substring(&buf, 0, 0), None);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("  \tfoo"), "  \t");
        assert_eq!(leading_whitespace("foo"), "");
        assert_eq!(ltrim("  foo "), "foo ");
    }
}
