//! Text buffer traits and the rope-backed implementation.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits
//! that abstract over the host editor's document. All offsets are character
//! offsets; line indices are zero-based.

use ropey::Rope;
use std::ops::Range;

/// Read-only view into a text buffer, exposing the line/offset queries the
/// transformation engines need.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Character offset of the first character of a line
    fn line_start_offset(&self, line: usize) -> usize;

    /// Character offset just past the last content character of a line,
    /// excluding the line terminator
    fn line_end_offset(&self, line: usize) -> usize;

    /// Length of the line's terminator in characters (0 for the last line
    /// of a buffer that does not end with a newline)
    fn line_terminator_len(&self, line: usize) -> usize;

    /// Line index containing the given character offset
    fn line_of_offset(&self, offset: usize) -> usize;

    /// Text between two character offsets
    fn text_between(&self, start: usize, end: usize) -> String;

    /// Get full content as String
    fn content(&self) -> String;
}

/// Mutable buffer operations. Extends TextBuffer.
///
/// Every engine operation issues a single `replace` per line/region, so the
/// host can batch the calls into one undoable transaction.
pub trait TextBufferMut: TextBuffer {
    /// Replace text in character range with new text (atomic operation)
    fn replace(&mut self, range: Range<usize>, text: &str);

    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str) {
        self.replace(offset..offset, text);
    }
}

// =============================================================================
// RopeBuffer - rope-backed document buffer
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
/// Used for multi-line document editing with efficient operations on large files.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_start_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    fn line_end_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let start = self.rope.line_to_char(line);
        let slice = self.rope.line(line);
        start + slice.len_chars() - terminator_len(slice)
    }

    fn line_terminator_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        terminator_len(self.rope.line(line))
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    fn text_between(&self, start: usize, end: usize) -> String {
        let start = start.min(self.len_chars());
        let end = end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn replace(&mut self, range: Range<usize>, text: &str) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
        self.rope.insert(start, text);
    }
}

/// Terminator length in chars of a rope line slice ("\n", "\r\n" or none)
fn terminator_len(slice: ropey::RopeSlice<'_>) -> usize {
    let len = slice.len_chars();
    if len == 0 {
        return 0;
    }
    if slice.char(len - 1) == '\n' {
        if len > 1 && slice.char(len - 2) == '\r' {
            2
        } else {
            1
        }
    } else {
        0
    }
}
