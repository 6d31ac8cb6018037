//! Region resolution: mapping a caret/selection onto the line span an
//! operation acts on.

use crate::buffer::TextBuffer;
use crate::editor::Caret;

/// Shape of the text region an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// No selection, the caret's line
    SingleLine,
    /// Selection contained in one line
    SingleLineSelection,
    /// Selection spanning multiple lines
    MultiLineSelection,
}

/// The offset/line span an operation acts on. Derived fresh per operation;
/// never cached across mutations, since every replacement invalidates
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub start_offset: usize,
    pub end_offset: usize,
    pub start_line: usize,
    pub end_line: usize,
}

impl Region {
    /// Resolve the caret's current region.
    ///
    /// When the selection ends exactly at a line start, that trailing line is
    /// not actually part of the selection; the end line is decremented so the
    /// phantom empty line is excluded. Omitting this causes off-by-one
    /// inclusion of an unselected line.
    pub fn resolve(buf: &impl TextBuffer, caret: &Caret) -> Self {
        if caret.has_selection() {
            let start_offset = caret.selection_start().unwrap_or(caret.offset);
            let end_offset = caret.selection_end().unwrap_or(caret.offset);

            let start_line = buf.line_of_offset(start_offset);
            let mut end_line = buf.line_of_offset(end_offset);
            if buf.line_start_offset(end_line) == end_offset {
                end_line -= 1;
            }

            let kind = if start_line == end_line {
                RegionKind::SingleLineSelection
            } else {
                RegionKind::MultiLineSelection
            };

            Self {
                kind,
                start_offset,
                end_offset,
                start_line,
                end_line,
            }
        } else {
            let line = buf.line_of_offset(caret.offset);

            Self {
                kind: RegionKind::SingleLine,
                start_offset: buf.line_start_offset(line),
                end_offset: buf.line_end_offset(line),
                start_line: line,
                end_line: line,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RopeBuffer;

    #[test]
    fn test_resolve_no_selection() {
        let buf = RopeBuffer::from_text("foo\nbar\n");
        let region = Region::resolve(&buf, &Caret::at(5));

        assert_eq!(region.kind, RegionKind::SingleLine);
        assert_eq!(region.start_line, 1);
        assert_eq!(region.end_line, 1);
        assert_eq!(region.start_offset, 4);
        assert_eq!(region.end_offset, 7);
    }

    #[test]
    fn test_resolve_single_line_selection() {
        let buf = RopeBuffer::from_text("foo bar\n");
        let region = Region::resolve(&buf, &Caret::with_selection(4, 7));

        assert_eq!(region.kind, RegionKind::SingleLineSelection);
        assert_eq!(region.start_line, 0);
        assert_eq!(region.end_line, 0);
    }

    #[test]
    fn test_resolve_multi_line_selection() {
        let buf = RopeBuffer::from_text("foo\nbar\nbaz\n");
        let region = Region::resolve(&buf, &Caret::with_selection(1, 9));

        assert_eq!(region.kind, RegionKind::MultiLineSelection);
        assert_eq!(region.start_line, 0);
        assert_eq!(region.end_line, 2);
    }

    #[test]
    fn test_selection_ending_at_line_start_excludes_trailing_line() {
        let buf = RopeBuffer::from_text("foo\nbar\nbaz\n");
        // Selection covers "foo\nbar\n": ends exactly where line 2 starts
        let region = Region::resolve(&buf, &Caret::with_selection(0, 8));

        assert_eq!(buf.line_of_offset(8), 2);
        assert_eq!(region.end_line, 1);
        assert_eq!(region.kind, RegionKind::MultiLineSelection);
    }

    #[test]
    fn test_two_line_selection_ending_at_line_start_is_single_line() {
        let buf = RopeBuffer::from_text("foo\nbar\n");
        // Only line 0 is actually selected
        let region = Region::resolve(&buf, &Caret::with_selection(1, 4));

        assert_eq!(region.end_line, 0);
        assert_eq!(region.kind, RegionKind::SingleLineSelection);
    }
}
