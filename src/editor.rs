//! Editor state shared by the transformation commands.
//!
//! Holds the document buffer plus one caret per cursor, mirroring the host
//! editor's selection/caret contract. Multi-caret commands process carets
//! from last to first so mutations earlier in the buffer cannot invalidate
//! the offsets of carets not yet processed.

use std::ops::Range;

use crate::buffer::{RopeBuffer, TextBuffer};

/// A single caret with an optional selection, both as character offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caret {
    /// Caret position
    pub offset: usize,
    /// Selected span, if any. Always start <= end.
    pub selection: Option<Range<usize>>,
}

impl Caret {
    pub fn at(offset: usize) -> Self {
        Self {
            offset,
            selection: None,
        }
    }

    /// Caret at the selection end with the given span selected
    pub fn with_selection(start: usize, end: usize) -> Self {
        Self {
            offset: end,
            selection: Some(start.min(end)..start.max(end)),
        }
    }

    pub fn has_selection(&self) -> bool {
        matches!(&self.selection, Some(sel) if sel.start < sel.end)
    }

    pub fn selection_start(&self) -> Option<usize> {
        self.selection.as_ref().map(|sel| sel.start)
    }

    pub fn selection_end(&self) -> Option<usize> {
        self.selection.as_ref().map(|sel| sel.end)
    }

    /// Select the given span and move the caret to its end
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = Some(start.min(end)..start.max(end));
        self.offset = start.max(end);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn move_to(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Offset the caret's region starts at, used for ordering carets
    pub fn region_start(&self) -> usize {
        self.selection_start().unwrap_or(self.offset)
    }
}

/// A document buffer plus its carets.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub buffer: RopeBuffer,
    pub carets: Vec<Caret>,
}

impl EditorState {
    /// Single caret at offset 0
    pub fn new(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            carets: vec![Caret::at(0)],
        }
    }

    /// Single caret with the given span selected
    pub fn with_selection(text: &str, start: usize, end: usize) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            carets: vec![Caret::with_selection(start, end)],
        }
    }

    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// Caret indices ordered by region start, last first. Commands iterate
    /// in this order so earlier carets keep valid offsets.
    pub fn caret_indices_rev(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.carets.len()).collect();
        indices.sort_by_key(|&i| std::cmp::Reverse(self.carets[i].region_start()));
        indices
    }
}
