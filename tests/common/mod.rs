//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use realign::{Caret, EditorState, RopeBuffer};

/// Install a tracing subscriber honoring RUST_LOG, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create an editor over the given text with one caret at offset 0
pub fn editor(text: &str) -> EditorState {
    EditorState::new(text)
}

/// Create an editor with one caret selecting `start..end`
pub fn editor_with_selection(text: &str, start: usize, end: usize) -> EditorState {
    EditorState::with_selection(text, start, end)
}

/// Create an editor with one caret (no selection) per given offset
pub fn editor_with_carets(text: &str, offsets: &[usize]) -> EditorState {
    EditorState {
        buffer: RopeBuffer::from_text(text),
        carets: offsets.iter().map(|&offset| Caret::at(offset)).collect(),
    }
}

/// Create an editor with one selecting caret per given range
pub fn editor_with_selections(text: &str, ranges: &[(usize, usize)]) -> EditorState {
    EditorState {
        buffer: RopeBuffer::from_text(text),
        carets: ranges
            .iter()
            .map(|&(start, end)| Caret::with_selection(start, end))
            .collect(),
    }
}
