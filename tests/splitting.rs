//! Split behavior tests
//!
//! Tests for the split command including:
//! - Caret-line and selection splitting
//! - Delimiter disposal variants
//! - Whitespace trimming and indent alignment
//! - Atomic failure across carets
//! - Soft-wrap fallback for the empty delimiter

mod common;

use common::{editor, editor_with_carets, editor_with_selection, editor_with_selections};
use realign::{commands, Disposal, TransformError};

#[test]
fn test_split_caret_line_at_delimiter() {
    let mut state = editor("red, green, blue\n");

    commands::split(&mut state, ", ", Disposal::At, false, 4).unwrap();

    assert_eq!(state.content(), "red\ngreen\nblue\n");
}

#[test]
fn test_split_disposal_before_keeps_delimiter_on_new_line() {
    let mut state = editor("x && y\n");

    commands::split(&mut state, " && ", Disposal::Before, false, 4).unwrap();

    assert_eq!(state.content(), "x\n && y\n");
}

#[test]
fn test_split_disposal_after_keeps_delimiter_on_first_line() {
    let mut state = editor("x && y\n");

    commands::split(&mut state, " && ", Disposal::After, false, 4).unwrap();

    assert_eq!(state.content(), "x && \ny\n");
}

#[test]
fn test_split_trims_whitespace_when_asked() {
    let mut state = editor("a ,  b ,  c\n");

    commands::split(&mut state, ",", Disposal::At, true, 4).unwrap();

    assert_eq!(state.content(), "a\nb\nc\n");
}

#[test]
fn test_split_aligns_new_lines_to_first_line_indent() {
    let mut state = editor("    item1, item2\n");

    commands::split(&mut state, ", ", Disposal::At, false, 4).unwrap();

    assert_eq!(state.content(), "    item1\n    item2\n");
}

#[test]
fn test_split_selection_spanning_lines() {
    let mut state = editor_with_selection("a;b\nc;d\n", 0, 7);

    commands::split(&mut state, ";", Disposal::At, false, 4).unwrap();

    assert_eq!(state.content(), "a\nb\nc\nd\n");
}

#[test]
fn test_split_multi_caret() {
    let mut state = editor_with_carets("a,b\nc,d\n", &[0, 4]);

    commands::split(&mut state, ",", Disposal::At, false, 4).unwrap();

    assert_eq!(state.content(), "a\nb\nc\nd\n");
    assert_eq!(state.carets[0].selection, Some(0..3));
    assert_eq!(state.carets[1].selection, Some(4..7));
}

#[test]
fn test_split_missing_delimiter_fails_without_mutation() {
    let mut state = editor("no delimiter here\n");

    let result = commands::split(&mut state, ";", Disposal::At, false, 4);

    assert_eq!(result, Err(TransformError::DelimiterMissing));
    assert_eq!(state.content(), "no delimiter here\n");
}

#[test]
fn test_split_is_atomic_across_carets() {
    // Second caret's region lacks the delimiter: no caret is split
    let mut state = editor_with_selections("a,b\nxy\n", &[(0, 3), (4, 6)]);

    let result = commands::split(&mut state, ",", Disposal::At, false, 4);

    assert_eq!(result, Err(TransformError::DelimiterMissing));
    assert_eq!(state.content(), "a,b\nxy\n");
}

#[test]
fn test_split_empty_delimiter_soft_wraps_long_line() {
    let mut text = "word ".repeat(30); // 150 chars
    text.push('\n');
    let mut state = editor(&text);

    commands::split(&mut state, "", Disposal::At, false, 4).unwrap();

    let content = state.content();
    let first_line = content.split('\n').next().unwrap();
    assert!(first_line.len() <= 120);
    assert_eq!(state.carets[0].offset, first_line.len() + 1);
}

#[test]
fn test_split_empty_delimiter_with_selection_leaves_buffer_alone() {
    // Soft-wrap is a caret-line fallback; an active selection opts out
    let mut text = "word ".repeat(30); // 150 chars, over the soft-wrap column
    text.push('\n');
    let mut state = editor_with_selection(&text, 0, 4);

    commands::split(&mut state, "", Disposal::At, false, 4).unwrap();

    assert_eq!(state.content(), text);
    assert_eq!(state.carets[0].selection, Some(0..4));
}

#[test]
fn test_split_empty_delimiter_leaves_short_line_alone() {
    let mut state = editor("short\n");

    commands::split(&mut state, "", Disposal::At, false, 4).unwrap();

    assert_eq!(state.content(), "short\n");
}
