//! Transformation commands: resolve each caret's region, run the engine,
//! commit the replacement and update the selection.
//!
//! Multi-caret fan-out: every caret gets an independent region and the same
//! transformation, processed from the last caret to the first so earlier
//! replacements cannot invalidate offsets still to be used. Fallible
//! commands validate every caret before mutating anything, so either all
//! carets are transformed or none.

use crate::buffer::{TextBuffer, TextBufferMut};
use crate::editor::EditorState;
use crate::error::TransformError;
use crate::line;
use crate::region::Region;
use crate::{join, split, wrap};

pub use crate::split::Disposal;
pub use crate::wrap::{WrapMode, WrapOptions};

/// Run one transformation per caret, last caret first, shifting the carets
/// already processed (all later in the buffer) by each mutation's length
/// delta so their selections stay valid.
fn for_each_caret_rev(
    state: &mut EditorState,
    mut transform: impl FnMut(&mut crate::buffer::RopeBuffer, &mut crate::editor::Caret) -> Result<(), TransformError>,
) -> Result<(), TransformError> {
    let order = state.caret_indices_rev();
    let EditorState { buffer, carets } = state;

    let mut processed: Vec<usize> = Vec::with_capacity(order.len());
    for index in order {
        let len_before = buffer.len_chars() as isize;
        transform(buffer, &mut carets[index])?;
        let delta = buffer.len_chars() as isize - len_before;

        if delta != 0 {
            for &done in &processed {
                shift_caret(&mut carets[done], delta);
            }
        }
        processed.push(index);
    }

    Ok(())
}

fn shift_caret(caret: &mut crate::editor::Caret, delta: isize) {
    let shift = |offset: usize| (offset as isize + delta).max(0) as usize;
    caret.offset = shift(caret.offset);
    if let Some(selection) = &mut caret.selection {
        *selection = shift(selection.start)..shift(selection.end);
    }
}

/// Wrap every caret's region with the options' prefix/postfix pair.
pub fn wrap(state: &mut EditorState, opts: &WrapOptions) {
    tracing::debug!(carets = state.carets.len(), prefix = %opts.prefix, "wrap");

    let _ = for_each_caret_rev(state, |buffer, caret| {
        wrap::wrap(buffer, caret, opts);
        Ok(())
    });
}

/// Strip the prefix/postfix pair from every caret's region.
pub fn unwrap(state: &mut EditorState, prefix: &str, postfix: &str) {
    tracing::debug!(carets = state.carets.len(), %prefix, "unwrap");

    let _ = for_each_caret_rev(state, |buffer, caret| {
        wrap::unwrap(buffer, caret, prefix, postfix);
        Ok(())
    });
}

/// Auto-toggle: unwrap regions that are already wrapped in the pair, wrap
/// the rest. Judged per caret.
pub fn toggle_wrap(state: &mut EditorState, opts: &WrapOptions) {
    let _ = for_each_caret_rev(state, |buffer, caret| {
        if wrap::is_wrapped(buffer, caret, &opts.prefix, &opts.postfix, opts.mode) {
            wrap::unwrap(buffer, caret, &opts.prefix, &opts.postfix);
        } else {
            wrap::wrap(buffer, caret, opts);
        }
        Ok(())
    });
}

/// Split every caret's line or selection at the delimiter. An empty
/// delimiter falls back to a soft-wrap split of each caret's line; carets
/// with an active selection are left untouched by the fallback.
///
/// No mutation happens unless the delimiter occurs in every caret's region.
pub fn split(
    state: &mut EditorState,
    delimiter: &str,
    disposal: Disposal,
    trim_whitespace: bool,
    tab_width: usize,
) -> Result<(), TransformError> {
    if delimiter.is_empty() {
        tracing::debug!(carets = state.carets.len(), "split: soft-wrap fallback");
        return for_each_caret_rev(state, |buffer, caret| {
            if !caret.has_selection() {
                split::split_line_at_soft_wrap(buffer, caret, tab_width);
            }
            Ok(())
        });
    }

    // Validation pass: a miss on any caret aborts before any mutation
    for caret in &state.carets {
        let region = Region::resolve(&state.buffer, caret);
        let text = line::substring(&state.buffer, region.start_offset, region.end_offset);
        if matches!(text, Some(ref t) if !t.contains(delimiter)) {
            return Err(TransformError::DelimiterMissing);
        }
    }

    tracing::debug!(carets = state.carets.len(), %delimiter, "split");
    for_each_caret_rev(state, |buffer, caret| {
        if caret.has_selection() {
            split::split_selection(buffer, caret, delimiter, disposal, trim_whitespace)?;
        } else {
            split::split_line(buffer, caret, delimiter, disposal, trim_whitespace)?;
        }
        split::align_selected_lines_indent(buffer, caret);
        Ok(())
    })
}

/// Join every caret's selected lines into one line with the glue between
/// them. Every caret must select at least two lines; otherwise nothing is
/// mutated.
pub fn join(state: &mut EditorState, glue: &str) -> Result<(), TransformError> {
    // Validation pass
    for caret in &state.carets {
        if !caret.has_selection() {
            return Err(TransformError::NothingToJoin);
        }
        let region = Region::resolve(&state.buffer, caret);
        if region.end_line <= region.start_line {
            return Err(TransformError::NothingToJoin);
        }
    }

    tracing::debug!(carets = state.carets.len(), %glue, "join");
    for_each_caret_rev(state, |buffer, caret| {
        let region = Region::resolve(buffer, caret);

        let lines = line::extract_lines(buffer, region.start_line, region.end_line);
        let joined = join::join_lines(&lines, glue);
        let joined_len = joined.chars().count();

        let start = buffer.line_start_offset(region.start_line);
        let end = buffer.line_end_offset(region.end_line);
        buffer.replace(start..end, &joined);
        caret.set_selection(start, start + joined_len);
        Ok(())
    })
}
