//! Split engine: explodes a line or selection into multiple lines at a
//! delimiter, or at a soft-wrap column when no delimiter is given.

use crate::buffer::TextBufferMut;
use crate::editor::Caret;
use crate::error::TransformError;
use crate::line;
use crate::region::Region;

/// Column a delimiter-less split falls back to
pub const SOFT_WRAP_COLUMN: usize = 120;

/// Where the replacement line break goes relative to the delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposal {
    /// Delimiter replaced by the line break
    #[default]
    At,
    /// Line break inserted before the delimiter
    Before,
    /// Line break inserted after the delimiter
    After,
}

impl Disposal {
    /// Decode from the persisted preference value ("0" / "1" / "2");
    /// anything else falls back to `At`.
    pub fn from_pref(value: &str) -> Self {
        match value {
            "1" => Disposal::Before,
            "2" => Disposal::After,
            _ => Disposal::At,
        }
    }

    pub fn as_pref(&self) -> &'static str {
        match self {
            Disposal::At => "0",
            Disposal::Before => "1",
            Disposal::After => "2",
        }
    }

    /// The string every delimiter occurrence is replaced with
    fn replacement(&self, delimiter: &str) -> String {
        match self {
            Disposal::At => "\n".to_string(),
            Disposal::Before => format!("\n{}", delimiter),
            Disposal::After => format!("{}\n", delimiter),
        }
    }
}

/// Trim every line of the text, dropping lines that become empty
pub fn trim_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line's text with every delimiter occurrence split per the disposal
fn exploded_line_text(
    line_text: &str,
    delimiter: &str,
    disposal: Disposal,
    trim_whitespace: bool,
) -> String {
    let exploded = line_text.replace(delimiter, &disposal.replacement(delimiter));

    if trim_whitespace {
        trim_lines(&exploded)
    } else {
        exploded
    }
}

/// Split the caret's line at every delimiter occurrence. The exploded span
/// becomes the selection so indent alignment can run on it afterwards.
pub fn split_line(
    buf: &mut impl TextBufferMut,
    caret: &mut Caret,
    delimiter: &str,
    disposal: Disposal,
    trim_whitespace: bool,
) -> Result<(), TransformError> {
    let line_index = buf.line_of_offset(caret.offset);
    let start = buf.line_start_offset(line_index);
    let end = buf.line_end_offset(line_index);
    let line_text = buf.text_between(start, end);

    if !line_text.contains(delimiter) {
        return Err(TransformError::DelimiterMissing);
    }

    let exploded = exploded_line_text(&line_text, delimiter, disposal, trim_whitespace);
    let exploded_len = exploded.chars().count();
    buf.replace(start..end, &exploded);
    caret.set_selection(start, start + exploded_len);

    Ok(())
}

/// Split every line of the selection, last line first. The whole selected
/// text is checked for the delimiter before any line is touched, so a miss
/// never leaves the buffer partially mutated.
pub fn split_selection(
    buf: &mut impl TextBufferMut,
    caret: &mut Caret,
    delimiter: &str,
    disposal: Disposal,
    trim_whitespace: bool,
) -> Result<(), TransformError> {
    let region = Region::resolve(buf, caret);
    match line::substring(buf, region.start_offset, region.end_offset) {
        None => return Ok(()),
        Some(selected) if !selected.contains(delimiter) => {
            return Err(TransformError::DelimiterMissing);
        }
        Some(_) => {}
    }

    let selection_start = buf.line_start_offset(region.start_line);
    let selection_end = buf.line_end_offset(region.end_line);
    let mut delta: isize = 0;

    for line_index in (region.start_line..=region.end_line).rev() {
        let start = buf.line_start_offset(line_index);
        let end = buf.line_end_offset(line_index);
        let line_text = buf.text_between(start, end);
        let exploded = exploded_line_text(&line_text, delimiter, disposal, trim_whitespace);

        delta += exploded.chars().count() as isize - (end - start) as isize;
        buf.replace(start..end, &exploded);
    }

    caret.set_selection(
        selection_start,
        (selection_end as isize + delta) as usize,
    );

    Ok(())
}

/// Prepend the first selected line's leading whitespace to every following
/// selected line that does not already start with it. Runs on the caret's
/// current (post-split) selection.
pub fn align_selected_lines_indent(buf: &mut impl TextBufferMut, caret: &mut Caret) {
    let Some(selection) = caret.selection.clone() else {
        return;
    };

    let first_line_index = buf.line_of_offset(selection.start);
    let first_line = buf.text_between(
        buf.line_start_offset(first_line_index),
        buf.line_end_offset(first_line_index),
    );
    let indent = line::leading_whitespace(&first_line).to_string();

    let text = buf.text_between(selection.start, selection.end);
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    for line_text in lines.iter_mut().skip(1) {
        if !line_text.starts_with(&indent) {
            line_text.insert_str(0, &indent);
        }
    }
    let aligned = lines.join("\n");

    let delta = aligned.chars().count() as isize - (selection.end - selection.start) as isize;
    buf.replace(selection.start..selection.end, &aligned);
    caret.set_selection(selection.start, (selection.end as isize + delta) as usize);
}

/// Split the caret's line near the soft-wrap column: scan backward from the
/// column limit to the nearest space, tab or comma and break there. A comma
/// stays on the first line; a space or tab is discarded. Returns whether a
/// break was inserted.
pub fn split_line_at_soft_wrap(
    buf: &mut impl TextBufferMut,
    caret: &mut Caret,
    tab_width: usize,
) -> bool {
    let line_index = buf.line_of_offset(caret.offset);
    let start = buf.line_start_offset(line_index);
    let end = buf.line_end_offset(line_index);
    let chars: Vec<char> = buf.text_between(start, end).chars().collect();

    // Visual width: tabs expand to tab_width columns
    let tab_count = chars.iter().filter(|&&c| c == '\t').count();
    let visual_width = chars.len() + tab_count * tab_width.saturating_sub(1);
    if visual_width <= SOFT_WRAP_COLUMN {
        return false;
    }

    let mut position = SOFT_WRAP_COLUMN.min(chars.len() - 1);
    while position > 1 && !matches!(chars[position], ' ' | '\t' | ',') {
        position -= 1;
    }
    if position <= 1 {
        // Too close to the line start
        return false;
    }

    let break_char = chars[position];
    let mut exploded: String = chars[..position].iter().collect();
    if break_char == ',' {
        exploded.push(',');
    }
    exploded.push('\n');
    exploded.extend(&chars[position + 1..]);

    buf.replace(start..end, &exploded);
    caret.clear_selection();
    caret.move_to(buf.line_start_offset(line_index + 1));

    true
}
