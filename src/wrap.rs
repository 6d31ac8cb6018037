//! Wrap/unwrap engine: surrounds or strips a prefix/postfix pair around a
//! line, a selection, or each line of a multi-line selection.
//!
//! Multi-line passes iterate from the last affected line to the first, so
//! insertions never invalidate the offsets of lines not yet processed.

use std::ops::Range;

use crate::buffer::{TextBuffer, TextBufferMut};
use crate::editor::Caret;
use crate::line;
use crate::region::{Region, RegionKind};

/// How a multi-line selection is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Wrap every line of the selection individually
    #[default]
    EachLine,
    /// Wrap the whole selection as one string
    WholeSelection,
}

impl WrapMode {
    /// Decode from the persisted preference value ("0" / "1")
    pub fn from_pref(value: &str) -> Self {
        match value {
            "1" => WrapMode::WholeSelection,
            _ => WrapMode::EachLine,
        }
    }

    pub fn as_pref(&self) -> &'static str {
        match self {
            WrapMode::EachLine => "0",
            WrapMode::WholeSelection => "1",
        }
    }
}

/// Options for a single wrap invocation. Prefix and postfix are independent;
/// neither symmetry nor non-emptiness is assumed.
#[derive(Debug, Clone, Default)]
pub struct WrapOptions {
    pub prefix: String,
    pub postfix: String,
    pub mode: WrapMode,
    pub escape_single_quotes: bool,
    pub escape_double_quotes: bool,
    pub escape_backslashes: bool,
    pub remove_blank_lines: bool,
}

impl WrapOptions {
    pub fn new(prefix: &str, postfix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            postfix: postfix.to_string(),
            ..Self::default()
        }
    }

    fn escape(&self, text: &str) -> String {
        escape_selectively(
            text,
            self.escape_single_quotes,
            self.escape_double_quotes,
            self.escape_backslashes,
        )
    }
}

// =============================================================================
// Pure string helpers
// =============================================================================

/// Escape the selected character classes.
///
/// Backslashes are escaped first: quote-escaping inserts new backslashes
/// which must not themselves be re-escaped.
pub fn escape_selectively(
    text: &str,
    single_quotes: bool,
    double_quotes: bool,
    backslashes: bool,
) -> String {
    let mut result = text.to_string();
    if backslashes {
        result = result.replace('\\', "\\\\");
    }
    if single_quotes {
        result = result.replace('\'', "\\'");
    }
    if double_quotes {
        result = result.replace('"', "\\\"");
    }

    result
}

/// Strip `prefix` from the start and `postfix` from the end, each side
/// independently and only if present.
pub fn unwrap_str(text: &str, prefix: &str, postfix: &str) -> String {
    let mut result = text;
    if !prefix.is_empty() {
        result = result.strip_prefix(prefix).unwrap_or(result);
    }
    if !postfix.is_empty() {
        result = result.strip_suffix(postfix).unwrap_or(result);
    }

    result.to_string()
}

/// Infer the closing counterpart of an opening token: `</div>` for an HTML
/// start tag, the matching bracket/quote/comment close otherwise.
///
/// Purely lexical, first satisfied rule wins; returns `None` when no
/// counterpart can be inferred.
pub fn wrap_counterpart(open: &str) -> Option<String> {
    if open.is_empty() {
        return Some(String::new());
    }
    let open = open.trim();

    if is_html_start_tag(open) {
        return Some(html_tag_counterpart(open));
    }

    // Ordered open/close pairs; a candidate already containing its close
    // token is considered closed.
    const PAIRS: [(&str, &str); 10] = [
        ("(", ")"),
        ("[", "]"),
        ("{", "}"),
        ("«", "»"),
        ("„", "“"),
        ("“", "”"),
        ("‘", "’"),
        ("<!--", "-->"),
        ("<", ">"),
        ("/*", "*/"),
    ];
    for (open_token, close_token) in PAIRS {
        if open.starts_with(open_token) && !open.contains(close_token) {
            return Some(close_token.to_string());
        }
    }

    None
}

/// Lexical HTML/XML start-tag check: `<`, a tag name, a closing `>` somewhere
fn is_html_start_tag(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('<') else {
        return false;
    };
    let name_len = rest.chars().take_while(|c| c.is_ascii_alphabetic()).count();

    name_len > 0 && rest.contains('>')
}

fn html_tag_counterpart(tag: &str) -> String {
    let stripped: String = tag.chars().filter(|&c| c != '<').collect();
    let name: String = stripped
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    format!("</{}>", name)
}

// =============================================================================
// Buffer operations
// =============================================================================

/// Wrap the caret's region with the options' prefix/postfix pair.
pub fn wrap(buf: &mut impl TextBufferMut, caret: &mut Caret, opts: &WrapOptions) {
    let region = Region::resolve(buf, caret);

    match region.kind {
        RegionKind::SingleLineSelection => {
            wrap_span(buf, caret, region.start_offset..region.end_offset, opts);
        }
        RegionKind::MultiLineSelection => match opts.mode {
            WrapMode::WholeSelection => {
                wrap_span(buf, caret, region.start_offset..region.end_offset, opts);
            }
            WrapMode::EachLine => {
                let end_line = if opts.remove_blank_lines {
                    collapse_blank_lines(buf, region.start_line, region.end_line)
                } else {
                    region.end_line
                };
                wrap_lines(buf, caret, region.start_line, end_line, opts);
            }
        },
        RegionKind::SingleLine => {
            wrap_lines(buf, caret, region.start_line, region.end_line, opts);
        }
    }
}

/// Strip the prefix/postfix pair from the caret's region.
pub fn unwrap(buf: &mut impl TextBufferMut, caret: &mut Caret, prefix: &str, postfix: &str) {
    let region = Region::resolve(buf, caret);

    match region.kind {
        // For the caret line, the line bounds become the working selection
        RegionKind::SingleLine | RegionKind::SingleLineSelection => {
            let Some(text) = line::substring(buf, region.start_offset, region.end_offset) else {
                return;
            };
            let unwrapped = unwrap_str(&text, prefix, postfix);
            buf.replace(region.start_offset..region.end_offset, &unwrapped);
            caret.set_selection(
                region.start_offset,
                region.start_offset + unwrapped.chars().count(),
            );
        }
        RegionKind::MultiLineSelection => {
            for line_index in (region.start_line..=region.end_line).rev() {
                let start = buf.line_start_offset(line_index);
                let end = buf.line_end_offset(line_index);
                let interior = buf.text_between(start, end);
                let unwrapped = unwrap_str(&interior, prefix, postfix);
                buf.replace(start..end, &unwrapped);
            }
            caret.set_selection(
                buf.line_start_offset(region.start_line),
                buf.line_end_offset(region.end_line),
            );
        }
    }
}

/// Is the caret's region already wrapped in the given pair?
///
/// Unless the multi-line mode wraps the whole selection, a multi-line
/// candidate is judged by its first line only, since each-line mode only
/// ever wraps line by line.
pub fn is_wrapped(
    buf: &impl TextBuffer,
    caret: &Caret,
    prefix: &str,
    postfix: &str,
    mode: WrapMode,
) -> bool {
    let text = if caret.has_selection() {
        let start = caret.selection_start().unwrap_or(caret.offset);
        let end = caret.selection_end().unwrap_or(caret.offset);
        buf.text_between(start, end)
    } else {
        line::extract_line(buf, buf.line_of_offset(caret.offset))
    };

    let mut text = text.trim();
    if mode != WrapMode::WholeSelection && text.contains('\n') {
        text = text.split('\n').next().unwrap_or("").trim();
    }

    text.starts_with(prefix) && text.ends_with(postfix)
}

/// Wrap a single span as one string, escaping its interior
fn wrap_span(buf: &mut impl TextBufferMut, caret: &mut Caret, span: Range<usize>, opts: &WrapOptions) {
    let Some(selected) = line::substring(buf, span.start, span.end) else {
        return;
    };
    let wrapped = format!("{}{}{}", opts.prefix, opts.escape(&selected), opts.postfix);
    let wrapped_len = wrapped.chars().count();
    buf.replace(span.start..span.end, &wrapped);
    caret.set_selection(span.start, span.start + wrapped_len);
}

/// Wrap each line in the range individually, last line first. The line
/// terminator is stripped before escaping so escaping never touches it.
fn wrap_lines(
    buf: &mut impl TextBufferMut,
    caret: &mut Caret,
    start_line: usize,
    end_line: usize,
    opts: &WrapOptions,
) {
    for line_index in (start_line..=end_line).rev() {
        let start = buf.line_start_offset(line_index);
        let end = buf.line_end_offset(line_index);
        let interior = buf.text_between(start, end);
        let wrapped = format!("{}{}{}", opts.prefix, opts.escape(&interior), opts.postfix);
        buf.replace(start..end, &wrapped);
    }

    caret.set_selection(
        buf.line_start_offset(start_line),
        buf.line_end_offset(end_line),
    );
}

/// Collapse runs of blank/whitespace-only lines inside the line range.
/// Returns the new end line of the shrunken range.
fn collapse_blank_lines(
    buf: &mut impl TextBufferMut,
    start_line: usize,
    end_line: usize,
) -> usize {
    let start = buf.line_start_offset(start_line);
    let end = buf.line_end_offset(end_line);
    let text = buf.text_between(start, end);

    let kept: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    let collapsed = kept.join("\n");
    buf.replace(start..end, &collapsed);

    start_line + kept.len().saturating_sub(1)
}
