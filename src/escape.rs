//! Escaping of markup metacharacters in prose
//!
//! Prose segments are rewritten so that characters with structural meaning in
//! the target dialect are read literally:
//!
//! - `|` becomes `\|` whenever pipes are escaped (always in table cells), so a
//!   description can never open a new table column.
//! - `_` and `*` become `\_` and `\*` in Markdown when character escaping is
//!   enabled, except where the author is visibly using them as markup.
//!
//! Inline code spans (single backticks) are left exactly as written.
//!
//! # Markup exceptions
//!
//! Two shapes are treated as intentional markup and keep their delimiter runs
//! unescaped. They are checked per line, in this order, and a character
//! claimed by an earlier check is never escaped by a later step:
//!
//! 1. [`list_marker_run`]: a run at the start of the line, after optional
//!    indentation, followed by whitespace (`* item`, `  - item`).
//! 2. [`emphasis_spans`]: a run preceded by whitespace, wrapping a word or
//!    phrase of at least two characters that starts and ends with a
//!    non-whitespace character and contains no marker, closed by a run followed
//!    by whitespace (` **bold** `, ` _em_ `, ` **very important** `).
//!
//! Everything else is escaped.
//!
//! # Examples
//!
//! ```rust
//! use terradoc_sanitizer::escape::escape;
//! use terradoc_sanitizer::settings::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(
//!     escape("Example of 'foo_bar' module in `foo_bar.tf`.", &settings),
//!     "Example of 'foo\\_bar' module in `foo_bar.tf`."
//! );
//! assert_eq!(escape("lorem | ipsum", &settings), "lorem \\| ipsum");
//! ```

use crate::segment::{INLINE_CODE, map_prose};
use crate::settings::Settings;
use std::ops::Range;

/// Characters escaped in Markdown prose, in processing order
pub const EMPHASIS_MARKERS: [u8; 2] = [b'_', b'*'];

/// Whitespace as understood by the markup exceptions
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0c' | b'\r')
}

/// End index of the run starting at `start` whose bytes satisfy `pred`
fn run_end(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    start
        + bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|&&b| pred(b))
            .count()
}

/// Escape a prose segment according to `settings`
///
/// Pipe escaping runs first, then `_` and `*` escaping. Inline code spans are
/// skipped by both.
///
/// # Arguments
///
/// * `text` - Prose text (fenced code blocks already removed)
/// * `settings` - Escaping switches, dialect and context
///
/// # Returns
///
/// The escaped text. With neither pipe nor character escaping active the input
/// is returned unchanged.
pub fn escape(text: &str, settings: &Settings) -> String {
    let mut text = text.to_string();

    if settings.pipes_escaped() {
        text = escape_pipes(&text);
    }

    if settings.emphasis_escaped() {
        text = escape_emphasis(&text);
    }

    text
}

/// Escape every `|` outside inline code spans
pub fn escape_pipes(text: &str) -> String {
    map_prose(text, INLINE_CODE, |prose| prose.replace('|', "\\|"))
}

/// Escape `_` and `*` outside inline code spans, honouring the list-marker
/// and emphasis-span exceptions
pub fn escape_emphasis(text: &str) -> String {
    map_prose(text, INLINE_CODE, |prose| {
        prose
            .split('\n')
            .map(|line| {
                EMPHASIS_MARKERS
                    .iter()
                    .fold(line.to_string(), |line, &marker| escape_line(&line, marker))
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Escape one marker character in a single line
fn escape_line(line: &str, marker: u8) -> String {
    let marker_char = char::from(marker);
    if !line.contains(marker_char) {
        return line.to_string();
    }

    let mut literal = vec![false; line.len()];
    if let Some(run) = list_marker_run(line, marker) {
        literal[run].fill(true);
    }
    for (open, close) in emphasis_spans(line, marker) {
        literal[open].fill(true);
        literal[close].fill(true);
    }

    let mut output = String::with_capacity(line.len() + 8);
    for (index, ch) in line.char_indices() {
        if ch == marker_char && !literal[index] {
            output.push('\\');
        }
        output.push(ch);
    }
    output
}

/// Byte range of a list-marker run at the start of `line`
///
/// Matches optional leading whitespace, one or more `marker` characters, then
/// a whitespace character. The returned range covers the marker run only.
///
/// ```rust
/// use terradoc_sanitizer::escape::list_marker_run;
///
/// assert_eq!(list_marker_run("  * item", b'*'), Some(2..3));
/// assert_eq!(list_marker_run("*item", b'*'), None);
/// ```
pub fn list_marker_run(line: &str, marker: u8) -> Option<Range<usize>> {
    let bytes = line.as_bytes();
    let start = run_end(bytes, 0, is_space);
    let end = run_end(bytes, start, |b| b == marker);

    if end > start && bytes.get(end).copied().is_some_and(is_space) {
        Some(start..end)
    } else {
        None
    }
}

/// Opening and closing delimiter runs of every emphasis span in `line`
///
/// Spans are found left to right without overlap. The wrapped text may
/// contain spaces but not the marker. A span consumes the
/// whitespace that follows its closing run, so two spans separated by a single
/// space only match once.
///
/// ```rust
/// use terradoc_sanitizer::escape::emphasis_spans;
///
/// assert_eq!(emphasis_spans("a **bold** b", b'*'), vec![(2..4, 8..10)]);
/// assert_eq!(emphasis_spans("a *two words* b", b'*'), vec![(2..3, 12..13)]);
/// assert!(emphasis_spans("a **b** c", b'*').is_empty());
/// ```
pub fn emphasis_spans(line: &str, marker: u8) -> Vec<(Range<usize>, Range<usize>)> {
    let mut spans = Vec::new();
    let mut position = 0;

    while position < line.len() {
        match emphasis_span_at(line, position, marker) {
            Some((open, close)) => {
                position = close.end + 1;
                spans.push((open, close));
            }
            None => position += 1,
        }
    }

    spans
}

/// Match an emphasis span whose leading whitespace sits at `start`
fn emphasis_span_at(line: &str, start: usize, marker: u8) -> Option<(Range<usize>, Range<usize>)> {
    let bytes = line.as_bytes();
    if !is_space(*bytes.get(start)?) {
        return None;
    }

    let open = (start + 1)..run_end(bytes, start + 1, |b| b == marker);
    if open.is_empty() {
        return None;
    }

    let body_end = run_end(bytes, open.end, |b| b != marker);
    let body = &line[open.end..body_end];
    if body.chars().count() < 2
        || body.as_bytes().first().copied().is_some_and(is_space)
        || body.as_bytes().last().copied().is_some_and(is_space)
    {
        return None;
    }

    let close = body_end..run_end(bytes, body_end, |b| b == marker);
    if close.is_empty() || !is_space(*bytes.get(close.end)?) {
        return None;
    }

    Some((open, close))
}

/// Escape a single identifier token
///
/// Identifiers are not prose: every `_` and `*` is escaped when Markdown
/// character escaping is active, with no list or emphasis exceptions and no
/// inline-code handling.
pub fn escape_identifier(identifier: &str, settings: &Settings) -> String {
    if !settings.emphasis_escaped() {
        return identifier.to_string();
    }

    let mut output = String::with_capacity(identifier.len() + 4);
    for ch in identifier.chars() {
        if ch.is_ascii() && EMPHASIS_MARKERS.contains(&(ch as u8)) {
            output.push('\\');
        }
        output.push(ch);
    }
    output
}
