//! Splitting text into prose and verbatim spans
//!
//! User-authored descriptions mix free text with fenced code blocks. Only the
//! free text may be escaped or reflowed, so every sanitize call starts by
//! splitting its input on the fence delimiter into an ordered list of
//! [`Segment`]s.
//!
//! # Classification
//!
//! The first piece is [`SegmentKind::Verbatim`] when the input starts with the
//! delimiter and [`SegmentKind::Prose`] otherwise; every following piece flips
//! the kind. Empty pieces (two delimiters in a row, or a delimiter at either end)
//! are dropped without flipping, so the emitted kinds strictly alternate.
//!
//! An unterminated fence is not an error. The trailing piece keeps the kind the
//! alternation gives it, which means everything after an odd fence is verbatim.
//!
//! ```rust
//! use terradoc_sanitizer::segment::{segment, SegmentKind};
//!
//! let segments = segment("intro\n```\nlet x = 1;\n```\noutro");
//! let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();
//! assert_eq!(kinds, [SegmentKind::Prose, SegmentKind::Verbatim, SegmentKind::Prose]);
//! assert_eq!(segments[1].text, "\nlet x = 1;\n");
//! ```

/// Fenced code block delimiter
pub const FENCE: &str = "```";

/// Inline code span delimiter
pub const INLINE_CODE: &str = "`";

/// Kind of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Free text, subject to escaping and line-structure rules
    Prose,
    /// Code between delimiters, passed through unchanged
    Verbatim,
}

impl SegmentKind {
    fn flip(self) -> Self {
        match self {
            SegmentKind::Prose => SegmentKind::Verbatim,
            SegmentKind::Verbatim => SegmentKind::Prose,
        }
    }
}

/// A contiguous span of input text with its classification
///
/// Borrows from the input; the delimiters themselves are not part of any
/// segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Prose or verbatim
    pub kind: SegmentKind,
    /// Span contents without delimiters
    pub text: &'a str,
}

impl Segment<'_> {
    /// Whether this segment is prose
    pub fn is_prose(&self) -> bool {
        self.kind == SegmentKind::Prose
    }
}

/// Split `input` on fenced code block delimiters
pub fn segment(input: &str) -> Vec<Segment<'_>> {
    segment_with(input, FENCE)
}

/// Split `input` on an arbitrary delimiter
///
/// Used with [`FENCE`] for code blocks and with [`INLINE_CODE`] for inline
/// code spans inside prose.
///
/// # Arguments
///
/// * `input` - Text to split
/// * `delimiter` - Non-empty delimiter string
///
/// # Returns
///
/// Ordered segments; concatenating their texts yields `input` with every
/// delimiter occurrence removed.
pub fn segment_with<'a>(input: &'a str, delimiter: &str) -> Vec<Segment<'a>> {
    if delimiter.is_empty() {
        return if input.is_empty() {
            Vec::new()
        } else {
            vec![Segment {
                kind: SegmentKind::Prose,
                text: input,
            }]
        };
    }

    let mut kind = if input.starts_with(delimiter) {
        SegmentKind::Verbatim
    } else {
        SegmentKind::Prose
    };

    let mut segments = Vec::new();
    for piece in input.split(delimiter) {
        if piece.is_empty() {
            continue;
        }
        segments.push(Segment { kind, text: piece });
        kind = kind.flip();
    }

    log::trace!(
        "split {} bytes on {:?} into {} segments",
        input.len(),
        delimiter,
        segments.len()
    );
    segments
}

/// Apply `prose` to prose segments and `verbatim` to verbatim segments, then
/// concatenate the results in order
///
/// The delimiter is not re-inserted; `verbatim` is responsible for wrapping
/// its segment however the output target requires.
pub fn map_segments<P, V>(input: &str, delimiter: &str, mut prose: P, mut verbatim: V) -> String
where
    P: FnMut(&str) -> String,
    V: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(input.len());
    for segment in segment_with(input, delimiter) {
        match segment.kind {
            SegmentKind::Prose => output.push_str(&prose(segment.text)),
            SegmentKind::Verbatim => output.push_str(&verbatim(segment.text)),
        }
    }
    output
}

/// Apply `prose` to prose pieces and keep everything else byte-identical,
/// delimiters included
///
/// Classification follows [`segment_with`]. Unlike [`map_segments`], an
/// unbalanced or doubled delimiter is reproduced exactly as written.
pub fn map_prose<P>(input: &str, delimiter: &str, mut prose: P) -> String
where
    P: FnMut(&str) -> String,
{
    if delimiter.is_empty() {
        return prose(input);
    }

    let mut kind = if input.starts_with(delimiter) {
        SegmentKind::Verbatim
    } else {
        SegmentKind::Prose
    };

    let mut output = String::with_capacity(input.len());
    for (index, piece) in input.split(delimiter).enumerate() {
        if index > 0 {
            output.push_str(delimiter);
        }
        if piece.is_empty() {
            continue;
        }
        match kind {
            SegmentKind::Prose => output.push_str(&prose(piece)),
            SegmentKind::Verbatim => output.push_str(piece),
        }
        kind = kind.flip();
    }
    output
}
