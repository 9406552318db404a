//! Sanitization pipeline and public function surface
//!
//! This module composes the individual passes into the functions a template
//! renderer binds per field:
//!
//! | Function                       | Used for                         | Context  |
//! |--------------------------------|----------------------------------|----------|
//! | [`sanitize_for_document`]      | descriptions in section layouts  | Document |
//! | [`sanitize_for_table`]         | descriptions inside table cells  | Table    |
//! | [`sanitize_header_or_footer`]  | module header and footer text    | Document, pipes kept |
//! | [`crate::anchor::name`]        | identifiers                      | n/a      |
//! | [`crate::anchor::anchor`]      | identifiers with anchors         | n/a      |
//! | [`crate::finalize::finalize`]  | the assembled document, once     | n/a      |
//!
//! # Pipeline
//!
//! For every sanitize call:
//!
//! 1. Empty input short-circuits to [`NOT_AVAILABLE`].
//! 2. The input is split on code fences ([`crate::segment`]).
//! 3. Each prose segment is escaped ([`crate::escape`]), has its URLs
//!    restored ([`crate::urls`]) and its line structure normalized
//!    ([`crate::breaks`]).
//! 4. Each verbatim segment is re-wrapped for the output target without
//!    touching its contents (see [`render_verbatim`]).
//! 5. Table output is trimmed as a whole.
//!
//! All functions are pure: they read a [`Settings`] value and return a new
//! `String`. Concurrent use from any number of threads needs no locking.
//!
//! # Examples
//!
//! ```rust
//! use terradoc_sanitizer::sanitizer::{sanitize_for_document, sanitize_for_table};
//! use terradoc_sanitizer::settings::Settings;
//!
//! let settings = Settings::default();
//! let text = "Tags for `aws_instance`.\n\nSee https://docs.example.com/tag_policy";
//!
//! assert_eq!(
//!     sanitize_for_table(text, &settings),
//!     "Tags for `aws_instance`.<br><br>See https://docs.example.com/tag_policy"
//! );
//! assert_eq!(sanitize_for_document(text, &settings), text);
//! assert_eq!(sanitize_for_document("", &settings), "n/a");
//! ```

use crate::breaks::{BREAK_MARKER, normalize_breaks};
use crate::escape::escape;
use crate::segment::{FENCE, map_segments};
use crate::settings::{Dialect, Format, RenderContext, Settings};
use crate::urls::normalize_urls;

/// Placeholder rendered for empty fields
pub const NOT_AVAILABLE: &str = "n/a";

/// Sanitize free text for document prose
///
/// Runs the full pipeline in [`RenderContext::Document`], whatever context the
/// given settings carry.
pub fn sanitize_for_document(text: &str, settings: &Settings) -> String {
    log::debug!("sanitize document field ({} bytes)", text.len());
    sanitize(text, settings.with_context(RenderContext::Document))
}

/// Sanitize free text for a single table cell
///
/// Runs the full pipeline in [`RenderContext::Table`]: pipes are always
/// escaped and the result contains no raw newlines outside AsciiDoc source
/// blocks.
pub fn sanitize_for_table(text: &str, settings: &Settings) -> String {
    log::debug!("sanitize table field ({} bytes)", text.len());
    sanitize(text, settings.with_context(RenderContext::Table))
}

/// Sanitize a module header or footer
///
/// Same as [`sanitize_for_document`] with pipe escaping turned off, since
/// headers and footers are free text, never table cells. The caller's
/// settings are not modified.
pub fn sanitize_header_or_footer(text: &str, settings: &Settings) -> String {
    log::debug!("sanitize header/footer ({} bytes)", text.len());
    sanitize(
        text,
        settings
            .with_context(RenderContext::Document)
            .with_escape_pipe(false),
    )
}

/// Run the pipeline for fully resolved settings
fn sanitize(text: &str, settings: Settings) -> String {
    if text.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    let output = map_segments(
        text,
        FENCE,
        |prose| sanitize_prose(prose, &settings),
        |code| render_verbatim(code, &settings),
    );

    match settings.context {
        RenderContext::Table => output.trim().to_string(),
        RenderContext::Document => output,
    }
}

/// Escape, restore URLs and normalize line structure of one prose segment
fn sanitize_prose(prose: &str, settings: &Settings) -> String {
    let escaped = escape(prose, settings);
    let restored = normalize_urls(&escaped, settings);
    normalize_breaks(&restored, settings)
}

/// Re-wrap a verbatim segment for the output target
///
/// # Output Format
///
/// - Document (both dialects): `` ```{code}``` ``, adding a newline before the
///   closing fence when the code does not end with one. The code is kept
///   byte for byte.
/// - Markdown table with HTML: `<pre>{code}</pre>` with the code trimmed,
///   newlines turned into `<br>` and carriage returns dropped.
/// - Markdown table without HTML: `` ```{code}``` `` with the code trimmed and
///   line breaks removed, padded by one space on each side.
/// - AsciiDoc table: a `[source]` listing block.
pub fn render_verbatim(code: &str, settings: &Settings) -> String {
    match (settings.context, settings.dialect) {
        (RenderContext::Document, _) => {
            let closing_break = if code.ends_with('\n') { "" } else { "\n" };
            format!("{FENCE}{code}{closing_break}{FENCE}")
        }
        (RenderContext::Table, Dialect::Markdown) => {
            let code = code.trim().replace('\r', "");
            if settings.html {
                format!("<pre>{}</pre>", code.replace('\n', BREAK_MARKER))
            } else {
                format!(" {FENCE}{}{FENCE} ", code.replace('\n', ""))
            }
        }
        (RenderContext::Table, Dialect::AsciiDoc) => {
            format!("[source]\n----\n{code}\n----")
        }
    }
}

/// Sanitizer bound to a fixed set of settings
///
/// Convenience wrapper around the free functions for callers that render many
/// fields with the same configuration. It holds no mutable state, is `Copy`,
/// and can be shared freely between threads.
///
/// # Usage
///
/// ```rust
/// use terradoc_sanitizer::sanitizer::Sanitizer;
/// use terradoc_sanitizer::settings::{Format, Settings};
///
/// let sanitizer = Sanitizer::for_format(Format::MarkdownTable, Settings::default());
///
/// assert_eq!(sanitizer.table("lorem | ipsum"), "lorem \\| ipsum");
/// assert_eq!(sanitizer.name("foo_bar"), "foo\\_bar");
/// assert_eq!(sanitizer.finalize("# Title  \n\n\n"), "# Title");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sanitizer {
    settings: Settings,
}

impl Sanitizer {
    /// Create a sanitizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sanitizer with custom settings
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create a sanitizer for an output format
    ///
    /// The format fixes dialect and context; everything else comes from `base`.
    pub fn for_format(format: Format, base: Settings) -> Self {
        Self::with_settings(format.settings(base))
    }

    /// Settings this sanitizer applies
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// See [`sanitize_for_document`]
    pub fn document(&self, text: &str) -> String {
        sanitize_for_document(text, &self.settings)
    }

    /// See [`sanitize_for_table`]
    pub fn table(&self, text: &str) -> String {
        sanitize_for_table(text, &self.settings)
    }

    /// See [`sanitize_header_or_footer`]
    pub fn section(&self, text: &str) -> String {
        sanitize_header_or_footer(text, &self.settings)
    }

    /// Sanitize a field for the context carried by the settings
    pub fn field(&self, text: &str) -> String {
        match self.settings.context {
            RenderContext::Table => self.table(text),
            RenderContext::Document => self.document(text),
        }
    }

    /// See [`crate::anchor::name`]
    pub fn name(&self, identifier: &str) -> String {
        crate::anchor::name(identifier, &self.settings)
    }

    /// See [`crate::anchor::anchor`]
    pub fn anchor(&self, section_kind: &str, identifier: &str) -> String {
        crate::anchor::anchor(section_kind, identifier, &self.settings)
    }

    /// See [`crate::finalize::finalize`]
    pub fn finalize(&self, document: &str) -> String {
        crate::finalize::finalize(document)
    }
}
