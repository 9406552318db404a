//! Sanitizer settings and output format adapters
//!
//! A [`Settings`] value is an immutable description of one sanitize call: which
//! characters to escape, whether anchors are generated, and which markup
//! dialect and render context the text ends up in. Call sites that need a
//! variation (for example a header that must not escape pipes) derive a copy
//! with one of the `with_*` methods rather than mutating a shared value.
//!
//! # Examples
//!
//! ```rust
//! use terradoc_sanitizer::settings::{Dialect, RenderContext, Settings};
//!
//! let base = Settings::default();
//! let header = base.with_escape_pipe(false);
//!
//! assert!(base.escape_pipe);
//! assert!(!header.escape_pipe);
//! assert_eq!(header.context, RenderContext::Document);
//! assert_eq!(header.dialect, Dialect::Markdown);
//! ```

use crate::error::{Result, SanitizeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target markup dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Markdown (CommonMark / GFM tables)
    #[default]
    Markdown,
    /// AsciiDoc
    #[serde(alias = "adoc")]
    AsciiDoc,
}

impl Dialect {
    /// Whether `_` and `*` carry emphasis meaning that must be escaped
    pub fn escapes_emphasis(self) -> bool {
        matches!(self, Dialect::Markdown)
    }
}

impl FromStr for Dialect {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Dialect::Markdown),
            "asciidoc" | "adoc" => Ok(Dialect::AsciiDoc),
            _ => Err(SanitizeError::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Markdown => write!(f, "markdown"),
            Dialect::AsciiDoc => write!(f, "asciidoc"),
        }
    }
}

/// Where the sanitized text is placed in the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
    /// A single table cell: no raw newlines, breaks become inline markers
    Table,
    /// Free-flowing prose: native paragraphs and hard line breaks
    #[default]
    Document,
}

impl FromStr for RenderContext {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "tbl" => Ok(RenderContext::Table),
            "document" | "doc" => Ok(RenderContext::Document),
            _ => Err(SanitizeError::UnknownContext(s.to_string())),
        }
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderContext::Table => write!(f, "table"),
            RenderContext::Document => write!(f, "document"),
        }
    }
}

/// Per-call sanitizer settings
///
/// All fields are public and the type is `Copy`; the sanitizer functions only
/// ever read it.
///
/// # Defaults
///
/// - `escape_characters`: `true`
/// - `escape_pipe`: `true`
/// - `show_anchor`: `true`
/// - `html`: `true`
/// - `context`: [`RenderContext::Document`]
/// - `dialect`: [`Dialect::Markdown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Escape `_` and `*` outside code spans (Markdown only)
    pub escape_characters: bool,
    /// Escape `|` outside code spans even in document context
    pub escape_pipe: bool,
    /// Generate anchors and cross-references for names
    pub show_anchor: bool,
    /// Allow inline HTML (`<br>`, `<pre>`) in table cells
    pub html: bool,
    /// Table cell or document prose
    pub context: RenderContext,
    /// Markdown or AsciiDoc
    pub dialect: Dialect,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            escape_characters: true,
            escape_pipe: true,
            show_anchor: true,
            html: true,
            context: RenderContext::Document,
            dialect: Dialect::Markdown,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML table
    ///
    /// Missing keys keep their default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terradoc_sanitizer::settings::{Dialect, Settings};
    ///
    /// let settings = Settings::from_toml_str("dialect = \"asciidoc\"\nhtml = false\n").unwrap();
    /// assert_eq!(settings.dialect, Dialect::AsciiDoc);
    /// assert!(!settings.html);
    /// assert!(settings.escape_characters);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(source)?;
        Ok(settings)
    }

    /// Copy with a different render context
    pub fn with_context(self, context: RenderContext) -> Self {
        Self { context, ..self }
    }

    /// Copy with a different dialect
    pub fn with_dialect(self, dialect: Dialect) -> Self {
        Self { dialect, ..self }
    }

    /// Copy with character escaping toggled
    pub fn with_escape_characters(self, escape_characters: bool) -> Self {
        Self {
            escape_characters,
            ..self
        }
    }

    /// Copy with pipe escaping toggled
    pub fn with_escape_pipe(self, escape_pipe: bool) -> Self {
        Self {
            escape_pipe,
            ..self
        }
    }

    /// Copy with anchor generation toggled
    pub fn with_show_anchor(self, show_anchor: bool) -> Self {
        Self {
            show_anchor,
            ..self
        }
    }

    /// Copy with inline HTML toggled
    pub fn with_html(self, html: bool) -> Self {
        Self { html, ..self }
    }

    /// Whether `|` must be escaped for these settings
    ///
    /// Table cells always escape pipes in Markdown and AsciiDoc alike. In
    /// document prose only Markdown honours `escape_pipe`; AsciiDoc prose has
    /// no use for it.
    pub fn pipes_escaped(&self) -> bool {
        match (self.context, self.dialect) {
            (RenderContext::Table, _) => true,
            (RenderContext::Document, Dialect::Markdown) => self.escape_pipe,
            (RenderContext::Document, Dialect::AsciiDoc) => false,
        }
    }

    /// Whether `_` and `*` must be escaped for these settings
    pub fn emphasis_escaped(&self) -> bool {
        self.escape_characters && self.dialect.escapes_emphasis()
    }
}

/// Documentation output formats built on the sanitizer
///
/// Each format is an adapter fixing the dialect and render context of the
/// settings it hands to the sanitizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Markdown with inputs/outputs rendered as tables
    MarkdownTable,
    /// Markdown with inputs/outputs rendered as sections
    MarkdownDocument,
    /// AsciiDoc with inputs/outputs rendered as tables
    AsciidocTable,
    /// AsciiDoc with inputs/outputs rendered as sections
    AsciidocDocument,
}

impl Format {
    /// All formats, in registration order
    pub const ALL: [Format; 4] = [
        Format::MarkdownTable,
        Format::MarkdownDocument,
        Format::AsciidocTable,
        Format::AsciidocDocument,
    ];

    /// Dialect rendered by this format
    pub fn dialect(self) -> Dialect {
        match self {
            Format::MarkdownTable | Format::MarkdownDocument => Dialect::Markdown,
            Format::AsciidocTable | Format::AsciidocDocument => Dialect::AsciiDoc,
        }
    }

    /// Render context used for field values in this format
    pub fn context(self) -> RenderContext {
        match self {
            Format::MarkdownTable | Format::AsciidocTable => RenderContext::Table,
            Format::MarkdownDocument | Format::AsciidocDocument => RenderContext::Document,
        }
    }

    /// Derive settings for this format from user-level base settings
    pub fn settings(self, base: Settings) -> Settings {
        base.with_dialect(self.dialect()).with_context(self.context())
    }

    /// Canonical name of this format
    pub fn name(self) -> &'static str {
        match self {
            Format::MarkdownTable => "markdown table",
            Format::MarkdownDocument => "markdown document",
            Format::AsciidocTable => "asciidoc table",
            Format::AsciidocDocument => "asciidoc document",
        }
    }
}

impl FromStr for Format {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self> {
        let words: Vec<String> = s.split_whitespace().map(str::to_ascii_lowercase).collect();
        let [dialect, context] = words.as_slice() else {
            return Err(SanitizeError::UnknownFormat(s.to_string()));
        };
        let dialect = dialect
            .parse::<Dialect>()
            .map_err(|_| SanitizeError::UnknownFormat(s.to_string()))?;
        let context = context
            .parse::<RenderContext>()
            .map_err(|_| SanitizeError::UnknownFormat(s.to_string()))?;

        Ok(match (dialect, context) {
            (Dialect::Markdown, RenderContext::Table) => Format::MarkdownTable,
            (Dialect::Markdown, RenderContext::Document) => Format::MarkdownDocument,
            (Dialect::AsciiDoc, RenderContext::Table) => Format::AsciidocTable,
            (Dialect::AsciiDoc, RenderContext::Document) => Format::AsciidocDocument,
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
