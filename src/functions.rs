//! Named functions exposed to the template engine
//!
//! Output templates call the sanitizer through a fixed set of function names.
//! [`TemplateFunction`] resolves those names and dispatches string arguments to
//! the matching pipeline entry point, fixing the dialect or context the
//! function name implies and taking everything else from the caller's
//! [`Settings`].
//!
//! | Name                  | Arguments            | Dispatches to |
//! |-----------------------|----------------------|---------------|
//! | `sanitizeSection`     | text                 | header/footer sanitizer |
//! | `sanitizeDoc`         | text                 | document sanitizer |
//! | `sanitizeMarkdownTbl` | text                 | table sanitizer, Markdown |
//! | `sanitizeAsciidocTbl` | text                 | table sanitizer, AsciiDoc |
//! | `name`                | identifier           | display name |
//! | `anchorNameMarkdown`  | section, identifier  | anchor, Markdown |
//! | `anchorNameAsciidoc`  | section, identifier  | anchor, AsciiDoc |
//!
//! ```rust
//! use terradoc_sanitizer::functions::TemplateFunction;
//! use terradoc_sanitizer::settings::Settings;
//!
//! let function: TemplateFunction = "sanitizeMarkdownTbl".parse()?;
//! let cell = function.call(&["first\nsecond | third"], &Settings::default())?;
//! assert_eq!(cell, "first<br>second \\| third");
//! # Ok::<(), terradoc_sanitizer::SanitizeError>(())
//! ```

use crate::anchor;
use crate::error::{Result, SanitizeError};
use crate::sanitizer::{sanitize_for_document, sanitize_for_table, sanitize_header_or_footer};
use crate::settings::{Dialect, Settings};
use std::fmt;
use std::str::FromStr;

/// A sanitizer function callable by name from an output template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFunction {
    /// Module header or footer, pipes kept
    SanitizeSection,
    /// Document prose
    SanitizeDoc,
    /// Markdown table cell
    SanitizeMarkdownTbl,
    /// AsciiDoc table cell
    SanitizeAsciidocTbl,
    /// Escaped identifier
    Name,
    /// Identifier with a Markdown anchor
    AnchorNameMarkdown,
    /// Identifier with an AsciiDoc anchor
    AnchorNameAsciidoc,
}

impl TemplateFunction {
    /// Every function, in registration order
    pub const ALL: [TemplateFunction; 7] = [
        TemplateFunction::SanitizeSection,
        TemplateFunction::SanitizeDoc,
        TemplateFunction::SanitizeMarkdownTbl,
        TemplateFunction::SanitizeAsciidocTbl,
        TemplateFunction::Name,
        TemplateFunction::AnchorNameMarkdown,
        TemplateFunction::AnchorNameAsciidoc,
    ];

    /// Name the template engine binds this function under
    pub fn name(self) -> &'static str {
        match self {
            TemplateFunction::SanitizeSection => "sanitizeSection",
            TemplateFunction::SanitizeDoc => "sanitizeDoc",
            TemplateFunction::SanitizeMarkdownTbl => "sanitizeMarkdownTbl",
            TemplateFunction::SanitizeAsciidocTbl => "sanitizeAsciidocTbl",
            TemplateFunction::Name => "name",
            TemplateFunction::AnchorNameMarkdown => "anchorNameMarkdown",
            TemplateFunction::AnchorNameAsciidoc => "anchorNameAsciidoc",
        }
    }

    /// Number of string arguments the function takes
    pub fn arity(self) -> usize {
        match self {
            TemplateFunction::AnchorNameMarkdown | TemplateFunction::AnchorNameAsciidoc => 2,
            _ => 1,
        }
    }

    /// Invoke the function
    ///
    /// # Arguments
    ///
    /// * `args` - Positional string arguments, exactly [`arity`](Self::arity) of them
    /// * `settings` - Caller settings; dialect and context are overridden where
    ///   the function name fixes them
    ///
    /// # Errors
    ///
    /// [`SanitizeError::ArgumentCount`] when `args` has the wrong length.
    pub fn call(self, args: &[&str], settings: &Settings) -> Result<String> {
        if args.len() != self.arity() {
            return Err(SanitizeError::ArgumentCount {
                function: self.name(),
                expected: self.arity(),
                actual: args.len(),
            });
        }
        log::debug!("template function {}", self.name());

        let output = match (self, args) {
            (TemplateFunction::SanitizeSection, [text]) => {
                sanitize_header_or_footer(text, settings)
            }
            (TemplateFunction::SanitizeDoc, [text]) => sanitize_for_document(text, settings),
            (TemplateFunction::SanitizeMarkdownTbl, [text]) => {
                sanitize_for_table(text, &settings.with_dialect(Dialect::Markdown))
            }
            (TemplateFunction::SanitizeAsciidocTbl, [text]) => {
                sanitize_for_table(text, &settings.with_dialect(Dialect::AsciiDoc))
            }
            (TemplateFunction::Name, [identifier]) => anchor::name(identifier, settings),
            (TemplateFunction::AnchorNameMarkdown, [section, identifier]) => anchor::anchor(
                section,
                identifier,
                &settings.with_dialect(Dialect::Markdown),
            ),
            (TemplateFunction::AnchorNameAsciidoc, [section, identifier]) => anchor::anchor(
                section,
                identifier,
                &settings.with_dialect(Dialect::AsciiDoc),
            ),
            _ => {
                return Err(SanitizeError::ArgumentCount {
                    function: self.name(),
                    expected: self.arity(),
                    actual: args.len(),
                });
            }
        };

        Ok(output)
    }
}

impl FromStr for TemplateFunction {
    type Err = SanitizeError;

    fn from_str(name: &str) -> Result<Self> {
        TemplateFunction::ALL
            .into_iter()
            .find(|function| function.name() == name)
            .ok_or_else(|| SanitizeError::UnknownFunction(name.to_string()))
    }
}

impl fmt::Display for TemplateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for function in TemplateFunction::ALL {
            assert_eq!(function.name().parse::<TemplateFunction>().ok(), Some(function));
            assert_eq!(function.to_string(), function.name());
        }
    }

    #[test]
    fn test_unknown_function() {
        let err = "sanitizeEverything".parse::<TemplateFunction>().unwrap_err();
        assert!(matches!(err, SanitizeError::UnknownFunction(ref name) if name == "sanitizeEverything"));
        assert!("SanitizeDoc".parse::<TemplateFunction>().is_err());
    }

    #[test]
    fn test_arity_is_checked() {
        let err = TemplateFunction::AnchorNameMarkdown
            .call(&["input"], &Settings::default())
            .unwrap_err();
        assert_eq!(err.code(), 5);
        assert_eq!(
            err.to_string(),
            "anchorNameMarkdown expects 2 argument(s), got 1"
        );

        assert!(TemplateFunction::Name.call(&[], &Settings::default()).is_err());
        assert!(TemplateFunction::SanitizeDoc.call(&["a", "b"], &Settings::default()).is_err());
    }

    #[test]
    fn test_dialect_is_fixed_by_name() {
        let asciidoc = Settings::default().with_dialect(Dialect::AsciiDoc);
        let markdown = TemplateFunction::AnchorNameMarkdown
            .call(&["output", "vpc_id"], &asciidoc)
            .unwrap();
        assert_eq!(markdown, "<a name=\"output_vpc_id\"></a> [vpc\\_id](#output\\_vpc\\_id)");

        let asciidoc_anchor = TemplateFunction::AnchorNameAsciidoc
            .call(&["output", "vpc_id"], &Settings::default())
            .unwrap();
        assert_eq!(asciidoc_anchor, "[[output_vpc_id]] <<output_vpc_id,vpc_id>>");
    }

    #[test]
    fn test_table_functions() {
        let settings = Settings::default();
        assert_eq!(
            TemplateFunction::SanitizeMarkdownTbl.call(&["a_b\nc"], &settings).unwrap(),
            "a\\_b<br>c"
        );
        assert_eq!(
            TemplateFunction::SanitizeAsciidocTbl.call(&["a_b\nc"], &settings).unwrap(),
            "a_b<br>c"
        );
        assert_eq!(
            TemplateFunction::SanitizeMarkdownTbl.call(&[""], &settings).unwrap(),
            "n/a"
        );
    }

    #[test]
    fn test_section_keeps_pipes() {
        let settings = Settings::default();
        assert_eq!(
            TemplateFunction::SanitizeSection.call(&["a | b"], &settings).unwrap(),
            "a | b"
        );
        assert_eq!(
            TemplateFunction::SanitizeDoc.call(&["a | b"], &settings).unwrap(),
            "a \\| b"
        );
    }
}
