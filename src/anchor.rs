//! Display names and cross-reference anchors
//!
//! Inputs, outputs, resources and the like are listed by name, optionally with
//! an anchor so a table of contents can link to them. The anchor target is the
//! raw `{section}_{identifier}` slug; the visible text and the fragment that
//! links to it are escaped the same way the renderer escapes headings, so the
//! link resolves against the generated heading IDs.

use crate::escape::escape_identifier;
use crate::settings::{Dialect, Settings};

/// Sanitized display form of an identifier
///
/// Applies blanket character escaping only; identifiers are single tokens
/// and get none of the prose rules.
pub fn name(identifier: &str, settings: &Settings) -> String {
    escape_identifier(identifier, settings)
}

/// Display name plus, when anchors are enabled, a link target and reference
///
/// # Arguments
///
/// * `section_kind` - Section the identifier belongs to (`input`, `output`, ...)
/// * `identifier` - Raw identifier
/// * `settings` - Escaping switches, anchor switch and dialect
///
/// # Output Format
///
/// - anchors disabled: same as [`name`]
/// - Markdown: `<a name="{slug}"></a> [{name}](#{escaped slug})`
/// - AsciiDoc: `[[{slug}]] <<{slug},{name}>>`
///
/// # Examples
///
/// ```rust
/// use terradoc_sanitizer::anchor::anchor;
/// use terradoc_sanitizer::settings::{Dialect, Settings};
///
/// let settings = Settings::default();
/// assert_eq!(
///     anchor("input", "foo_bar", &settings),
///     "<a name=\"input_foo_bar\"></a> [foo\\_bar](#input\\_foo\\_bar)"
/// );
///
/// let asciidoc = settings.with_dialect(Dialect::AsciiDoc);
/// assert_eq!(
///     anchor("input", "foo_bar", &asciidoc),
///     "[[input_foo_bar]] <<input_foo_bar,foo_bar>>"
/// );
/// ```
pub fn anchor(section_kind: &str, identifier: &str, settings: &Settings) -> String {
    let display = name(identifier, settings);
    if !settings.show_anchor {
        return display;
    }

    let slug = format!("{section_kind}_{identifier}");
    let escaped_slug = name(&slug, settings);

    match settings.dialect {
        Dialect::Markdown => format!("<a name=\"{slug}\"></a> [{display}](#{escaped_slug})"),
        Dialect::AsciiDoc => format!("[[{escaped_slug}]] <<{escaped_slug},{display}>>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_escapes_identifier() {
        let settings = Settings::default();
        assert_eq!(name("foo_bar", &settings), "foo\\_bar");
        assert_eq!(name("plain", &settings), "plain");
    }

    #[test]
    fn test_name_without_escaping() {
        let settings = Settings::default().with_escape_characters(false);
        assert_eq!(name("foo_bar", &settings), "foo_bar");
    }

    #[test]
    fn test_markdown_anchor() {
        let settings = Settings::default();
        assert_eq!(
            anchor("input", "foo_bar", &settings),
            "<a name=\"input_foo_bar\"></a> [foo\\_bar](#input\\_foo\\_bar)"
        );
    }

    #[test]
    fn test_markdown_anchor_without_escaping() {
        let settings = Settings::default().with_escape_characters(false);
        assert_eq!(
            anchor("output", "vpc_id", &settings),
            "<a name=\"output_vpc_id\"></a> [vpc_id](#output_vpc_id)"
        );
    }

    #[test]
    fn test_anchor_disabled_matches_name() {
        let settings = Settings::default().with_show_anchor(false);
        assert_eq!(anchor("input", "foo_bar", &settings), name("foo_bar", &settings));

        let asciidoc = settings.with_dialect(Dialect::AsciiDoc);
        assert_eq!(anchor("input", "foo_bar", &asciidoc), "foo_bar");
    }

    #[test]
    fn test_asciidoc_anchor() {
        let settings = Settings::default().with_dialect(Dialect::AsciiDoc);
        assert_eq!(
            anchor("requirement", "aws", &settings),
            "[[requirement_aws]] <<requirement_aws,aws>>"
        );
    }
}
