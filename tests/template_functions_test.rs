//! Template Function Tests
//!
//! Drives the sanitizer the way a template engine does: functions are looked
//! up by name and called with positional string arguments.

use std::collections::HashMap;
use terradoc_sanitizer::{Dialect, SanitizeError, Settings, TemplateFunction};

fn registry() -> HashMap<&'static str, TemplateFunction> {
    TemplateFunction::ALL
        .into_iter()
        .map(|function| (function.name(), function))
        .collect()
}

fn call(name: &str, args: &[&str], settings: &Settings) -> Result<String, SanitizeError> {
    name.parse::<TemplateFunction>()?.call(args, settings)
}

#[test]
fn test_registry_is_complete() {
    let registry = registry();
    assert_eq!(registry.len(), 7);
    for name in [
        "sanitizeSection",
        "sanitizeDoc",
        "sanitizeMarkdownTbl",
        "sanitizeAsciidocTbl",
        "name",
        "anchorNameMarkdown",
        "anchorNameAsciidoc",
    ] {
        assert!(registry.contains_key(name), "{name} not registered");
    }
}

#[test]
fn test_arities() {
    let registry = registry();
    assert_eq!(registry["anchorNameMarkdown"].arity(), 2);
    assert_eq!(registry["anchorNameAsciidoc"].arity(), 2);
    assert_eq!(registry["sanitizeDoc"].arity(), 1);
    assert_eq!(registry["name"].arity(), 1);
}

#[test]
fn test_markdown_table_row() {
    let settings = Settings::default();
    let name = call("anchorNameMarkdown", &["output", "bucket_arn"], &settings).unwrap();
    let description = call("sanitizeMarkdownTbl", &["ARN of the bucket.\nWill be of format arn:aws:s3:::bucketname"], &settings).unwrap();

    assert_eq!(
        format!("| {name} | {description} |"),
        "| <a name=\"output_bucket_arn\"></a> [bucket\\_arn](#output\\_bucket\\_arn) | ARN of the bucket.<br>Will be of format arn:aws:s3:::bucketname |"
    );
}

#[test]
fn test_asciidoc_table_row() {
    let settings = Settings::default().with_dialect(Dialect::AsciiDoc);
    let name = call("anchorNameAsciidoc", &["input", "force_destroy"], &settings).unwrap();
    let description = call("sanitizeAsciidocTbl", &["Delete all objects | versions"], &settings).unwrap();

    assert_eq!(
        format!("|{name} |{description}"),
        "|[[input_force_destroy]] <<input_force_destroy,force_destroy>> |Delete all objects \\| versions"
    );
}

#[test]
fn test_anchors_disabled() {
    let settings = Settings::default().with_show_anchor(false);
    assert_eq!(
        call("anchorNameMarkdown", &["input", "force_destroy"], &settings).unwrap(),
        "force\\_destroy"
    );
    assert_eq!(
        call("anchorNameAsciidoc", &["input", "force_destroy"], &settings).unwrap(),
        "force_destroy"
    );
}

#[test]
fn test_section_and_doc() {
    let settings = Settings::default();
    let footer = "## Authors\n\nMaintained by | the_team";
    assert_eq!(
        call("sanitizeSection", &[footer], &settings).unwrap(),
        "## Authors\n\nMaintained by | the\\_team"
    );
    assert_eq!(
        call("sanitizeDoc", &[footer], &settings).unwrap(),
        "## Authors\n\nMaintained by \\| the\\_team"
    );
    assert_eq!(call("sanitizeSection", &[""], &settings).unwrap(), "n/a");
}

#[test]
fn test_errors() {
    let settings = Settings::default();

    let err = call("sanitizeYaml", &["x"], &settings).unwrap_err();
    assert_eq!(err.code(), 4);
    assert_eq!(err.to_string(), "unknown template function: sanitizeYaml");

    let err = call("name", &["a", "b"], &settings).unwrap_err();
    assert!(matches!(
        err,
        SanitizeError::ArgumentCount {
            function: "name",
            expected: 1,
            actual: 2
        }
    ));
}
