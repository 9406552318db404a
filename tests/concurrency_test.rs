//! Concurrency Tests
//!
//! The sanitizer holds no shared mutable state, so concurrent calls with
//! different settings must produce exactly what sequential calls produce.

use std::sync::Arc;
use std::thread;
use terradoc_sanitizer::{Format, Sanitizer, Settings, finalize};

const DESCRIPTIONS: [&str; 6] = [
    "Example of 'foo_bar' module in `foo_bar.tf`.",
    "lorem | ipsum |dolor",
    "line one\n\nline two",
    "See https://www.foo_bar.com/ for *details*",
    "Usage:\n```hcl\nfoo = \"a|b\"\n```\n",
    "",
];

fn render(sanitizer: &Sanitizer) -> Vec<String> {
    DESCRIPTIONS
        .iter()
        .flat_map(|text| {
            [
                sanitizer.field(text),
                sanitizer.section(text),
                sanitizer.anchor("input", text),
                finalize(&format!("{}\n\n\n", sanitizer.document(text))),
            ]
        })
        .collect()
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let sanitizers: Vec<Sanitizer> = Format::ALL
        .iter()
        .flat_map(|&format| {
            [
                Sanitizer::for_format(format, Settings::default()),
                Sanitizer::for_format(format, Settings::default().with_escape_characters(false)),
                Sanitizer::for_format(format, Settings::default().with_html(false)),
            ]
        })
        .collect();

    let expected: Vec<Vec<String>> = sanitizers.iter().map(render).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let sanitizers = sanitizers.clone();
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for round in 0..25 {
                    // Each worker walks the settings in a different order
                    let index = (worker * 7 + round) % sanitizers.len();
                    assert_eq!(render(&sanitizers[index]), expected[index]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_shared_sanitizer_across_scoped_threads() {
    let sanitizer = Sanitizer::for_format(Format::MarkdownTable, Settings::default());
    let header_settings = Settings::default();

    thread::scope(|scope| {
        let table = scope.spawn(|| sanitizer.table("a_b\nc|d"));
        let header = scope.spawn(|| sanitizer.section("a_b\nc|d"));
        let document = scope.spawn(|| sanitizer.document("a_b\nc|d"));

        assert_eq!(table.join().unwrap(), "a\\_b<br>c\\|d");
        assert_eq!(header.join().unwrap(), "a\\_b  \nc|d");
        assert_eq!(document.join().unwrap(), "a\\_b  \nc\\|d");
    });

    // Deriving header settings never touched the shared value
    assert!(sanitizer.settings().escape_pipe);
    assert!(header_settings.escape_pipe);
}
