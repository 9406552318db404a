#![no_main]

use libfuzzer_sys::fuzz_target;
use terradoc_sanitizer::{Format, Sanitizer, Settings};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    let base = Settings::default()
        .with_escape_characters(flags & 1 != 0)
        .with_escape_pipe(flags & 2 != 0)
        .with_html(flags & 4 != 0)
        .with_show_anchor(flags & 8 != 0);

    for format in Format::ALL {
        let sanitizer = Sanitizer::for_format(format, base);
        let table = sanitizer.table(text);
        let _ = sanitizer.document(text);
        let _ = sanitizer.section(text);
        let _ = sanitizer.anchor("input", text);

        if format == Format::MarkdownTable && !text.is_empty() {
            assert!(!table.contains('\n'));
        }
    }
});
