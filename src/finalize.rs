//! Whole-document cleanup after template substitution
//!
//! Templates leave stray whitespace behind: fields that rendered empty, lines
//! padded by indentation, runs of blank lines where optional sections were
//! skipped. [`finalize`] runs once over the assembled document and applies, in
//! order:
//!
//! 1. **Trailing whitespace**: removed from every line, except that a line with
//!    content ending in two or more spaces before a newline is a Markdown hard
//!    break and is kept as written. Whitespace-only lines become empty.
//! 2. **Orphaned hard breaks**: a line consisting of exactly two spaces is a
//!    hard break with nothing before it and is deleted outright.
//! 3. **Blank lines**: three or more consecutive line breaks collapse to two,
//!    leaving at most one blank line between blocks.
//! 4. **Document end**: if the document ends in two or more line breaks they are
//!    all removed, together with trailing whitespace on the then-last line.
//!
//! CRLF line endings are kept as they are. The pass is idempotent:
//! `finalize(&finalize(x)) == finalize(x)` for every input.
//!
//! # Examples
//!
//! ```rust
//! use terradoc_sanitizer::finalize::finalize;
//!
//! let rendered = "# Title \n\n\n\nSome text  \nmore\n  \n\n";
//! assert_eq!(finalize(rendered), "# Title\n\nSome text  \nmore");
//! ```

/// Markdown hard line break suffix
const HARD_BREAK: &str = "  ";

/// Clean up a fully rendered document
pub fn finalize(document: &str) -> String {
    let trimmed = trim_lines(document);
    let collapsed = collapse_blank_lines(&trimmed);
    trim_document_end(collapsed)
}

/// Steps 1 and 2: per-line trailing whitespace
fn trim_lines(document: &str) -> String {
    let lines: Vec<&str> = document.split('\n').collect();
    let last = lines.len() - 1;
    let mut output = String::with_capacity(document.len());
    let mut first = true;

    for (index, line) in lines.iter().enumerate() {
        let (content, line_ending) = match line.strip_suffix('\r') {
            Some(content) => (content, "\r"),
            None => (*line, ""),
        };
        let body = content.trim_end();
        let hard_break = index < last && content.ends_with(HARD_BREAK);

        if hard_break && content == HARD_BREAK {
            continue;
        }

        if !first {
            output.push('\n');
        }
        first = false;

        if hard_break && !body.is_empty() {
            output.push_str(content);
        } else {
            output.push_str(body);
        }
        output.push_str(line_ending);
    }

    output
}

/// Step 3: keep at most two consecutive line breaks
fn collapse_blank_lines(document: &str) -> String {
    let mut output = String::with_capacity(document.len());
    let mut run = 0;
    let mut rest = document;

    while !rest.is_empty() {
        let line_break = if rest.starts_with("\r\n") {
            Some(2)
        } else if rest.starts_with('\n') {
            Some(1)
        } else {
            None
        };

        match line_break {
            Some(len) => {
                run += 1;
                if run <= 2 {
                    output.push_str(&rest[..len]);
                }
                rest = &rest[len..];
            }
            None => {
                run = 0;
                let ch_len = rest.chars().next().map_or(1, char::len_utf8);
                output.push_str(&rest[..ch_len]);
                rest = &rest[ch_len..];
            }
        }
    }

    output
}

/// Step 4: no trailing blank lines
fn trim_document_end(mut document: String) -> String {
    let mut breaks = 0;
    let mut end = document.len();
    loop {
        let head = &document[..end];
        if let Some(stripped) = head.strip_suffix("\r\n") {
            end = stripped.len();
        } else if let Some(stripped) = head.strip_suffix('\n') {
            end = stripped.len();
        } else {
            break;
        }
        breaks += 1;
    }

    if breaks >= 2 {
        let kept = document[..end].trim_end().len();
        document.truncate(kept);
    }
    document
}
