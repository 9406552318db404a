//! Restoring absolute URLs after escaping
//!
//! Escaping runs over whole lines without knowing where links are, so a URL
//! such as `https://www.foo_bar.com/` comes out of it as
//! `https://www.foo\_bar.com/`, which no longer resolves. This pass finds every
//! strict absolute URL (scheme, `://`, host) in escaped text and drops the
//! backslashes the escaper put in front of `_` and `*` inside it.
//!
//! Text that only looks like a URL to a human (`www.example.com`, missing
//! scheme) is not detected and keeps its escapes.

use crate::settings::Settings;
use regex::Regex;
use std::sync::OnceLock;

/// Characters that may follow a URL without being part of it
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\\'];

/// Strict absolute URL matcher
///
/// Pipes, brackets, quotes and angle brackets end a URL so that table
/// delimiters and Markdown link syntax around it stay outside the match.
fn url_regex() -> Option<&'static Regex> {
    static URL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    URL_REGEX
        .get_or_init(|| Regex::new(r#"(?i)\b[a-z][a-z0-9+.\-]*://[^\s<>"'`|()\[\]{}]+"#).ok())
        .as_ref()
}

/// Find the byte ranges of strict absolute URLs in `text`
///
/// Trailing sentence punctuation is not considered part of the URL.
///
/// # Examples
///
/// ```rust
/// use terradoc_sanitizer::urls::find_urls;
///
/// let text = "See https://example.com/a_b. Or ftp://host/x";
/// let urls: Vec<&str> = find_urls(text).into_iter().map(|r| &text[r]).collect();
/// assert_eq!(urls, ["https://example.com/a_b", "ftp://host/x"]);
/// ```
pub fn find_urls(text: &str) -> Vec<std::ops::Range<usize>> {
    let Some(regex) = url_regex() else {
        return Vec::new();
    };

    regex
        .find_iter(text)
        .filter_map(|m| {
            let url = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            // Require something after "://"
            let (_, rest) = url.split_once("://")?;
            if rest.is_empty() {
                return None;
            }
            Some(m.start()..m.start() + url.len())
        })
        .collect()
}

/// Remove escape backslashes from every absolute URL in `text`
///
/// Only runs when character escaping is active for `settings`; otherwise the
/// escaper inserted nothing and the text is returned as is.
///
/// # Arguments
///
/// * `text` - Text that already went through [`crate::escape::escape`]
/// * `settings` - Settings the text was escaped with
///
/// # Examples
///
/// ```rust
/// use terradoc_sanitizer::settings::Settings;
/// use terradoc_sanitizer::urls::normalize_urls;
///
/// let escaped = "visit https://www.foo\\_bar.com/ or foo\\_bar";
/// assert_eq!(
///     normalize_urls(escaped, &Settings::default()),
///     "visit https://www.foo_bar.com/ or foo\\_bar"
/// );
/// ```
pub fn normalize_urls(text: &str, settings: &Settings) -> String {
    if !settings.emphasis_escaped() {
        return text.to_string();
    }

    let ranges = find_urls(text);
    if ranges.is_empty() {
        return text.to_string();
    }
    log::trace!("restoring {} url(s)", ranges.len());

    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for range in ranges {
        output.push_str(&text[last..range.start]);
        output.push_str(&unescape_url(&text[range.clone()]));
        last = range.end;
    }
    output.push_str(&text[last..]);
    output
}

/// Drop backslashes that escape `_` or `*`
fn unescape_url(url: &str) -> String {
    let mut output = String::with_capacity(url.len());
    let mut chars = url.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' && matches!(chars.peek(), Some('_') | Some('*')) {
            continue;
        }
        output.push(ch);
    }
    output
}
