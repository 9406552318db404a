#![no_main]

use libfuzzer_sys::fuzz_target;
use terradoc_sanitizer::finalize;

fuzz_target!(|document: &str| {
    let once = finalize(document);
    assert_eq!(finalize(&once), once);
});
