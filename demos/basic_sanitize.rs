//! Basic sanitization example showing each output format
//!
//! Run with `--verbose` to see the sanitizer's debug and trace logging.

use fern::Dispatch;
use log::LevelFilter;
use terradoc_sanitizer::{Format, Sanitizer, Settings};

fn setup_logger(verbose: bool) {
    let logger = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}: {}",
                record.level(),
                if verbose {
                    format!("({}) {}", record.target(), message)
                } else {
                    message.to_string()
                },
            ))
        })
        .level(if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        })
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}

fn main() {
    let verbose = std::env::args().any(|arg| arg == "--verbose" || arg == "-v");
    setup_logger(verbose);

    println!("=== Terradoc Sanitizer - Basic Examples ===\n");

    let description = "Example of 'foo_bar' module in `foo_bar.tf`.\n\n\
        Values are separated by | and **must** be unique.\n\
        See https://registry.terraform.io/modules/foo_bar/\n\n\
        ```hcl\nfoo_bar = [\"a|b\"]\n```";

    println!("Input:");
    println!("{}\n", description);

    for format in Format::ALL {
        let sanitizer = Sanitizer::for_format(format, Settings::default());
        println!("{} / name:   {}", format, sanitizer.name("foo_bar"));
        println!("{} / anchor: {}", format, sanitizer.anchor("input", "foo_bar"));
        println!("{} / field:", format);
        println!("{}", sanitizer.field(description));
        println!("---\n");
    }

    let plain = Sanitizer::for_format(
        Format::MarkdownTable,
        Settings::default().with_html(false).with_escape_characters(false),
    );
    println!("markdown table without html or escaping:");
    println!("{}", plain.field(description));
}
