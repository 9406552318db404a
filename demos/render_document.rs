//! Renders a small module README the way a template engine would
//!
//! Template functions are resolved by name, fields are sanitized one by one,
//! and the assembled document gets a single final cleanup pass.
//!
//! Usage: `cargo run --example render_document -- [format] [--verbose]`
//! where `format` is e.g. `"markdown table"` (default) or `"asciidoc document"`.

use fern::Dispatch;
use log::LevelFilter;
use std::process::ExitCode;
use terradoc_sanitizer::{
    Dialect, Format, RenderContext, Result, Settings, TemplateFunction, finalize,
};

struct Input {
    name: &'static str,
    description: &'static str,
}

const HEADER: &str = "# terraform-aws-s3-bucket\n\nCreates an S3 bucket with all (or almost all) features provided by the_provider.\n\n```hcl\nmodule \"s3_bucket\" {\n  source = \"terraform-aws-modules/s3-bucket/aws\"\n}\n```\n";

const INPUTS: [Input; 3] = [
    Input {
        name: "bucket_prefix",
        description: "Creates a unique bucket name beginning with the specified prefix.\nConflicts with `bucket`.",
    },
    Input {
        name: "acl",
        description: "The canned ACL to apply. One of: private | public-read",
    },
    Input {
        name: "lifecycle_rule",
        description: "",
    },
];

fn setup_logger(verbose: bool) {
    let logger = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}: ({}) {}", record.level(), record.target(), message))
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}

fn call(name: &str, args: &[&str], settings: &Settings) -> Result<String> {
    name.parse::<TemplateFunction>()?.call(args, settings)
}

fn render(format: Format) -> Result<String> {
    let settings = format.settings(Settings::default());
    let (anchor_fn, heading, subheading) = match format.dialect() {
        Dialect::Markdown => ("anchorNameMarkdown", "##", "###"),
        Dialect::AsciiDoc => ("anchorNameAsciidoc", "==", "==="),
    };

    let mut document = call("sanitizeSection", &[HEADER], &settings)?;
    document.push_str(&format!("\n\n{heading} Inputs\n\n"));

    match (format.dialect(), format.context()) {
        (Dialect::Markdown, RenderContext::Table) => {
            document.push_str("| Name | Description |\n|------|-------------|\n");
            for input in &INPUTS {
                let name = call(anchor_fn, &["input", input.name], &settings)?;
                let description = call("sanitizeMarkdownTbl", &[input.description], &settings)?;
                document.push_str(&format!("| {name} | {description} |\n"));
            }
        }
        (Dialect::AsciiDoc, RenderContext::Table) => {
            document.push_str("[cols=\"a,a\",options=\"header\"]\n|===\n|Name |Description\n");
            for input in &INPUTS {
                let name = call(anchor_fn, &["input", input.name], &settings)?;
                let description = call("sanitizeAsciidocTbl", &[input.description], &settings)?;
                document.push_str(&format!("|{name} |{description}\n"));
            }
            document.push_str("|===\n");
        }
        (_, RenderContext::Document) => {
            for input in &INPUTS {
                let name = call(anchor_fn, &["input", input.name], &settings)?;
                let description = call("sanitizeDoc", &[input.description], &settings)?;
                document.push_str(&format!("{subheading} {name}\n\nDescription: {description}\n\n\n"));
            }
        }
    }

    Ok(finalize(&document))
}

fn main() -> ExitCode {
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    setup_logger(verbose);

    let format = std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "markdown table".to_string());

    let result = format.parse::<Format>().and_then(render);
    match result {
        Ok(document) => {
            println!("{document}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error[{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
