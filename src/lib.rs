//! Terradoc Sanitizer - text sanitization for generated module documentation
//!
//! This library turns free-form descriptions written by module authors into
//! text that can be embedded safely in generated Markdown or AsciiDoc, either
//! inside table cells or as document prose, without breaking the surrounding
//! structure or mangling code samples and URLs.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `settings`: Per-call settings, dialects, render contexts and output formats
//! - `segment`: Splitting text into prose and fenced code
//! - `escape`: Escaping `|`, `_` and `*` with markup exceptions
//! - `urls`: Restoring URLs after escaping
//! - `breaks`: Line-structure normalization for tables and documents
//! - `anchor`: Display names and cross-reference anchors
//! - `finalize`: Whole-document cleanup after template rendering
//! - `sanitizer`: Pipeline composition and the public sanitize functions
//! - `functions`: Named functions for template engines
//!
//! # Thread Safety
//!
//! Every function is pure over its inputs. [`Settings`] is an immutable `Copy`
//! value; callers that need a variation derive a copy with the `with_*`
//! builders instead of mutating shared state.
//!
//! # Example
//!
//! ```rust
//! use terradoc_sanitizer::{Sanitizer, Settings};
//!
//! let sanitizer = Sanitizer::with_settings(Settings::default());
//! let row = format!(
//!     "| {} | {} |",
//!     sanitizer.name("instance_type"),
//!     sanitizer.table("EC2 type, e.g. `t3.micro`.\nSee https://aws.amazon.com/ec2/instance_types/")
//! );
//! assert_eq!(
//!     row,
//!     "| instance\\_type | EC2 type, e.g. `t3.micro`.<br>See https://aws.amazon.com/ec2/instance_types/ |"
//! );
//! ```

// Module declarations
pub mod anchor;
pub mod breaks;
pub mod error;
pub mod escape;
pub mod finalize;
pub mod functions;
pub mod sanitizer;
pub mod segment;
pub mod settings;
pub mod urls;

// Re-export main types for convenience
pub use error::{Result, SanitizeError};
pub use finalize::finalize;
pub use functions::TemplateFunction;
pub use sanitizer::{
    NOT_AVAILABLE, Sanitizer, sanitize_for_document, sanitize_for_table, sanitize_header_or_footer,
};
pub use settings::{Dialect, Format, RenderContext, Settings};
