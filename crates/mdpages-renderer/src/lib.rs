//! Restricted markdown to HTML converter.
//!
//! Supports the subset of markdown used by project READMEs: ATX headings
//! (levels 1-3), fenced code blocks, inline code, bold, links, flat
//! unordered lists and paragraphs. Anything else degrades to plain
//! paragraph content; conversion is total and never fails.
//!
//! # Architecture
//!
//! The document is lexed into a flat list of [`Block`]s and each block is
//! rendered independently. Fences are recognized before headings and list
//! markers, so code bodies pass through verbatim and are never picked up
//! by the inline rules. Inline formatting (code spans, bold, links) is
//! applied to heading, list-item and paragraph text only.
//!
//! # Example
//!
//! ```
//! let html = mdpages_renderer::convert("## Install\n\nRun `make`.\n");
//! assert_eq!(html, "<h2>Install</h2>\n\n<p>Run <code>make</code>.</p>");
//! ```
//!
//! Output is deliberately not HTML-escaped: code bodies and plain text are
//! emitted byte-for-byte. Re-running the converter on its own output is
//! not supported.

mod block;
mod html;
mod inline;

pub use block::{Block, lex};

/// Convert markdown text to an HTML fragment.
#[must_use]
pub fn convert(input: &str) -> String {
    html::render(&block::lex(input))
}
