#![forbid(unsafe_code)]

//! Email-safe HTML generation for Mailsmith.
//!
//! # Role in Mailsmith
//! This crate turns a block tree into a self-contained HTML document
//! that renders acceptably in both modern mail clients and the legacy
//! table-based one. Generation is a pure function: no side effects, no
//! clock, no I/O — two calls with the same document produce
//! byte-identical output.
//!
//! # This crate provides
//! - [`generate`] / [`HtmlGenerator`]: block tree → `<!DOCTYPE html>`
//!   document with nested tables, inlined CSS, and dual-path
//!   conditional markup for the legacy client.
//! - [`sanitize`]: the trust boundary. Every user-supplied string that
//!   reaches the output passes through exactly one of these functions.
//! - [`columns`]: the gap-folded column width arithmetic for layout
//!   blocks.
//!
//! # Failure semantics
//! Generation always succeeds. Sanitizers degrade gracefully — an
//! invalid color or length is omitted, a hostile URL becomes `"#"` —
//! so a single malformed value never aborts the whole document.
//! Content-quality problems (missing alt text and the like) are the
//! linter's job, reported out-of-band, never by this crate.

pub mod columns;
pub mod html;
pub mod sanitize;

pub use columns::{COLUMN_GAP, ColumnWidth, column_widths};
pub use html::{HtmlGenerator, generate};
pub use sanitize::{
    escape_html, sanitize_color, sanitize_font_stack, sanitize_length, sanitize_rich_text,
    sanitize_url,
};
