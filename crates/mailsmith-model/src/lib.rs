#![forbid(unsafe_code)]

//! Document model for Mailsmith email templates.
//!
//! # Role in Mailsmith
//! `mailsmith-model` is the shared vocabulary for email content. The
//! history engine snapshots its block lists, the code generator walks
//! them, and the lint pass reads them. This crate holds no rendering,
//! no timers, and no I/O — just the tree and the operations on it.
//!
//! # This crate provides
//! - [`Block`] and the [`BlockKind`] tagged union (one variant per
//!   content type; `Layout` recursively nests child blocks).
//! - [`BlockStyles`] shared presentation attributes with optional
//!   mobile overrides.
//! - [`EmailDocument`] and [`DocumentSettings`], the root aggregate.
//! - [`BlockFactory`] for well-formed default blocks with unique ids.
//! - Recursive tree operations in [`tree`] (find, update, remove,
//!   insert, move, color extraction).
//! - [`validate_document`] and [`TemplateError`] for the
//!   validate-fully-then-replace template loading contract.
//!
//! # How it fits in the system
//! All mutation happens through whole-value replacement: callers clone
//! the block list, mutate the clone through [`tree`] operations, and
//! hand the result to the store. The model itself never mutates shared
//! state.

/// Block tagged union and per-type payloads.
pub mod block;
/// Root document aggregate and document-level settings.
pub mod document;
/// Factories producing well-formed default blocks.
pub mod factory;
/// Shared presentation attributes and mobile overrides.
pub mod styles;
/// Recursive whole-tree operations.
pub mod tree;
/// Template validation.
pub mod validate;

pub use block::{
    Block, BlockId, BlockKind, ButtonData, ColumnCount, ColumnRatio, DividerData, DividerStyle,
    FooterData, GalleryData, GalleryImage, HeadingData, HeadingLevel, ImageData, LayoutData,
    SpacerData, TextData,
};
pub use document::{DocumentSettings, EmailDocument, Typography};
pub use factory::BlockFactory;
pub use styles::{BlockStyles, MobileStyles, Padding, TextAlign};
pub use validate::{TemplateError, validate_document};
