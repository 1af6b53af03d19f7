#![forbid(unsafe_code)]

//! Mailsmith public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users.
//! It re-exports common types from the member crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use mailsmith::prelude::*;
//!
//! let mut factory = BlockFactory::new();
//! let mut doc = EmailDocument::new();
//! doc.blocks.push(factory.heading(HeadingLevel::H1));
//!
//! let mut store = EditorStore::new(doc);
//! let html = generate(store.document(), true);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(!store.can_undo());
//! ```

// --- Model re-exports ------------------------------------------------------

pub use mailsmith_model::{
    Block, BlockFactory, BlockId, BlockKind, BlockStyles, ButtonData, ColumnCount, ColumnRatio,
    DividerData, DividerStyle, DocumentSettings, EmailDocument, FooterData, GalleryData,
    GalleryImage, HeadingData, HeadingLevel, ImageData, LayoutData, MobileStyles, Padding,
    SpacerData, TemplateError, TextAlign, TextData, Typography, tree, validate_document,
};

// --- History re-exports ----------------------------------------------------

pub use mailsmith_history::{ActionBatcher, BatchConfig, HistoryConfig, HistoryEngine};

// --- Codegen re-exports ----------------------------------------------------

pub use mailsmith_codegen::{
    COLUMN_GAP, ColumnWidth, HtmlGenerator, column_widths, escape_html, generate, sanitize_color,
    sanitize_font_stack, sanitize_length, sanitize_rich_text, sanitize_url,
};

// --- Lint re-exports -------------------------------------------------------

pub use mailsmith_lint::{LintIssue, LintKind, Severity, lint_document};

// --- Store re-exports ------------------------------------------------------

pub use mailsmith_store::{EditorStore, RetentionPolicy, Version, VersionKind, VersionStore};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        Block, BlockFactory, BlockId, BlockKind, ColumnCount, EditorStore, EmailDocument,
        HeadingLevel, HtmlGenerator, VersionKind, generate, lint_document, validate_document,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_supports_the_whole_editing_loop() {
        let mut factory = BlockFactory::new();
        let heading = factory.heading(HeadingLevel::H1);
        let heading_id = heading.id;

        let mut doc = EmailDocument::new();
        doc.blocks.push(heading);
        crate::tree::renumber(&mut doc.blocks);

        let mut store = EditorStore::new(doc);
        store.update_block(heading_id, |block| {
            if let BlockKind::Heading(data) = &mut block.kind {
                data.text = "Launch day".into();
            }
        });
        store.flush_edits();

        let html = generate(store.document(), true);
        assert!(html.contains("Launch day"));

        let issues = lint_document(store.document());
        assert!(issues.iter().all(|i| i.block_id != Some(heading_id)));

        assert!(store.undo());
        let html = generate(store.document(), true);
        assert!(!html.contains("Launch day"));
    }
}
