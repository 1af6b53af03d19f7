#![forbid(unsafe_code)]

//! Template validation.
//!
//! The store's loading contract is "validate fully, then atomically
//! replace": a malformed template must be rejected before it touches
//! the current document or the undo history. This module is the
//! validation half of that contract.
//!
//! # Checks
//!
//! 1. Block ids are globally unique, including nested children.
//! 2. Top-level `order` values are contiguous `0..n-1` (in any
//!    permutation).
//! 3. A layout's children never outnumber its columns.
//! 4. Layouts do not nest inside layouts — the column arithmetic is
//!    defined against the document content width only.

use std::error::Error;
use std::fmt;

use rustc_hash::FxHashSet;

use crate::block::{Block, BlockId, BlockKind};
use crate::document::EmailDocument;

/// Why a template failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The same id appears on more than one block.
    DuplicateId(BlockId),
    /// Top-level `order` values are not a permutation of `0..n-1`.
    NonContiguousOrder { missing: u32 },
    /// A layout holds more children than it has columns.
    LayoutOverflow {
        id: BlockId,
        columns: usize,
        children: usize,
    },
    /// A layout appears inside another layout's children.
    NestedLayout(BlockId),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate block id {id}"),
            Self::NonContiguousOrder { missing } => {
                write!(f, "top-level block orders are not contiguous (missing {missing})")
            }
            Self::LayoutOverflow {
                id,
                columns,
                children,
            } => write!(
                f,
                "layout {id} has {children} children but only {columns} columns"
            ),
            Self::NestedLayout(id) => {
                write!(f, "layout {id} is nested inside another layout")
            }
        }
    }
}

impl Error for TemplateError {}

/// Validate a whole document. Returns the first violation found, in
/// document order, or `Ok(())`.
pub fn validate_document(doc: &EmailDocument) -> Result<(), TemplateError> {
    let mut seen = FxHashSet::default();
    check_ids(&doc.blocks, &mut seen)?;
    check_orders(&doc.blocks)?;
    check_layouts(&doc.blocks, false)?;
    Ok(())
}

fn check_ids(blocks: &[Block], seen: &mut FxHashSet<BlockId>) -> Result<(), TemplateError> {
    for block in blocks {
        if !seen.insert(block.id) {
            return Err(TemplateError::DuplicateId(block.id));
        }
        if let BlockKind::Layout(layout) = &block.kind {
            check_ids(&layout.children, seen)?;
        }
    }
    Ok(())
}

fn check_orders(blocks: &[Block]) -> Result<(), TemplateError> {
    let mut present = vec![false; blocks.len()];
    for block in blocks {
        let order = block.order as usize;
        if order >= present.len() || present[order] {
            // Either out of range or duplicated; report the first gap.
            break;
        }
        present[order] = true;
    }
    if let Some(missing) = present.iter().position(|&p| !p) {
        return Err(TemplateError::NonContiguousOrder {
            missing: missing as u32,
        });
    }
    Ok(())
}

fn check_layouts(blocks: &[Block], inside_layout: bool) -> Result<(), TemplateError> {
    for block in blocks {
        if let BlockKind::Layout(layout) = &block.kind {
            if inside_layout {
                return Err(TemplateError::NestedLayout(block.id));
            }
            if layout.children.len() > layout.columns.count() {
                return Err(TemplateError::LayoutOverflow {
                    id: block.id,
                    columns: layout.columns.count(),
                    children: layout.children.len(),
                });
            }
            check_layouts(&layout.children, true)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{ColumnCount, LayoutData, TextData};
    use crate::styles::BlockStyles;
    use crate::tree::renumber;

    fn leaf(id: u64) -> Block {
        Block::new(
            BlockId(id),
            BlockKind::Text(TextData::default()),
            BlockStyles::default(),
        )
    }

    fn doc_with(blocks: Vec<Block>) -> EmailDocument {
        EmailDocument {
            blocks,
            ..Default::default()
        }
    }

    #[test]
    fn empty_document_is_valid() {
        assert!(validate_document(&EmailDocument::new()).is_ok());
    }

    #[test]
    fn well_formed_document_is_valid() {
        let mut blocks = vec![leaf(1), leaf(2)];
        renumber(&mut blocks);
        assert!(validate_document(&doc_with(blocks)).is_ok());
    }

    #[test]
    fn duplicate_top_level_id_rejected() {
        let mut blocks = vec![leaf(1), leaf(1)];
        renumber(&mut blocks);
        assert_eq!(
            validate_document(&doc_with(blocks)),
            Err(TemplateError::DuplicateId(BlockId(1)))
        );
    }

    #[test]
    fn duplicate_nested_id_rejected() {
        let mut blocks = vec![
            leaf(1),
            Block::new(
                BlockId(2),
                BlockKind::Layout(LayoutData {
                    columns: ColumnCount::Two,
                    children: vec![leaf(1)],
                    ..Default::default()
                }),
                BlockStyles::default(),
            ),
        ];
        renumber(&mut blocks);
        assert_eq!(
            validate_document(&doc_with(blocks)),
            Err(TemplateError::DuplicateId(BlockId(1)))
        );
    }

    #[test]
    fn gapped_orders_rejected() {
        let mut blocks = vec![leaf(1), leaf(2)];
        blocks[0].order = 0;
        blocks[1].order = 2;
        assert_eq!(
            validate_document(&doc_with(blocks)),
            Err(TemplateError::NonContiguousOrder { missing: 1 })
        );
    }

    #[test]
    fn permuted_orders_accepted() {
        let mut blocks = vec![leaf(1), leaf(2), leaf(3)];
        blocks[0].order = 2;
        blocks[1].order = 0;
        blocks[2].order = 1;
        assert!(validate_document(&doc_with(blocks)).is_ok());
    }

    #[test]
    fn layout_overflow_rejected() {
        let mut blocks = vec![Block::new(
            BlockId(1),
            BlockKind::Layout(LayoutData {
                columns: ColumnCount::One,
                children: vec![leaf(2), leaf(3)],
                ..Default::default()
            }),
            BlockStyles::default(),
        )];
        renumber(&mut blocks);
        assert_eq!(
            validate_document(&doc_with(blocks)),
            Err(TemplateError::LayoutOverflow {
                id: BlockId(1),
                columns: 1,
                children: 2,
            })
        );
    }

    #[test]
    fn nested_layout_rejected() {
        let inner = Block::new(
            BlockId(3),
            BlockKind::Layout(LayoutData::default()),
            BlockStyles::default(),
        );
        let mut blocks = vec![Block::new(
            BlockId(1),
            BlockKind::Layout(LayoutData {
                columns: ColumnCount::Two,
                children: vec![inner],
                ..Default::default()
            }),
            BlockStyles::default(),
        )];
        renumber(&mut blocks);
        assert_eq!(
            validate_document(&doc_with(blocks)),
            Err(TemplateError::NestedLayout(BlockId(3)))
        );
    }

    #[test]
    fn error_messages_are_human_readable() {
        let err = TemplateError::LayoutOverflow {
            id: BlockId(4),
            columns: 2,
            children: 3,
        };
        assert_eq!(
            err.to_string(),
            "layout blk-4 has 3 children but only 2 columns"
        );
    }
}
