#![forbid(unsafe_code)]

//! Recursive whole-tree operations.
//!
//! Every operation that needs to see the whole document — lookup by
//! id, targeted update, removal, color extraction — is a generic
//! recursive-descent function over the block list. Layout children are
//! visited in array position; only top-level siblings carry `order`.
//!
//! # Invariants
//!
//! 1. After any structural mutation (`insert_block`, `remove_block`,
//!    `move_block`), top-level `order` values are contiguous `0..n-1`.
//! 2. Removal from inside a layout never renumbers — children are
//!    ordered by position, not by `order`.
//! 3. Lookup visits blocks in document order: each top-level block,
//!    then its children left to right, before the next sibling.

use crate::block::{Block, BlockId, BlockKind};

/// Find a block anywhere in the tree.
#[must_use]
pub fn find_block(blocks: &[Block], id: BlockId) -> Option<&Block> {
    for block in blocks {
        if block.id == id {
            return Some(block);
        }
        if let BlockKind::Layout(layout) = &block.kind
            && let Some(found) = find_block(&layout.children, id)
        {
            return Some(found);
        }
    }
    None
}

/// Find a block anywhere in the tree, mutably.
pub fn find_block_mut(blocks: &mut [Block], id: BlockId) -> Option<&mut Block> {
    for block in blocks {
        if block.id == id {
            return Some(block);
        }
        if let BlockKind::Layout(layout) = &mut block.kind
            && let Some(found) = find_block_mut(&mut layout.children, id)
        {
            return Some(found);
        }
    }
    None
}

/// Locate the target block (including inside nested layout children)
/// and apply `patch` to it. Returns whether the block was found.
pub fn update_block(blocks: &mut [Block], id: BlockId, patch: impl FnOnce(&mut Block)) -> bool {
    match find_block_mut(blocks, id) {
        Some(block) => {
            patch(block);
            true
        }
        None => false,
    }
}

/// Remove a block anywhere in the tree, returning it.
///
/// Top-level removal renumbers the remaining siblings; removal from a
/// layout's children does not.
pub fn remove_block(blocks: &mut Vec<Block>, id: BlockId) -> Option<Block> {
    if let Some(index) = blocks.iter().position(|b| b.id == id) {
        let removed = blocks.remove(index);
        renumber(blocks);
        return Some(removed);
    }
    for block in blocks.iter_mut() {
        if let BlockKind::Layout(layout) = &mut block.kind {
            if let Some(index) = layout.children.iter().position(|c| c.id == id) {
                return Some(layout.children.remove(index));
            }
            if let Some(removed) = remove_nested(&mut layout.children, id) {
                return Some(removed);
            }
        }
    }
    None
}

fn remove_nested(children: &mut [Block], id: BlockId) -> Option<Block> {
    for child in children {
        if let BlockKind::Layout(layout) = &mut child.kind {
            if let Some(index) = layout.children.iter().position(|c| c.id == id) {
                return Some(layout.children.remove(index));
            }
            if let Some(removed) = remove_nested(&mut layout.children, id) {
                return Some(removed);
            }
        }
    }
    None
}

/// Insert a block at a top-level position (clamped to the list length)
/// and renumber.
pub fn insert_block(blocks: &mut Vec<Block>, index: usize, block: Block) {
    let index = index.min(blocks.len());
    blocks.insert(index, block);
    renumber(blocks);
}

/// Move a top-level block to a new position and renumber. Returns
/// `false` when `id` is not a top-level block.
pub fn move_block(blocks: &mut Vec<Block>, id: BlockId, new_index: usize) -> bool {
    let Some(index) = blocks.iter().position(|b| b.id == id) else {
        return false;
    };
    let block = blocks.remove(index);
    let new_index = new_index.min(blocks.len());
    blocks.insert(new_index, block);
    renumber(blocks);
    true
}

/// Rewrite top-level `order` values to contiguous `0..n-1`.
pub fn renumber(blocks: &mut [Block]) {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.order = index as u32;
    }
}

/// Collect every block id in document order, including nested children.
pub fn collect_ids(blocks: &[Block], out: &mut Vec<BlockId>) {
    for block in blocks {
        out.push(block.id);
        if let BlockKind::Layout(layout) = &block.kind {
            collect_ids(&layout.children, out);
        }
    }
}

/// Total number of blocks in the tree, including nested children.
#[must_use]
pub fn block_count(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match &block.kind {
            BlockKind::Layout(layout) => 1 + block_count(&layout.children),
            _ => 1,
        })
        .sum()
}

/// Extract every color used anywhere in the tree, first-seen order,
/// deduplicated. Feeds the brand palette suggestions.
#[must_use]
pub fn collect_colors(blocks: &[Block]) -> Vec<String> {
    let mut colors = Vec::new();
    collect_colors_into(blocks, &mut colors);
    colors
}

fn collect_colors_into(blocks: &[Block], out: &mut Vec<String>) {
    let mut push = |color: &Option<String>, out: &mut Vec<String>| {
        if let Some(color) = color
            && !color.is_empty()
            && !out.iter().any(|seen| seen == color)
        {
            out.push(color.clone());
        }
    };

    for block in blocks {
        push(&block.styles.background_color, out);
        match &block.kind {
            BlockKind::Heading(data) => push(&data.color, out),
            BlockKind::Text(data) => push(&data.color, out),
            BlockKind::Button(data) => {
                push(&data.background_color, out);
                push(&data.text_color, out);
            }
            BlockKind::Divider(data) => push(&data.color, out),
            BlockKind::Layout(layout) => collect_colors_into(&layout.children, out),
            _ => {}
        }
    }
}
