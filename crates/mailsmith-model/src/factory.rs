#![forbid(unsafe_code)]

//! Block creation factories.
//!
//! The factory is the single source of [`BlockId`]s for a document.
//! Every block dragged from the library starts here with a well-formed
//! default payload; the store assigns `order` on insertion.

use crate::block::{
    Block, BlockId, BlockKind, ButtonData, ColumnCount, DividerData, FooterData, GalleryData,
    HeadingData, HeadingLevel, ImageData, LayoutData, SpacerData, TextData,
};
use crate::styles::{BlockStyles, Padding, TextAlign};

/// Allocates unique block ids and produces defaulted blocks.
#[derive(Debug, Clone)]
pub struct BlockFactory {
    next_id: u64,
}

impl Default for BlockFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockFactory {
    /// A fresh factory starting at id 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Resume id allocation after the highest id already present in a
    /// loaded document, so loaded and newly-created blocks never clash.
    #[must_use]
    pub fn resuming_after(highest: BlockId) -> Self {
        Self {
            next_id: highest.0 + 1,
        }
    }

    /// Allocate the next unique id.
    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn heading(&mut self, level: HeadingLevel) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Heading(HeadingData {
                level,
                text: "Your heading".into(),
                ..Default::default()
            }),
            BlockStyles::default(),
        )
    }

    pub fn text(&mut self) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Text(TextData {
                html: "<p>Write something…</p>".into(),
                ..Default::default()
            }),
            BlockStyles::default(),
        )
    }

    pub fn image(&mut self) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Image(ImageData::default()),
            BlockStyles {
                padding: Padding::symmetric(12, 0),
                ..Default::default()
            },
        )
    }

    pub fn gallery(&mut self) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::ImageGallery(GalleryData::default()),
            BlockStyles {
                padding: Padding::symmetric(12, 0),
                ..Default::default()
            },
        )
    }

    pub fn button(&mut self) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Button(ButtonData::default()),
            BlockStyles {
                text_align: TextAlign::Center,
                ..Default::default()
            },
        )
    }

    pub fn spacer(&mut self) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Spacer(SpacerData::default()),
            BlockStyles {
                padding: Padding::none(),
                ..Default::default()
            },
        )
    }

    pub fn divider(&mut self) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Divider(DividerData::default()),
            BlockStyles {
                padding: Padding::symmetric(8, 24),
                ..Default::default()
            },
        )
    }

    pub fn layout(&mut self, columns: ColumnCount) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Layout(LayoutData {
                columns,
                ..Default::default()
            }),
            BlockStyles {
                padding: Padding::symmetric(12, 24),
                ..Default::default()
            },
        )
    }

    /// Give a block (and any nested children) fresh ids. Used when
    /// pasting a copied block so ids stay globally unique.
    pub fn reassign_ids(&mut self, block: &mut Block) {
        block.id = self.next_id();
        if let BlockKind::Layout(layout) = &mut block.kind {
            for child in &mut layout.children {
                self.reassign_ids(child);
            }
        }
    }

    pub fn footer(&mut self) -> Block {
        Block::new(
            self.next_id(),
            BlockKind::Footer(FooterData::default()),
            BlockStyles {
                text_align: TextAlign::Center,
                padding: Padding::symmetric(24, 24),
                ..Default::default()
            },
        )
    }
}
