#![forbid(unsafe_code)]

//! Block types: the tagged union at the heart of the document tree.
//!
//! A [`Block`] is one unit of email content. Its [`BlockKind`] carries
//! the type-specific payload; exactly one kind ([`BlockKind::Layout`])
//! holds an ordered list of child blocks, recursively typed the same
//! way. Whole-tree operations live in [`crate::tree`] as generic
//! recursive-descent functions rather than methods-per-variant.
//!
//! # Invariants
//!
//! 1. Block ids are globally unique across the whole document,
//!    including nested layout children (enforced by
//!    [`crate::validate_document`], produced by [`crate::BlockFactory`]).
//! 2. A layout's children list never grows past its column count
//!    ([`LayoutData::set_columns`] truncates; [`LayoutData::push_child`]
//!    refuses).
//! 3. `order` is meaningful only among top-level siblings; layout
//!    children are ordered by array position.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::styles::BlockStyles;

/// Stable, unique identifier for a block.
///
/// Allocated by [`crate::BlockFactory`]; never reused within a document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blk-{}", self.0)
    }
}

/// One unit of content in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: BlockId,
    /// Position among top-level siblings; contiguous `0..n-1`.
    /// Ignored for blocks nested inside a layout.
    #[serde(default)]
    pub order: u32,
    #[serde(flatten)]
    pub kind: BlockKind,
    #[serde(default)]
    pub styles: BlockStyles,
}

impl Block {
    /// Create a block from parts. Prefer [`crate::BlockFactory`] for
    /// defaulted payloads.
    #[must_use]
    pub fn new(id: BlockId, kind: BlockKind, styles: BlockStyles) -> Self {
        Self {
            id,
            order: 0,
            kind,
            styles,
        }
    }

    /// Whether this block is a layout (the only kind with children).
    #[must_use]
    pub fn is_layout(&self) -> bool {
        matches!(self.kind, BlockKind::Layout(_))
    }

    /// Children of a layout block, empty slice otherwise.
    #[must_use]
    pub fn children(&self) -> &[Block] {
        match &self.kind {
            BlockKind::Layout(layout) => &layout.children,
            _ => &[],
        }
    }
}

/// The tagged union over block kinds.
///
/// Serialized with an adjacent `"type"` tag so templates read as
/// `{"type": "heading", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum BlockKind {
    Heading(HeadingData),
    Text(TextData),
    Image(ImageData),
    ImageGallery(GalleryData),
    Button(ButtonData),
    Spacer(SpacerData),
    Divider(DividerData),
    Layout(LayoutData),
    Footer(FooterData),
}

impl BlockKind {
    /// The template tag name for this kind.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::ImageGallery(_) => "imageGallery",
            Self::Button(_) => "button",
            Self::Spacer(_) => "spacer",
            Self::Divider(_) => "divider",
            Self::Layout(_) => "layout",
            Self::Footer(_) => "footer",
        }
    }
}

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

/// Heading level, `h1` through `h3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// The HTML tag name (`"h1"`, `"h2"`, `"h3"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            other => Err(format!("heading level must be 1..=3, got {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeadingData {
    #[serde(default)]
    pub level: HeadingLevel,
    /// Rich-text content; sanitized at generation time, never trusted.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    /// Rich-text content; sanitized at generation time, never trusted.
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Image / gallery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    /// CSS length for the rendered width; full content width when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

/// A grid of images, laid out two per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GalleryData {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonData {
    pub text: String,
    pub link_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default)]
    pub full_width: bool,
}

impl Default for ButtonData {
    fn default() -> Self {
        Self {
            text: "Click here".into(),
            link_url: String::new(),
            background_color: None,
            text_color: None,
            border_radius: None,
            full_width: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Spacer / divider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerData {
    /// Vertical gap in pixels.
    pub height: u16,
}

impl Default for SpacerData {
    fn default() -> Self {
        Self { height: 24 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DividerStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl DividerStyle {
    /// The CSS `border-style` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Rule thickness in pixels.
    pub thickness: u16,
    #[serde(default)]
    pub style: DividerStyle,
}

impl Default for DividerData {
    fn default() -> Self {
        Self {
            color: None,
            thickness: 1,
            style: DividerStyle::Solid,
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Number of columns in a layout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnCount {
    One,
    #[default]
    Two,
    Three,
    Four,
}

impl ColumnCount {
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl From<ColumnCount> for u8 {
    fn from(columns: ColumnCount) -> Self {
        columns.count() as u8
    }
}

impl TryFrom<u8> for ColumnCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(format!("column count must be 1..=4, got {other}")),
        }
    }
}

/// Width split between columns. Only meaningful for two-column
/// layouts; three and four columns always split evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColumnRatio {
    #[default]
    #[serde(rename = "1-1")]
    Even,
    #[serde(rename = "1-2")]
    OneTwo,
    #[serde(rename = "2-1")]
    TwoOne,
}

/// A multi-column layout whose cells hold nested blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    #[serde(default)]
    pub columns: ColumnCount,
    #[serde(default)]
    pub column_ratio: ColumnRatio,
    /// At most `columns.count()` children; ordered by array position.
    #[serde(default)]
    pub children: Vec<Block>,
}

impl LayoutData {
    /// Change the column count, truncating children that no longer
    /// have a column.
    pub fn set_columns(&mut self, columns: ColumnCount) {
        self.columns = columns;
        self.children.truncate(columns.count());
    }

    /// Append a child if a column is free. Returns the block back when
    /// every column is occupied or the child is itself a layout.
    pub fn push_child(&mut self, child: Block) -> Result<(), Block> {
        if self.children.len() >= self.columns.count() || child.is_layout() {
            return Err(child);
        }
        self.children.push(child);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub company_name: String,
    #[serde(default)]
    pub address: String,
    pub unsubscribe_url: String,
    #[serde(default)]
    pub unsubscribe_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<String>,
}

impl Default for FooterData {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            address: String::new(),
            unsubscribe_url: String::new(),
            unsubscribe_text: "Unsubscribe".into(),
            legal: None,
        }
    }
}
