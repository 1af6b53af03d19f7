#![forbid(unsafe_code)]

//! The root document aggregate.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// A named typography preset applied to a content role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: String,
    pub color: String,
}

impl Typography {
    /// Preset for headings.
    #[must_use]
    pub fn heading() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".into(),
            font_size: "28px".into(),
            color: "#1a1a1a".into(),
        }
    }

    /// Preset for body copy.
    #[must_use]
    pub fn body() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".into(),
            font_size: "16px".into(),
            color: "#333333".into(),
        }
    }
}

/// Document-level settings: canvas colors, content width, default
/// typography, and the brand palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSettings {
    pub background_color: String,
    /// Fixed content width in pixels. Email clients do not reflow;
    /// the generator's column math is defined against this value.
    pub content_width: u16,
    pub font_family: String,
    #[serde(default)]
    pub brand_colors: Vec<String>,
    pub heading_typography: Typography,
    pub body_typography: Typography,
    /// Hidden preview line shown by inbox list views.
    #[serde(default)]
    pub preheader: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            background_color: "#f4f4f4".into(),
            content_width: 640,
            font_family: "Arial, Helvetica, sans-serif".into(),
            brand_colors: Vec::new(),
            heading_typography: Typography::heading(),
            body_typography: Typography::body(),
            preheader: String::new(),
        }
    }
}

/// The whole email document: settings plus the ordered top-level
/// block list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmailDocument {
    #[serde(default)]
    pub settings: DocumentSettings,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl EmailDocument {
    /// An empty document with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level blocks sorted by `order`, ascending. Stable, so
    /// malformed duplicate orders degrade deterministically.
    #[must_use]
    pub fn blocks_in_order(&self) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.order);
        blocks
    }
}
