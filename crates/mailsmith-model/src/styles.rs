#![forbid(unsafe_code)]

//! Shared presentation attributes carried by every block.
//!
//! Styles store raw user-supplied strings (colors, lengths); nothing is
//! trusted here. Sanitization happens once, at generation time, in
//! `mailsmith-codegen`.

use serde::{Deserialize, Serialize};

/// Padding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Padding {
    /// Equal padding on all four sides.
    #[must_use]
    pub fn uniform(value: u16) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical/horizontal padding.
    #[must_use]
    pub fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Zero on all sides.
    #[must_use]
    pub fn none() -> Self {
        Self::uniform(0)
    }

    /// CSS shorthand value, e.g. `"12px 24px 12px 24px"`.
    #[must_use]
    pub fn as_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The CSS `text-align` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Mobile-specific overrides. A missing field inherits the desktop
/// value, mirroring how breakpoint tiers inherit downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MobileStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

/// Presentation attributes shared by all block kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyles {
    #[serde(default)]
    pub padding: Padding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<MobileStyles>,
}

impl Default for BlockStyles {
    fn default() -> Self {
        Self {
            padding: Padding::symmetric(12, 24),
            background_color: None,
            text_align: TextAlign::Left,
            mobile: None,
        }
    }
}

impl BlockStyles {
    /// Effective mobile padding: the override when present, the desktop
    /// padding otherwise.
    #[must_use]
    pub fn mobile_padding(&self) -> Padding {
        self.mobile
            .and_then(|m| m.padding)
            .unwrap_or(self.padding)
    }

    /// Effective mobile alignment: the override when present, the
    /// desktop alignment otherwise.
    #[must_use]
    pub fn mobile_text_align(&self) -> TextAlign {
        self.mobile
            .and_then(|m| m.text_align)
            .unwrap_or(self.text_align)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_padding_sets_all_sides() {
        let p = Padding::uniform(8);
        assert_eq!((p.top, p.right, p.bottom, p.left), (8, 8, 8, 8));
    }

    #[test]
    fn symmetric_padding_pairs_sides() {
        let p = Padding::symmetric(4, 16);
        assert_eq!((p.top, p.bottom), (4, 4));
        assert_eq!((p.left, p.right), (16, 16));
    }

    #[test]
    fn padding_css_shorthand_order() {
        let p = Padding {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        };
        assert_eq!(p.as_css(), "1px 2px 3px 4px");
    }

    #[test]
    fn text_align_css_keywords() {
        assert_eq!(TextAlign::Left.as_css(), "left");
        assert_eq!(TextAlign::Center.as_css(), "center");
        assert_eq!(TextAlign::Right.as_css(), "right");
    }

    #[test]
    fn mobile_overrides_inherit_when_absent() {
        let styles = BlockStyles {
            text_align: TextAlign::Center,
            ..Default::default()
        };
        assert_eq!(styles.mobile_padding(), styles.padding);
        assert_eq!(styles.mobile_text_align(), TextAlign::Center);
    }

    #[test]
    fn mobile_overrides_apply_when_present() {
        let styles = BlockStyles {
            mobile: Some(MobileStyles {
                padding: Some(Padding::none()),
                text_align: Some(TextAlign::Right),
            }),
            ..Default::default()
        };
        assert_eq!(styles.mobile_padding(), Padding::none());
        assert_eq!(styles.mobile_text_align(), TextAlign::Right);
    }

    #[test]
    fn default_styles_are_left_aligned_with_padding() {
        let styles = BlockStyles::default();
        assert_eq!(styles.text_align, TextAlign::Left);
        assert_eq!(styles.padding, Padding::symmetric(12, 24));
        assert!(styles.background_color.is_none());
        assert!(styles.mobile.is_none());
    }
}
