//! Dropdown configuration.

use crate::item::ItemStyle;
use dropdown_core::{Color, Insets, Platform};
use serde::{Deserialize, Serialize};

/// Horizontal margins kept between the picker and the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Margin used when the picker would otherwise overflow
    pub min: f32,
    /// Preferred margin around the anchor
    pub max: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            min: 8.0,
            max: 16.0,
        }
    }
}

/// Offset of the picker relative to the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownOffset {
    /// Vertical offset; defaults to the label height plus the platform offset
    pub top: Option<f32>,
    /// Horizontal offset
    pub left: f32,
}

/// Configuration of a [`crate::Dropdown`].
///
/// Every field has a default, so a partial YAML or JSON document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Ignore all presses
    pub disabled: bool,
    /// Maximum number of rows visible without scrolling
    pub item_count: usize,
    /// Vertical padding of each row and of the picker
    pub item_padding: f32,
    /// Row font size
    pub font_size: f32,
    /// Height of the anchor's label line
    pub label_height: f32,
    /// Picker offset relative to the anchor
    pub dropdown_offset: DropdownOffset,
    /// Horizontal viewport margins
    pub dropdown_margins: Margins,
    /// Fixed slot for the selected row; negative counts from the bottom
    pub dropdown_position: Option<i32>,
    /// Fade duration in milliseconds
    pub animation_duration: u64,
    /// Ripple duration in milliseconds
    pub ripple_duration: u64,
    /// Ripple area insets relative to the anchor
    pub ripple_insets: Insets,
    /// Peak ripple opacity
    pub ripple_opacity: f32,
    /// Opacity of the pressed shade
    pub shade_opacity: f32,
    /// Start ripples from the center of the anchor
    pub ripple_centered: bool,
    /// Ignore presses while a ripple is still running
    pub ripple_sequential: bool,
    /// Anchor text color
    pub text_color: Color,
    /// Color of unselected rows
    pub item_color: Color,
    /// Text style for every row; an item's own style wins field by field
    pub item_text_style: Option<ItemStyle>,
    /// Color of the selected row; defaults to `text_color`
    pub selected_item_color: Option<Color>,
    /// Underline and accessory color
    pub base_color: Color,
    /// Picker background
    pub picker_background: Color,
    /// Keep left-to-right placement under an RTL locale
    pub absolute_rtl_layout: bool,
    /// Target platform
    pub platform: Platform,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            item_count: 4,
            item_padding: 8.0,
            font_size: 16.0,
            label_height: 32.0,
            dropdown_offset: DropdownOffset::default(),
            dropdown_margins: Margins::default(),
            dropdown_position: None,
            animation_duration: 225,
            ripple_duration: 400,
            ripple_insets: Insets::new(16.0, 0.0, -8.0, 0.0),
            ripple_opacity: 0.54,
            shade_opacity: 0.12,
            ripple_centered: false,
            ripple_sequential: true,
            text_color: Color::rgba(0.0, 0.0, 0.0, 0.87),
            item_color: Color::rgba(0.0, 0.0, 0.0, 0.54),
            item_text_style: None,
            selected_item_color: None,
            base_color: Color::rgba(0.0, 0.0, 0.0, 0.38),
            picker_background: Color::WHITE,
            absolute_rtl_layout: false,
            platform: Platform::default(),
        }
    }
}

impl DropdownConfig {
    /// Height of one picker row.
    #[must_use]
    pub fn item_size(&self) -> f32 {
        crate::positioning::item_size(self.font_size, self.item_padding)
    }

    /// Rows visible without scrolling for `total` items.
    #[must_use]
    pub fn visible_item_count(&self, total: usize) -> usize {
        total.min(self.item_count)
    }

    /// Vertical picker offset with the platform default applied.
    #[must_use]
    pub fn offset_top(&self) -> f32 {
        self.dropdown_offset
            .top
            .unwrap_or(self.label_height + self.platform.constants().anchor_offset_top)
    }

    /// Color of the selected row.
    #[must_use]
    pub fn selected_color(&self) -> Color {
        self.selected_item_color.unwrap_or(self.text_color)
    }

    /// Color of the row at `index` given the current selection.
    ///
    /// With no selection every row uses the selected color.
    #[must_use]
    pub fn row_color(&self, index: usize, selected: Option<usize>) -> Color {
        match selected {
            Some(sel) if sel != index => self.item_color,
            _ => self.selected_color(),
        }
    }

    /// Height of the anchor field.
    #[must_use]
    pub fn field_height(&self) -> f32 {
        self.font_size.mul_add(1.5, self.label_height + self.item_padding)
    }
}
