//! Picker placement relative to its anchor.
//!
//! Pure functions: given the anchor frame, the viewport and the item metrics,
//! compute where the overlay goes, how far its list is scrolled, and how far it
//! is shifted up so the selected row lands over the anchor's text.

use crate::config::{DropdownConfig, Margins};
use dropdown_core::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Height of one row: `ceil(font_size * 1.5 + item_padding * 2)`.
#[must_use]
pub fn item_size(font_size: f32, item_padding: f32) -> f32 {
    font_size.mul_add(1.5, item_padding * 2.0).ceil()
}

/// Rows in the trailing window of a list showing `visible` rows.
#[must_use]
pub const fn tail_item_count(visible: usize) -> usize {
    visible.saturating_sub(2)
}

/// Everything placement depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementInput {
    /// Anchor frame in window coordinates
    pub anchor: Rect,
    /// Window size
    pub viewport: Size,
    /// Mirror horizontally
    pub rtl: bool,
    /// Row height
    pub item_size: f32,
    /// Row padding
    pub item_padding: f32,
    /// Total number of items, absent ones included
    pub item_count: usize,
    /// Rows visible without scrolling
    pub visible_count: usize,
    /// Index of the selected item
    pub selected: Option<usize>,
    /// Horizontal margins
    pub margins: Margins,
    /// Vertical offset from the anchor's top
    pub offset_top: f32,
    /// Horizontal offset from the anchor's left
    pub offset_left: f32,
    /// Fixed slot for the selected row
    pub position: Option<i32>,
}

impl PlacementInput {
    /// Build the input for `item_count` items from a configuration.
    ///
    /// `rtl` is the platform's direction; it is ignored when the configuration
    /// asks for absolute layout.
    #[must_use]
    pub fn from_config(
        config: &DropdownConfig,
        anchor: Rect,
        viewport: Size,
        rtl: bool,
        item_count: usize,
        selected: Option<usize>,
    ) -> Self {
        Self {
            anchor,
            viewport,
            rtl: rtl && !config.absolute_rtl_layout,
            item_size: config.item_size(),
            item_padding: config.item_padding,
            item_count,
            visible_count: config.visible_item_count(item_count),
            selected,
            margins: config.dropdown_margins,
            offset_top: config.offset_top(),
            offset_left: config.dropdown_offset.left,
            position: config.dropdown_position,
        }
    }
}

/// Placement of the picker overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    /// Top edge before the vertical shift
    pub top: f32,
    /// Left edge
    pub left: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Initial scroll offset of the list
    pub scroll_offset: f32,
    /// Vertical translation applied to the whole overlay (never positive)
    pub vertical_shift: f32,
    /// Text inset on the left of each row
    pub left_inset: f32,
    /// Text inset on the right of each row
    pub right_inset: f32,
}

impl OverlayGeometry {
    /// Frame before the vertical shift.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Frame as drawn on screen.
    #[must_use]
    pub fn visual_frame(&self) -> Rect {
        self.frame().translate(0.0, self.vertical_shift)
    }
}

/// Horizontal extent of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPlacement {
    /// Left edge
    pub left: f32,
    /// Width
    pub width: f32,
    /// Text inset on the left
    pub left_inset: f32,
    /// Text inset on the right
    pub right_inset: f32,
}

/// Place the overlay horizontally around an anchor spanning `x..x + width`.
///
/// Each side extends `margins.max` beyond the anchor unless that would leave
/// less than `margins.min` to the viewport edge, in which case it is pinned
/// `margins.min` from the edge.
#[must_use]
pub fn horizontal_placement(
    x: f32,
    width: f32,
    viewport_width: f32,
    offset_left: f32,
    margins: Margins,
) -> HorizontalPlacement {
    let mut left = x + offset_left - margins.max;
    let left_inset = if left > margins.min {
        margins.max
    } else {
        left = margins.min;
        margins.min
    };

    let mut right = x + width + margins.max;
    let right_inset = if viewport_width - right > margins.min {
        margins.max
    } else {
        right = viewport_width - margins.min;
        margins.min
    };

    let left = left.min(right);
    HorizontalPlacement {
        left,
        width: right - left,
        left_inset,
        right_inset,
    }
}

/// Initial scroll offset of the list.
#[must_use]
pub fn scroll_offset(
    item_size: f32,
    count: usize,
    visible: usize,
    selected: Option<usize>,
    position: Option<i32>,
) -> f32 {
    if count <= visible {
        return 0.0;
    }
    let Some(selected) = selected else {
        return 0.0;
    };

    let max_slot = (count - visible) as i64;
    let slot = match position {
        None => {
            if selected <= 1 {
                0
            } else if selected >= count - tail_item_count(visible) {
                max_slot
            } else {
                selected as i64 - 1
            }
        }
        Some(p) => {
            let p = i64::from(p);
            if p < 0 {
                selected as i64 - (visible as i64 + p)
            } else {
                selected as i64 - p
            }
        }
    };

    item_size * slot.clamp(0, max_slot) as f32
}

/// Vertical translation of the overlay.
#[must_use]
pub fn vertical_shift(
    item_size: f32,
    item_padding: f32,
    count: usize,
    visible: usize,
    selected: Option<usize>,
    position: Option<i32>,
) -> f32 {
    let rows = match position {
        Some(p) if p < 0 => visible as f32 + p as f32,
        Some(p) => p as f32,
        None => match selected {
            None if count == 1 => 0.0,
            None => 1.0,
            Some(0) => 0.0,
            Some(sel) if sel >= count.saturating_sub(tail_item_count(visible)) => {
                visible as f32 - count.saturating_sub(sel) as f32
            }
            Some(_) => 1.0,
        },
    };

    -item_padding - item_size * rows
}

/// Compute the overlay geometry. Returns `None` when there are no items.
#[must_use]
pub fn place(input: &PlacementInput) -> Option<OverlayGeometry> {
    if input.item_count == 0 {
        return None;
    }

    let mut x = input.anchor.x;
    if input.rtl {
        x = input.viewport.width - (x + input.anchor.width);
    }

    let horizontal = horizontal_placement(
        x,
        input.anchor.width,
        input.viewport.width,
        input.offset_left,
        input.margins,
    );

    let geometry = OverlayGeometry {
        top: input.anchor.y + input.offset_top - input.item_padding,
        left: horizontal.left,
        width: horizontal.width,
        height: (input.item_padding * 2.0) + input.item_size * input.visible_count as f32,
        scroll_offset: scroll_offset(
            input.item_size,
            input.item_count,
            input.visible_count,
            input.selected,
            input.position,
        ),
        vertical_shift: vertical_shift(
            input.item_size,
            input.item_padding,
            input.item_count,
            input.visible_count,
            input.selected,
            input.position,
        ),
        left_inset: horizontal.left_inset,
        right_inset: horizontal.right_inset,
    };

    log::debug!(
        "placed picker at ({}, {}) {}x{}, scroll {}, shift {}",
        geometry.left,
        geometry.top,
        geometry.width,
        geometry.height,
        geometry.scroll_offset,
        geometry.vertical_shift
    );
    Some(geometry)
}
