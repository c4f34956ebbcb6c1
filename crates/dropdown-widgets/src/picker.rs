//! The overlay list shown while the dropdown is open.

use crate::item::{DropdownItem, ItemPressed};
use crate::positioning::OverlayGeometry;
use dropdown_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Point, Rect, Size, Transform2D, TypeId, Widget,
};
use std::any::Any;

/// Message emitted when a press lands outside the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropPressed;

/// What a point hits while the picker is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerHit {
    /// A row, by data index
    Row(usize),
    /// Inside the picker but not on a pressable row
    Inside,
    /// Outside the picker
    Outside,
}

/// Scrollable overlay list.
///
/// Rows are indexed by data position; absent items keep their slot but render
/// nothing.
#[derive(Debug, Clone)]
pub struct Picker {
    geometry: Option<OverlayGeometry>,
    rows: Vec<Option<DropdownItem>>,
    item_size: f32,
    item_padding: f32,
    opacity: f32,
    scroll_offset: f32,
    background: Color,
    backdrop: Rect,
    flash_requested: bool,
}

impl Picker {
    /// Create a hidden picker.
    #[must_use]
    pub fn new(item_size: f32, item_padding: f32) -> Self {
        Self {
            geometry: None,
            rows: Vec::new(),
            item_size,
            item_padding,
            opacity: 0.0,
            scroll_offset: 0.0,
            background: Color::WHITE,
            backdrop: Rect::default(),
            flash_requested: false,
        }
    }

    /// Set the background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Show at `geometry` with `rows`, fully transparent and unscrolled.
    pub fn show(&mut self, geometry: OverlayGeometry, rows: Vec<Option<DropdownItem>>) {
        self.geometry = Some(geometry);
        self.rows = rows
            .into_iter()
            .map(|row| row.map(|r| r.insets(geometry.left_inset, geometry.right_inset)))
            .collect();
        self.opacity = 0.0;
        self.scroll_offset = 0.0;
        self.flash_requested = false;
        self.layout_rows();
    }

    /// Hide and drop the rows.
    pub fn hide(&mut self) {
        self.geometry = None;
        self.rows.clear();
        self.opacity = 0.0;
        self.scroll_offset = 0.0;
        self.flash_requested = false;
    }

    /// Whether the overlay is shown (at any opacity).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.geometry.is_some()
    }

    /// Current placement.
    #[must_use]
    pub const fn geometry(&self) -> Option<&OverlayGeometry> {
        self.geometry.as_ref()
    }

    /// Rows by data index.
    #[must_use]
    pub fn rows(&self) -> &[Option<DropdownItem>] {
        &self.rows
    }

    /// Current opacity.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity of the whole overlay.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
        for row in self.rows.iter_mut().flatten() {
            row.set_opacity(self.opacity);
        }
    }

    /// Height of the scrollable content.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.item_padding.mul_add(2.0, self.item_size * self.rows.len() as f32)
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f32 {
        self.geometry
            .map_or(0.0, |g| (self.content_height() - g.height).max(0.0))
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll the list, clamped to the content.
    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll_offset());
        self.layout_rows();
    }

    /// Scroll the list by `delta`, clamped to the content.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_offset + delta);
    }

    /// Whether the list is longer than the overlay.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.max_scroll_offset() > 0.0
    }

    /// Ask the host to flash scroll indicators.
    pub fn request_flash(&mut self) {
        self.flash_requested = true;
    }

    /// Take a pending flash request.
    pub fn take_flash_request(&mut self) -> bool {
        std::mem::take(&mut self.flash_requested)
    }

    /// Resolve what `point` hits.
    #[must_use]
    pub fn hit(&self, point: &Point) -> PickerHit {
        let Some(geometry) = self.geometry else {
            return PickerHit::Outside;
        };
        let frame = geometry.visual_frame();
        if !frame.contains_point(point) {
            return PickerHit::Outside;
        }

        let content_y = point.y - frame.y + self.scroll_offset - self.item_padding;
        if content_y < 0.0 {
            return PickerHit::Inside;
        }
        let index = (content_y / self.item_size) as usize;
        match self.rows.get(index) {
            Some(Some(row)) => row.press().map_or(PickerHit::Inside, PickerHit::Row),
            _ => PickerHit::Inside,
        }
    }

    fn layout_rows(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };
        let frame = geometry.visual_frame();
        let first = frame.y + self.item_padding - self.scroll_offset;
        for (index, row) in self.rows.iter_mut().enumerate() {
            if let Some(row) = row {
                let y = (index as f32).mul_add(self.item_size, first);
                row.layout(Rect::new(frame.x, y, frame.width, self.item_size));
            }
        }
    }
}

impl Widget for Picker {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let size = self
            .geometry
            .map_or(Size::ZERO, |g| Size::new(g.width, g.height));
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.backdrop = bounds;
        self.layout_rows();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(geometry) = self.geometry else {
            return;
        };
        if self.opacity <= 0.0 {
            return;
        }

        let frame = geometry.frame();
        canvas.push_transform(Transform2D::translate(0.0, geometry.vertical_shift));
        canvas.fill_rect(frame, self.background.fade(self.opacity));
        canvas.pop_transform();

        // Rows are laid out in screen space already
        canvas.push_clip(geometry.visual_frame());
        for row in self.rows.iter().flatten() {
            let bounds = row.bounds();
            if bounds.bottom() >= geometry.visual_frame().y
                && bounds.y <= geometry.visual_frame().bottom()
            {
                row.paint(canvas);
            }
        }
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::Press { position } => match self.hit(position) {
                PickerHit::Row(index) => Some(Box::new(ItemPressed { index })),
                PickerHit::Inside => None,
                PickerHit::Outside if self.is_visible() => Some(Box::new(BackdropPressed)),
                PickerHit::Outside => None,
            },
            Event::Scroll { delta_y, .. } if self.is_scrollable() => {
                self.scroll_by(*delta_y);
                None
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        self.is_visible()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }

    fn bounds(&self) -> Rect {
        self.geometry.map_or(Rect::default(), |g| g.visual_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 6 rows of 40 with padding 8, 4 visible, shifted up by one row
    fn geometry() -> OverlayGeometry {
        OverlayGeometry {
            top: 100.0,
            left: 8.0,
            width: 200.0,
            height: 176.0,
            scroll_offset: 80.0,
            vertical_shift: -48.0,
            left_inset: 16.0,
            right_inset: 16.0,
        }
    }

    fn rows(n: usize) -> Vec<Option<DropdownItem>> {
        (0..n)
            .map(|i| Some(DropdownItem::new(i, format!("Item {i}"))))
            .collect()
    }

    fn shown() -> Picker {
        let mut picker = Picker::new(40.0, 8.0);
        picker.show(geometry(), rows(6));
        picker
    }

    #[test]
    fn test_hidden_by_default() {
        let picker = Picker::new(40.0, 8.0);
        assert!(!picker.is_visible());
        assert_eq!(picker.hit(&Point::new(0.0, 0.0)), PickerHit::Outside);
    }

    #[test]
    fn test_show_starts_transparent_and_unscrolled() {
        let picker = shown();
        assert!(picker.is_visible());
        assert_eq!(picker.opacity(), 0.0);
        assert_eq!(picker.scroll_offset(), 0.0);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut picker = shown();
        assert_eq!(picker.content_height(), 256.0);
        assert_eq!(picker.max_scroll_offset(), 80.0);
        picker.scroll_to(500.0);
        assert_eq!(picker.scroll_offset(), 80.0);
        picker.scroll_to(-3.0);
        assert_eq!(picker.scroll_offset(), 0.0);
    }

    #[test]
    fn test_hit_rows_account_for_scroll_and_shift() {
        let mut picker = shown();
        // Visual frame starts at y = 52
        assert_eq!(picker.hit(&Point::new(20.0, 52.0 + 8.0 + 5.0)), PickerHit::Row(0));
        picker.scroll_to(80.0);
        assert_eq!(picker.hit(&Point::new(20.0, 52.0 + 8.0 + 5.0)), PickerHit::Row(2));
        assert_eq!(picker.hit(&Point::new(20.0, 52.0 + 8.0 + 125.0)), PickerHit::Row(5));
    }

    #[test]
    fn test_hit_padding_and_outside() {
        let picker = shown();
        assert_eq!(picker.hit(&Point::new(20.0, 54.0)), PickerHit::Inside);
        assert_eq!(picker.hit(&Point::new(300.0, 100.0)), PickerHit::Outside);
        assert_eq!(picker.hit(&Point::new(20.0, 10.0)), PickerHit::Outside);
    }

    #[test]
    fn test_hit_disabled_and_absent_rows() {
        let mut picker = Picker::new(40.0, 8.0);
        picker.show(
            geometry(),
            vec![Some(DropdownItem::new(0, "A").disabled(true)), None],
        );
        assert_eq!(picker.hit(&Point::new(20.0, 65.0)), PickerHit::Inside);
        assert_eq!(picker.hit(&Point::new(20.0, 105.0)), PickerHit::Inside);
    }

    #[test]
    fn test_event_messages() {
        let mut picker = shown();
        let msg = picker.event(&Event::press(20.0, 65.0)).unwrap();
        assert_eq!(msg.downcast::<ItemPressed>().unwrap().index, 0);

        let msg = picker.event(&Event::press(300.0, 300.0)).unwrap();
        assert!(msg.downcast::<BackdropPressed>().is_ok());

        assert!(picker.event(&Event::BackPressed).is_none());
    }

    #[test]
    fn test_scroll_event_reaches_trailing_rows() {
        let mut picker = shown();
        assert_eq!(picker.hit(&Point::new(20.0, 190.0)), PickerHit::Row(3));

        assert!(picker.event(&Event::scroll(50.0)).is_none());
        assert_eq!(picker.scroll_offset(), 50.0);
        picker.event(&Event::scroll(50.0));
        assert_eq!(picker.scroll_offset(), 80.0);
        assert_eq!(picker.hit(&Point::new(20.0, 190.0)), PickerHit::Row(5));

        picker.event(&Event::scroll(-500.0));
        assert_eq!(picker.scroll_offset(), 0.0);
    }

    #[test]
    fn test_short_list_ignores_scroll() {
        let mut picker = Picker::new(40.0, 8.0);
        picker.show(geometry(), rows(3));
        assert!(!picker.is_scrollable());
        picker.event(&Event::scroll(30.0));
        assert_eq!(picker.scroll_offset(), 0.0);
    }

    #[test]
    fn test_set_opacity_propagates_to_rows() {
        let mut picker = shown();
        picker.set_opacity(2.0);
        assert_eq!(picker.opacity(), 1.0);
    }

    #[test]
    fn test_flash_request_taken_once() {
        let mut picker = shown();
        assert!(!picker.take_flash_request());
        picker.request_flash();
        assert!(picker.take_flash_request());
        assert!(!picker.take_flash_request());
    }

    #[test]
    fn test_hide_resets() {
        let mut picker = shown();
        picker.set_opacity(1.0);
        picker.hide();
        assert!(!picker.is_visible());
        assert!(picker.rows().is_empty());
        assert_eq!(picker.opacity(), 0.0);
    }
}
