//! Selectable items, extractors, and the row widget that renders one item.

use dropdown_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Identity of an item: text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// Per-item text style override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStyle {
    /// Text color
    pub color: Option<Color>,
    /// Font size
    pub font_size: Option<f32>,
}

impl ItemStyle {
    /// Fill unset fields from `base`.
    #[must_use]
    pub fn or(&self, base: &Self) -> Self {
        Self {
            color: self.color.or(base.color),
            font_size: self.font_size.or(base.font_size),
        }
    }
}

/// A selectable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identity of the item
    pub value: Value,
    /// Display label (falls back to the value)
    #[serde(default)]
    pub label: Option<String>,
    /// Whether the item can be picked
    #[serde(default)]
    pub disabled: bool,
    /// Text style override
    #[serde(default)]
    pub style: Option<ItemStyle>,
}

impl Item {
    /// Create an item identified by `value`.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            label: None,
            disabled: false,
            style: None,
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the text style override.
    #[must_use]
    pub fn style(mut self, style: ItemStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Maps an item and its index to its identity value.
pub type ValueExtractor = Box<dyn Fn(&Item, usize) -> Value + Send>;

/// Maps an item and its index to its display label.
pub type LabelExtractor = Box<dyn Fn(&Item, usize) -> Option<String> + Send>;

/// Extractor reading [`Item::value`].
#[must_use]
pub fn default_value_extractor() -> ValueExtractor {
    Box::new(|item, _| item.value.clone())
}

/// Extractor reading [`Item::label`].
#[must_use]
pub fn default_label_extractor() -> LabelExtractor {
    Box::new(|item, _| item.label.clone())
}

/// Index of the first present item whose extracted value equals `value`.
pub fn find_index(
    data: &[Option<Item>],
    value: Option<&Value>,
    extract: &dyn Fn(&Item, usize) -> Value,
) -> Option<usize> {
    let value = value?;
    data.iter().enumerate().find_map(|(index, item)| {
        item.as_ref()
            .filter(|item| extract(item, index) == *value)
            .map(|_| index)
    })
}

/// Message emitted when a row is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPressed {
    /// Index of the row in the data
    pub index: usize,
}

/// One row of the picker.
#[derive(Debug, Clone)]
pub struct DropdownItem {
    index: usize,
    title: String,
    style: TextStyle,
    disabled: bool,
    left_inset: f32,
    right_inset: f32,
    opacity: f32,
    bounds: Rect,
}

impl DropdownItem {
    /// Create a row for the item at `index`.
    #[must_use]
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            style: TextStyle::default(),
            disabled: false,
            left_inset: 0.0,
            right_inset: 0.0,
            opacity: 1.0,
            bounds: Rect::default(),
        }
    }

    /// Set the text style.
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Horizontal text insets.
    #[must_use]
    pub const fn insets(mut self, left: f32, right: f32) -> Self {
        self.left_inset = left;
        self.right_inset = right;
        self
    }

    /// Index in the data.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Text shown in the row.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text style of the row.
    #[must_use]
    pub const fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Whether the row ignores presses.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Multiply the text alpha by `opacity` when painting.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Forward a press: the row's index, unless disabled.
    #[must_use]
    pub const fn press(&self) -> Option<usize> {
        if self.disabled {
            None
        } else {
            Some(self.index)
        }
    }
}

impl Widget for DropdownItem {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.title.chars().count() as f32 * self.style.size * 0.6
            + self.left_inset
            + self.right_inset;
        constraints.constrain(Size::new(width, self.style.size * 1.5))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let baseline = self.bounds.y + (self.bounds.height - self.style.size) / 2.0;
        let pos = Point::new(self.bounds.x + self.left_inset, baseline);
        let style = TextStyle {
            color: self.style.color.fade(self.opacity),
            ..self.style.clone()
        };
        canvas.draw_text(&self.title, pos, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::Press { position } if self.bounds.contains_point(position) => self
                .press()
                .map(|index| Box::new(ItemPressed { index }) as Box<dyn Any + Send>),
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ListItem
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<Option<Item>> {
        vec![
            Some(Item::new("a").label("Apple")),
            None,
            Some(Item::new("b")),
            Some(Item::new("b").label("Duplicate")),
        ]
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_value_untagged_serde() {
        let v: Value = serde_json::from_str("42").unwrap();
        assert_eq!(v, Value::Number(42.0));
        let v: Value = serde_json::from_str("\"Banana\"").unwrap();
        assert_eq!(v, Value::from("Banana"));
    }

    #[test]
    fn test_item_deserialize_defaults() {
        let item: Item = serde_json::from_str(r#"{"value": "x"}"#).unwrap();
        assert_eq!(item, Item::new("x"));
    }

    #[test]
    fn test_find_index_first_match() {
        let extract = default_value_extractor();
        assert_eq!(find_index(&data(), Some(&Value::from("b")), &extract), Some(2));
    }

    #[test]
    fn test_find_index_absent_value() {
        let extract = default_value_extractor();
        assert_eq!(find_index(&data(), Some(&Value::from("z")), &extract), None);
        assert_eq!(find_index(&data(), None, &extract), None);
    }

    #[test]
    fn test_find_index_skips_absent_items() {
        let extract: ValueExtractor = Box::new(|_, index| Value::from(index as i32));
        assert_eq!(find_index(&data(), Some(&Value::from(1)), &extract), None);
        assert_eq!(find_index(&data(), Some(&Value::from(3)), &extract), Some(3));
    }

    #[test]
    fn test_default_label_extractor() {
        let extract = default_label_extractor();
        assert_eq!(extract(&Item::new("a").label("A"), 0), Some("A".to_string()));
        assert_eq!(extract(&Item::new("a"), 0), None);
    }

    #[test]
    fn test_row_press_forwards_index() {
        let row = DropdownItem::new(3, "Three");
        assert_eq!(row.press(), Some(3));
        assert_eq!(row.clone().disabled(true).press(), None);
    }

    #[test]
    fn test_row_event_hit_test() {
        let mut row = DropdownItem::new(1, "One");
        row.layout(Rect::new(0.0, 40.0, 100.0, 40.0));

        let hit = row.event(&Event::press(10.0, 60.0)).unwrap();
        assert_eq!(hit.downcast::<ItemPressed>().unwrap().index, 1);
        assert!(row.event(&Event::press(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_row_accessibility() {
        let row = DropdownItem::new(0, "Zero");
        assert_eq!(row.accessible_role(), AccessibleRole::ListItem);
        assert_eq!(row.accessible_name(), Some("Zero"));
        assert!(row.is_interactive());
    }
}
