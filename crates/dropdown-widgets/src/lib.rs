//! Material dropdown: anchor field, picker overlay and positioning engine.

pub mod config;
pub mod dropdown;
pub mod item;
pub mod picker;
pub mod positioning;
pub mod ripple;

pub use config::{DropdownConfig, DropdownOffset, Margins};
pub use dropdown::{ChangeCallback, Dropdown, FocusCallback, Phase, ValueChanged};
pub use item::{
    default_label_extractor, default_value_extractor, find_index, DropdownItem, Item,
    ItemPressed, ItemStyle, LabelExtractor, Value, ValueExtractor,
};
pub use picker::{BackdropPressed, Picker, PickerHit};
pub use positioning::{
    horizontal_placement, item_size, place, scroll_offset, tail_item_count, vertical_shift,
    HorizontalPlacement, OverlayGeometry, PlacementInput,
};
pub use ripple::Ripple;
