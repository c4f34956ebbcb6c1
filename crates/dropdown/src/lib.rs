//! Material dropdown: an anchor field that opens an animated picker placed
//! so the selected item sits over the anchor's text.
//!
//! ```
//! use dropdown::prelude::*;
//! use std::sync::Arc;
//!
//! let clock = Arc::new(ManualClock::new(0));
//! let mut field = Dropdown::new(DropdownConfig::default())
//!     .data(["A", "B", "C", "D", "E", "F"].map(|s| Some(Item::new(s))))
//!     .with_value("E")
//!     .clock(clock.clone());
//!
//! let mut layout = StaticLayout::new(Rect::new(16.0, 100.0, 328.0, 64.0), Size::new(360.0, 640.0));
//! field.focus();
//! field.tick(&mut layout);
//! assert_eq!(field.geometry().map(|g| g.scroll_offset), Some(80.0));
//! ```

pub use dropdown_core::*;
pub use dropdown_widgets as widgets;
pub use dropdown_yaml as yaml;

pub use dropdown_widgets::{
    Dropdown, DropdownConfig, Item, OverlayGeometry, Phase, PlacementInput, Value,
};
pub use dropdown_yaml::{Manifest, ManifestError};

/// Common imports.
pub mod prelude {
    pub use dropdown_core::{
        Canvas, Clock, Color, Event, ManualClock, MeasureProvider, Platform, Point, Rect, Size,
        StaticLayout, SystemClock, Widget,
    };
    pub use dropdown_widgets::{
        Dropdown, DropdownConfig, Item, OverlayGeometry, Phase, PlacementInput, Value,
        ValueChanged,
    };
    pub use dropdown_yaml::Manifest;
}
