//! Test harness for the material dropdown.
//!
//! - [`RecordingCanvas`]: records paint calls for assertions
//! - [`ScriptedLayout`]: anchor measurement that completes after N polls
//! - [`Harness`]: drives a dropdown frame by frame on a manual clock and
//!   records its callbacks
//!
//! ```
//! use dropdown_core::{Rect, Size};
//! use dropdown_test::Harness;
//! use dropdown_widgets::{Dropdown, Item, Phase};
//!
//! let dropdown = Dropdown::default().data([Some(Item::new("a")), Some(Item::new("b"))]);
//! let mut h = Harness::new(dropdown, Rect::new(16.0, 100.0, 328.0, 64.0), Size::new(360.0, 640.0));
//! h.open();
//! assert_eq!(h.dropdown().phase(), Phase::Open);
//! ```

mod canvas;
mod harness;
mod layout;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use harness::{init_logging, Harness, Recorded, FRAME_MS};
pub use layout::ScriptedLayout;
