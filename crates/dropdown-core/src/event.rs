//! Input events delivered to widgets by the host.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A completed tap at a window position
    Press {
        /// Position of the tap
        position: Point,
    },
    /// Wheel or drag scroll
    Scroll {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta, positive moves the content up
        delta_y: f32,
    },
    /// The platform asked the topmost modal to close (hardware back button)
    BackPressed,
    /// Widget lost focus
    FocusOut,
    /// Window resized
    Resize {
        /// New window size
        size: Size,
    },
}

impl Event {
    /// Create a press event at the given coordinates.
    #[must_use]
    pub const fn press(x: f32, y: f32) -> Self {
        Self::Press {
            position: Point::new(x, y),
        }
    }

    /// Create a vertical scroll event.
    #[must_use]
    pub const fn scroll(delta_y: f32) -> Self {
        Self::Scroll {
            delta_x: 0.0,
            delta_y,
        }
    }

    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Press { position } => Some(*position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_constructor() {
        let e = Event::press(3.0, 4.0);
        assert_eq!(e.position(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_non_positional_events() {
        assert_eq!(Event::BackPressed.position(), None);
        assert_eq!(Event::FocusOut.position(), None);
        assert_eq!(
            Event::Resize {
                size: Size::new(1.0, 1.0)
            }
            .position(),
            None
        );
    }

    #[test]
    fn test_scroll_constructor() {
        assert_eq!(
            Event::scroll(12.0),
            Event::Scroll {
                delta_x: 0.0,
                delta_y: 12.0
            }
        );
        assert_eq!(Event::scroll(12.0).position(), None);
    }

    #[test]
    fn test_event_serde() {
        let e = Event::press(1.0, 2.0);
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
