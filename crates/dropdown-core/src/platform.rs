//! Platform constants and host measurement.
//!
//! Per-OS tweaks live in a small table instead of inline branches, and anchor
//! measurement is a capability the host hands to the widget.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS
    Ios,
    /// Android
    #[default]
    Android,
    /// Anything else (desktop, web)
    Other,
}

/// Constants that differ between platforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformConstants {
    /// Extra vertical offset between the anchor's label line and the picker
    pub anchor_offset_top: f32,
    /// Whether scroll indicators should flash once the picker is revealed
    pub flash_scroll_indicators: bool,
}

impl Platform {
    /// Constants for this platform.
    #[must_use]
    pub const fn constants(self) -> PlatformConstants {
        match self {
            Self::Ios => PlatformConstants {
                anchor_offset_top: 1.0,
                flash_scroll_indicators: true,
            },
            Self::Android => PlatformConstants {
                anchor_offset_top: 2.0,
                flash_scroll_indicators: false,
            },
            Self::Other => PlatformConstants {
                anchor_offset_top: 0.0,
                flash_scroll_indicators: false,
            },
        }
    }
}

/// Anchor measurement supplied by the host.
///
/// Layout completes asynchronously, so the widget polls this once per tick
/// until it yields a frame.
pub trait MeasureProvider {
    /// Anchor frame in window coordinates, or `None` while layout is pending.
    fn measure_in_window(&mut self) -> Option<Rect>;

    /// Current window size.
    fn window_size(&self) -> Size;

    /// Whether the platform lays text out right-to-left.
    fn is_rtl(&self) -> bool {
        false
    }
}

/// A provider whose layout is already known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLayout {
    /// Anchor frame in window coordinates
    pub anchor: Rect,
    /// Window size
    pub window: Size,
    /// Right-to-left text direction
    pub rtl: bool,
}

impl StaticLayout {
    /// Create a left-to-right layout.
    #[must_use]
    pub const fn new(anchor: Rect, window: Size) -> Self {
        Self {
            anchor,
            window,
            rtl: false,
        }
    }

    /// Set right-to-left text direction.
    #[must_use]
    pub const fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }
}

impl MeasureProvider for StaticLayout {
    fn measure_in_window(&mut self) -> Option<Rect> {
        Some(self.anchor)
    }

    fn window_size(&self) -> Size {
        self.window
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }
}
