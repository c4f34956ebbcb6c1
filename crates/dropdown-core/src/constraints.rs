//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Largest width these constraints allow, falling back to `fallback` when unbounded.
    #[must_use]
    pub fn bounded_width_or(&self, fallback: f32) -> f32 {
        if self.max_width.is_finite() {
            self.max_width
        } else {
            fallback.max(self.min_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight() {
        let c = Constraints::tight(Size::new(10.0, 20.0));
        assert_eq!(c.constrain(Size::new(100.0, 0.0)), Size::new(10.0, 20.0));
    }

    #[test]
    fn test_loose() {
        let c = Constraints::loose(Size::new(100.0, 50.0));
        assert_eq!(c.constrain(Size::new(300.0, 30.0)), Size::new(100.0, 30.0));
    }

    #[test]
    fn test_bounded_width_or() {
        assert_eq!(Constraints::unbounded().bounded_width_or(200.0), 200.0);
        assert_eq!(
            Constraints::loose(Size::new(80.0, 10.0)).bounded_width_or(200.0),
            80.0
        );
    }
}
