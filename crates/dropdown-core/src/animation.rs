//! Easing curves and time-based tweens.
//!
//! Animations here are driven by wall-clock milliseconds from a
//! [`Clock`](crate::Clock): a [`Timeline`] remembers when it started and is
//! sampled with the current time, so a late frame never slows an animation
//! down.

/// Easing functions for smooth animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// Linear interpolation (no easing)
    Linear,
    /// Quadratic ease in
    EaseInQuad,
    /// Quadratic ease out
    EaseOutQuad,
    /// Quadratic ease in-out
    #[default]
    EaseInOutQuad,
    /// Cubic ease out
    EaseOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f32).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A tween that interpolates between two values over time.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Starting value
    pub from: f32,
    /// Ending value
    pub to: f32,
    /// Duration in milliseconds
    pub duration_ms: u64,
    /// Easing function
    pub easing: EasingFunction,
    /// Current elapsed time in milliseconds
    elapsed_ms: u64,
}

impl Tween {
    /// Create a new tween.
    #[must_use]
    pub fn new(from: f32, to: f32, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: EasingFunction::default(),
            elapsed_ms: 0,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Get the normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            1.0
        } else {
            (self.elapsed_ms as f32 / self.duration_ms as f32).min(1.0)
        }
    }

    /// Check if the tween is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advance the tween by delta milliseconds.
    pub fn advance(&mut self, delta_ms: u64) {
        self.seek(self.elapsed_ms.saturating_add(delta_ms));
    }

    /// Jump to an absolute elapsed time.
    pub fn seek(&mut self, elapsed_ms: u64) {
        self.elapsed_ms = elapsed_ms.min(self.duration_ms);
    }

    /// Get the current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        let t = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(t, self.from)
    }
}

/// A tween anchored to the clock time at which it started.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    tween: Tween,
    started_at_ms: u64,
}

impl Timeline {
    /// Start `tween` at `now_ms`.
    #[must_use]
    pub const fn start(tween: Tween, now_ms: u64) -> Self {
        Self {
            tween,
            started_at_ms: now_ms,
        }
    }

    /// Sample the timeline at `now_ms`, returning the current value.
    pub fn sample(&mut self, now_ms: u64) -> f32 {
        self.tween.seek(now_ms.saturating_sub(self.started_at_ms));
        self.tween.value()
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }

    /// Value at the end of the timeline.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.tween.to
    }

    /// Clock time at which the timeline started.
    #[must_use]
    pub const fn started_at(&self) -> u64 {
        self.started_at_ms
    }
}
