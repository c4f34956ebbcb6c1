//! Touch feedback: an expanding, fading circle clipped to the anchor.

use dropdown_core::{Canvas, Color, EasingFunction, Insets, Point, Rect, Timeline, Tween};

#[derive(Debug, Clone)]
struct Wave {
    origin: Point,
    area: Rect,
    max_radius: f32,
    progress: Timeline,
    value: f32,
}

/// Ripple feedback shown on press.
#[derive(Debug, Clone)]
pub struct Ripple {
    color: Color,
    opacity: f32,
    shade_opacity: f32,
    duration_ms: u64,
    centered: bool,
    sequential: bool,
    insets: Insets,
    waves: Vec<Wave>,
}

impl Ripple {
    /// Create a ripple of `color` lasting `duration_ms`.
    #[must_use]
    pub fn new(color: Color, duration_ms: u64) -> Self {
        Self {
            color,
            opacity: 0.54,
            shade_opacity: 0.12,
            duration_ms,
            centered: false,
            sequential: true,
            insets: Insets::ZERO,
            waves: Vec::new(),
        }
    }

    /// Peak opacity of the wave.
    #[must_use]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Opacity of the pressed shade.
    #[must_use]
    pub const fn shade_opacity(mut self, opacity: f32) -> Self {
        self.shade_opacity = opacity;
        self
    }

    /// Always start from the center of the area.
    #[must_use]
    pub const fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Ignore new presses while a wave is running. Otherwise waves overlap.
    #[must_use]
    pub const fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    /// Insets applied to the pressed bounds.
    #[must_use]
    pub const fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Area covered by the ripple for a widget occupying `bounds`.
    #[must_use]
    pub fn area(&self, bounds: Rect) -> Rect {
        bounds.inset_by(self.insets)
    }

    /// Start a wave at `at` inside `bounds`.
    ///
    /// `at` and `bounds` share window coordinates, so the press point needs no
    /// shift into the inset area. Returns false when a sequential ripple is
    /// still running.
    pub fn start(&mut self, at: Point, bounds: Rect, now_ms: u64) -> bool {
        if self.sequential && self.is_active() {
            return false;
        }
        let area = self.area(bounds);
        let origin = if self.centered { area.center() } else { at };
        let max_radius = [
            Point::new(area.x, area.y),
            Point::new(area.right(), area.y),
            Point::new(area.x, area.bottom()),
            Point::new(area.right(), area.bottom()),
        ]
        .iter()
        .map(|corner| origin.distance(corner))
        .fold(0.0, f32::max);

        log::trace!("ripple at ({}, {}) radius {max_radius}", origin.x, origin.y);
        self.waves.push(Wave {
            origin,
            area,
            max_radius,
            progress: Timeline::start(
                Tween::new(0.0, 1.0, self.duration_ms).with_easing(EasingFunction::EaseOutQuad),
                now_ms,
            ),
            value: 0.0,
        });
        true
    }

    /// Advance to `now_ms`, dropping waves that have faded.
    pub fn update(&mut self, now_ms: u64) {
        for wave in &mut self.waves {
            wave.value = wave.progress.sample(now_ms);
        }
        self.waves.retain(|wave| !wave.progress.is_complete());
    }

    /// Whether a wave is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.waves.is_empty()
    }

    /// Number of running waves.
    #[must_use]
    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    /// Radius of the newest wave.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.waves.last().map_or(0.0, Self::wave_radius)
    }

    /// Alpha of the newest wave.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.waves.last().map_or(0.0, |w| self.wave_alpha(w))
    }

    /// Center of the newest wave.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.waves.last().map(|w| w.origin)
    }

    /// Paint the shade and every wave.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(newest) = self.waves.last() else {
            return;
        };
        canvas.push_clip(newest.area);
        let fade = 1.0 - newest.value;
        canvas.fill_rect(newest.area, self.color.fade(self.shade_opacity * fade));
        for wave in &self.waves {
            canvas.fill_circle(
                wave.origin,
                Self::wave_radius(wave),
                self.color.fade(self.wave_alpha(wave)),
            );
        }
        canvas.pop_clip();
    }

    fn wave_radius(wave: &Wave) -> f32 {
        wave.max_radius * wave.value
    }

    fn wave_alpha(&self, wave: &Wave) -> f32 {
        self.opacity * (1.0 - wave.value)
    }
}
