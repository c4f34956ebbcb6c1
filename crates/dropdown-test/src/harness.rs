//! Test harness driving a [`Dropdown`] with a manual clock.

use crate::canvas::RecordingCanvas;
use crate::layout::ScriptedLayout;
use dropdown_core::{Clock, Event, ManualClock, MeasureProvider, Point, Rect, Size, Widget};
use dropdown_widgets::{Dropdown, Value, ValueChanged};
use std::sync::{Arc, Mutex};

/// Frame length used when running the clock forward.
pub const FRAME_MS: u64 = 16;

/// Callback observed by the harness.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    /// `on_focus` fired
    Focus,
    /// `on_blur` fired
    Blur,
    /// `on_change_text` fired
    Change {
        /// Committed value
        value: Value,
        /// Picked index
        index: usize,
    },
}

/// Drives a dropdown frame by frame.
///
/// The harness installs its own clock and callbacks on the wrapped dropdown,
/// replacing any set before.
pub struct Harness {
    dropdown: Dropdown,
    clock: Arc<ManualClock>,
    layout: ScriptedLayout,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl Harness {
    /// Wrap `dropdown` with its anchor at `anchor` in a `window`.
    pub fn new(dropdown: Dropdown, anchor: Rect, window: Size) -> Self {
        Self::with_layout(dropdown, ScriptedLayout::new(anchor, window))
    }

    /// Wrap `dropdown` with a scripted layout.
    pub fn with_layout(dropdown: Dropdown, layout: ScriptedLayout) -> Self {
        let clock = Arc::new(ManualClock::new(0));
        let log = Arc::new(Mutex::new(Vec::new()));

        let focus_log = log.clone();
        let blur_log = log.clone();
        let change_log = log.clone();
        let mut dropdown = dropdown
            .clock(clock.clone())
            .on_focus(move || push(&focus_log, Recorded::Focus))
            .on_blur(move || push(&blur_log, Recorded::Blur))
            .on_change_text(move |value, index, _| {
                push(
                    &change_log,
                    Recorded::Change {
                        value: value.clone(),
                        index,
                    },
                );
            });
        dropdown.layout(layout.anchor());

        Self {
            dropdown,
            clock,
            layout,
            log,
        }
    }

    /// The dropdown under test.
    #[must_use]
    pub const fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    /// Mutable access to the dropdown under test.
    pub fn dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }

    /// The scripted layout.
    pub fn layout_mut(&mut self) -> &mut ScriptedLayout {
        &mut self.layout
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    // === Time ===

    /// Tick once without moving the clock.
    pub fn tick(&mut self) -> &mut Self {
        self.dropdown.tick(&mut self.layout);
        self
    }

    /// Move the clock by `ms` and tick once.
    pub fn advance(&mut self, ms: u64) -> &mut Self {
        self.clock.advance(ms);
        self.tick()
    }

    /// Run frames for `ms` milliseconds.
    pub fn run_for(&mut self, ms: u64) -> &mut Self {
        let end = self.now().saturating_add(ms);
        self.tick();
        while self.now() < end {
            let step = FRAME_MS.min(end - self.now());
            self.advance(step);
        }
        self
    }

    /// Run frames until nothing is animating, at most `limit_ms`.
    pub fn settle(&mut self, limit_ms: u64) -> &mut Self {
        let end = self.now().saturating_add(limit_ms);
        self.tick();
        while self.dropdown.is_animating() && self.now() < end {
            self.advance(FRAME_MS);
        }
        self
    }

    // === Input ===

    /// Press the center of the anchor.
    pub fn tap_anchor(&mut self) -> &mut Self {
        let center = self.layout.anchor().center();
        self.dropdown.event(&Event::Press { position: center });
        self
    }

    /// Press the row showing item `index`. Returns the change it caused.
    pub fn tap_item(&mut self, index: usize) -> Option<ValueChanged> {
        let position = self.item_position(index)?;
        self.dropdown
            .event(&Event::Press { position })
            .and_then(|m| m.downcast::<ValueChanged>().ok())
            .map(|m| *m)
    }

    /// Press outside the picker.
    pub fn tap_backdrop(&mut self) -> &mut Self {
        let window = self.layout.window_size();
        let frame = self
            .dropdown
            .geometry()
            .map(|g| g.visual_frame())
            .unwrap_or_default();
        let candidates = [
            Point::new(0.0, 0.0),
            Point::new(window.width, 0.0),
            Point::new(0.0, window.height),
            Point::new(window.width, window.height),
        ];
        if let Some(position) = candidates.into_iter().find(|p| !frame.contains_point(p)) {
            self.dropdown.event(&Event::Press { position });
        }
        self
    }

    /// Scroll the picker list by `delta_y`.
    pub fn scroll(&mut self, delta_y: f32) -> &mut Self {
        self.dropdown.event(&Event::scroll(delta_y));
        self
    }

    /// Send the back request.
    pub fn back(&mut self) -> &mut Self {
        self.dropdown.event(&Event::BackPressed);
        self
    }

    /// Open and run until the overlay is fully shown.
    pub fn open(&mut self) -> &mut Self {
        self.tap_anchor();
        let config = self.dropdown.config();
        let budget = config.ripple_duration + config.animation_duration + FRAME_MS;
        self.settle(budget)
    }

    /// Screen position of the middle of row `index`, if it is on screen.
    #[must_use]
    pub fn item_position(&self, index: usize) -> Option<Point> {
        let row = self.dropdown.picker().rows().get(index)?.as_ref()?;
        let bounds = row.bounds();
        let frame = self.dropdown.geometry()?.visual_frame();
        let center = bounds.center();
        frame.contains_point(&center).then_some(center)
    }

    // === Observations ===

    /// Callbacks fired so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<Recorded> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Number of `on_focus` calls.
    #[must_use]
    pub fn focus_count(&self) -> usize {
        self.count(|r| matches!(r, Recorded::Focus))
    }

    /// Number of `on_blur` calls.
    #[must_use]
    pub fn blur_count(&self) -> usize {
        self.count(|r| matches!(r, Recorded::Blur))
    }

    /// Values passed to `on_change_text`.
    #[must_use]
    pub fn changes(&self) -> Vec<(Value, usize)> {
        self.recorded()
            .into_iter()
            .filter_map(|r| match r {
                Recorded::Change { value, index } => Some((value, index)),
                _ => None,
            })
            .collect()
    }

    /// Paint the dropdown onto a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.dropdown.paint(&mut canvas);
        canvas
    }

    fn count(&self, pred: impl Fn(&Recorded) -> bool) -> usize {
        self.recorded().iter().filter(|r| pred(r)).count()
    }
}

fn push(log: &Mutex<Vec<Recorded>>, entry: Recorded) {
    if let Ok(mut log) = log.lock() {
        log.push(entry);
    }
}

/// Initialise `env_logger` for tests; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
