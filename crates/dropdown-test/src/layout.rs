//! Scripted anchor measurement.

use dropdown_core::{MeasureProvider, Rect, Size};

/// A measurement provider whose layout completes after a set number of polls.
#[derive(Debug, Clone)]
pub struct ScriptedLayout {
    anchor: Rect,
    window: Size,
    rtl: bool,
    pending_polls: usize,
    polls: usize,
}

impl ScriptedLayout {
    /// Layout that is available on the first poll.
    #[must_use]
    pub const fn new(anchor: Rect, window: Size) -> Self {
        Self {
            anchor,
            window,
            rtl: false,
            pending_polls: 0,
            polls: 0,
        }
    }

    /// Report "not laid out yet" for the next `polls` polls.
    #[must_use]
    pub const fn pending(mut self, polls: usize) -> Self {
        self.pending_polls = polls;
        self
    }

    /// Set right-to-left text direction.
    #[must_use]
    pub const fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Move the anchor.
    pub fn set_anchor(&mut self, anchor: Rect) {
        self.anchor = anchor;
    }

    /// Delay the next measurement by `polls` polls.
    pub fn delay(&mut self, polls: usize) {
        self.pending_polls = polls;
    }

    /// Anchor frame.
    #[must_use]
    pub const fn anchor(&self) -> Rect {
        self.anchor
    }

    /// Number of polls so far.
    #[must_use]
    pub const fn polls(&self) -> usize {
        self.polls
    }
}

impl MeasureProvider for ScriptedLayout {
    fn measure_in_window(&mut self) -> Option<Rect> {
        self.polls += 1;
        if self.pending_polls > 0 {
            self.pending_polls -= 1;
            log::trace!("layout pending, {} poll(s) left", self.pending_polls);
            return None;
        }
        Some(self.anchor)
    }

    fn window_size(&self) -> Size {
        self.window
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_polls() {
        let anchor = Rect::new(0.0, 0.0, 100.0, 40.0);
        let mut layout = ScriptedLayout::new(anchor, Size::new(320.0, 480.0)).pending(2);
        assert_eq!(layout.measure_in_window(), None);
        assert_eq!(layout.measure_in_window(), None);
        assert_eq!(layout.measure_in_window(), Some(anchor));
        assert_eq!(layout.polls(), 3);
    }

    #[test]
    fn test_delay_and_move() {
        let mut layout = ScriptedLayout::new(Rect::default(), Size::new(320.0, 480.0)).rtl(true);
        layout.delay(1);
        layout.set_anchor(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(layout.measure_in_window(), None);
        assert_eq!(layout.measure_in_window(), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(layout.is_rtl());
    }
}
