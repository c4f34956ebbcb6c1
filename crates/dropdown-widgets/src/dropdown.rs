//! Dropdown field: anchor, overlay lifecycle and selection.

use crate::config::DropdownConfig;
use crate::item::{
    default_label_extractor, default_value_extractor, find_index, DropdownItem, Item,
    ItemPressed, LabelExtractor, Value, ValueExtractor,
};
use crate::picker::{BackdropPressed, Picker};
use crate::positioning::{self, OverlayGeometry, PlacementInput};
use crate::ripple::Ripple;
use dropdown_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Clock, Constraints, Event, MeasureProvider, Point, Rect, Scheduler, Size,
    SystemClock, TaskId, Timeline, Tween, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Callback fired on focus or blur.
pub type FocusCallback = Box<dyn FnMut() + Send>;

/// Callback fired with the committed value, its index and the data.
pub type ChangeCallback = Box<dyn FnMut(&Value, usize, &[Option<Item>]) + Send>;

/// Message emitted when a row press commits a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChanged {
    /// Committed value
    pub value: Value,
    /// Index of the picked item
    pub index: usize,
}

/// Overlay lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Overlay hidden
    #[default]
    Closed,
    /// Focused, waiting for measurement or fading in
    Opening,
    /// Fully shown
    Open,
    /// Fading out
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    Reveal,
    Close,
}

/// Material dropdown field.
///
/// The host calls [`Dropdown::tick`] once per frame with a measurement
/// provider; every timed step (reveal, fade, close after selection) advances
/// from there.
pub struct Dropdown {
    config: DropdownConfig,
    data: Vec<Option<Item>>,
    value: Option<Value>,
    external_value: Option<Value>,
    value_extractor: ValueExtractor,
    label_extractor: LabelExtractor,
    on_focus: Option<FocusCallback>,
    on_blur: Option<FocusCallback>,
    on_change_text: Option<ChangeCallback>,
    clock: Arc<dyn Clock>,
    rtl: Option<bool>,
    phase: Phase,
    focused: bool,
    mounted: bool,
    measured: bool,
    pressed_at_ms: u64,
    opened_selection: Option<usize>,
    fade: Option<Timeline>,
    picker: Picker,
    ripple: Ripple,
    scheduler: Scheduler<Deferred>,
    pending_reveal: Option<TaskId>,
    pending_close: Option<TaskId>,
    bounds: Rect,
    viewport: Size,
    accessible_name: Option<String>,
    test_id: Option<String>,
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("config", &self.config)
            .field("data", &self.data)
            .field("value", &self.value)
            .field("phase", &self.phase)
            .field("focused", &self.focused)
            .field("mounted", &self.mounted)
            .field("picker", &self.picker)
            .finish_non_exhaustive()
    }
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new(DropdownConfig::default())
    }
}

impl Dropdown {
    /// Create a closed, mounted dropdown.
    #[must_use]
    pub fn new(config: DropdownConfig) -> Self {
        let picker = Picker::new(config.item_size(), config.item_padding)
            .background(config.picker_background);
        let ripple = Ripple::new(config.base_color, config.ripple_duration)
            .opacity(config.ripple_opacity)
            .shade_opacity(config.shade_opacity)
            .centered(config.ripple_centered)
            .sequential(config.ripple_sequential)
            .insets(config.ripple_insets);
        Self {
            config,
            data: Vec::new(),
            value: None,
            external_value: None,
            value_extractor: default_value_extractor(),
            label_extractor: default_label_extractor(),
            on_focus: None,
            on_blur: None,
            on_change_text: None,
            clock: Arc::new(SystemClock::new()),
            rtl: None,
            phase: Phase::Closed,
            focused: false,
            mounted: true,
            measured: false,
            pressed_at_ms: 0,
            opened_selection: None,
            fade: None,
            picker,
            ripple,
            scheduler: Scheduler::new(),
            pending_reveal: None,
            pending_close: None,
            bounds: Rect::default(),
            viewport: Size::ZERO,
            accessible_name: None,
            test_id: None,
        }
    }

    /// Set the items.
    #[must_use]
    pub fn data(mut self, data: impl IntoIterator<Item = Option<Item>>) -> Self {
        self.data = data.into_iter().collect();
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.external_value = Some(value.clone());
        self.value = Some(value);
        self
    }

    /// Set how an item's identity is read.
    #[must_use]
    pub fn value_extractor(mut self, f: impl Fn(&Item, usize) -> Value + Send + 'static) -> Self {
        self.value_extractor = Box::new(f);
        self
    }

    /// Set how an item's label is read.
    #[must_use]
    pub fn label_extractor(
        mut self,
        f: impl Fn(&Item, usize) -> Option<String> + Send + 'static,
    ) -> Self {
        self.label_extractor = Box::new(f);
        self
    }

    /// Called when the field gains focus.
    #[must_use]
    pub fn on_focus(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    /// Called once the overlay has fully closed.
    #[must_use]
    pub fn on_blur(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    /// Called when an item is picked.
    #[must_use]
    pub fn on_change_text(
        mut self,
        f: impl FnMut(&Value, usize, &[Option<Item>]) + Send + 'static,
    ) -> Self {
        self.on_change_text = Some(Box::new(f));
        self
    }

    /// Set the time source.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Force the text direction instead of asking the measurement provider.
    #[must_use]
    pub const fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = Some(rtl);
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name = Some(name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Configuration.
    #[must_use]
    pub const fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Items, absent ones included.
    #[must_use]
    pub fn items(&self) -> &[Option<Item>] {
        &self.data
    }

    /// Committed value.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Index of the first present item matching the committed value.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        find_index(&self.data, self.value.as_ref(), &*self.value_extractor)
    }

    /// Item matching the committed value.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_index()
            .and_then(|index| self.data.get(index))
            .and_then(Option::as_ref)
    }

    /// Text shown in the anchor: the selected item's label, else the raw value.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        match self.selected_index() {
            Some(index) => self
                .data
                .get(index)
                .and_then(Option::as_ref)
                .map(|item| self.item_title(item, index)),
            None => self.value.as_ref().map(ToString::to_string),
        }
    }

    /// Whether the field has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the overlay is shown, at any opacity.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.picker.is_visible()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the field is still mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Placement of the current overlay.
    #[must_use]
    pub const fn geometry(&self) -> Option<&OverlayGeometry> {
        self.picker.geometry()
    }

    /// Overlay opacity.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.picker.opacity()
    }

    /// Selection the overlay was opened with.
    #[must_use]
    pub const fn opened_selection(&self) -> Option<usize> {
        self.opened_selection
    }

    /// The overlay.
    #[must_use]
    pub const fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Touch feedback.
    #[must_use]
    pub const fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    /// Take a pending request to flash the picker's scroll indicators.
    pub fn take_flash_request(&mut self) -> bool {
        self.picker.take_flash_request()
    }

    /// Whether another tick would change anything.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mounted
            && (matches!(self.phase, Phase::Opening | Phase::Closing)
                || self.ripple.is_active()
                || !self.scheduler.is_empty())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Open as if pressed without a known position.
    pub fn focus(&mut self) -> bool {
        self.open(None)
    }

    /// Press the anchor at `position`.
    pub fn press(&mut self, position: Point) -> bool {
        self.open(Some(position))
    }

    /// Start closing the overlay. Returns false if it was not opening or open.
    pub fn blur(&mut self) -> bool {
        if !self.mounted || !matches!(self.phase, Phase::Opening | Phase::Open) {
            return false;
        }
        let now = self.clock.now_ms();
        if let Some(id) = self.pending_reveal.take() {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.pending_close.take() {
            self.scheduler.cancel(id);
        }
        self.phase = Phase::Closing;
        self.fade = Some(Timeline::start(
            Tween::new(self.picker.opacity(), 0.0, self.config.animation_duration),
            now,
        ));
        log::debug!("dropdown closing from opacity {}", self.picker.opacity());
        true
    }

    /// Commit the item at `index`. Ignored for absent or disabled items.
    ///
    /// While the overlay is up, a close is scheduled one animation duration
    /// later.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(Some(item)) = self.data.get(index) else {
            return false;
        };
        if item.disabled {
            return false;
        }

        let value = (self.value_extractor)(item, index);
        log::debug!("selected {value} at index {index}");
        self.value = Some(value.clone());
        if let Some(on_change_text) = self.on_change_text.as_mut() {
            on_change_text(&value, index, &self.data);
        }

        if matches!(self.phase, Phase::Opening | Phase::Open) && self.pending_close.is_none() {
            let now = self.clock.now_ms();
            self.pending_close = Some(self.scheduler.schedule(
                now,
                self.config.animation_duration,
                Deferred::Close,
            ));
        }
        true
    }

    /// Synchronise with an externally controlled value.
    ///
    /// Only a value different from the last external one overrides the
    /// committed value.
    pub fn set_value(&mut self, value: Option<Value>) {
        if !self.mounted || value == self.external_value {
            return;
        }
        self.external_value.clone_from(&value);
        self.value = value;
    }

    /// Replace the items. The overlay picks them up on its next open.
    pub fn set_data(&mut self, data: Vec<Option<Item>>) {
        if self.mounted {
            self.data = data;
        }
    }

    /// Tear down: drop every scheduled continuation and ignore further input.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.scheduler.clear();
        self.pending_reveal = None;
        self.pending_close = None;
        self.fade = None;
        log::debug!("dropdown unmounted");
    }

    /// Advance measurement, scheduled steps and animations to the clock's time.
    pub fn tick(&mut self, layout: &mut dyn MeasureProvider) {
        if !self.mounted {
            return;
        }
        let now = self.clock.now_ms();
        self.ripple.update(now);

        if self.phase == Phase::Opening && !self.measured {
            if let Some(anchor) = layout.measure_in_window() {
                let rtl = self.rtl.unwrap_or_else(|| layout.is_rtl());
                self.apply_measurement(anchor, layout.window_size(), rtl, now);
            } else {
                log::trace!("anchor measurement pending");
            }
        }

        for task in self.scheduler.drain_due(now) {
            self.run(task, now);
        }
        self.advance_fade(now);
    }

    fn open(&mut self, position: Option<Point>) -> bool {
        if !self.mounted || self.config.disabled {
            return false;
        }
        let now = self.clock.now_ms();
        if let Some(position) = position {
            self.ripple.start(position, self.bounds, now);
        }
        if self.data.is_empty() {
            log::debug!("press ignored: no items");
            return false;
        }
        if self.phase != Phase::Closed {
            return false;
        }

        self.pressed_at_ms = now;
        self.focused = true;
        self.measured = false;
        self.phase = Phase::Opening;
        log::debug!("dropdown opening with {} item(s)", self.data.len());
        if let Some(on_focus) = self.on_focus.as_mut() {
            on_focus();
        }
        true
    }

    fn apply_measurement(&mut self, anchor: Rect, window: Size, rtl: bool, now: u64) {
        self.measured = true;
        self.viewport = window;

        let selected = self.selected_index();
        let input = PlacementInput::from_config(
            &self.config,
            anchor,
            window,
            rtl,
            self.data.len(),
            selected,
        );
        let Some(geometry) = positioning::place(&input) else {
            // Data was emptied while measuring
            self.finish_close();
            return;
        };

        self.opened_selection = selected;
        let rows = self.rows(selected);
        self.picker.show(geometry, rows);
        self.picker.layout(Rect::from_size(window));

        let elapsed = now.saturating_sub(self.pressed_at_ms);
        let delay = self
            .config
            .ripple_duration
            .saturating_sub(self.config.animation_duration)
            .saturating_sub(elapsed);
        log::debug!("anchor measured, revealing in {delay}ms");
        self.pending_reveal = Some(self.scheduler.schedule(now, delay, Deferred::Reveal));
    }

    fn run(&mut self, task: Deferred, now: u64) {
        match task {
            Deferred::Reveal => {
                self.pending_reveal = None;
                if self.phase != Phase::Opening {
                    return;
                }
                if let Some(offset) = self.picker.geometry().map(|g| g.scroll_offset) {
                    self.picker.scroll_to(offset);
                }
                self.fade = Some(Timeline::start(
                    Tween::new(self.picker.opacity(), 1.0, self.config.animation_duration),
                    now,
                ));
                log::debug!("revealing picker");
            }
            Deferred::Close => {
                self.pending_close = None;
                self.blur();
            }
        }
    }

    fn advance_fade(&mut self, now: u64) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        let opacity = fade.sample(now);
        let done = fade.is_complete();
        self.picker.set_opacity(opacity);
        if !done {
            return;
        }

        self.fade = None;
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Open;
                log::debug!("dropdown open");
                if self.config.platform.constants().flash_scroll_indicators {
                    self.picker.request_flash();
                }
            }
            Phase::Closing => self.finish_close(),
            Phase::Open | Phase::Closed => {}
        }
    }

    fn finish_close(&mut self) {
        self.phase = Phase::Closed;
        self.focused = false;
        self.measured = false;
        self.opened_selection = None;
        self.picker.hide();
        log::debug!("dropdown closed");
        if let Some(on_blur) = self.on_blur.as_mut() {
            on_blur();
        }
    }

    fn item_title(&self, item: &Item, index: usize) -> String {
        (self.label_extractor)(item, index)
            .unwrap_or_else(|| (self.value_extractor)(item, index).to_string())
    }

    fn rows(&self, selected: Option<usize>) -> Vec<Option<DropdownItem>> {
        let base = self.config.item_text_style.clone().unwrap_or_default();
        self.data
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_ref().map(|item| {
                    let style = item.style.clone().unwrap_or_default().or(&base);
                    let text = TextStyle {
                        size: style.font_size.unwrap_or(self.config.font_size),
                        color: style
                            .color
                            .unwrap_or_else(|| self.config.row_color(index, selected)),
                        weight: FontWeight::Normal,
                    };
                    DropdownItem::new(index, self.item_title(item, index))
                        .text_style(text)
                        .disabled(item.disabled)
                })
            })
            .collect()
    }
}

impl Widget for Dropdown {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = constraints.bounded_width_or(200.0);
        constraints.constrain(Size::new(width, self.config.field_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.ripple.paint(canvas);

        let text_y = self.bounds.y + self.config.label_height;
        if let Some(title) = self.title() {
            let style = TextStyle {
                size: self.config.font_size,
                color: self.config.text_color,
                weight: FontWeight::Normal,
            };
            canvas.draw_text(&title, Point::new(self.bounds.x, text_y), &style);
        }

        // Accessory
        let cx = self.bounds.right() - 12.0;
        let cy = self.config.font_size.mul_add(0.75, text_y);
        canvas.fill_polygon(
            &[
                Point::new(cx - 5.0, cy - 2.5),
                Point::new(cx + 5.0, cy - 2.5),
                Point::new(cx, cy + 2.5),
            ],
            self.config.base_color,
        );

        let underline = if self.config.disabled {
            self.config.base_color.fade(0.5)
        } else {
            self.config.base_color
        };
        canvas.fill_rect(
            Rect::new(self.bounds.x, self.bounds.bottom() - 1.0, self.bounds.width, 1.0),
            underline,
        );

        self.picker.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::Press { position } => {
                if self.picker.is_visible() {
                    let message = self.picker.event(event)?;
                    if let Some(pressed) = message.downcast_ref::<ItemPressed>() {
                        let index = pressed.index;
                        if self.select(index) {
                            return self.value.clone().map(|value| {
                                Box::new(ValueChanged { value, index }) as Box<dyn Any + Send>
                            });
                        }
                    } else if message.is::<BackdropPressed>() {
                        self.blur();
                    }
                } else if self.bounds.contains_point(position) {
                    self.press(*position);
                }
                None
            }
            Event::BackPressed | Event::FocusOut => {
                self.blur();
                None
            }
            Event::Scroll { .. } => {
                if self.mounted && self.picker.is_visible() {
                    self.picker.event(event);
                }
                None
            }
            Event::Resize { size } => {
                self.viewport = *size;
                self.picker.layout(Rect::from_size(*size));
                None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        !self.config.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
