//! Core types and traits for the material dropdown widget.
//!
//! This crate provides foundational types used by the widget crates:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`] with CSS-style parsing
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`]
//! - Time: [`Clock`], [`Tween`], [`Timeline`], [`Scheduler`]
//! - Host capabilities: [`MeasureProvider`], [`Platform`]

pub mod animation;
mod clock;
mod color;
mod constraints;
mod event;
mod geometry;
mod platform;
pub mod scheduler;
pub mod widget;

pub use animation::{EasingFunction, Timeline, Tween};
pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::Event;
pub use geometry::{Insets, Point, Rect, Size};
pub use platform::{MeasureProvider, Platform, PlatformConstants, StaticLayout};
pub use scheduler::{Scheduler, TaskId};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, Transform2D, TypeId, Widget,
};
