//! A canvas that records what was painted.

use dropdown_core::{Canvas, Color, Point, Rect, TextStyle, Transform2D};

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled or stroked rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill or stroke color
        color: Color,
        /// Stroke width, `None` when filled
        stroke: Option<f32>,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Top-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Filled circle
    Circle {
        /// Center
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Filled polygon
    Polygon {
        /// Vertices
        points: Vec<Point>,
        /// Fill color
        color: Color,
    },
    /// Clip pushed
    PushClip(Rect),
    /// Clip popped
    PopClip,
    /// Transform pushed
    PushTransform(Transform2D),
    /// Transform popped
    PopTransform,
}

/// Canvas implementation that records draw operations.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
    transform_depth: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text runs in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Style of the first text run with `content`.
    #[must_use]
    pub fn text_style(&self, content: &str) -> Option<&TextStyle> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text {
                content: text,
                style,
                ..
            } if text == content => Some(style),
            _ => None,
        })
    }

    /// Whether every pushed clip and transform was popped.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.clip_depth == 0 && self.transform_depth == 0
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
        self.transform_depth = 0;
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
            stroke: None,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
            stroke: Some(width),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.transform_depth += 1;
        self.commands.push(DrawCommand::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        self.transform_depth = self.transform_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopTransform);
    }
}
