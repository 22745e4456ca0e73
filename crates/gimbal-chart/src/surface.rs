//! Drawing-surface abstraction.
//!
//! The renderer only talks to this trait, so the same chart draws to
//! an egui painter (see the `egui-integration` feature) or, in tests,
//! to a [`RecordedSurface`] that captures every primitive.

use glam::Vec2;

use crate::color::Color;

/// Where text is anchored relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Anchor point above the text, horizontally centered.
    CenterTop,
    /// Anchor point right of the text, vertically centered.
    RightCenter,
    /// Anchor point left of the text, vertically centered.
    LeftCenter,
}

/// A drawing surface of known pixel size.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> Vec2;

    /// Stroke a line segment.
    fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color);

    /// Fill an axis-aligned rectangle given its top-left corner and
    /// size.
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    /// Draw a single line of text.
    fn text(&mut self, pos: Vec2, anchor: Anchor, text: &str, font_size: f32, color: Color);
}

/// A recorded line primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedLine {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: Color,
}

/// A recorded filled-rectangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedRect {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// A recorded text primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedText {
    pub pos: Vec2,
    pub anchor: Anchor,
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

/// A [`Surface`] that records primitives instead of drawing them.
///
/// Used by the chart's own tests; also handy for snapshotting what a
/// chart would draw without a windowing backend.
#[derive(Debug, Clone, Default)]
pub struct RecordedSurface {
    pub size: Vec2,
    pub lines: Vec<RecordedLine>,
    pub rects: Vec<RecordedRect>,
    pub texts: Vec<RecordedText>,
}

impl RecordedSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Default::default()
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.rects.clear();
        self.texts.clear();
    }

    /// The recorded lines drawn in `color`.
    pub fn lines_with_color(&self, color: Color) -> Vec<RecordedLine> {
        self.lines.iter().copied().filter(|l| l.color == color).collect()
    }
}

impl Surface for RecordedSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        self.lines.push(RecordedLine {
            start,
            end,
            width,
            color,
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.rects.push(RecordedRect { pos, size, color });
    }

    fn text(&mut self, pos: Vec2, anchor: Anchor, text: &str, font_size: f32, color: Color) {
        self.texts.push(RecordedText {
            pos,
            anchor,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}
