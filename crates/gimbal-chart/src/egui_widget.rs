//! egui integration for chart rendering.
//!
//! Provides a [`ChartWidget`] that draws a [`Chart`] through an
//! [`egui::Painter`], plus the [`PainterSurface`] adapter it uses.
//!
//! # Example
//!
//! ```ignore
//! use gimbal_chart::{Chart, ChartConfig, ChartWidget};
//!
//! let mut chart = Chart::new(400.0, 300.0, ChartConfig::default())?;
//! chart.push_value(now, angle_deg);
//! ui.add(ChartWidget::new(&mut chart));
//! ```

use egui::{Align2, FontId, Response, Sense, Ui, Widget};
use glam::Vec2;

use crate::chart::Chart;
use crate::color::Color;
use crate::surface::{Anchor, Surface};

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        (color.a * 255.0) as u8,
    )
}

fn to_align2(anchor: Anchor) -> Align2 {
    match anchor {
        Anchor::CenterTop => Align2::CENTER_TOP,
        Anchor::LeftCenter => Align2::LEFT_CENTER,
        Anchor::RightCenter => Align2::RIGHT_CENTER,
    }
}

/// Draws chart primitives through an egui painter.
///
/// Chart coordinates are local to the widget rectangle; the adapter
/// offsets them by the rectangle origin.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_pos(&self, point: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + point.x, self.rect.min.y + point.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        self.painter.line_segment(
            [self.to_pos(start), self.to_pos(end)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        let rect = egui::Rect::from_min_size(self.to_pos(pos), egui::vec2(size.x, size.y));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn text(&mut self, pos: Vec2, anchor: Anchor, text: &str, font_size: f32, color: Color) {
        self.painter.text(
            self.to_pos(pos),
            to_align2(anchor),
            text,
            FontId::proportional(font_size),
            to_color32(color),
        );
    }
}

/// An egui widget wrapping a [`Chart`].
///
/// Fills the available space, resizing the chart to match.
pub struct ChartWidget<'a> {
    chart: &'a mut Chart,
    /// Minimum size of the widget
    min_size: egui::Vec2,
}

impl<'a> ChartWidget<'a> {
    pub fn new(chart: &'a mut Chart) -> Self {
        Self {
            chart,
            min_size: egui::Vec2::new(200.0, 150.0),
        }
    }

    /// Set the minimum size of the widget.
    pub fn min_size(mut self, size: egui::Vec2) -> Self {
        self.min_size = size;
        self
    }
}

impl Widget for ChartWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = ui.available_size().max(self.min_size);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        self.chart.resize(rect.width(), rect.height());
        let painter = ui.painter_at(rect);
        let mut surface = PainterSurface::new(&painter, rect);
        self.chart.render(&mut surface);

        response
    }
}
