//! Screen-space layout and drawing.
//!
//! Converts chart-space points through the current axis ranges into
//! surface pixels, lays out the chrome (grid, ticks, labels, titles,
//! header) inside a padded bounds rectangle, and draws each dataset as
//! a polyline clipped against the visible value range, splitting
//! segments that cross a wrap boundary.

use glam::{DVec2, Vec2};

use crate::axis::AxisState;
use crate::config::ChartConfig;
use crate::maths::{Bounds, inverse_lerp, lerp, segment_box_intersect};
use crate::rect::Rect;
use crate::surface::{Anchor, Surface};
use crate::wrap::{WrappedPoint, crossing_segments};

const GRID_WIDTH: f32 = 1.0;
const SERIES_WIDTH: f32 = 1.5;

/// Inner plot rectangle after subtracting padding, tick length, label
/// space, titles and the header from the destination size.
///
/// The header budget comes off the top, the X axis labels/title off
/// the bottom, the Y axis labels/title off the left.
pub(crate) fn inner_bounds(size: Vec2, config: &ChartConfig) -> Rect {
    let layout = &config.layout;

    let mut left = layout.padding;
    let right = size.x - layout.padding;
    let mut top = layout.padding;
    let mut bottom = size.y - layout.padding;

    if layout.header.is_some() {
        top += layout.header_font_size + layout.header_margin;
    }

    bottom -= layout.tick_length + layout.label_margin + config.x_axis.label_space;
    if config.x_axis.title.is_some() {
        bottom -= layout.title_font_size + layout.title_margin;
    }

    left += layout.tick_length + layout.label_margin + config.y_axis.label_space;
    if config.y_axis.title.is_some() {
        left += layout.title_font_size + layout.title_margin;
    }

    Rect::new(
        left,
        top,
        (right - left).max(1.0),
        (bottom - top).max(1.0),
    )
}

/// One frame's worth of draw state: the configuration, both axis
/// states, and the inner rectangle everything is mapped into.
pub(crate) struct Renderer<'a> {
    pub config: &'a ChartConfig,
    pub x: &'a AxisState,
    pub y: &'a AxisState,
    pub inner: Rect,
}

impl Renderer<'_> {
    /// Map an X axis value to a screen x coordinate.
    pub fn screen_x(&self, value: f64) -> f32 {
        let mut t = inverse_lerp(self.x.range.min, self.x.range.max, value);
        if self.config.x_axis.inverted {
            t = 1.0 - t;
        }
        lerp(self.inner.x as f64, self.inner.right() as f64, t) as f32
    }

    /// Map a Y axis value to a screen y coordinate.
    ///
    /// Screen y grows downward, so the axis minimum lands on the
    /// bottom edge (unless the axis is inverted).
    pub fn screen_y(&self, value: f64) -> f32 {
        let mut t = inverse_lerp(self.y.range.min, self.y.range.max, value);
        if self.config.y_axis.inverted {
            t = 1.0 - t;
        }
        lerp(self.inner.bottom() as f64, self.inner.y as f64, t) as f32
    }

    pub fn to_screen(&self, point: DVec2) -> Vec2 {
        Vec2::new(self.screen_x(point.x), self.screen_y(point.y))
    }

    /// The visible value range as a chart-space clipping box.
    fn visible_box(&self) -> Bounds {
        Bounds::new(
            DVec2::new(self.x.range.min, self.y.range.min),
            DVec2::new(self.x.range.max, self.y.range.max),
        )
    }

    /// Draw the background, chrome, and all datasets.
    pub fn draw(&self, datasets: &[Vec<WrappedPoint>], surface: &mut dyn Surface) {
        let size = surface.size();
        surface.fill_rect(Vec2::ZERO, size, self.config.style.background_color);

        self.draw_grid(surface);
        self.draw_titles(surface);

        for (i, points) in datasets.iter().enumerate() {
            let colors = &self.config.style.series_colors;
            let color = colors[i % colors.len()];
            self.draw_dataset(points, color, surface);
        }
    }

    fn draw_grid(&self, surface: &mut dyn Surface) {
        let style = &self.config.style;
        let layout = &self.config.layout;
        let inner = self.inner;

        // Plot frame.
        let corners = [
            Vec2::new(inner.x, inner.y),
            Vec2::new(inner.right(), inner.y),
            Vec2::new(inner.right(), inner.bottom()),
            Vec2::new(inner.x, inner.bottom()),
        ];
        for i in 0..4 {
            surface.line(corners[i], corners[(i + 1) % 4], GRID_WIDTH, style.grid_color);
        }

        for &tick in &self.x.ticks {
            let sx = self.screen_x(tick);
            surface.line(
                Vec2::new(sx, inner.y),
                Vec2::new(sx, inner.bottom()),
                GRID_WIDTH,
                style.grid_color,
            );
            surface.line(
                Vec2::new(sx, inner.bottom()),
                Vec2::new(sx, inner.bottom() + layout.tick_length),
                GRID_WIDTH,
                style.grid_color,
            );
            surface.text(
                Vec2::new(sx, inner.bottom() + layout.tick_length + layout.label_margin),
                Anchor::CenterTop,
                &format_tick(tick, self.x.spacing),
                layout.label_font_size,
                style.label_color,
            );
        }

        for &tick in &self.y.ticks {
            let sy = self.screen_y(tick);
            surface.line(
                Vec2::new(inner.x, sy),
                Vec2::new(inner.right(), sy),
                GRID_WIDTH,
                style.grid_color,
            );
            surface.line(
                Vec2::new(inner.x - layout.tick_length, sy),
                Vec2::new(inner.x, sy),
                GRID_WIDTH,
                style.grid_color,
            );
            surface.text(
                Vec2::new(inner.x - layout.tick_length - layout.label_margin, sy),
                Anchor::RightCenter,
                &format_tick(tick, self.y.spacing),
                layout.label_font_size,
                style.label_color,
            );
        }
    }

    fn draw_titles(&self, surface: &mut dyn Surface) {
        let style = &self.config.style;
        let layout = &self.config.layout;
        let inner = self.inner;

        if let Some(header) = &layout.header {
            surface.text(
                Vec2::new(surface.size().x * 0.5, layout.padding),
                Anchor::CenterTop,
                header,
                layout.header_font_size,
                style.label_color,
            );
        }

        if let Some(title) = &self.config.x_axis.title {
            let y = inner.bottom()
                + layout.tick_length
                + layout.label_margin
                + self.config.x_axis.label_space
                + layout.title_margin;
            surface.text(
                Vec2::new(inner.center().x, y),
                Anchor::CenterTop,
                title,
                layout.title_font_size,
                style.label_color,
            );
        }

        if let Some(title) = &self.config.y_axis.title {
            surface.text(
                Vec2::new(layout.padding, inner.center().y),
                Anchor::LeftCenter,
                title,
                layout.title_font_size,
                style.label_color,
            );
        }
    }

    fn draw_dataset(&self, points: &[WrappedPoint], color: crate::color::Color, surface: &mut dyn Surface) {
        let wrap_x = self.config.x_axis.wrap;
        let wrap_y = self.config.y_axis.wrap;

        for pair in points.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.same_cycle(b) {
                self.draw_clipped(a.point, b.point, color, surface);
            } else {
                // Wrap crossing: the trace exits one edge of the period
                // and re-enters the opposite edge.
                for (start, end) in crossing_segments(a, b, wrap_x, wrap_y) {
                    self.draw_clipped(start, end, color, surface);
                }
            }
        }
    }

    /// Draw the portion of `a -> b` inside the visible value range.
    fn draw_clipped(
        &self,
        a: DVec2,
        b: DVec2,
        color: crate::color::Color,
        surface: &mut dyn Surface,
    ) {
        let visible = self.visible_box();
        let a_in = visible.contains(a);
        let b_in = visible.contains(b);

        if a_in && b_in {
            surface.line(self.to_screen(a), self.to_screen(b), SERIES_WIDTH, color);
        } else if a_in != b_in {
            // One endpoint outside: stop at the boundary crossing
            // nearest to `a` (the entry point when `a` is outside, the
            // exit point when `a` is inside).
            if let Some(crossing) = segment_box_intersect(a, b, &visible).closest {
                let (start, end) = if a_in { (a, crossing) } else { (crossing, b) };
                surface.line(self.to_screen(start), self.to_screen(end), SERIES_WIDTH, color);
            }
        }
        // Both outside: move without drawing.
    }
}

/// Format a tick label with just enough decimals for the tick spacing.
fn format_tick(value: f64, spacing: f64) -> String {
    let decimals = if spacing > 0.0 && spacing < 1.0 {
        (-spacing.log10().floor()) as usize
    } else {
        0
    }
    .min(6);

    // Avoid "-0" labels.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}
