//! Real-time line charts with self-adjusting axes.
//!
//! Built for streaming telemetry: samples are appended as they arrive
//! and each frame the chart re-fits its axes to the visible data.
//!
//! # Features
//!
//! - **Auto-ranging**: axes grow immediately and shrink with
//!   hysteresis, snapped to nice tick boundaries
//! - **Cyclic values**: wrap ranges keep angles inside one period and
//!   split segments that cross the seam
//! - **Sliding window**: a sample processor maps raw samples to
//!   plotted points, e.g. an elapsed-time window
//! - **Backend agnostic**: drawing goes through the [`Surface`] trait;
//!   an egui widget ships behind the `egui-integration` feature
//!
//! # Example
//!
//! ```ignore
//! use gimbal_chart::{AxisConfig, Chart, ChartConfig, ElapsedWindow};
//!
//! let config = ChartConfig::default()
//!     .with_header("Angle")
//!     .with_x_axis(AxisConfig::default().with_fixed_range(0.0, 10.0).inverted())
//!     .with_y_axis(AxisConfig::default().with_wrap(-180.0, 180.0));
//! let mut chart = Chart::new(400.0, 300.0, config)?
//!     .with_processor(Box::new(ElapsedWindow));
//!
//! chart.push_value(now, angle_deg);
//! chart.render(&mut surface);
//! ```

mod axis;
mod chart;
mod color;
mod config;
pub mod maths;
mod rect;
mod render;
mod scale;
mod surface;
mod window;
mod wrap;

#[cfg(feature = "egui-integration")]
mod egui_widget;

pub use axis::{AxisState, Range};
pub use chart::Chart;
pub use color::Color;
pub use config::{
    AxisConfig, AxisRange, ChartConfig, ChartLayout, ChartStyle, ConfigError, Hysteresis,
};
pub use rect::Rect;
pub use scale::{NiceScale, nice_num};
pub use surface::{Anchor, RecordedLine, RecordedRect, RecordedSurface, RecordedText, Surface};
pub use window::{ElapsedWindow, Identity, Sample, SampleProcessor, visible_window};
pub use wrap::{WrapRange, WrappedPoint, crossing_segments, resolve_points};

#[cfg(feature = "egui-integration")]
pub use egui_widget::{ChartWidget, PainterSurface};
