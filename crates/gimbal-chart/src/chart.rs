//! The chart itself: owned sample buffers, per-axis range state, and
//! the per-frame render pipeline.

use glam::Vec2;

use crate::axis::{AxisState, Range};
use crate::config::{ChartConfig, ConfigError};
use crate::render::{Renderer, inner_bounds};
use crate::surface::Surface;
use crate::window::{Identity, Sample, SampleProcessor};
use crate::wrap::{WrappedPoint, resolve_points};

/// A streaming line chart with self-adjusting axes.
///
/// Samples are appended with [`Chart::push_values`] and drawn with
/// [`Chart::render`]; between frames the chart re-fits any auto-ranged
/// axis to the currently visible data. Chart time is supplied by the
/// caller, so rendering twice without new samples produces identical
/// output.
#[derive(Debug)]
pub struct Chart {
    config: ChartConfig,
    size: Vec2,
    samples: Vec<Vec<Sample>>,
    x_state: AxisState,
    y_state: AxisState,
    processor: Box<dyn SampleProcessor>,
    now: f64,
}

impl Chart {
    /// Create a chart with the given destination size in pixels.
    ///
    /// Fails if the configuration is internally inconsistent, for
    /// example a minimum range wider than a wrap period.
    pub fn new(width: f32, height: f32, config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let x_state = AxisState::new(&config.x_axis);
        let y_state = AxisState::new(&config.y_axis);
        let samples = vec![Vec::new(); config.datasets];
        Ok(Self {
            config,
            size: Vec2::new(width, height),
            samples,
            x_state,
            y_state,
            processor: Box::new(Identity),
            now: 0.0,
        })
    }

    /// Replace the sample processor applied before each render.
    pub fn with_processor(mut self, processor: Box<dyn SampleProcessor>) -> Self {
        self.processor = processor;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Current X axis range and ticks.
    pub fn x_state(&self) -> &AxisState {
        &self.x_state
    }

    /// Current Y axis range and ticks.
    pub fn y_state(&self) -> &AxisState {
        &self.y_state
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Append one sample per dataset at chart time `time` (seconds).
    ///
    /// `values[i]` goes to dataset `i`. Extra values are dropped and
    /// missing ones skipped; either case logs a warning since it
    /// usually means the chart was configured with the wrong dataset
    /// count.
    pub fn push_values(&mut self, time: f64, values: &[f64]) {
        if values.len() != self.samples.len() {
            tracing::warn!(
                expected = self.samples.len(),
                got = values.len(),
                "sample count does not match configured dataset count"
            );
        }
        for (samples, &value) in self.samples.iter_mut().zip(values) {
            samples.push(Sample::new(time, value));
        }
        self.now = self.now.max(time);
    }

    /// Append a sample to the sole dataset.
    pub fn push_value(&mut self, time: f64, value: f64) {
        self.push_values(time, &[value]);
    }

    /// Process, re-range, and draw the chart onto `surface`.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        let datasets: Vec<Vec<WrappedPoint>> = self
            .samples
            .iter()
            .map(|samples| {
                let points = self.processor.process(self.now, self.x_state.range, samples);
                resolve_points(&points, self.config.x_axis.wrap, self.config.y_axis.wrap)
            })
            .collect();

        let (x_extent, y_extent) = extents(&datasets);
        self.x_state
            .update(&self.config.x_axis, &self.config.hysteresis, x_extent, self.now);
        self.y_state
            .update(&self.config.y_axis, &self.config.hysteresis, y_extent, self.now);

        let renderer = Renderer {
            config: &self.config,
            x: &self.x_state,
            y: &self.y_state,
            inner: inner_bounds(self.size, &self.config),
        };
        renderer.draw(&datasets, surface);
    }
}

/// Observed `[min, max]` per axis across all datasets' wrapped points.
///
/// Empty input yields `[0, 0]` so auto axes settle on a finite range.
fn extents(datasets: &[Vec<WrappedPoint>]) -> (Range, Range) {
    let mut x: Option<Range> = None;
    let mut y: Option<Range> = None;
    for point in datasets.iter().flatten() {
        x = Some(x.map_or(
            Range::new(point.point.x, point.point.x),
            |r| r.expanded_to(point.point.x),
        ));
        y = Some(y.map_or(
            Range::new(point.point.y, point.point.y),
            |r| r.expanded_to(point.point.y),
        ));
    }
    let zero = Range::new(0.0, 0.0);
    (x.unwrap_or(zero), y.unwrap_or(zero))
}
