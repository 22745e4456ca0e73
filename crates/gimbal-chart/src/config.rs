//! Chart configuration.
//!
//! All options are plain typed structs with named defaults, resolved
//! once when the chart is constructed. [`ChartConfig::validate`]
//! rejects combinations the renderer cannot honor.

use crate::axis::Range;
use crate::color::Color;
use crate::wrap::WrapRange;

/// How an axis's visible range is determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisRange {
    /// Recomputed every frame from the processed data extent.
    #[default]
    Auto,
    /// Never changes.
    Fixed(Range),
}

/// Static per-axis configuration.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Axis title drawn beside/below the plot.
    pub title: Option<String>,
    /// Space reserved for tick labels, perpendicular to the axis
    /// (width for Y labels, height for X labels), in pixels.
    pub label_space: f32,
    pub range: AxisRange,
    /// Reverses the screen direction of the axis.
    pub inverted: bool,
    /// Minimum visible span; auto-ranged axes never shrink below it.
    pub min_range: f64,
    /// Wrap period for cyclic axes (e.g. angle in degrees).
    pub wrap: Option<WrapRange>,
    /// Target tick count for the nice-scale computation.
    pub max_ticks: usize,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            title: None,
            label_space: 14.0,
            range: AxisRange::Auto,
            inverted: false,
            min_range: 1e-3,
            wrap: None,
            max_ticks: 6,
        }
    }
}

impl AxisConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fix the visible range to `[min, max]`.
    pub fn with_fixed_range(mut self, min: f64, max: f64) -> Self {
        self.range = AxisRange::Fixed(Range::new(min, max));
        self
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn with_min_range(mut self, min_range: f64) -> Self {
        self.min_range = min_range;
        self
    }

    /// Make this a cyclic axis wrapping into `[min, max)`.
    pub fn with_wrap(mut self, min: f64, max: f64) -> Self {
        self.wrap = Some(WrapRange::new(min, max));
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_label_space(mut self, label_space: f32) -> Self {
        self.label_space = label_space;
        self
    }
}

/// Colors shared by the chart chrome and the plotted series.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Fill behind the whole chart, drawn before anything else.
    pub background_color: Color,
    pub grid_color: Color,
    pub label_color: Color,
    /// One color per dataset, cycled when there are more datasets
    /// than colors.
    pub series_colors: Vec<Color>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgba(0.08, 0.08, 0.1, 1.0),
            grid_color: Color::rgba(0.25, 0.25, 0.28, 1.0),
            label_color: Color::rgba(0.8, 0.8, 0.82, 1.0),
            series_colors: vec![
                Color::from_rgba_u8(75, 192, 192, 255),
                Color::from_rgba_u8(255, 99, 132, 255),
                Color::from_rgba_u8(255, 205, 86, 255),
                Color::from_rgba_u8(54, 162, 235, 255),
            ],
        }
    }
}

/// Pixel budgets for padding, ticks, labels, titles and the header.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub padding: f32,
    pub tick_length: f32,
    pub label_font_size: f32,
    pub label_margin: f32,
    pub title_font_size: f32,
    pub title_margin: f32,
    pub header_font_size: f32,
    pub header_margin: f32,
    /// Header text centered above the plot.
    pub header: Option<String>,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            padding: 8.0,
            tick_length: 4.0,
            label_font_size: 11.0,
            label_margin: 3.0,
            title_font_size: 13.0,
            title_margin: 4.0,
            header_font_size: 16.0,
            header_margin: 6.0,
            header: None,
        }
    }
}

impl ChartLayout {
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Auto-range hysteresis: grow fast, shrink slow.
#[derive(Debug, Clone, Copy)]
pub struct Hysteresis {
    /// Minimum chart-time seconds between two shrinks of one axis.
    pub decrease_cooldown: f64,
    /// Shrink only when the data extent is below this fraction of the
    /// current range.
    pub decrease_threshold: f64,
    /// Fraction of the data extent added to both ends when growing.
    pub increase_threshold: f64,
}

impl Default for Hysteresis {
    fn default() -> Self {
        Self {
            decrease_cooldown: 1.0,
            decrease_threshold: 0.5,
            increase_threshold: 0.1,
        }
    }
}

/// Complete chart configuration.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub style: ChartStyle,
    pub layout: ChartLayout,
    pub hysteresis: Hysteresis,
    /// Number of datasets fed per [`crate::Chart::push_values`] call.
    pub datasets: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            style: ChartStyle::default(),
            layout: ChartLayout::default(),
            hysteresis: Hysteresis::default(),
            datasets: 1,
        }
    }
}

impl ChartConfig {
    pub fn with_x_axis(mut self, x_axis: AxisConfig) -> Self {
        self.x_axis = x_axis;
        self
    }

    pub fn with_y_axis(mut self, y_axis: AxisConfig) -> Self {
        self.y_axis = y_axis;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.layout.header = Some(header.into());
        self
    }

    pub fn with_datasets(mut self, datasets: usize) -> Self {
        self.datasets = datasets;
        self
    }

    /// Check the configuration for combinations the renderer cannot
    /// honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, axis) in [("x", &self.x_axis), ("y", &self.y_axis)] {
            if let Some(wrap) = axis.wrap {
                if wrap.period() <= 0.0 {
                    return Err(ConfigError::EmptyWrapPeriod {
                        axis: name,
                        min: wrap.min,
                        max: wrap.max,
                    });
                }
                if axis.min_range > wrap.period() {
                    return Err(ConfigError::MinRangeExceedsWrapPeriod {
                        axis: name,
                        min_range: axis.min_range,
                        period: wrap.period(),
                    });
                }
            }
            if let AxisRange::Fixed(range) = axis.range
                && range.min >= range.max
            {
                return Err(ConfigError::EmptyFixedRange {
                    axis: name,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if self.datasets > 0 && self.style.series_colors.is_empty() {
            return Err(ConfigError::NoSeriesColors {
                datasets: self.datasets,
            });
        }

        Ok(())
    }
}

/// Configuration rejected at chart construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("wrap period on the {axis} axis is empty or negative ({min}..{max})")]
    EmptyWrapPeriod { axis: &'static str, min: f64, max: f64 },

    #[error(
        "min_range {min_range} on the {axis} axis exceeds its wrap period {period}; \
         the range floor would push the axis outside the representable period"
    )]
    MinRangeExceedsWrapPeriod {
        axis: &'static str,
        min_range: f64,
        period: f64,
    },

    #[error("fixed range on the {axis} axis has min >= max ({min}..{max})")]
    EmptyFixedRange { axis: &'static str, min: f64, max: f64 },

    #[error("chart has {datasets} dataset(s) but no series colors")]
    NoSeriesColors { datasets: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ChartConfig::default().validate().is_ok());
    }

    #[test]
    fn min_range_larger_than_wrap_period_is_rejected() {
        let config = ChartConfig::default().with_y_axis(
            AxisConfig::default()
                .with_wrap(-180.0, 180.0)
                .with_min_range(400.0),
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinRangeExceedsWrapPeriod { axis: "y", .. })
        ));
    }

    #[test]
    fn empty_wrap_period_is_rejected() {
        let config =
            ChartConfig::default().with_x_axis(AxisConfig::default().with_wrap(10.0, 10.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyWrapPeriod { axis: "x", .. })
        ));
    }

    #[test]
    fn inverted_fixed_range_is_rejected() {
        let config =
            ChartConfig::default().with_x_axis(AxisConfig::default().with_fixed_range(10.0, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyFixedRange { axis: "x", .. })
        ));
    }

    #[test]
    fn missing_series_colors_are_rejected() {
        let mut config = ChartConfig::default();
        config.style.series_colors.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoSeriesColors { datasets: 1 })
        ));
    }
}
