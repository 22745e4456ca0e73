//! Raw sample processing ahead of the renderer.
//!
//! The chart stores raw `{time, value}` samples per dataset and runs
//! them through a [`SampleProcessor`] every frame to obtain the
//! chart-space points to plot. The default processor is the identity;
//! live telemetry installs [`ElapsedWindow`], which maps timestamps to
//! elapsed seconds and trims to the visible window.

use glam::DVec2;

use crate::axis::Range;
use crate::maths::in_range;

/// One raw telemetry sample. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Chart-time timestamp in seconds.
    pub time: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Converts one dataset's raw samples into chart-space points.
///
/// Runs once per dataset per frame, before wrap resolution and axis
/// auto-ranging. `now` is the current chart time and `x_range` the X
/// axis's current visible range.
pub trait SampleProcessor: std::fmt::Debug {
    fn process(&self, now: f64, x_range: Range, samples: &[Sample]) -> Vec<DVec2>;
}

/// Plots samples as `(time, value)` without any windowing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl SampleProcessor for Identity {
    fn process(&self, _now: f64, _x_range: Range, samples: &[Sample]) -> Vec<DVec2> {
        samples.iter().map(|s| DVec2::new(s.time, s.value)).collect()
    }
}

/// Plots samples as `(now - time, value)` and trims to the visible
/// window, keeping one boundary anchor on each side.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElapsedWindow;

impl SampleProcessor for ElapsedWindow {
    fn process(&self, now: f64, x_range: Range, samples: &[Sample]) -> Vec<DVec2> {
        visible_window(samples, now, x_range)
    }
}

/// Single forward scan extracting the plotted subsequence.
///
/// Samples inside the window are emitted as `(elapsed, value)`. The
/// sample immediately before the scan enters the window and the one
/// immediately after it leaves are emitted too, so segments drawn up
/// to the window edge keep their true slope instead of stopping at the
/// last visible point.
pub fn visible_window(samples: &[Sample], now: f64, x_range: Range) -> Vec<DVec2> {
    let mut out = Vec::new();
    let mut entered = false;

    for (i, sample) in samples.iter().enumerate() {
        let x = now - sample.time;
        if in_range(x_range.min, x_range.max, x) {
            if !entered {
                if i > 0 {
                    let prev = &samples[i - 1];
                    out.push(DVec2::new(now - prev.time, prev.value));
                }
                entered = true;
            }
            out.push(DVec2::new(x, sample.value));
        } else if entered {
            // Exit anchor, then the window is behind us.
            out.push(DVec2::new(x, sample.value));
            break;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Samples recorded once per second, newest last.
    fn seconds_of_history(count: usize) -> Vec<Sample> {
        (0..count).map(|i| Sample::new(i as f64, i as f64 * 10.0)).collect()
    }

    #[test]
    fn window_includes_entry_anchor() {
        // 16 samples at t = 0..=15, "now" at 15: elapsed runs 15 down
        // to 0. Window [0, 10] must pick up the elapsed-11 sample as
        // the anchor just outside, then everything in [0, 10].
        let samples = seconds_of_history(16);
        let out = visible_window(&samples, 15.0, Range::new(0.0, 10.0));

        assert_eq!(out.len(), 12);
        assert_eq!(out[0].x, 11.0);
        assert_eq!(out[1].x, 10.0);
        assert_eq!(out.last().unwrap().x, 0.0);
    }

    #[test]
    fn window_includes_exit_anchor() {
        // "now" lags the newest samples, so the scan leaves the window
        // before the buffer ends; the first sample past the edge comes
        // along, the rest do not.
        let samples = seconds_of_history(16);
        let out = visible_window(&samples, 10.0, Range::new(0.0, 8.0));

        let below: Vec<f64> = out.iter().map(|p| p.x).filter(|&x| x < 0.0).collect();
        assert_eq!(below, vec![-1.0]);
        assert_eq!(out.last().unwrap().x, -1.0);
    }

    #[test]
    fn all_samples_outside_yields_empty() {
        let samples = seconds_of_history(4);
        let out = visible_window(&samples, 100.0, Range::new(0.0, 10.0));
        assert!(out.is_empty());
    }

    #[test]
    fn values_ride_along_with_elapsed_time() {
        let samples = vec![Sample::new(0.0, 7.0), Sample::new(1.0, 9.0)];
        let out = visible_window(&samples, 1.0, Range::new(0.0, 10.0));
        assert_eq!(out, vec![DVec2::new(1.0, 7.0), DVec2::new(0.0, 9.0)]);
    }

    #[test]
    fn identity_processor_plots_time_directly() {
        let samples = vec![Sample::new(2.0, 5.0)];
        let out = Identity.process(99.0, Range::new(0.0, 1.0), &samples);
        assert_eq!(out, vec![DVec2::new(2.0, 5.0)]);
    }
}
