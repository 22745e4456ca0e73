//! Cyclic ("wrapping") value axes.
//!
//! An axis configured with a wrap period folds every value into
//! `[min, max)` and remembers how many whole periods away the raw
//! value was. Consecutive samples whose wrap indices differ crossed
//! the period boundary, and the renderer draws them as two segments
//! that exit one edge and re-enter the opposite edge instead of one
//! line jumping across the plot.

use glam::DVec2;

use crate::maths::inverse_lerp;

/// The half-open interval `[min, max)` a cyclic axis folds values into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapRange {
    pub min: f64,
    pub max: f64,
}

impl WrapRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn period(&self) -> f64 {
        self.max - self.min
    }

    /// Fold `value` into the period.
    ///
    /// Returns the wrapped value and the wrap index such that
    /// `value == wrapped + index * period` and `wrapped ∈ [min, max)`.
    pub fn resolve(&self, value: f64) -> (f64, i64) {
        let index = inverse_lerp(self.min, self.max, value).floor() as i64;
        (value - index as f64 * self.period(), index)
    }
}

/// A processed point together with the wrap cycle it came from, per
/// axis. Axes without a wrap period always report index 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrappedPoint {
    /// The point with wrapped coordinates.
    pub point: DVec2,
    pub wrap_x: i64,
    pub wrap_y: i64,
}

impl WrappedPoint {
    /// True if `self` and `other` sit in the same wrap cycle on both
    /// axes, i.e. the segment between them needs no splitting.
    pub fn same_cycle(&self, other: &WrappedPoint) -> bool {
        self.wrap_x == other.wrap_x && self.wrap_y == other.wrap_y
    }
}

/// Annotate `points` with wrap indices for the configured axes.
pub fn resolve_points(
    points: &[DVec2],
    wrap_x: Option<WrapRange>,
    wrap_y: Option<WrapRange>,
) -> Vec<WrappedPoint> {
    points
        .iter()
        .map(|&p| {
            let (x, wrap_x) = match wrap_x {
                Some(w) => w.resolve(p.x),
                None => (p.x, 0),
            };
            let (y, wrap_y) = match wrap_y {
                Some(w) => w.resolve(p.y),
                None => (p.y, 0),
            };
            WrappedPoint {
                point: DVec2::new(x, y),
                wrap_x,
                wrap_y,
            }
        })
        .collect()
}

/// The two virtual segments standing in for a wrap-crossing segment.
///
/// The first runs from `a` toward where `b` would sit in `a`'s wrap
/// cycle; the second from where `a` would sit in `b`'s cycle toward
/// `b`. Each is clipped against the visible range independently.
pub fn crossing_segments(
    a: &WrappedPoint,
    b: &WrappedPoint,
    wrap_x: Option<WrapRange>,
    wrap_y: Option<WrapRange>,
) -> [(DVec2, DVec2); 2] {
    let period = DVec2::new(
        wrap_x.map_or(0.0, |w| w.period()),
        wrap_y.map_or(0.0, |w| w.period()),
    );

    let delta = DVec2::new(
        (b.wrap_x - a.wrap_x) as f64,
        (b.wrap_y - a.wrap_y) as f64,
    );

    // b unwrapped into a's cycle, and a unwrapped into b's cycle.
    let b_in_a = b.point + delta * period;
    let a_in_b = a.point - delta * period;

    [(a.point, b_in_a), (a_in_b, b.point)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn resolve_preserves_value_identity() {
        let wrap = WrapRange::new(-180.0, 180.0);
        for value in [-1000.0, -180.0, -179.9, 0.0, 179.9, 180.0, 365.0, 1234.5] {
            let (wrapped, index) = wrap.resolve(value);
            assert!(wrapped >= wrap.min && wrapped < wrap.max, "{wrapped} out of period");
            assert!((wrapped + index as f64 * wrap.period() - value).abs() < EPS);
        }
    }

    #[test]
    fn resolve_angle_scenario() {
        // 170° stays put, 190° folds to -170° one cycle up.
        let wrap = WrapRange::new(-180.0, 180.0);
        assert_eq!(wrap.resolve(170.0), (170.0, 0));
        let (wrapped, index) = wrap.resolve(190.0);
        assert!((wrapped + 170.0).abs() < EPS);
        assert_eq!(index, 1);
    }

    #[test]
    fn unwrapped_axes_report_index_zero() {
        let points = [DVec2::new(3.0, 400.0), DVec2::new(7.0, -400.0)];
        let wrapped = resolve_points(&points, None, None);
        assert_eq!(wrapped[0].point, points[0]);
        assert_eq!(wrapped[0].wrap_x, 0);
        assert_eq!(wrapped[1].wrap_y, 0);
    }

    #[test]
    fn crossing_segments_exit_and_reenter() {
        let wrap = WrapRange::new(-180.0, 180.0);
        let points = [DVec2::new(0.0, 170.0), DVec2::new(1.0, 190.0)];
        let wrapped = resolve_points(&points, None, Some(wrap));
        assert!(!wrapped[0].same_cycle(&wrapped[1]));

        let [first, second] = crossing_segments(&wrapped[0], &wrapped[1], None, Some(wrap));

        // First segment heads up out of the period toward 190.
        assert!((first.0.y - 170.0).abs() < EPS);
        assert!((first.1.y - 190.0).abs() < EPS);
        // Second segment comes in from below the period toward -170.
        assert!((second.0.y + 190.0).abs() < EPS);
        assert!((second.1.y + 170.0).abs() < EPS);
    }
}
