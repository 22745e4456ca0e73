//! "Nice number" scale computation for axis bounds and ticks.
//!
//! Given a raw data extent, produces human-friendly bounds (multiples
//! of 1/2/5/10 × 10^k) and an evenly spaced tick sequence.

use crate::maths::lerp;

/// Round `range` to a nice magnitude (1, 2, 5 or 10 times a power of
/// ten).
///
/// In `round` mode the breakpoints sit at 1.5/3/7 so the nearest nice
/// value wins; otherwise the next nice value at or above `range` is
/// chosen.
pub fn nice_num(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = range / magnitude;

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * magnitude
}

/// Nice axis bounds and tick positions for a raw `[min, max]` extent.
#[derive(Debug, Clone, PartialEq)]
pub struct NiceScale {
    /// Nice lower bound, `<= min`.
    pub nice_min: f64,
    /// Nice upper bound, `>= max`.
    pub nice_max: f64,
    /// Tick spacing.
    pub spacing: f64,
    /// Ticks from `nice_min` to `nice_max` inclusive.
    pub ticks: Vec<f64>,
}

impl NiceScale {
    /// Compute a nice scale covering `[min, max]` with roughly
    /// `max_ticks` ticks.
    ///
    /// A degenerate extent (`min == max`) is padded to a nonzero span
    /// before any logarithm is taken, so all-identical data cannot
    /// produce NaN bounds.
    pub fn compute(min: f64, max: f64, max_ticks: usize) -> Self {
        let max_ticks = max_ticks.max(2);

        let (min, max) = if min == max {
            let pad = if min == 0.0 { 0.5 } else { min.abs() * 0.05 };
            (min - pad, max + pad)
        } else {
            (min, max)
        };

        let range = nice_num(max - min, false);
        let spacing = nice_num(range / (max_ticks - 1) as f64, true);
        let nice_min = (min / spacing).floor() * spacing;
        let nice_max = (max / spacing).ceil() * spacing;

        // Interpolate instead of accumulating spacing so the last tick
        // lands exactly on nice_max.
        let tick_count = (((nice_max - nice_min) / spacing).round() as usize + 1).max(2);
        let ticks = (0..tick_count)
            .map(|i| lerp(nice_min, nice_max, i as f64 / (tick_count - 1) as f64))
            .collect();

        Self {
            nice_min,
            nice_max,
            spacing,
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_num_ceil_mode() {
        assert_eq!(nice_num(1.0, false), 1.0);
        assert_eq!(nice_num(1.2, false), 2.0);
        assert_eq!(nice_num(3.4, false), 5.0);
        assert_eq!(nice_num(6.0, false), 10.0);
        assert_eq!(nice_num(42.0, false), 50.0);
    }

    #[test]
    fn nice_num_round_mode() {
        assert_eq!(nice_num(1.2, true), 1.0);
        assert_eq!(nice_num(2.0, true), 2.0);
        assert_eq!(nice_num(4.9, true), 5.0);
        assert_eq!(nice_num(8.0, true), 10.0);
        assert_eq!(nice_num(0.12, true), 0.1);
    }

    #[test]
    fn bounds_contain_the_extent() {
        for (min, max) in [(0.13, 9.7), (-42.0, 17.0), (1000.0, 1001.0), (-0.002, 0.003)] {
            let scale = NiceScale::compute(min, max, 7);
            assert!(scale.nice_min <= min, "{} > {min}", scale.nice_min);
            assert!(scale.nice_max >= max, "{} < {max}", scale.nice_max);
            assert!(scale.ticks.len() >= 2);
        }
    }

    #[test]
    fn ticks_are_evenly_spaced_and_hit_both_ends() {
        let scale = NiceScale::compute(0.0, 100.0, 6);
        assert_eq!(*scale.ticks.first().unwrap(), scale.nice_min);
        assert_eq!(*scale.ticks.last().unwrap(), scale.nice_max);
        for pair in scale.ticks.windows(2) {
            assert!((pair[1] - pair[0] - scale.spacing).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_span_is_padded() {
        let scale = NiceScale::compute(5.0, 5.0, 5);
        assert!(scale.nice_min.is_finite() && scale.nice_max.is_finite());
        assert!(scale.nice_min < 5.0 && scale.nice_max > 5.0);

        let at_zero = NiceScale::compute(0.0, 0.0, 5);
        assert!(at_zero.nice_min < 0.0 && at_zero.nice_max > 0.0);
    }
}
