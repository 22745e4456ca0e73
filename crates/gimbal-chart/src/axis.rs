//! Per-axis visible range and tick management.
//!
//! Fixed axes keep their configured range forever. Auto axes re-fit to
//! the processed data extent every frame, with asymmetric hysteresis:
//! any out-of-range value grows the axis in a single step, while
//! shrinking is gated behind a cooldown and a ratio threshold so the
//! scale does not flicker when the data extent hovers near a boundary.

use crate::config::{AxisConfig, AxisRange, Hysteresis};
use crate::maths::in_range;
use crate::scale::{NiceScale, nice_num};

/// A closed numeric interval with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn len(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        in_range(self.min, self.max, value)
    }

    /// Smallest range containing both `self` and `value`.
    pub fn expanded_to(&self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// Live state of one axis: the visible range and its tick set.
#[derive(Debug, Clone)]
pub struct AxisState {
    pub range: Range,
    /// Tick positions in ascending order, all within `range`.
    pub ticks: Vec<f64>,
    /// Tick spacing, used for label precision.
    pub spacing: f64,
    /// Chart time of the last shrink, for the hysteresis cooldown.
    last_shrink_time: Option<f64>,
}

impl AxisState {
    pub fn new(config: &AxisConfig) -> Self {
        match config.range {
            AxisRange::Fixed(range) => {
                let (ticks, spacing) = ticks_within(range, config.max_ticks);
                Self {
                    range,
                    ticks,
                    spacing,
                    last_shrink_time: None,
                }
            }
            AxisRange::Auto => {
                let mut state = Self {
                    range: Range::new(0.0, 0.0),
                    ticks: Vec::new(),
                    spacing: 0.0,
                    last_shrink_time: None,
                };
                state.fit(config, Range::new(0.0, 0.0));
                state
            }
        }
    }

    /// Recompute the range and ticks for this frame.
    ///
    /// `extent` is the observed `[min, max]` across all datasets'
    /// processed points (pass `[0, 0]` when no points exist) and `now`
    /// is the current chart time, used only for the shrink cooldown.
    /// Fixed axes never change.
    pub fn update(
        &mut self,
        config: &AxisConfig,
        hysteresis: &Hysteresis,
        extent: Range,
        now: f64,
    ) {
        if matches!(config.range, AxisRange::Fixed(_)) {
            return;
        }

        let grew = extent.min < self.range.min || extent.max > self.range.max;
        let candidate = if grew {
            // Pad both ends so all current data fits in one step.
            let pad = extent.len() * hysteresis.increase_threshold / 2.0;
            Some(Range::new(extent.min - pad, extent.max + pad))
        } else {
            let cooled = self
                .last_shrink_time
                .is_none_or(|t| now - t >= hysteresis.decrease_cooldown);
            if cooled && extent.len() < hysteresis.decrease_threshold * self.range.len() {
                self.last_shrink_time = Some(now);
                Some(extent)
            } else {
                None
            }
        };

        if let Some(candidate) = candidate {
            self.fit(config, candidate);
        }
    }

    /// Pad `candidate` to the configured minimum span and snap it to a
    /// nice scale.
    fn fit(&mut self, config: &AxisConfig, mut candidate: Range) {
        if candidate.len() < config.min_range {
            let center = (candidate.min + candidate.max) * 0.5;
            candidate = Range::new(
                center - config.min_range * 0.5,
                center + config.min_range * 0.5,
            );
        }

        let scale = NiceScale::compute(candidate.min, candidate.max, config.max_ticks);
        self.range = Range::new(scale.nice_min, scale.nice_max);
        self.spacing = scale.spacing;
        self.ticks = scale.ticks;
    }
}

/// Nice-multiple tick positions clamped inside a fixed range.
fn ticks_within(range: Range, max_ticks: usize) -> (Vec<f64>, f64) {
    let max_ticks = max_ticks.max(2);
    let spacing = nice_num(range.len() / (max_ticks - 1) as f64, true);
    let start = (range.min / spacing).ceil() * spacing;

    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let tick = start + i as f64 * spacing;
        if tick > range.max + spacing * 1e-9 {
            break;
        }
        ticks.push(tick);
        i += 1;
    }

    (ticks, spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisConfig;

    fn auto_axis() -> AxisConfig {
        AxisConfig::default().with_min_range(1.0)
    }

    #[test]
    fn empty_extent_produces_a_finite_range_around_zero() {
        let state = AxisState::new(&auto_axis());
        assert!(state.range.min.is_finite() && state.range.max.is_finite());
        assert!(state.range.contains(0.0));
        assert!(state.range.len() >= 1.0);
        assert!(state.ticks.len() >= 2);
    }

    #[test]
    fn growth_covers_the_extent_in_one_step()  {
        let config = auto_axis();
        let hysteresis = Hysteresis::default();
        let mut state = AxisState::new(&config);

        state.update(&config, &hysteresis, Range::new(-40.0, 90.0), 0.0);
        assert!(state.range.min <= -40.0);
        assert!(state.range.max >= 90.0);
    }

    #[test]
    fn no_shrink_before_cooldown() {
        let config = auto_axis();
        let hysteresis = Hysteresis::default();
        let mut state = AxisState::new(&config);

        // Spike, then small data.
        state.update(&config, &hysteresis, Range::new(0.0, 100.0), 0.0);
        let spiked = state.range;

        state.update(&config, &hysteresis, Range::new(0.0, 2.0), 0.1);
        let after_first_shrink = state.range;
        assert!(after_first_shrink.len() < spiked.len());

        // Still smaller data shortly after: cooldown must hold the range.
        state.update(&config, &hysteresis, Range::new(0.0, 0.5), 0.2);
        assert_eq!(state.range, after_first_shrink);

        // After the cooldown the shrink goes through.
        state.update(&config, &hysteresis, Range::new(0.0, 0.5), 1.5);
        assert!(state.range.len() < after_first_shrink.len());
    }

    #[test]
    fn extent_near_threshold_does_not_oscillate() {
        let config = auto_axis();
        let hysteresis = Hysteresis::default();
        let mut state = AxisState::new(&config);

        state.update(&config, &hysteresis, Range::new(0.0, 100.0), 0.0);
        let settled = state.range;

        // 60% of the current range: above the 0.5 shrink threshold, so
        // the range must stay put frame after frame.
        for frame in 0..10 {
            state.update(
                &config,
                &hysteresis,
                Range::new(0.0, settled.len() * 0.6),
                10.0 + frame as f64,
            );
            assert_eq!(state.range, settled);
        }
    }

    #[test]
    fn min_range_floor_is_enforced() {
        let config = auto_axis().with_min_range(10.0);
        let hysteresis = Hysteresis::default();
        let mut state = AxisState::new(&config);

        state.update(&config, &hysteresis, Range::new(4.9, 5.1), 0.0);
        assert!(state.range.len() >= 10.0);
        assert!(state.range.contains(5.0));
    }

    #[test]
    fn fixed_axis_never_changes() {
        let config = AxisConfig::default().with_fixed_range(0.0, 10.0);
        let hysteresis = Hysteresis::default();
        let mut state = AxisState::new(&config);
        let initial = state.range;

        state.update(&config, &hysteresis, Range::new(-500.0, 500.0), 0.0);
        assert_eq!(state.range, initial);
        for &tick in &state.ticks {
            assert!(initial.contains(tick), "tick {tick} escaped the fixed range");
        }
    }

    #[test]
    fn fixed_ticks_land_on_nice_multiples() {
        let (ticks, spacing) = ticks_within(Range::new(-180.0, 180.0), 7);
        assert!(spacing > 0.0);
        assert!(ticks.contains(&0.0));
        for &tick in &ticks {
            assert!((-180.0..=180.0).contains(&tick));
            let multiple = tick / spacing;
            assert!((multiple - multiple.round()).abs() < 1e-6);
        }
    }
}
