//! Scalar interpolation helpers and segment/box geometry.
//!
//! Everything in here operates on chart-space coordinates (`f64`,
//! [`glam::DVec2`]). Screen-space code lives in [`crate::render`].

use glam::DVec2;

/// Linear interpolation between `a` and `b`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}

/// Inverse of [`lerp`]: the parameter at which `value` sits between
/// `a` and `b`.
///
/// Divides by `b - a`; callers must guard degenerate ranges
/// (`a == b`) or the result is infinite/NaN.
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    (value - a) / (b - a)
}

/// Remap `value` from the range `[from_a, from_b]` to `[to_a, to_b]`.
pub fn map(from_a: f64, from_b: f64, to_a: f64, to_b: f64, value: f64) -> f64 {
    lerp(to_a, to_b, inverse_lerp(from_a, from_b, value))
}

/// True iff `value` lies between `a` and `b` inclusive, in either
/// bound order.
pub fn in_range(a: f64, b: f64, value: f64) -> bool {
    if a < b {
        a <= value && value <= b
    } else {
        b <= value && value <= a
    }
}

/// Axis-aligned rectangle in chart space.
///
/// Used for the visible value range (clipping box) and for wrap-period
/// boxes. Screen-space layout uses [`crate::rect::Rect`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, p: DVec2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}

/// Result of intersecting a segment with a [`Bounds`] box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentBoxHit {
    /// All edge crossings that lie on the segment and on the box.
    pub intersections: Vec<DVec2>,
    /// The crossing nearest to the segment's start, if any.
    pub closest: Option<DVec2>,
}

/// Intersect the segment `start -> end` with the four edges of `bounds`.
///
/// A crossing counts only when its parametric position on the segment
/// is within `[0, 1]` and the point itself lies inside the box; the
/// second check rejects hits on an edge's infinite extension. Edge
/// pairs parallel to a degenerate segment axis are skipped to avoid
/// dividing by zero.
pub fn segment_box_intersect(start: DVec2, end: DVec2, bounds: &Bounds) -> SegmentBoxHit {
    let mut hit = SegmentBoxHit::default();

    let mut consider = |p: DVec2, t: f64| {
        if (0.0..=1.0).contains(&t) && bounds.contains(p) {
            hit.intersections.push(p);
        }
    };

    if start.x != end.x {
        for edge_x in [bounds.min.x, bounds.max.x] {
            let t = (edge_x - start.x) / (end.x - start.x);
            let y = start.y + t * (end.y - start.y);
            consider(DVec2::new(edge_x, y), t);
        }
    }

    if start.y != end.y {
        for edge_y in [bounds.min.y, bounds.max.y] {
            let t = (edge_y - start.y) / (end.y - start.y);
            let x = start.x + t * (end.x - start.x);
            consider(DVec2::new(x, edge_y), t);
        }
    }

    hit.closest = hit
        .intersections
        .iter()
        .copied()
        .min_by(|a, b| {
            a.distance(start)
                .partial_cmp(&b.distance(start))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn lerp_inverse_lerp_round_trip() {
        for v in [-3.0, 0.0, 0.25, 7.5, 100.0] {
            let t = inverse_lerp(2.0, 12.0, v);
            assert!((lerp(2.0, 12.0, t) - v).abs() < EPS);
        }
    }

    #[test]
    fn lerp_extrapolates() {
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < EPS);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < EPS);
    }

    #[test]
    fn map_remaps_between_ranges() {
        assert!((map(0.0, 10.0, 100.0, 200.0, 5.0) - 150.0).abs() < EPS);
    }

    #[test]
    fn in_range_handles_either_bound_order() {
        assert!(in_range(0.0, 10.0, 5.0));
        assert!(in_range(10.0, 0.0, 5.0));
        assert!(in_range(0.0, 10.0, 0.0));
        assert!(in_range(0.0, 10.0, 10.0));
        assert!(!in_range(10.0, 0.0, 11.0));
    }

    #[test]
    fn bounds_contains_is_inclusive() {
        let b = Bounds::new(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0));
        assert!(b.contains(DVec2::ZERO));
        assert!(b.contains(DVec2::new(1.0, -1.0)));
        assert!(!b.contains(DVec2::new(1.000001, 0.0)));
        assert!((b.width() - 2.0).abs() < EPS);
        assert!(b.center().abs_diff_eq(DVec2::ZERO, EPS));
    }

    #[test]
    fn horizontal_segment_through_box() {
        let b = Bounds::new(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0));
        let hit = segment_box_intersect(DVec2::new(-10.0, 0.0), DVec2::new(10.0, 0.0), &b);

        assert_eq!(hit.intersections.len(), 2);
        assert!(hit.intersections.contains(&DVec2::new(-1.0, 0.0)));
        assert!(hit.intersections.contains(&DVec2::new(1.0, 0.0)));
        assert_eq!(hit.closest, Some(DVec2::new(-1.0, 0.0)));
    }

    #[test]
    fn segment_fully_inside_has_no_crossings() {
        let b = Bounds::new(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0));
        let hit = segment_box_intersect(DVec2::new(-0.5, -0.5), DVec2::new(0.5, 0.5), &b);
        assert!(hit.intersections.is_empty());
        assert_eq!(hit.closest, None);
    }

    #[test]
    fn degenerate_vertical_segment_skips_vertical_edges() {
        let b = Bounds::new(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0));
        let hit = segment_box_intersect(DVec2::new(0.0, -10.0), DVec2::new(0.0, 10.0), &b);

        assert_eq!(hit.intersections.len(), 2);
        for p in &hit.intersections {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
        assert_eq!(hit.closest, Some(DVec2::new(0.0, -1.0)));
    }

    #[test]
    fn hits_beyond_segment_end_are_rejected() {
        let b = Bounds::new(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0));
        // Segment stops before reaching the box.
        let hit = segment_box_intersect(DVec2::new(-10.0, 0.0), DVec2::new(-5.0, 0.0), &b);
        assert!(hit.intersections.is_empty());
    }

    #[test]
    fn edge_extension_hits_are_rejected() {
        let b = Bounds::new(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0));
        // Crosses x = -1 at y = 5, well above the box.
        let hit = segment_box_intersect(DVec2::new(-2.0, 5.0), DVec2::new(0.0, 5.0), &b);
        assert!(hit.intersections.is_empty());
    }
}
