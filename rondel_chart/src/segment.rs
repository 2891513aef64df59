// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring-slice path generation.
//!
//! A segment is one slice of the ring: two concentric arcs joined by two
//! radial edges, with each of the four corners independently rounded. Corner
//! radii are requested chart-wide and clamped here against the segment's own
//! arc lengths and ring width, so a configuration that looks fine on a wide
//! slice cannot fold a narrow one into itself.

use kurbo::{Arc, BezPath, Point, Vec2};

use crate::config::DEFAULT_TOLERANCE;
use crate::corner::CornerRadii;
use crate::geom::{
    angle_for_arc_length, arc_length_for_angle, arc_radians, ring_point, rotate_about,
    tangent_intersection,
};

/// Per-corner cap: leading and trailing corners may jointly consume the full
/// arc they share, so each is limited to half of it.
const OUTER_ARC_DIVISOR: f64 = 2.0;

/// The inner arc is shorter than the outer one for the same angular span, so
/// symmetric limits would let the inner corners meet and overlap. The reduced
/// divisor leaves room between them.
const INNER_ARC_DIVISOR: f64 = 2.5;

/// A ring-slice description that generates a closed [`BezPath`].
///
/// Angles use the crate's painter convention (degrees, 0° at the leftmost
/// point, clockwise on a y-down canvas).
#[derive(Clone, Copy, Debug)]
pub struct SegmentSpec {
    /// Ring center in scene coordinates.
    pub center: Point,
    /// Outer radius of the ring.
    pub outer_radius: f64,
    /// Radial width of the ring. The inner radius is `outer_radius` minus
    /// this.
    pub ring_width: f64,
    /// Start angle of the slice in degrees.
    pub start_degrees: f64,
    /// Angular span of the slice in degrees.
    pub sweep_degrees: f64,
    /// Requested corner rounding (clamped per segment, see
    /// [`Self::clamped_corners`]).
    pub corners: CornerRadii,
    /// Curve flattening tolerance for the generated arcs.
    pub tolerance: f64,
}

impl SegmentSpec {
    /// Creates a square-cornered segment spec.
    pub fn new(
        center: Point,
        outer_radius: f64,
        ring_width: f64,
        start_degrees: f64,
        sweep_degrees: f64,
    ) -> Self {
        Self {
            center,
            outer_radius,
            ring_width,
            start_degrees,
            sweep_degrees,
            corners: CornerRadii::ZERO,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the requested corner rounding.
    pub fn with_corners(mut self, corners: impl Into<CornerRadii>) -> Self {
        self.corners = corners.into();
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The inner radius of the ring.
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius - self.ring_width
    }

    /// The requested corner radii clamped to what this segment can carry.
    ///
    /// Each corner is scaled uniformly (both components by the same ratio, so
    /// elliptical corners keep their aspect) until its tangential component
    /// fits the per-corner share of its arc and its radial component fits
    /// half the ring width. Negative requests clamp to zero.
    pub fn clamped_corners(&self) -> CornerRadii {
        let outer_limit =
            arc_length_for_angle(self.outer_radius, self.sweep_degrees) / OUTER_ARC_DIVISOR;
        let inner_limit =
            arc_length_for_angle(self.inner_radius(), self.sweep_degrees) / INNER_ARC_DIVISOR;
        let half_width = self.ring_width / 2.0;
        CornerRadii {
            outer_leading: clamp_corner(self.corners.outer_leading, outer_limit, half_width),
            outer_trailing: clamp_corner(self.corners.outer_trailing, outer_limit, half_width),
            inner_leading: clamp_corner(self.corners.inner_leading, inner_limit, half_width),
            inner_trailing: clamp_corner(self.corners.inner_trailing, inner_limit, half_width),
        }
    }

    /// Generates the closed outline of the slice.
    ///
    /// Construction order: post-corner point on the leading outer edge, quad
    /// through the leading-outer corner, outer arc, quad through the
    /// trailing-outer corner, straight run down the trailing edge, quad
    /// through the trailing-inner corner, inner arc swept back, quad through
    /// the leading-inner corner, close. Every rounded corner resolves to an
    /// arc endpoint, a control point where the arc's tangent crosses the
    /// radial edge, and an endpoint on that edge; a zero corner collapses to
    /// the raw arc endpoint. A degenerate tangent crossing falls back to the
    /// sharp corner point instead of surfacing an error.
    pub fn path(&self) -> BezPath {
        let r_out = self.outer_radius;
        let r_in = self.inner_radius();
        let a0 = self.start_degrees;
        let a1 = self.start_degrees + self.sweep_degrees;
        let corners = self.clamped_corners();

        let lead_in = ring_point(self.center, r_in, a0);
        let lead_out = ring_point(self.center, r_out, a0);
        let trail_in = rotate_about(self.center, lead_in, self.sweep_degrees);
        let trail_out = rotate_about(self.center, lead_out, self.sweep_degrees);

        let mut path = BezPath::new();

        // Leading outer corner: enter on the radial edge, leave on the arc.
        let outer_start = a0 + corner_sweep(r_out, corners.outer_leading.x);
        if is_rounded(corners.outer_leading) {
            path.move_to(ring_point(
                self.center,
                r_out - corners.outer_leading.y,
                a0,
            ));
            let end = ring_point(self.center, r_out, outer_start);
            let control = tangent_intersection(self.center, r_out, outer_start, lead_in, lead_out)
                .unwrap_or(lead_out);
            path.quad_to(control, end);
        } else {
            path.move_to(lead_out);
        }

        // Outer arc for the remaining span.
        let outer_end = a1 - corner_sweep(r_out, corners.outer_trailing.x);
        append_arc(
            &mut path,
            self.center,
            r_out,
            outer_start,
            outer_end - outer_start,
            self.tolerance,
        );

        // Trailing outer corner.
        let edge_top = if is_rounded(corners.outer_trailing) {
            let control = tangent_intersection(self.center, r_out, outer_end, trail_in, trail_out)
                .unwrap_or(trail_out);
            let end = ring_point(self.center, r_out - corners.outer_trailing.y, a1);
            path.quad_to(control, end);
            end
        } else {
            ring_point(self.center, r_out, outer_end)
        };

        // Straight run down the trailing edge.
        let inner_end = a1 - corner_sweep(r_in, corners.inner_trailing.x);
        let edge_bottom = if is_rounded(corners.inner_trailing) {
            ring_point(self.center, r_in + corners.inner_trailing.y, a1)
        } else {
            trail_in
        };
        if edge_top.distance(edge_bottom) > 1e-9 {
            path.line_to(edge_bottom);
        }

        // Trailing inner corner: enter on the edge, leave on the inner arc.
        if is_rounded(corners.inner_trailing) {
            let end = ring_point(self.center, r_in, inner_end);
            let control = tangent_intersection(self.center, r_in, inner_end, trail_in, trail_out)
                .unwrap_or(trail_in);
            path.quad_to(control, end);
        }

        // Inner arc, swept back toward the leading edge.
        let inner_start = a0 + corner_sweep(r_in, corners.inner_leading.x);
        append_arc(
            &mut path,
            self.center,
            r_in,
            inner_end,
            inner_start - inner_end,
            self.tolerance,
        );

        // Leading inner corner; closing the path draws the leading edge.
        if is_rounded(corners.inner_leading) {
            let control = tangent_intersection(self.center, r_in, inner_start, lead_in, lead_out)
                .unwrap_or(lead_in);
            path.quad_to(
                control,
                ring_point(self.center, r_in + corners.inner_leading.y, a0),
            );
        }

        path.close_path();
        path
    }
}

fn is_rounded(radius: Vec2) -> bool {
    radius.x > 0.0 || radius.y > 0.0
}

/// Uniformly scales a corner pair until it fits both limits.
fn clamp_corner(radius: Vec2, arc_limit: f64, half_width: f64) -> Vec2 {
    let x = radius.x.max(0.0);
    let y = radius.y.max(0.0);
    let mut scale: f64 = 1.0;
    if x > 0.0 {
        scale = scale.min(arc_limit / x);
    }
    if y > 0.0 {
        scale = scale.min(half_width / y);
    }
    let scale = scale.max(0.0);
    Vec2::new(x * scale, y * scale)
}

/// Degrees consumed on a circle of `radius` by a corner of arc length `len`.
/// A degenerate (zero) radius consumes nothing.
fn corner_sweep(radius: f64, len: f64) -> f64 {
    angle_for_arc_length(radius, len).unwrap_or(0.0)
}

fn append_arc(
    path: &mut BezPath,
    center: Point,
    radius: f64,
    start_degrees: f64,
    sweep_degrees: f64,
    tolerance: f64,
) {
    if radius <= 0.0 || sweep_degrees.abs() < 1e-9 {
        return;
    }
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: arc_radians(start_degrees),
        sweep_angle: sweep_degrees.to_radians(),
        x_rotation: 0.0,
    };
    for el in arc.append_iter(tolerance) {
        path.push(el);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;

    use crate::geom::{angle_for_arc_length, ring_angle};

    use super::*;

    fn spec() -> SegmentSpec {
        SegmentSpec::new(Point::new(100.0, 100.0), 80.0, 30.0, 0.0, 90.0)
    }

    fn assert_point_close(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn square_corners_start_at_the_raw_outer_point_with_no_quads() {
        let path = spec().path();
        let els = path.elements();
        let PathEl::MoveTo(start) = els[0] else {
            panic!("expected MoveTo, got {:?}", els[0]);
        };
        // Leftmost point of the outer circle.
        assert_point_close(start, Point::new(20.0, 100.0));
        assert!(
            els.iter().all(|el| !matches!(el, PathEl::QuadTo(..))),
            "square corners must not produce quads"
        );
        assert!(matches!(els.last(), Some(PathEl::ClosePath)));
    }

    #[test]
    fn rounded_corners_start_on_the_leading_edge() {
        let path = spec().with_corners(6.0).path();
        let els = path.elements();
        let PathEl::MoveTo(start) = els[0] else {
            panic!("expected MoveTo, got {:?}", els[0]);
        };
        // Pulled in along the leading edge by the corner's radial component.
        assert_point_close(start, Point::new(26.0, 100.0));
        assert!(matches!(els[1], PathEl::QuadTo(..)));
    }

    #[test]
    fn leading_outer_corner_is_tangent_to_circle_and_edge() {
        let segment = spec().with_corners(6.0);
        let els = segment.path();
        let PathEl::QuadTo(control, end) = els.elements()[1] else {
            panic!("expected a leading corner quad");
        };
        // The control point sits where the arc tangent crosses the leading
        // radial edge (the horizontal line through the center).
        assert!((control.y - 100.0).abs() < 1e-9);
        // The quad lands on the outer circle, one corner arc length in.
        assert!((end.distance(segment.center) - 80.0).abs() < 1e-9);
        let expected = angle_for_arc_length(80.0, 6.0).unwrap();
        assert!((ring_angle(segment.center, end) - expected).abs() < 1e-6);
    }

    #[test]
    fn all_four_corners_round_when_requested() {
        let path = spec().with_corners(6.0).path();
        let quads = path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::QuadTo(..)))
            .count();
        assert_eq!(quads, 4);
    }

    #[test]
    fn oversized_radii_clamp_to_half_the_ring_width() {
        let clamped = spec().with_corners(1000.0).clamped_corners();
        for corner in [
            clamped.outer_leading,
            clamped.outer_trailing,
            clamped.inner_leading,
            clamped.inner_trailing,
        ] {
            assert!((corner.y - 15.0).abs() < 1e-9, "radial clamp: {corner:?}");
            // Square request stays square under the uniform scale.
            assert!((corner.x - corner.y).abs() < 1e-9);
        }
    }

    #[test]
    fn narrow_sweeps_clamp_against_the_arc_length() {
        let segment = SegmentSpec::new(Point::new(100.0, 100.0), 80.0, 30.0, 0.0, 10.0)
            .with_corners(CornerRadii::from_single_radius(20.0));
        let clamped = segment.clamped_corners();
        let outer_limit = arc_length_for_angle(80.0, 10.0) / 2.0;
        assert!((clamped.outer_leading.x - outer_limit).abs() < 1e-9);
        // Inner corners get the shorter arc and the extra margin.
        let inner_limit = arc_length_for_angle(50.0, 10.0) / 2.5;
        assert!((clamped.inner_leading.x - inner_limit).abs() < 1e-9);
        assert!(clamped.inner_leading.x < clamped.outer_leading.x);
    }

    #[test]
    fn elliptical_corners_keep_their_aspect_when_clamped() {
        let segment = SegmentSpec::new(Point::new(0.0, 0.0), 80.0, 30.0, 0.0, 10.0)
            .with_corners(CornerRadii::new(
                Vec2::new(20.0, 10.0),
                Vec2::ZERO,
                Vec2::ZERO,
                Vec2::ZERO,
            ));
        let clamped = segment.clamped_corners();
        assert!(clamped.outer_leading.x < 20.0, "clamp must bind");
        let aspect = clamped.outer_leading.x / clamped.outer_leading.y;
        assert!((aspect - 2.0).abs() < 1e-9);
    }

    #[test]
    fn negative_radii_clamp_to_zero() {
        let clamped = spec()
            .with_corners(CornerRadii::from_single_radius(-5.0))
            .clamped_corners();
        assert_eq!(clamped.outer_leading, Vec2::ZERO);
    }

    #[test]
    fn inner_arc_runs_at_the_inner_radius() {
        let segment = spec();
        let path = segment.path();
        // Every on-curve endpoint lies within the ring band.
        for el in path.elements() {
            let p = match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => *p,
                PathEl::QuadTo(_, p) => *p,
                PathEl::CurveTo(_, _, p) => *p,
                PathEl::ClosePath => continue,
            };
            let d = p.distance(segment.center);
            assert!(
                (50.0 - 1e-6..=80.0 + 1e-6).contains(&d),
                "endpoint {p:?} left the ring (distance {d})"
            );
        }
    }

    #[test]
    fn zero_sweep_produces_a_degenerate_but_closed_path() {
        let path = SegmentSpec::new(Point::new(0.0, 0.0), 80.0, 30.0, 45.0, 0.0).path();
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
    }
}
