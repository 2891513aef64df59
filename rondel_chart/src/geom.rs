// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar/ring geometry primitives.
//!
//! All public angle parameters use the painter convention shared by the whole
//! crate: angles are in degrees, 0° is the leftmost point of the circle, and
//! angles increase clockwise on a y-down canvas. Under that convention a ring
//! point is `center - radius * (cos θ, sin θ)`.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Vec2};

/// Errors produced by geometric primitives on degenerate inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Angle/arc-length conversion is undefined on a circle of zero radius.
    ZeroRadius,
    /// The tangent line and the chord are parallel or coincident, so no
    /// unique intersection exists.
    ParallelLines,
}

impl core::fmt::Display for GeomError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroRadius => f.write_str("angle is undefined for a zero radius"),
            Self::ParallelLines => f.write_str("tangent and chord are parallel or coincident"),
        }
    }
}

impl core::error::Error for GeomError {}

/// Returns the angle in degrees subtended by `length` on a circle of `radius`.
///
/// Fails with [`GeomError::ZeroRadius`] when `radius` is zero, where the
/// angle has no polar meaning.
pub fn angle_for_arc_length(radius: f64, length: f64) -> Result<f64, GeomError> {
    if radius == 0.0 {
        return Err(GeomError::ZeroRadius);
    }
    Ok((length / radius).to_degrees())
}

/// Returns the arc length covered by `degrees` on a circle of `radius`.
///
/// Total: a zero radius yields a zero length.
pub fn arc_length_for_angle(radius: f64, degrees: f64) -> f64 {
    core::f64::consts::PI * radius * degrees / 180.0
}

/// Returns the point at `degrees` (painter convention) on a circle of
/// `radius` around `center`.
pub fn ring_point(center: Point, radius: f64, degrees: f64) -> Point {
    let t = degrees.to_radians();
    center - radius * Vec2::new(t.cos(), t.sin())
}

/// Returns the painter-convention angle of `point` as seen from `center`,
/// normalized to `[0, 360)`.
pub fn ring_angle(center: Point, point: Point) -> f64 {
    let mut deg = (center.y - point.y).atan2(center.x - point.x).to_degrees();
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}

/// Rotates `point` around `center` by `degrees` in the painter sweep
/// direction (clockwise on a y-down canvas).
///
/// Used to find the far end of an arc given its start point and sweep.
pub fn rotate_about(center: Point, point: Point, degrees: f64) -> Point {
    let t = degrees.to_radians();
    let (sin, cos) = (t.sin(), t.cos());
    let v = point - center;
    center + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Intersects the tangent line of the circle (`center`, `radius`) at
/// `degrees` with the line through `p1` and `p2`.
///
/// The intersection is solved in cross-product form, so vertical tangents and
/// vertical chords need no slope special-casing. Fails with
/// [`GeomError::ParallelLines`] when the tangent and the chord are parallel
/// or coincident.
pub fn tangent_intersection(
    center: Point,
    radius: f64,
    degrees: f64,
    p1: Point,
    p2: Point,
) -> Result<Point, GeomError> {
    let t = degrees.to_radians();
    let tangent_point = center - radius * Vec2::new(t.cos(), t.sin());
    // Tangent direction: derivative of the ring point with respect to the
    // painter angle.
    let tangent_dir = Vec2::new(t.sin(), -t.cos());
    let chord_dir = p2 - p1;

    let denom = tangent_dir.cross(chord_dir);
    if denom.abs() < 1e-12 {
        return Err(GeomError::ParallelLines);
    }
    let w = p1 - tangent_point;
    let s = w.cross(chord_dir) / denom;
    Ok(tangent_point + s * tangent_dir)
}

/// Converts a painter-convention angle to the start angle expected by
/// [`kurbo::Arc`] (radians, measured from the positive x axis).
pub(crate) fn arc_radians(degrees: f64) -> f64 {
    (degrees + 180.0).to_radians()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn assert_point_close(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn angle_arc_length_round_trip() {
        for radius in [0.5, 1.0, 42.0, 180.0] {
            for degrees in [0.0, 1.0, 45.0, 90.0, 215.7, 360.0] {
                let length = arc_length_for_angle(radius, degrees);
                let back = angle_for_arc_length(radius, length).unwrap();
                assert_close(back, degrees);
            }
        }
    }

    #[test]
    fn angle_for_arc_length_rejects_zero_radius() {
        assert_eq!(
            angle_for_arc_length(0.0, 10.0),
            Err(GeomError::ZeroRadius)
        );
    }

    #[test]
    fn arc_length_for_angle_is_total() {
        assert_close(arc_length_for_angle(0.0, 90.0), 0.0);
        // Half circumference of a unit circle.
        assert_close(arc_length_for_angle(1.0, 180.0), core::f64::consts::PI);
    }

    #[test]
    fn ring_point_convention() {
        let c = Point::new(10.0, 10.0);
        // 0° is the leftmost point.
        assert_point_close(ring_point(c, 5.0, 0.0), Point::new(5.0, 10.0));
        // 90° clockwise from there is the top of the circle (y-down canvas).
        assert_point_close(ring_point(c, 5.0, 90.0), Point::new(10.0, 5.0));
        assert_point_close(ring_point(c, 5.0, 180.0), Point::new(15.0, 10.0));
    }

    #[test]
    fn ring_angle_inverts_ring_point() {
        let c = Point::new(3.0, -2.0);
        for degrees in [0.0, 10.0, 89.9, 180.0, 270.0, 359.0] {
            assert_close(ring_angle(c, ring_point(c, 7.0, degrees)), degrees);
        }
    }

    #[test]
    fn rotate_about_matches_ring_point_sweep() {
        let c = Point::new(10.0, 10.0);
        let start = ring_point(c, 5.0, 0.0);
        assert_point_close(rotate_about(c, start, 90.0), ring_point(c, 5.0, 90.0));
        assert_point_close(rotate_about(c, start, 212.5), ring_point(c, 5.0, 212.5));
    }

    #[test]
    fn tangent_intersection_vertical_tangent() {
        // Tangent at 0° on the unit circle is the vertical line x = -1; the
        // chord is horizontal at y = -5.
        let hit = tangent_intersection(
            Point::ORIGIN,
            1.0,
            0.0,
            Point::new(0.0, -5.0),
            Point::new(1.0, -5.0),
        )
        .unwrap();
        assert_point_close(hit, Point::new(-1.0, -5.0));
    }

    #[test]
    fn tangent_intersection_vertical_chord() {
        // Tangent at 90° is horizontal (y = -1 around the origin); the chord
        // is the vertical line x = 2.
        let hit = tangent_intersection(
            Point::ORIGIN,
            1.0,
            90.0,
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
        )
        .unwrap();
        assert_point_close(hit, Point::new(2.0, -1.0));
    }

    #[test]
    fn tangent_intersection_rejects_parallel() {
        // Vertical tangent at 0° against a vertical chord.
        let got = tangent_intersection(
            Point::ORIGIN,
            1.0,
            0.0,
            Point::new(3.0, 0.0),
            Point::new(3.0, 1.0),
        );
        assert_eq!(got, Err(GeomError::ParallelLines));
    }
}
