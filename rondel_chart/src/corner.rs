// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner radii for a ring slice.
//!
//! A ring slice has four corners: two on the outer arc and two on the inner
//! arc, one each at the leading (start) and trailing (end) edge. Each corner
//! carries an independent elliptical radius pair: `x` is the tangential
//! component consumed along the arc, `y` the radial component consumed along
//! the straight edge.

use kurbo::Vec2;

/// Elliptical radii for each corner of a ring slice.
///
/// Values here are the chart-wide request; the segment path builder clamps
/// them per segment so no corner can exceed its segment's own arc length or
/// half the ring width (see [`crate::SegmentSpec::clamped_corners`]).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct CornerRadii {
    /// The outer corner at the leading (start) edge.
    pub outer_leading: Vec2,
    /// The outer corner at the trailing (end) edge.
    pub outer_trailing: Vec2,
    /// The inner corner at the leading (start) edge.
    pub inner_leading: Vec2,
    /// The inner corner at the trailing (end) edge.
    pub inner_trailing: Vec2,
}

impl CornerRadii {
    /// Fully square corners.
    pub const ZERO: Self = Self::from_single_radius(0.0);

    /// Creates radii from the four corner pairs, outer before inner, leading
    /// before trailing.
    pub const fn new(
        outer_leading: Vec2,
        outer_trailing: Vec2,
        inner_leading: Vec2,
        inner_trailing: Vec2,
    ) -> Self {
        Self {
            outer_leading,
            outer_trailing,
            inner_leading,
            inner_trailing,
        }
    }

    /// Creates radii with the same circular radius on all four corners.
    pub const fn from_single_radius(radius: f64) -> Self {
        let r = Vec2::new(radius, radius);
        Self::new(r, r, r, r)
    }

    /// Creates radii with one circular radius for both outer corners and
    /// another for both inner corners.
    pub const fn from_outer_inner(outer: f64, inner: f64) -> Self {
        let o = Vec2::new(outer, outer);
        let i = Vec2::new(inner, inner);
        Self::new(o, o, i, i)
    }
}

impl From<f64> for CornerRadii {
    fn from(radius: f64) -> Self {
        Self::from_single_radius(radius)
    }
}

impl From<(f64, f64)> for CornerRadii {
    fn from((outer, inner): (f64, f64)) -> Self {
        Self::from_outer_inner(outer, inner)
    }
}
