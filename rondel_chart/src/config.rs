// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-wide configuration and the constants the calculator and animator
//! share.
//!
//! Configuration mistakes (impossible ring widths, gaps wider than the
//! circle) are programmer errors, not data errors: validation fails loudly
//! with documented panics instead of degrading silently.

use peniko::Brush;
use peniko::color::palette::css;

use crate::corner::CornerRadii;
use crate::easing::Easing;

/// Smallest fraction of the circle a segment may occupy.
///
/// Items whose raw fraction falls below this floor are clamped up so they
/// stay visible (and tappable) next to much larger neighbors.
pub const MIN_SEGMENT_FRACTION: f64 = 0.025;

/// Scale factor that stands in for "gone" at the ends of add/remove
/// transitions. Never exactly zero, to keep segment geometry non-degenerate.
pub const SCALE_EPSILON: f64 = 1e-3;

/// Default transition duration in seconds.
pub const DEFAULT_DURATION: f64 = 0.8;

/// Default curve flattening tolerance for generated paths.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Largest permissible inter-segment gap, in degrees, for a chart of
/// `item_count` items.
///
/// With no items there is nothing to separate, so any gap is permissible;
/// otherwise the bound is the gap at which the gaps alone would consume the
/// whole circumference.
pub fn max_gap_degrees(item_count: usize) -> f64 {
    if item_count == 0 {
        f64::INFINITY
    } else {
        360.0 / item_count as f64
    }
}

/// Label styling for on-segment labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Fill paint for label text.
    pub fill: Brush,
    /// Font size in scene coordinates.
    pub font_size: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            fill: Brush::Solid(css::WHITE),
            font_size: 12.0,
        }
    }
}

/// Chart-wide styling and animation configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Width of the ring the segments are drawn in. Must be positive and
    /// smaller than the outer radius at render time.
    pub ring_width: f64,
    /// Angular gap between adjacent segments, in degrees. Must be
    /// non-negative and below [`max_gap_degrees`] for the current item count.
    pub gap_degrees: f64,
    /// Default corner rounding, clamped per segment at render time.
    pub corners: CornerRadii,
    /// Stroke paint for the full-circle ring drawn when the chart has no
    /// items.
    pub empty_color: Brush,
    /// Transition duration in seconds.
    pub duration: f64,
    /// Transition easing curve.
    pub easing: Easing,
    /// On-segment label styling.
    pub label: LabelStyle,
    /// Curve flattening tolerance for generated paths.
    pub tolerance: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            ring_width: 32.0,
            gap_degrees: 0.0,
            corners: CornerRadii::ZERO,
            empty_color: Brush::Solid(css::LIGHT_GRAY),
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
            label: LabelStyle::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ChartStyle {
    /// Sets the ring width.
    pub fn with_ring_width(mut self, ring_width: f64) -> Self {
        self.ring_width = ring_width;
        self
    }

    /// Sets the inter-segment gap in degrees.
    pub fn with_gap_degrees(mut self, gap_degrees: f64) -> Self {
        self.gap_degrees = gap_degrees;
        self
    }

    /// Sets the corner rounding.
    pub fn with_corners(mut self, corners: impl Into<CornerRadii>) -> Self {
        self.corners = corners.into();
        self
    }

    /// Sets the empty-chart ring paint.
    pub fn with_empty_color(mut self, empty_color: impl Into<Brush>) -> Self {
        self.empty_color = empty_color.into();
        self
    }

    /// Sets the transition duration in seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the transition easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the label styling.
    pub fn with_label(mut self, label: LabelStyle) -> Self {
        self.label = label;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks this style against a concrete outer radius and item count.
    ///
    /// # Panics
    ///
    /// Panics if the ring width is not positive, if the ring width is not
    /// smaller than `outer_radius`, if the gap is negative, or if the gap
    /// reaches [`max_gap_degrees`] for `item_count`.
    pub fn validate(&self, outer_radius: f64, item_count: usize) {
        assert!(
            self.ring_width > 0.0,
            "ring width must be positive, got {}",
            self.ring_width
        );
        assert!(
            self.ring_width < outer_radius,
            "ring width {} must be smaller than the outer radius {outer_radius}",
            self.ring_width
        );
        assert!(
            self.gap_degrees >= 0.0,
            "gap must be non-negative, got {}",
            self.gap_degrees
        );
        let max_gap = max_gap_degrees(item_count);
        assert!(
            self.gap_degrees < max_gap,
            "gap {} leaves no angular span for {item_count} items (max {max_gap})",
            self.gap_degrees
        );
    }
}
