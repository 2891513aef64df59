// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart front-end: items in, drawable primitives out.
//!
//! [`RingChart`] owns the configuration and the transition timeline and
//! produces a fresh primitive list per frame. Rasterization stays with the
//! host: segments arrive as filled [`BezPath`]s, empty/one-item charts as
//! stroked circles, labels as unshaped anchored strings.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Size};
use peniko::Brush;

use crate::anim::{RenderItem, Timeline};
use crate::config::ChartStyle;
use crate::geom::ring_point;
use crate::hit::{self, HitRegion};
use crate::item::RingItem;
use crate::segment::SegmentSpec;
use crate::spans::{SpanEntry, segment_spans};

/// Painter angle of the top of the ring, where single-item labels sit.
const TOP_DEGREES: f64 = 90.0;

/// One drawable primitive of a chart frame.
#[derive(Clone, Debug)]
pub enum Shape {
    /// A filled ring-slice outline.
    Segment {
        /// Closed slice outline.
        path: BezPath,
        /// Fill paint.
        fill: Brush,
    },
    /// A full-circle stroked ring, used for zero- and one-item charts.
    Ring {
        /// The ring's centerline circle.
        circle: Circle,
        /// Stroke width (the ring width).
        width: f64,
        /// Stroke paint.
        stroke: Brush,
    },
    /// An unshaped text label, anchored at its center point.
    Label {
        /// Label text.
        text: String,
        /// Anchor point (horizontal and vertical center).
        pos: Point,
        /// Fill paint.
        fill: Brush,
        /// Font size in scene coordinates.
        font_size: f64,
    },
}

/// An animated radial chart.
///
/// The host submits item lists with [`Self::set_items`], steps time with
/// [`Self::advance`] once per frame while [`Self::is_animating`], and draws
/// whatever [`Self::shapes`] returns.
#[derive(Clone, Debug)]
pub struct RingChart<T = ()> {
    style: ChartStyle,
    timeline: Timeline<T>,
}

impl<T: Clone> RingChart<T> {
    /// Creates an empty chart with the given style.
    pub fn new(style: ChartStyle) -> Self {
        let timeline = Timeline::new(style.duration, style.easing);
        Self { style, timeline }
    }

    /// The chart-wide style.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Submits a new ordered item list, starting transitions for whatever
    /// changed (see [`Timeline::submit`]).
    pub fn set_items(&mut self, items: Vec<RingItem<T>>) {
        self.timeline.submit(items);
    }

    /// Advances in-flight transitions by `dt` seconds; returns whether
    /// another frame is needed.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.timeline.advance(dt)
    }

    /// Whether any transition is still in flight.
    pub fn is_animating(&self) -> bool {
        self.timeline.is_animating()
    }

    /// The last adopted target items.
    pub fn items(&self) -> &[RingItem<T>] {
        self.timeline.items()
    }

    /// The current render snapshot (includes items mid-removal).
    pub fn render_items(&self) -> &[RenderItem<T>] {
        self.timeline.render_items()
    }

    /// Produces the primitives for one frame in a viewport of `size`.
    ///
    /// The ring is centered in the viewport with the outer radius at half the
    /// smaller dimension. Zero- and one-item charts are drawn as one
    /// full-circle stroke and never reach the span calculator.
    ///
    /// # Panics
    ///
    /// Panics if the style fails validation against the viewport (see
    /// [`ChartStyle::validate`]).
    pub fn shapes(&self, size: Size) -> Vec<Shape> {
        let (center, outer_radius) = frame_geometry(size);
        self.style.validate(outer_radius, self.timeline.items().len());
        let mid_radius = outer_radius - self.style.ring_width / 2.0;
        let snapshot = self.timeline.render_items();

        match snapshot {
            [] => alloc::vec![Shape::Ring {
                circle: Circle::new(center, mid_radius),
                width: self.style.ring_width,
                stroke: self.style.empty_color.clone(),
            }],
            [only] => {
                let mut shapes = alloc::vec![Shape::Ring {
                    circle: Circle::new(center, mid_radius),
                    width: self.style.ring_width,
                    stroke: only.item.color.clone(),
                }];
                if let Some(label) = &only.item.label {
                    shapes.push(self.label(label, ring_point(center, mid_radius, TOP_DEGREES)));
                }
                shapes
            }
            _ => {
                let entries: Vec<SpanEntry> = snapshot.iter().map(RenderItem::span_entry).collect();
                let spans = segment_spans(&entries, self.style.gap_degrees);
                let mut shapes = Vec::with_capacity(snapshot.len() * 2);
                let mut cursor = 0.0;
                for (render, span) in snapshot.iter().zip(&spans) {
                    let sweep = span * 360.0;
                    let path = SegmentSpec::new(
                        center,
                        outer_radius,
                        self.style.ring_width,
                        cursor,
                        sweep,
                    )
                    .with_corners(self.style.corners)
                    .with_tolerance(self.style.tolerance)
                    .path();
                    shapes.push(Shape::Segment {
                        path,
                        fill: render.item.color.clone(),
                    });
                    if let Some(label) = &render.item.label {
                        let pos = ring_point(center, mid_radius, cursor + sweep / 2.0);
                        shapes.push(self.label(label, pos));
                    }
                    cursor += sweep + self.style.gap_degrees;
                }
                shapes
            }
        }
    }

    /// Maps a viewport point to the segment it falls within, if any.
    ///
    /// Points outside the ring band, or inside an inter-segment gap, match
    /// nothing. Where two segments share a boundary angle the earlier one in
    /// iteration order wins.
    ///
    /// # Panics
    ///
    /// Panics if the style fails validation against the viewport (see
    /// [`ChartStyle::validate`]).
    pub fn hit_test(&self, point: Point, size: Size) -> Option<HitRegion> {
        let (center, outer_radius) = frame_geometry(size);
        self.style.validate(outer_radius, self.timeline.items().len());
        hit::hit_test(
            self.timeline.render_items(),
            &self.style,
            center,
            outer_radius,
            point,
        )
    }

    fn label(&self, text: &str, pos: Point) -> Shape {
        Shape::Label {
            text: String::from(text),
            pos,
            fill: self.style.label.fill.clone(),
            font_size: self.style.label.font_size,
        }
    }
}

/// Viewport center and outer radius for a frame of `size`.
pub(crate) fn frame_geometry(size: Size) -> (Point, f64) {
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    (center, size.width.min(size.height) / 2.0)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use crate::easing::Easing;

    use super::*;

    fn style() -> ChartStyle {
        ChartStyle::default()
            .with_duration(1.0)
            .with_easing(Easing::Linear)
    }

    fn settled(items: Vec<RingItem>) -> RingChart {
        let mut chart = RingChart::new(style());
        chart.set_items(items);
        chart.advance(1.0);
        assert!(!chart.is_animating());
        chart
    }

    fn size() -> Size {
        Size::new(200.0, 200.0)
    }

    #[test]
    fn empty_chart_is_one_fallback_ring() {
        let chart: RingChart = RingChart::new(style());
        let shapes = chart.shapes(size());
        let [Shape::Ring { circle, width, stroke }] = &shapes[..] else {
            panic!("expected a single ring, got {shapes:?}");
        };
        assert_eq!(circle.center, Point::new(100.0, 100.0));
        // Stroke runs along the ring centerline.
        assert_eq!(circle.radius, 100.0 - 16.0);
        assert_eq!(*width, 32.0);
        assert_eq!(*stroke, chart.style().empty_color);
    }

    #[test]
    fn single_item_chart_is_a_ring_in_the_item_color() {
        let chart = settled(vec![
            RingItem::new(100.0, css::TOMATO)
                .with_id("a")
                .with_label("all of it"),
        ]);
        let shapes = chart.shapes(size());
        let [Shape::Ring { stroke, .. }, Shape::Label { text, pos, .. }] = &shapes[..] else {
            panic!("expected ring + label, got {shapes:?}");
        };
        assert_eq!(*stroke, css::TOMATO.into());
        assert_eq!(text, "all of it");
        // Centered at the top of the ring.
        assert!((pos.x - 100.0).abs() < 1e-9);
        assert!((pos.y - 16.0).abs() < 1e-9);
    }

    #[test]
    fn multi_item_chart_fills_one_segment_per_item() {
        let chart = settled(vec![
            RingItem::new(30.0, css::TOMATO).with_id("a"),
            RingItem::new(40.0, css::TEAL).with_id("b"),
            RingItem::new(30.0, css::GOLD).with_id("c"),
        ]);
        let shapes = chart.shapes(size());
        assert_eq!(shapes.len(), 3);
        assert!(
            shapes
                .iter()
                .all(|s| matches!(s, Shape::Segment { .. }))
        );
    }

    #[test]
    fn labels_sit_at_the_angular_midpoint() {
        let chart = settled(vec![
            RingItem::new(50.0, css::TOMATO).with_id("a").with_label("A"),
            RingItem::new(50.0, css::TEAL).with_id("b"),
        ]);
        let shapes = chart.shapes(size());
        let Some(Shape::Label { pos, .. }) = shapes
            .iter()
            .find(|s| matches!(s, Shape::Label { .. }))
        else {
            panic!("expected a label");
        };
        // First segment spans 0..180°; its midpoint is the top of the ring.
        assert!((pos.x - 100.0).abs() < 1e-9);
        assert!((pos.y - 16.0).abs() < 1e-9);
    }

    #[test]
    fn mid_removal_items_still_render() {
        let mut chart = settled(vec![
            RingItem::new(50.0, css::TOMATO).with_id("a"),
            RingItem::new(50.0, css::TEAL).with_id("b"),
        ]);
        chart.set_items(vec![RingItem::new(50.0, css::TOMATO).with_id("a")]);
        chart.advance(0.25);

        let segments = chart
            .shapes(size())
            .iter()
            .filter(|s| matches!(s, Shape::Segment { .. }))
            .count();
        assert_eq!(segments, 2);

        chart.advance(1.0);
        assert!(!chart.is_animating());
        // Settled single-item charts collapse back to a full ring.
        let shapes = chart.shapes(size());
        assert!(matches!(shapes[0], Shape::Ring { .. }));
    }

    #[test]
    fn snapshot_is_reused_verbatim_while_idle() {
        let chart = settled(vec![
            RingItem::new(50.0, css::TOMATO).with_id("a"),
            RingItem::new(50.0, css::TEAL).with_id("b"),
        ]);
        let a = chart.render_items().as_ptr();
        let b = chart.render_items().as_ptr();
        assert_eq!(a, b);
    }
}
