// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inverse mapping from a viewport point to the segment under it.
//!
//! The tester reuses the same span calculator the painter uses, so a point
//! resolves against exactly the geometry on screen, including items that are
//! still shrinking out.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::anim::RenderItem;
use crate::config::ChartStyle;
use crate::geom::ring_angle;
use crate::item::ItemId;
use crate::spans::{SpanEntry, segment_spans};

/// A successful hit: which rendered segment the point fell within.
///
/// The index refers to the render snapshot (the drawn order, including items
/// mid-removal), matching the order of [`crate::RingChart::render_items`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitRegion {
    /// Index into the render snapshot.
    pub index: usize,
    /// Id of the matched item.
    pub id: ItemId,
}

/// Resolves `point` against the rendered segments.
///
/// Returns `None` for points outside the ring band and points inside an
/// inter-segment gap. Single-item charts are drawn as a full ring, so any
/// in-band point matches the one item. A boundary angle shared by two
/// adjacent segments belongs to the earlier one: segments are scanned in
/// order over closed `[start, end]` ranges.
pub(crate) fn hit_test<T>(
    snapshot: &[RenderItem<T>],
    style: &ChartStyle,
    center: Point,
    outer_radius: f64,
    point: Point,
) -> Option<HitRegion> {
    let distance = point.distance(center);
    if distance < outer_radius - style.ring_width || distance > outer_radius {
        return None;
    }

    match snapshot {
        [] => None,
        [only] => Some(HitRegion {
            index: 0,
            id: only.item.id.clone(),
        }),
        _ => {
            let entries: Vec<SpanEntry> = snapshot.iter().map(RenderItem::span_entry).collect();
            let spans = segment_spans(&entries, style.gap_degrees);
            let angle = ring_angle(center, point);
            let mut cursor = 0.0;
            for (index, (render, span)) in snapshot.iter().zip(&spans).enumerate() {
                let start = cursor;
                let end = cursor + span * 360.0;
                if angle >= start && angle <= end {
                    return Some(HitRegion {
                        index,
                        id: render.item.id.clone(),
                    });
                }
                cursor = end + style.gap_degrees;
            }
            None
        }
    }
}
