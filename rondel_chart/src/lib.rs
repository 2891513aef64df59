// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated radial (donut) chart building blocks.
//!
//! This crate turns an ordered list of weighted items into drawable
//! primitives for one frame of a donut chart, and animates smoothly between
//! successive lists:
//! - **Spans**: raw values become angular span fractions with a minimum
//!   visible floor and gap-aware renormalization.
//! - **Segments**: each span becomes a closed ring-slice path with four
//!   independently rounded, per-segment-clamped corners.
//! - **Transitions**: list changes are diffed by stable id into add, remove,
//!   and value-change animations, with removals staying in place while they
//!   shrink out.
//!
//! Rasterization, text shaping, and input plumbing stay with the host: the
//! chart emits [`kurbo`] paths and [`peniko`] paints, and exposes the
//! hit-test geometry for the host's own gesture handling.

#![no_std]

extern crate alloc;

mod anim;
mod chart;
mod config;
mod corner;
mod easing;
#[cfg(not(feature = "std"))]
mod float;
mod geom;
mod hit;
mod item;
mod segment;
mod spans;

pub use anim::{RenderItem, Timeline, TransitionKind};
pub use chart::{RingChart, Shape};
pub use config::{
    ChartStyle, DEFAULT_DURATION, DEFAULT_TOLERANCE, LabelStyle, MIN_SEGMENT_FRACTION,
    SCALE_EPSILON, max_gap_degrees,
};
pub use corner::CornerRadii;
pub use easing::Easing;
pub use geom::{
    GeomError, angle_for_arc_length, arc_length_for_angle, ring_angle, ring_point, rotate_about,
    tangent_intersection,
};
pub use hit::HitRegion;
pub use item::{ItemId, RingItem};
pub use segment::SegmentSpec;
pub use spans::{SpanEntry, Spans, segment_spans};
