// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The percentage calculator: raw item values to angular span fractions.
//!
//! A span is the fraction of the full circle a segment occupies. The
//! calculator enforces a minimum visible span for idle items, keeps the gap
//! budget of appearing/disappearing items proportional to their current
//! presence, and renormalizes so the spans plus gaps tile the circle exactly.

extern crate alloc;

use smallvec::SmallVec;

use crate::anim::TransitionKind;
use crate::config::MIN_SEGMENT_FRACTION;

/// Spans are returned inline for typical chart sizes.
pub type Spans = SmallVec<[f64; 8]>;

/// One item as the calculator sees it: a (possibly animation-scaled) value
/// plus the state of the item's in-flight transition, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanEntry {
    /// The value to apportion. For animated items this is already the
    /// rendered value (target value times the current scale factor).
    pub value: f64,
    /// In-flight transition kind and presence in `[0, 1]` (how "there" the
    /// item currently is; 1 for a fully present item).
    pub transition: Option<(TransitionKind, f64)>,
}

impl SpanEntry {
    /// An idle entry with no in-flight transition.
    pub fn steady(value: f64) -> Self {
        Self {
            value,
            transition: None,
        }
    }

    /// An entry with an in-flight transition.
    pub fn animating(value: f64, kind: TransitionKind, presence: f64) -> Self {
        Self {
            value,
            transition: Some((kind, presence)),
        }
    }
}

/// Computes the ordered span fractions for `entries` with an inter-segment
/// gap of `gap_degrees`.
///
/// The result has one fraction per entry and sums (with the gaps) to the full
/// circle: `sum(spans) == 1 - n * gap_degrees/360`, adjusted downward while
/// an appearing/disappearing item's gap share is still growing or shrinking.
///
/// Entries whose raw fraction falls below [`MIN_SEGMENT_FRACTION`] are pinned
/// to exactly the floor when idle or mid value-change; entries mid add/remove
/// stay unclamped (they are expected to be small) and instead shrink the
/// available space by their presence-weighted gap share. Zero- and one-item
/// charts are drawn as full rings and never reach the calculator.
pub fn segment_spans(entries: &[SpanEntry], gap_degrees: f64) -> Spans {
    let n = entries.len();
    let mut spans: Spans = entries.iter().map(|_| 0.0).collect();
    if n == 0 {
        return spans;
    }

    let total: f64 = entries.iter().map(|e| e.value).sum();
    let gap_fraction = gap_degrees / 360.0;
    let mut available = 1.0 - n as f64 * gap_fraction;
    if available <= 0.0 {
        return spans;
    }

    for (span, entry) in spans.iter_mut().zip(entries) {
        *span = if total > 0.0 { entry.value / total } else { 0.0 };
    }

    let mut pinned: SmallVec<[bool; 8]> = entries.iter().map(|_| false).collect();
    for ((span, entry), pin) in spans.iter_mut().zip(entries).zip(pinned.iter_mut()) {
        if *span >= MIN_SEGMENT_FRACTION {
            continue;
        }
        match entry.transition {
            None | Some((TransitionKind::UpdateValue, _)) => {
                *span = MIN_SEGMENT_FRACTION;
                *pin = true;
            }
            Some((TransitionKind::Add | TransitionKind::Remove, presence)) => {
                available -= gap_fraction * presence;
            }
        }
    }

    let floor_total: f64 = pinned.iter().filter(|p| **p).count() as f64 * MIN_SEGMENT_FRACTION;
    let free_total: f64 = spans
        .iter()
        .zip(&pinned)
        .filter(|(_, pin)| !**pin)
        .map(|(span, _)| *span)
        .sum();

    if floor_total <= available && free_total > 0.0 {
        // Pinned entries keep exactly the floor; the rest share what remains.
        let scale = (available - floor_total) / free_total;
        for (span, pin) in spans.iter_mut().zip(&pinned) {
            if !*pin {
                *span *= scale;
            }
        }
    } else {
        // The floors alone overflow the available space (or nothing is left
        // unpinned): degrade to a plain proportional rescale.
        let sum: f64 = spans.iter().sum();
        if sum > 0.0 {
            let scale = available / sum;
            for span in &mut spans {
                *span *= scale;
            }
        }
    }

    spans
}
