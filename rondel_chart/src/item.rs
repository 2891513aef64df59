// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart items and their stable identity.

extern crate alloc;

use alloc::string::String;
use core::sync::atomic::{AtomicU64, Ordering};

use peniko::Brush;

static NEXT_AUTO_ID: AtomicU64 = AtomicU64::new(0);

/// A stable string identity used to match items across submitted lists.
///
/// Ids must be unique within one chart. Transitions (add/remove/value change)
/// are keyed by id, so a caller that wants an item to animate rather than be
/// treated as a new item must reuse the same id across frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Generates a fresh process-unique id for items constructed without one.
    pub fn auto() -> Self {
        let n = NEXT_AUTO_ID.fetch_add(1, Ordering::Relaxed);
        Self(alloc::format!("item-{n}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(String::from(id))
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One weighted chart item.
///
/// Items are immutable caller-owned values; the chart only derives scaled
/// copies for rendering. `T` is an opaque payload for application data that
/// should travel with the item through diffing and hit-testing; the chart
/// never inspects it.
#[derive(Clone, Debug)]
pub struct RingItem<T = ()> {
    /// Stable identity (see [`ItemId`]).
    pub id: ItemId,
    /// Weight of the item's segment. Must be positive.
    pub value: f64,
    /// Fill paint for the item's segment.
    pub color: Brush,
    /// Optional label text (unshaped), drawn centered on the segment.
    pub label: Option<String>,
    /// Opaque caller data.
    pub payload: T,
}

impl RingItem {
    /// Creates an item with an auto-generated id and no payload.
    ///
    /// Panics if `value` is not positive; a weightless item is a caller bug.
    pub fn new(value: f64, color: impl Into<Brush>) -> Self {
        assert!(value > 0.0, "item value must be positive, got {value}");
        Self {
            id: ItemId::auto(),
            value,
            color: color.into(),
            label: None,
            payload: (),
        }
    }
}

impl<T> RingItem<T> {
    /// Replaces the auto-generated id with a caller-chosen one.
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches an opaque payload, replacing any existing one.
    pub fn with_payload<U>(self, payload: U) -> RingItem<U> {
        RingItem {
            id: self.id,
            value: self.value,
            color: self.color,
            label: self.label,
            payload,
        }
    }
}
