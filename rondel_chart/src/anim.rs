// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list-diff transition engine.
//!
//! [`Timeline`] owns the adopted item list, the per-id transition table, and
//! the render snapshot. It has no timers: the host advances it once per frame
//! with [`Timeline::advance`] and transition completion is detected (and the
//! record released) on that same call. Each id has at most one in-flight
//! transition; starting a new one replaces the previous record outright.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::config::SCALE_EPSILON;
use crate::easing::Easing;
use crate::item::{ItemId, RingItem};
use crate::spans::SpanEntry;

/// The kind of an in-flight transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// The item is new in the list and grows in.
    Add,
    /// The item left the list and shrinks out (while still being rendered).
    Remove,
    /// The item's value changed; its rendered value glides to the new one.
    UpdateValue,
}

/// One in-flight scale-factor animation.
#[derive(Clone, Copy, Debug)]
struct Transition {
    kind: TransitionKind,
    elapsed: f64,
    duration: f64,
    easing: Easing,
    from_scale: f64,
    to_scale: f64,
}

impl Transition {
    fn new(
        kind: TransitionKind,
        duration: f64,
        easing: Easing,
        from_scale: f64,
        to_scale: f64,
    ) -> Self {
        Self {
            kind,
            elapsed: 0.0,
            duration,
            easing,
            from_scale,
            to_scale,
        }
    }

    fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    fn eased(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    fn scale(&self) -> f64 {
        self.from_scale + (self.to_scale - self.from_scale) * self.eased()
    }

    /// How "there" the item currently is, for gap accounting.
    fn presence(&self) -> f64 {
        match self.kind {
            TransitionKind::Add => self.eased(),
            TransitionKind::Remove => 1.0 - self.eased(),
            TransitionKind::UpdateValue => 1.0,
        }
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// An item mid-removal, kept renderable at its pre-removal index.
#[derive(Clone, Debug)]
struct Removal<T> {
    index: usize,
    item: RingItem<T>,
}

/// One entry of the render snapshot: a derived item copy plus its current
/// animation state.
#[derive(Clone, Debug)]
pub struct RenderItem<T = ()> {
    /// The item, with its target (unscaled) value.
    pub item: RingItem<T>,
    /// Current scale factor applied to the value for rendering.
    pub scale: f64,
    /// In-flight transition kind and presence, if any.
    pub transition: Option<(TransitionKind, f64)>,
}

impl<T> RenderItem<T> {
    /// The value actually rendered this frame.
    pub fn rendered_value(&self) -> f64 {
        self.item.value * self.scale
    }

    /// This entry as the percentage calculator sees it.
    pub fn span_entry(&self) -> SpanEntry {
        SpanEntry {
            value: self.rendered_value(),
            transition: self.transition,
        }
    }
}

/// The diff engine: adopted items, per-id transitions, render snapshot.
#[derive(Clone, Debug)]
pub struct Timeline<T = ()> {
    duration: f64,
    easing: Easing,
    items: Vec<RingItem<T>>,
    removing: Vec<Removal<T>>,
    transitions: HashMap<ItemId, Transition>,
    snapshot: Vec<RenderItem<T>>,
}

impl<T: Clone> Timeline<T> {
    /// Creates an empty timeline with the given transition duration
    /// (seconds) and easing.
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            items: Vec::new(),
            removing: Vec::new(),
            transitions: HashMap::new(),
            snapshot: Vec::new(),
        }
    }

    /// The last adopted target list (mid-removal items excluded).
    pub fn items(&self) -> &[RingItem<T>] {
        &self.items
    }

    /// The current render snapshot: target items plus mid-removal items at
    /// their pre-removal indices, each with its animated scale.
    ///
    /// The snapshot is rebuilt by [`Self::submit`] and [`Self::advance`] and
    /// reused verbatim in between.
    pub fn render_items(&self) -> &[RenderItem<T>] {
        &self.snapshot
    }

    /// Whether any transition is still in flight.
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// The in-flight transition for `id`, as `(kind, linear progress)`.
    pub fn transition_for(&self, id: &ItemId) -> Option<(TransitionKind, f64)> {
        self.transitions.get(id).map(|t| (t.kind, t.progress()))
    }

    /// Adopts a new item list, diffing it against the current one by id.
    ///
    /// Vanished ids start `Remove` transitions (and stay renderable at their
    /// old index until done), new ids start `Add` transitions, ids whose
    /// value changed start `UpdateValue` transitions, and an unchanged list
    /// is adopted with no animation at all. Starting a transition for an id
    /// cancels any in-flight one for the same id.
    ///
    /// Duplicate ids within `new_items` resolve last-write-wins; earlier
    /// occurrences are dropped without animating.
    ///
    /// # Panics
    ///
    /// Panics if any item's value is not positive.
    pub fn submit(&mut self, new_items: Vec<RingItem<T>>) {
        for item in &new_items {
            assert!(
                item.value > 0.0,
                "item value must be positive, got {} for id {}",
                item.value,
                item.id
            );
        }
        let mut new_items = new_items;
        dedupe_last_wins(&mut new_items);

        let old = core::mem::take(&mut self.items);

        for (index, item) in old.iter().enumerate() {
            if new_items.iter().all(|n| n.id != item.id) {
                self.transitions.insert(
                    item.id.clone(),
                    Transition::new(
                        TransitionKind::Remove,
                        self.duration,
                        self.easing,
                        1.0,
                        SCALE_EPSILON,
                    ),
                );
                if self.removing.iter().all(|r| r.item.id != item.id) {
                    self.removing.push(Removal {
                        index,
                        item: item.clone(),
                    });
                }
            }
        }

        for item in &new_items {
            match old.iter().find(|o| o.id == item.id) {
                None => {
                    // A resubmitted id that was still shrinking out comes
                    // back as a plain add; the removal is cancelled.
                    self.removing.retain(|r| r.item.id != item.id);
                    self.transitions.insert(
                        item.id.clone(),
                        Transition::new(
                            TransitionKind::Add,
                            self.duration,
                            self.easing,
                            SCALE_EPSILON,
                            1.0,
                        ),
                    );
                }
                Some(old_item) if old_item.value != item.value => {
                    // Start from the scale that keeps the rendered value
                    // continuous: new_value * (old/new) == old_value.
                    self.transitions.insert(
                        item.id.clone(),
                        Transition::new(
                            TransitionKind::UpdateValue,
                            self.duration,
                            self.easing,
                            old_item.value / item.value,
                            1.0,
                        ),
                    );
                }
                Some(_) => {}
            }
        }

        self.items = new_items;
        self.rebuild_snapshot();
    }

    /// Advances every in-flight transition by `dt` seconds, releasing the
    /// completed ones (and their mid-removal items) on this same call.
    ///
    /// Returns whether any transition is still in flight afterwards.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.transitions.is_empty() {
            return false;
        }
        let dt = dt.max(0.0);
        let mut completed: Vec<ItemId> = Vec::new();
        for (id, transition) in &mut self.transitions {
            transition.elapsed += dt;
            if transition.is_complete() {
                completed.push(id.clone());
            }
        }
        for id in completed {
            if let Some(transition) = self.transitions.remove(&id)
                && transition.kind == TransitionKind::Remove
            {
                self.removing.retain(|r| r.item.id != id);
            }
        }
        self.rebuild_snapshot();
        !self.transitions.is_empty()
    }

    fn rebuild_snapshot(&mut self) {
        let mut snapshot: Vec<RenderItem<T>> = self
            .items
            .iter()
            .map(|item| match self.transitions.get(&item.id) {
                Some(t) => RenderItem {
                    item: item.clone(),
                    scale: t.scale(),
                    transition: Some((t.kind, t.presence())),
                },
                None => RenderItem {
                    item: item.clone(),
                    scale: 1.0,
                    transition: None,
                },
            })
            .collect();

        // Mid-removal items go back in at their pre-removal index so no
        // surviving item jumps position while a neighbor shrinks out.
        let mut removals: Vec<&Removal<T>> = self.removing.iter().collect();
        removals.sort_by_key(|r| r.index);
        for removal in removals {
            let (scale, presence) = match self.transitions.get(&removal.item.id) {
                Some(t) => (t.scale(), t.presence()),
                None => (SCALE_EPSILON, 0.0),
            };
            let at = removal.index.min(snapshot.len());
            snapshot.insert(
                at,
                RenderItem {
                    item: removal.item.clone(),
                    scale,
                    transition: Some((TransitionKind::Remove, presence)),
                },
            );
        }
        self.snapshot = snapshot;
    }
}

/// Drops every earlier occurrence of a duplicated id, keeping the last.
fn dedupe_last_wins<T>(items: &mut Vec<RingItem<T>>) {
    let mut i = 0;
    while i < items.len() {
        let id = &items[i].id;
        if items[i + 1..].iter().any(|later| later.id == *id) {
            items.remove(i);
        } else {
            i += 1;
        }
    }
}
