use alloc::collections::VecDeque;
use alloc::collections::vec_deque;

use crate::{Edge, SlotId};

/// Notifications from a [`crate::RecyclingView`] to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The handle in `slot` now represents row `index` and needs its content bound.
    ///
    /// Bind with [`crate::RecyclingView::bind`] (or `handle_mut` + `mark_updated`). If the
    /// handle was relabeled again before the host drained this event, bind its *current* index.
    UpdateItem { slot: SlotId, index: usize },
    /// The scroll position reached an edge of the scrollable range.
    ReachedEdge(Edge),
    /// The host reported a click on the handle showing row `index`.
    ItemClicked { index: usize },
}

/// FIFO of pending [`Event`]s, drained by the host once per frame.
///
/// Events are kept in emission order and never merged: every newly-dirty handle yields exactly
/// one `UpdateItem`.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn drain(&mut self) -> vec_deque::Drain<'_, Event> {
        self.events.drain(..)
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }
}
