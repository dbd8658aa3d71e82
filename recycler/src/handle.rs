use crate::{Axis, Point, SlotId};

/// The host side of a pooled slot: whatever visual the UI layer renders rows into.
///
/// The recycler never looks at row payloads. It only tells the visual where to sit and whether
/// to show, and hands out row indexes for the host to bind.
pub trait ItemView {
    /// Uniform size of the item along `axis`. Read once, from the prototype.
    fn extent(&self, axis: Axis) -> f32;

    fn set_position(&mut self, _position: Point) {}

    fn set_active(&mut self, _active: bool) {}

    /// Releases per-item host resources (listeners, subscriptions). Called exactly once, when the
    /// owning view is disposed.
    fn release(&mut self) {}
}

/// A recyclable slot: a host visual plus the row it currently represents.
#[derive(Clone, Debug)]
pub struct ItemHandle<T> {
    slot: SlotId,
    data_index: i64,
    is_updated: bool,
    active: bool,
    position: f32,
    view: T,
}

impl<T: ItemView> ItemHandle<T> {
    pub(crate) fn new(slot: SlotId, view: T) -> Self {
        Self {
            slot,
            data_index: 0,
            is_updated: false,
            active: false,
            position: 0.0,
            view,
        }
    }

    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Row this handle represents. May be negative or past the end while the handle is inactive.
    pub fn data_index(&self) -> i64 {
        self.data_index
    }

    /// `false` until the host has bound content for the current `data_index`.
    pub fn is_updated(&self) -> bool {
        self.is_updated
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Main-axis position (see [`crate::Layout::position_for_index`]).
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn view(&self) -> &T {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut T {
        &mut self.view
    }

    /// Records that content for the current `data_index` has been bound.
    pub fn mark_updated(&mut self) {
        self.is_updated = true;
    }

    /// `Some(row)` when the handle's index lies inside `[0, len)`.
    pub fn row(&self, len: usize) -> Option<usize> {
        usize::try_from(self.data_index).ok().filter(|&i| i < len)
    }

    pub(crate) fn relabel(&mut self, axis: Axis, data_index: i64, position: f32) {
        self.data_index = data_index;
        self.is_updated = false;
        self.position = position;
        self.view.set_position(axis.point(position));
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
        self.view.set_active(active);
    }

    pub(crate) fn release(&mut self) {
        self.view.release();
    }
}
