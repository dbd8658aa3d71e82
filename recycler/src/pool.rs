use alloc::vec::Vec;

use crate::handle::{ItemHandle, ItemView};
use crate::{Error, SlotId};

/// Bounded, grow-only set of handles.
///
/// Handles stay in creation order in `slots` (a `SlotId` is an index into it); `order` holds the
/// same slot indexes sorted by `data_index`, which is the order activation is decided in.
#[derive(Clone, Debug)]
pub(crate) struct Pool<T> {
    slots: Vec<ItemHandle<T>>,
    order: Vec<usize>,
    capacity: usize,
    released: bool,
}

impl<T: ItemView> Pool<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            capacity,
            released: false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Clones `prototype` into a new slot at the end of the pool order.
    pub(crate) fn instantiate(&mut self, prototype: &T) -> Result<SlotId, Error>
    where
        T: Clone,
    {
        if self.is_full() {
            rwarn!(capacity = self.capacity, "pool exhausted");
            return Err(Error::PoolExhausted {
                capacity: self.capacity,
            });
        }
        let slot = SlotId(self.slots.len());
        self.slots.push(ItemHandle::new(slot, prototype.clone()));
        self.order.push(slot.0);
        Ok(slot)
    }

    pub(crate) fn get(&self, slot: SlotId) -> Option<&ItemHandle<T>> {
        self.slots.get(slot.0)
    }

    pub(crate) fn get_mut(&mut self, slot: SlotId) -> Option<&mut ItemHandle<T>> {
        self.slots.get_mut(slot.0)
    }

    /// Handle at `position` in pool order.
    pub(crate) fn at(&self, position: usize) -> Option<&ItemHandle<T>> {
        let slot = *self.order.get(position)?;
        self.slots.get(slot)
    }

    pub(crate) fn at_mut(&mut self, position: usize) -> Option<&mut ItemHandle<T>> {
        let slot = *self.order.get(position)?;
        self.slots.get_mut(slot)
    }

    /// Lowest-index handle.
    pub(crate) fn first(&self) -> Option<&ItemHandle<T>> {
        self.at(0)
    }

    /// Highest-index handle.
    pub(crate) fn last(&self) -> Option<&ItemHandle<T>> {
        self.at(self.order.len().checked_sub(1)?)
    }

    pub(crate) fn first_mut(&mut self) -> Option<&mut ItemHandle<T>> {
        self.at_mut(0)
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut ItemHandle<T>> {
        self.at_mut(self.order.len().checked_sub(1)?)
    }

    /// Moves the head of the pool order to the tail.
    pub(crate) fn rotate_first_to_last(&mut self) {
        if !self.order.is_empty() {
            self.order.rotate_left(1);
        }
    }

    /// Moves the tail of the pool order to the head.
    pub(crate) fn rotate_last_to_first(&mut self) {
        if !self.order.is_empty() {
            self.order.rotate_right(1);
        }
    }

    pub(crate) fn sort(&mut self) {
        let slots = &self.slots;
        self.order.sort_by_key(|&slot| slots[slot].data_index());
    }

    /// Iterates handles in pool order.
    pub(crate) fn ordered(&self) -> impl Iterator<Item = &ItemHandle<T>> + '_ {
        self.order.iter().map(|&slot| &self.slots[slot])
    }

    /// Calls `release` on every handle, once for the lifetime of the pool.
    ///
    /// Returns the number of handles released by this call.
    pub(crate) fn release_all(&mut self) -> usize {
        if self.released {
            return 0;
        }
        self.released = true;
        for handle in &mut self.slots {
            handle.release();
        }
        self.slots.len()
    }
}
