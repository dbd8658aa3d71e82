use alloc::vec::Vec;

use crate::events::EventQueue;
use crate::handle::{ItemHandle, ItemView};
use crate::pool::Pool;
use crate::recycle::ScrollTracker;
use crate::state::{FrameState, HandleState};
use crate::{Axis, Error, Event, Layout, RecyclerOptions, ScrollContainer, SlotId};

/// A pooled list view: a bounded set of item handles recycled as the container scrolls.
///
/// The view never owns row data. The host:
/// - calls [`Self::setup`] / [`Self::resize`] with the row count,
/// - forwards container scroll changes to [`Self::on_scroll`],
/// - drains [`Event`]s once per frame and binds content for `UpdateItem`s.
///
/// All mutation happens through `&mut self`, one trigger at a time.
#[derive(Debug)]
pub struct RecyclingView<T: ItemView, C: ScrollContainer> {
    pub(crate) options: RecyclerOptions,
    pub(crate) layout: Layout,
    prototype: T,
    pub(crate) container: C,
    pub(crate) pool: Pool<T>,
    pub(crate) data_len: usize,
    pub(crate) max_visible: usize,
    populated: bool,
    pub(crate) disposed: bool,
    pub(crate) content_offset: f32,
    content_extent: f32,
    pub(crate) scroll: ScrollTracker,
    pub(crate) events: EventQueue,
}

impl<T: ItemView + Clone, C: ScrollContainer> RecyclingView<T, C> {
    /// Builds a view around an item prototype and a container.
    ///
    /// The prototype supplies the uniform item size and is cloned for every pooled handle; the
    /// container supplies the viewport size. Both are read once, here.
    pub fn new(options: RecyclerOptions, prototype: T, container: C) -> Result<Self, Error> {
        options.validate()?;
        let axis = options.axis;

        let item_size = prototype.extent(axis);
        if !item_size.is_finite() || item_size <= 0.0 {
            return Err(Error::InvalidItemExtent { extent: item_size });
        }
        let viewport = container.viewport_extent(axis);
        if !viewport.is_finite() || viewport <= 0.0 {
            return Err(Error::InvalidViewport { extent: viewport });
        }

        let layout = Layout::new(
            item_size,
            options.spacing,
            options.top_margin,
            options.bottom_margin,
            viewport,
        );
        let max_visible = layout.max_visible_count();
        let capacity = layout.max_pool_size(options.pool_slack);
        rdebug!(
            ?axis,
            item_size,
            viewport,
            max_visible,
            capacity,
            "RecyclingView::new"
        );

        Ok(Self {
            options,
            layout,
            prototype,
            container,
            pool: Pool::new(capacity),
            data_len: 0,
            max_visible,
            populated: false,
            disposed: false,
            content_offset: 0.0,
            content_extent: layout.content_extent(0),
            scroll: ScrollTracker::default(),
            events: EventQueue::new(),
        })
    }

    /// Populates the view for `data_len` rows and lays it out from row 0.
    ///
    /// Creates handles up to `min(pool capacity, data_len)`, re-indexes every handle from 0,
    /// resets the container offset and queues an `UpdateItem` for each visible handle. Calling
    /// it again (e.g. after swapping datasets) repeats the layout from the top.
    pub fn setup(&mut self, data_len: usize) -> Result<(), Error> {
        self.populate(data_len, None)
    }

    /// Like [`Self::setup`], but on the very first population binds the initially visible
    /// handles synchronously through `init` instead of queuing `UpdateItem` events.
    ///
    /// Each handle passed to `init` is marked updated afterwards. Later calls behave exactly like
    /// `setup` and never invoke `init`.
    pub fn setup_with(
        &mut self,
        data_len: usize,
        mut init: impl FnMut(&mut ItemHandle<T>),
    ) -> Result<(), Error> {
        self.populate(data_len, Some(&mut init))
    }

    /// Reacts to a change of the row count.
    ///
    /// Growing a view whose pool is below capacity fills the remaining capacity, appending each
    /// new handle after the current last one. Then every visible handle is refreshed and the
    /// content size is pushed to the container.
    pub fn resize(&mut self, data_len: usize) -> Result<(), Error> {
        self.ensure_live()?;
        rdebug!(from = self.data_len, to = data_len, pool = self.pool.len(), "resize");
        if data_len > self.data_len {
            while !self.pool.is_full() {
                self.append_handle()?;
            }
        }
        self.data_len = data_len;
        self.render();
        self.sync_content_extent();
        Ok(())
    }

    fn populate(
        &mut self,
        data_len: usize,
        init: Option<&mut dyn FnMut(&mut ItemHandle<T>)>,
    ) -> Result<(), Error> {
        self.ensure_live()?;
        rdebug!(
            data_len,
            pool = self.pool.len(),
            first = !self.populated,
            "setup"
        );
        self.data_len = data_len;
        let target = data_len.min(self.pool.capacity());
        while self.pool.len() < target {
            self.append_handle()?;
        }

        self.sync_content_extent();
        self.initialize_pool();
        match init {
            Some(init) if !self.populated => self.populate_with(init),
            _ => self.render(),
        }
        self.populated = true;
        Ok(())
    }

    /// Instantiates one handle directly after the current last handle.
    fn append_handle(&mut self) -> Result<SlotId, Error> {
        let (index, position) = match self.pool.last() {
            Some(last) => (last.data_index() + 1, last.position() - self.layout.stride()),
            None => (0, self.layout.position_for_index(0)),
        };
        let axis = self.options.axis;
        let slot = self.pool.instantiate(&self.prototype)?;
        if let Some(handle) = self.pool.get_mut(slot) {
            handle.relabel(axis, index, position);
            handle.set_active(false);
        }
        rtrace!(slot = slot.get(), index, "instantiated handle");
        Ok(slot)
    }

    fn populate_with(&mut self, init: &mut dyn FnMut(&mut ItemHandle<T>)) {
        let len = self.data_len;
        let max_visible = self.max_visible;
        for position in 0..self.pool.len() {
            let Some(handle) = self.pool.at_mut(position) else {
                break;
            };
            if position < max_visible && handle.row(len).is_some() {
                init(handle);
                handle.mark_updated();
                handle.set_active(true);
            } else {
                handle.set_active(false);
            }
        }
    }
}

impl<T: ItemView, C: ScrollContainer> RecyclingView<T, C> {
    /// Re-runs the initial layout: rows from 0, container offset at the origin, then a render
    /// pass.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.ensure_live()?;
        rdebug!(data_len = self.data_len, "reset");
        self.initialize_pool();
        self.render();
        Ok(())
    }

    /// Refreshes the whole visible window.
    ///
    /// Every handle within the first `max_visible_count` in pool order whose row is in range gets
    /// an `UpdateItem` (even if already bound) and is activated; all others are deactivated.
    pub fn render(&mut self) {
        if self.disposed {
            return;
        }
        let len = self.data_len;
        let max_visible = self.max_visible;
        for position in 0..self.pool.len() {
            let Some(handle) = self.pool.at_mut(position) else {
                break;
            };
            match handle.row(len) {
                Some(index) if position < max_visible => {
                    self.events.push(Event::UpdateItem {
                        slot: handle.slot(),
                        index,
                    });
                    handle.set_active(true);
                }
                _ => handle.set_active(false),
            }
        }
    }

    /// Routes a click on the visual in `slot` to an [`Event::ItemClicked`].
    ///
    /// Ignored (returns `false`) after disposal, for unknown slots and for inactive handles.
    pub fn click(&mut self, slot: SlotId) -> bool {
        if self.disposed {
            return false;
        }
        let Some(handle) = self.pool.get(slot) else {
            return false;
        };
        if !handle.is_active() {
            return false;
        }
        let Some(index) = handle.row(self.data_len) else {
            return false;
        };
        self.events.push(Event::ItemClicked { index });
        true
    }

    /// Binds content for the handle in `slot`: calls `f` with its current row and view, then
    /// marks it updated.
    ///
    /// Returns `false` (without calling `f`) if the view is disposed, the slot is unknown or its
    /// row is out of range.
    pub fn bind(&mut self, slot: SlotId, f: impl FnOnce(usize, &mut T)) -> bool {
        if self.disposed {
            return false;
        }
        let len = self.data_len;
        let Some(handle) = self.pool.get_mut(slot) else {
            return false;
        };
        let Some(index) = handle.row(len) else {
            return false;
        };
        f(index, handle.view_mut());
        handle.mark_updated();
        true
    }

    /// Releases every handle exactly once and drops pending events.
    ///
    /// Idempotent; also runs on drop. Afterwards mutating calls fail with [`Error::Disposed`]
    /// and scroll triggers and clicks are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        rdebug!(handles = self.pool.len(), "dispose");
        self.pool.release_all();
        self.events.clear();
        self.disposed = true;
    }

    pub fn poll_event(&mut self) -> Option<Event> {
        self.events.pop()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain()
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn pool_capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn max_visible_count(&self) -> usize {
        self.max_visible
    }

    /// The last content offset set by the view or reported through `on_scroll`.
    pub fn content_offset(&self) -> f32 {
        self.content_offset
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn handle(&self, slot: SlotId) -> Option<&ItemHandle<T>> {
        self.pool.get(slot)
    }

    pub fn handle_mut(&mut self, slot: SlotId) -> Option<&mut ItemHandle<T>> {
        self.pool.get_mut(slot)
    }

    /// Iterates handles in pool order (ascending row).
    pub fn handles(&self) -> impl Iterator<Item = &ItemHandle<T>> + '_ {
        self.pool.ordered()
    }

    /// Rows currently shown by active handles, ascending.
    pub fn active_rows(&self) -> impl Iterator<Item = usize> + '_ {
        let len = self.data_len;
        self.pool
            .ordered()
            .filter(|h| h.is_active())
            .filter_map(move |h| h.row(len))
    }

    pub fn snapshot(&self) -> FrameState {
        FrameState {
            content_offset: self.content_offset,
            content_extent: self.content_extent,
            data_len: self.data_len,
            handles: self
                .pool
                .ordered()
                .map(|h| HandleState {
                    slot: h.slot(),
                    data_index: h.data_index(),
                    position: h.position(),
                    active: h.is_active(),
                    is_updated: h.is_updated(),
                })
                .collect::<Vec<_>>(),
        }
    }

    pub(crate) fn ensure_live(&self) -> Result<(), Error> {
        if self.disposed {
            return Err(Error::Disposed);
        }
        Ok(())
    }

    /// Indexes handles `first, first + 1, ..` in pool order and moves them to match.
    pub(crate) fn relabel_from(&mut self, first: i64) {
        let axis = self.options.axis;
        for position in 0..self.pool.len() {
            let index = first + position as i64;
            let at = self.layout.position_for_index(index);
            if let Some(handle) = self.pool.at_mut(position) {
                handle.relabel(axis, index, at);
            }
        }
    }

    /// Activates the first `max_visible_count` handles in pool order whose rows are in range and
    /// deactivates the rest.
    pub(crate) fn apply_visibility(&mut self) {
        let len = self.data_len;
        let max_visible = self.max_visible;
        for position in 0..self.pool.len() {
            if let Some(handle) = self.pool.at_mut(position) {
                let active = position < max_visible && handle.row(len).is_some();
                handle.set_active(active);
            }
        }
    }

    /// Queues an `UpdateItem` for every unbound handle whose row is in range.
    pub(crate) fn queue_dirty_updates(&mut self) {
        let len = self.data_len;
        for handle in self.pool.ordered() {
            if handle.is_updated() {
                continue;
            }
            if let Some(index) = handle.row(len) {
                self.events.push(Event::UpdateItem {
                    slot: handle.slot(),
                    index,
                });
            }
        }
    }

    /// Sets the container offset directly and records it as the last known scroll position, so
    /// the container echoing it back is not read as movement.
    pub(crate) fn set_content_offset(&mut self, offset: f32) {
        self.container.set_content_offset(self.options.axis, offset);
        self.content_offset = offset;
        self.scroll.set_previous(offset);
    }

    fn initialize_pool(&mut self) {
        self.relabel_from(0);
        self.set_content_offset(0.0);
        self.scroll.rearm_edges();
    }

    fn sync_content_extent(&mut self) {
        self.content_extent = self.layout.content_extent(self.data_len);
        self.container
            .set_content_extent(self.options.axis, self.content_extent);
    }
}

impl<T: ItemView, C: ScrollContainer> Drop for RecyclingView<T, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
