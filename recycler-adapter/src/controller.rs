use alloc::vec::Vec;

use recycler::{Alignment, Error, Event, ItemView, RecyclerOptions, RecyclingView, SlotId};

use crate::ScrollRect;

/// A framework-neutral controller that wraps a `recycler::RecyclingView` around a
/// [`ScrollRect`] and turns offset changes into scroll triggers.
///
/// This type does not hold any UI objects besides the pooled item views. Adapters drive it by
/// calling:
/// - `scroll_to` / `scroll_by` when the user drags or wheels,
/// - `bind_pending` once per frame to fill recycled items with content.
///
/// Programmatic moves (`setup`, `reset`, jumps) set the offset directly and then echo it back
/// through [`Controller::sync`], the way a toolkit scroll view reports its own position on the
/// next frame.
#[derive(Debug)]
pub struct Controller<T: ItemView> {
    view: RecyclingView<T, ScrollRect>,
}

impl<T: ItemView + Clone> Controller<T> {
    pub fn new(options: RecyclerOptions, prototype: T, viewport: f32) -> Result<Self, Error> {
        let rect = ScrollRect::new(options.axis, viewport);
        Ok(Self {
            view: RecyclingView::new(options, prototype, rect)?,
        })
    }

    pub fn setup(&mut self, data_len: usize) -> Result<(), Error> {
        self.view.setup(data_len)?;
        self.sync();
        Ok(())
    }

    pub fn resize(&mut self, data_len: usize) -> Result<(), Error> {
        self.view.resize(data_len)?;
        // The content may have shrunk under the current offset.
        self.sync();
        Ok(())
    }
}

impl<T: ItemView> Controller<T> {
    pub fn from_view(view: RecyclingView<T, ScrollRect>) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &RecyclingView<T, ScrollRect> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut RecyclingView<T, ScrollRect> {
        &mut self.view
    }

    pub fn into_view(self) -> RecyclingView<T, ScrollRect> {
        self.view
    }

    pub fn scroll_rect(&self) -> &ScrollRect {
        self.view.container()
    }

    pub fn offset(&self) -> f32 {
        self.scroll_rect().offset()
    }

    /// Call this when the UI moves the content (drag, wheel, scroll bar).
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to(&mut self, offset: f32) -> f32 {
        let applied = self.view.container_mut().set_offset_clamped(offset);
        self.sync();
        applied
    }

    /// Moves the content by `delta` (positive toward later rows).
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        self.scroll_to(self.offset() + delta)
    }

    /// Reports the container's current position to the view.
    pub fn sync(&mut self) {
        let event = self.view.container().scroll_event();
        self.view.on_scroll(event);
    }

    pub fn reset(&mut self) -> Result<(), Error> {
        self.view.reset()?;
        self.sync();
        Ok(())
    }

    /// Runs an alignment jump and echoes the new offset.
    pub fn jump_to(&mut self, index: usize, alignment: Alignment) -> Result<(), Error> {
        self.view.jump_to(index, alignment)?;
        self.sync();
        Ok(())
    }

    pub fn jump_top(&mut self, index: usize) -> Result<(), Error> {
        self.jump_to(index, Alignment::Top)
    }

    pub fn jump_center(&mut self, index: usize) -> Result<(), Error> {
        self.jump_to(index, Alignment::Center)
    }

    pub fn jump_bottom(&mut self, index: usize) -> Result<(), Error> {
        self.jump_to(index, Alignment::Bottom)
    }

    /// Drains the view's event queue, binding every `UpdateItem` through `bind`, and returns the
    /// remaining events (edges and clicks) in emission order.
    ///
    /// Updates for slots whose current row is out of range are skipped.
    pub fn bind_pending(&mut self, mut bind: impl FnMut(usize, &mut T)) -> Vec<Event> {
        let events: Vec<Event> = self.view.drain_events().collect();
        let mut rest = Vec::new();
        let mut bound = 0usize;
        for event in events {
            match event {
                Event::UpdateItem { slot, .. } => {
                    if self.view.bind(slot, &mut bind) {
                        bound += 1;
                    }
                }
                other => rest.push(other),
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "recycler_adapter",
            bound,
            forwarded = rest.len(),
            "bind_pending"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = bound;
        rest
    }

    /// Routes a click on the visual in `slot` to the view.
    pub fn click(&mut self, slot: SlotId) -> bool {
        self.view.click(slot)
    }

    pub fn dispose(&mut self) {
        self.view.dispose();
    }
}
