use core::cmp::Ordering;

use crate::handle::ItemView;
use crate::{Axis, Edge, Event, RecyclingView, ScrollContainer, ScrollDirection, ScrollEvent};

/// Scroll history needed between triggers: the previous content offset (for direction) and the
/// edge the position currently sits on (for one-shot edge events).
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ScrollTracker {
    previous: Option<f32>,
    edge: Option<Edge>,
}

impl ScrollTracker {
    pub(crate) fn set_previous(&mut self, offset: f32) {
        self.previous = Some(offset);
    }

    pub(crate) fn rearm_edges(&mut self) {
        self.edge = None;
    }

    fn direction(&self, offset: f32) -> Option<ScrollDirection> {
        match offset.partial_cmp(&self.previous?)? {
            Ordering::Greater => Some(ScrollDirection::Forward),
            Ordering::Less => Some(ScrollDirection::Backward),
            Ordering::Equal => None,
        }
    }

    /// Returns the edge just reached, once per crossing; staying pinned at an edge reports
    /// nothing until the position leaves it.
    fn cross(&mut self, axis: Axis, normalized: f32) -> Option<Edge> {
        let edge = axis.edge_at(normalized);
        let entered = edge.filter(|&e| self.edge != Some(e));
        self.edge = edge;
        entered
    }
}

impl<T: ItemView, C: ScrollContainer> RecyclingView<T, C> {
    /// Handles a scroll change reported by the container.
    ///
    /// Handles that left the viewport are relabeled at the opposite end of the pool (moving
    /// forward, the ones before the top row go after the last handle; moving backward, the last
    /// handles go before the first). Relabeled handles get an `UpdateItem` and visibility is
    /// recomputed. Edge events are checked on every call.
    pub fn on_scroll(&mut self, event: ScrollEvent) {
        if self.disposed || self.pool.is_empty() {
            return;
        }
        let axis = self.options.axis;
        self.content_offset = event.offset;

        let top = self.layout.top_visible_index(event.offset);
        let bottom = self.layout.bottom_visible_index(event.offset);
        let direction = self.scroll.direction(event.offset);
        rtrace!(
            offset = event.offset,
            normalized = event.normalized,
            top,
            bottom,
            ?direction,
            "on_scroll"
        );

        let relocated = match direction {
            // Runs past the last row too, so a trigger landing in the trailing margin still
            // moves the stale handles up to `top`.
            Some(ScrollDirection::Forward) => self.recycle_forward(top),
            Some(ScrollDirection::Backward) if top >= 0 => self.recycle_backward(top),
            _ => 0,
        };

        if relocated > 0 {
            rtrace!(relocated, "recycled handles");
            self.pool.sort();
            self.queue_dirty_updates();
            self.apply_visibility();
        }

        if let Some(edge) = self.scroll.cross(axis, event.normalized) {
            rdebug!(?edge, "reached edge");
            self.events.push(Event::ReachedEdge(edge));
        }
        self.scroll.set_previous(event.offset);
    }

    /// Moves every handle whose row is before `top` to the end of the pool, one after another.
    fn recycle_forward(&mut self, top: i64) -> usize {
        let Some(last) = self.pool.last() else {
            return 0;
        };
        if last.data_index() < top {
            // Scrolled past the whole pool in one trigger.
            self.relabel_from(top);
            return self.pool.len();
        }

        let axis = self.options.axis;
        let mut moved = 0;
        while let (Some(first), Some(last)) = (self.pool.first(), self.pool.last()) {
            if first.data_index() >= top {
                break;
            }
            let index = last.data_index() + 1;
            let position = self.layout.position_for_index(index);
            if let Some(first) = self.pool.first_mut() {
                first.relabel(axis, index, position);
            }
            self.pool.rotate_first_to_last();
            moved += 1;
        }
        moved
    }

    /// Moves the last handles to the front of the pool until the first handle shows `top`.
    fn recycle_backward(&mut self, top: i64) -> usize {
        let Some(first) = self.pool.first() else {
            return 0;
        };
        let gap = first.data_index() - top;
        if gap <= 0 {
            return 0;
        }
        if gap >= self.pool.len() as i64 {
            self.relabel_from(top);
            return self.pool.len();
        }

        let axis = self.options.axis;
        for _ in 0..gap {
            let Some(first) = self.pool.first() else {
                break;
            };
            let index = first.data_index() - 1;
            let position = self.layout.position_for_index(index);
            if let Some(last) = self.pool.last_mut() {
                last.relabel(axis, index, position);
            }
            self.pool.rotate_last_to_first();
        }
        gap as usize
    }
}
