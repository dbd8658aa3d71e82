use crate::handle::ItemView;
use crate::{Alignment, Error, RecyclingView, ScrollContainer};

/// Result of an alignment computation: the row the first pooled handle shows, and the content
/// offset to scroll the container to.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Placement {
    first: i64,
    offset: f32,
}

impl Placement {
    const ORIGIN: Self = Self {
        first: 0,
        offset: 0.0,
    };
}

impl<T: ItemView, C: ScrollContainer> RecyclingView<T, C> {
    /// Re-indexes the pool around `index` and scrolls the container so that row `index` sits at
    /// the top of the viewport.
    ///
    /// Rows too close to the end to be top-aligned are handled as `jump_bottom(len - 1)`.
    pub fn jump_top(&mut self, index: usize) -> Result<(), Error> {
        self.jump_to(index, Alignment::Top)
    }

    /// Like [`Self::jump_top`], centering row `index`.
    ///
    /// Rows within half a viewport of either end fall back to `jump_top(0)`. A row near the
    /// end therefore lands at the start of the list, not bottom-aligned.
    pub fn jump_center(&mut self, index: usize) -> Result<(), Error> {
        self.jump_to(index, Alignment::Center)
    }

    /// Like [`Self::jump_top`], aligning row `index` to the bottom of the viewport.
    ///
    /// Rows within one viewport of the start fall back to `jump_top(0)`.
    pub fn jump_bottom(&mut self, index: usize) -> Result<(), Error> {
        self.jump_to(index, Alignment::Bottom)
    }

    /// Programmatic jump: re-indexes every handle in one pass, runs a render pass and sets the
    /// container offset directly, bypassing incremental recycling.
    ///
    /// Fails with [`Error::IndexOutOfRange`] (leaving the view untouched) when
    /// `index >= data_len`.
    pub fn jump_to(&mut self, index: usize, alignment: Alignment) -> Result<(), Error> {
        self.ensure_live()?;
        if index >= self.data_len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.data_len,
            });
        }

        let index = index as i64;
        let placement = match alignment {
            Alignment::Top => self.place_top(index),
            Alignment::Center => self.place_center(index),
            Alignment::Bottom => self.place_bottom(index),
        };
        rdebug!(
            index,
            ?alignment,
            first = placement.first,
            offset = placement.offset,
            "jump"
        );

        self.relabel_from(placement.first);
        self.render();
        self.set_content_offset(placement.offset);
        Ok(())
    }

    fn place_top(&self, index: i64) -> Placement {
        let len = self.data_len as i64;
        if index < len - self.layout.top_fit_count() {
            return Placement {
                first: index,
                offset: self.layout.offset_for_index(index),
            };
        }
        if len > self.layout.bottom_fit_count() {
            return self.place_bottom(len - 1);
        }
        // Every row fits on screen.
        rwarn!(index, len, "list fits in the viewport; jumping to the origin");
        Placement::ORIGIN
    }

    fn place_center(&self, index: i64) -> Placement {
        let len = self.data_len as i64;
        let half = self.layout.center_half_count();
        if index <= half - 1 || index >= len - half {
            rdebug!(index, half, "row too close to an end to center");
            return self.place_top(0);
        }
        let layout = &self.layout;
        Placement {
            first: index - half + 1,
            offset: layout.offset_for_index(index)
                - (layout.viewport_extent - layout.item_size) / 2.0,
        }
    }

    fn place_bottom(&self, index: i64) -> Placement {
        let fit = self.layout.bottom_fit_count();
        if index <= fit - 1 {
            return self.place_top(0);
        }
        let layout = &self.layout;
        Placement {
            first: index - fit - 1,
            offset: layout.offset_for_index(index) - (layout.viewport_extent - layout.item_size),
        }
    }
}
