/// Pure geometry for a uniform-size list: index ↔ position mapping, content extent and the
/// window sizes used by the recycling and jump logic.
///
/// Positions follow the anchored-position convention of most retained UI toolkits: row `i`
/// sits at `-(top_margin + i * stride)` along the scroll axis, so growing indexes move away
/// from the origin. Content offsets are the positive mirror of that (`offset_for_index`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Uniform item size along the scroll axis (excludes `spacing`).
    pub item_size: f32,
    pub spacing: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    /// Viewport size along the scroll axis.
    pub viewport_extent: f32,
}

impl Layout {
    pub fn new(
        item_size: f32,
        spacing: f32,
        top_margin: f32,
        bottom_margin: f32,
        viewport_extent: f32,
    ) -> Self {
        Self {
            item_size,
            spacing,
            top_margin,
            bottom_margin,
            viewport_extent,
        }
    }

    /// Distance between the starts of two consecutive rows.
    pub fn stride(&self) -> f32 {
        self.item_size + self.spacing
    }

    pub fn position_for_index(&self, index: i64) -> f32 {
        -(self.top_margin + index as f32 * self.stride())
    }

    /// Inverse of [`Layout::position_for_index`], rounded to the nearest row.
    pub fn index_for_position(&self, position: f32) -> i64 {
        round_i64((-position - self.top_margin) / self.stride())
    }

    /// Content offset that puts row `index` at the leading edge of the viewport.
    pub fn offset_for_index(&self, index: i64) -> f32 {
        self.top_margin + index as f32 * self.stride()
    }

    /// Size of the scrollable content for `len` rows. Never negative; an empty list is just its
    /// margins.
    pub fn content_extent(&self, len: usize) -> f32 {
        if len == 0 {
            return (self.top_margin + self.bottom_margin).max(0.0);
        }
        let extent =
            len as f32 * self.stride() + self.top_margin + self.bottom_margin - self.spacing;
        extent.max(0.0)
    }

    /// Row crossing the leading edge of the viewport at `offset`. Clamped to 0 while the offset
    /// is inside the leading margin or overscrolled.
    pub fn top_visible_index(&self, offset: f32) -> i64 {
        if offset < 0.0 {
            return 0;
        }
        trunc_i64((offset - self.top_margin) / self.stride()).max(0)
    }

    /// Row crossing the trailing edge of the viewport at `offset`.
    pub fn bottom_visible_index(&self, offset: f32) -> i64 {
        if offset < 0.0 {
            return 0;
        }
        trunc_i64((offset + self.viewport_extent - self.top_margin) / self.stride()).max(0)
    }

    /// Upper bound on rows that can be on screen at once, plus one row of slack at each end.
    pub fn max_visible_count(&self) -> usize {
        ceil_i64(self.viewport_extent / self.stride()).max(0) as usize + 2
    }

    pub fn max_pool_size(&self, slack: usize) -> usize {
        self.max_visible_count() + slack
    }

    /// Rows that fit when the list is aligned to the trailing edge of the viewport.
    pub fn top_fit_count(&self) -> i64 {
        trunc_i64((self.viewport_extent - self.bottom_margin + self.spacing) / self.stride())
    }

    /// Rows that fit when the list is aligned to the leading edge of the viewport.
    pub fn bottom_fit_count(&self) -> i64 {
        trunc_i64((self.viewport_extent - self.top_margin + self.spacing) / self.stride())
    }

    /// Rows in half a viewport, rounded up by one.
    pub fn center_half_count(&self) -> i64 {
        trunc_i64(
            (self.viewport_extent - self.top_margin + self.spacing) / self.stride() / 2.0 + 1.0,
        )
    }
}

// `f32::{trunc, ceil, round}` need `std`; casts truncate toward zero and saturate.

fn trunc_i64(x: f32) -> i64 {
    x as i64
}

fn ceil_i64(x: f32) -> i64 {
    let t = x as i64;
    if (t as f32) < x { t + 1 } else { t }
}

fn round_i64(x: f32) -> i64 {
    if x >= 0.0 {
        (x + 0.5) as i64
    } else {
        -((-x + 0.5) as i64)
    }
}
