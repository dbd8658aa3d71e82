use recycler::{Axis, ScrollContainer, ScrollEvent};

/// A headless scroll container: viewport size, content size and a clamped content offset.
///
/// It stands in for a toolkit scroll view. The recycler writes content size and programmatic
/// offsets into it; the host moves it with [`ScrollRect::set_offset_clamped`] and reports the
/// result with [`ScrollRect::scroll_event`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRect {
    axis: Axis,
    viewport: f32,
    content_extent: f32,
    offset: f32,
}

impl ScrollRect {
    pub fn new(axis: Axis, viewport: f32) -> Self {
        Self {
            axis,
            viewport,
            content_extent: 0.0,
            offset: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn viewport(&self) -> f32 {
        self.viewport
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Largest reachable offset; `0` when the content fits in the viewport.
    pub fn max_offset(&self) -> f32 {
        (self.content_extent - self.viewport).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Moves the content, clamped to `[0, max_offset]`. Returns the applied offset.
    pub fn set_offset_clamped(&mut self, offset: f32) -> f32 {
        self.offset = self.clamp_offset(offset);
        self.offset
    }

    /// The raw normalized scroll-bar value for the current offset.
    pub fn normalized(&self) -> f32 {
        self.axis
            .normalized(self.offset, self.content_extent, self.viewport)
    }

    pub fn scroll_event(&self) -> ScrollEvent {
        ScrollEvent::new(self.offset, self.normalized())
    }
}

impl ScrollContainer for ScrollRect {
    fn viewport_extent(&self, _axis: Axis) -> f32 {
        self.viewport
    }

    /// Stores the new content size and pulls the offset back inside the new range.
    fn set_content_extent(&mut self, _axis: Axis, extent: f32) {
        self.content_extent = extent;
        self.offset = self.clamp_offset(self.offset);
    }

    fn set_content_offset(&mut self, _axis: Axis, offset: f32) {
        self.set_offset_clamped(offset);
    }
}
