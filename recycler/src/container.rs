use crate::Axis;

/// The host's scrollable container, as seen by the recycler.
///
/// The viewport size is read once, when the view is constructed. The recycler pushes the
/// content size whenever the row count changes and sets the content offset directly for
/// programmatic moves (setup, reset, jumps). Scroll changes flow the other way, through
/// [`crate::RecyclingView::on_scroll`].
pub trait ScrollContainer {
    fn viewport_extent(&self, axis: Axis) -> f32;

    fn set_content_extent(&mut self, axis: Axis, extent: f32);

    /// `offset` grows toward later rows; `0` shows the leading margin.
    fn set_content_offset(&mut self, axis: Axis, offset: f32);
}

impl<C: ScrollContainer + ?Sized> ScrollContainer for &mut C {
    fn viewport_extent(&self, axis: Axis) -> f32 {
        (**self).viewport_extent(axis)
    }

    fn set_content_extent(&mut self, axis: Axis, extent: f32) {
        (**self).set_content_extent(axis, extent);
    }

    fn set_content_offset(&mut self, axis: Axis, offset: f32) {
        (**self).set_content_offset(axis, offset);
    }
}
