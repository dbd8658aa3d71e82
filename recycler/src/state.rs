use alloc::vec::Vec;

use crate::SlotId;

/// A serializable snapshot of one pooled handle.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleState {
    pub slot: SlotId,
    pub data_index: i64,
    pub position: f32,
    pub active: bool,
    pub is_updated: bool,
}

/// A snapshot of the whole view: container geometry plus every handle in pool order.
///
/// Useful for debugging overlays and for asserting layout in tests without reaching into the
/// host's visuals.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub content_offset: f32,
    pub content_extent: f32,
    pub data_len: usize,
    pub handles: Vec<HandleState>,
}

impl FrameState {
    /// Rows of the active handles, in pool order.
    pub fn active_rows(&self) -> impl Iterator<Item = i64> + '_ {
        self.handles
            .iter()
            .filter(|h| h.active)
            .map(|h| h.data_index)
    }
}
