/// The scroll axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Maps a main-axis position to a 2D anchored position.
    ///
    /// Positions produced by [`crate::Layout`] are negative and grow away from the origin with the
    /// row index. Vertical lists use a y-up convention, so rows go down (`y = main`). Horizontal
    /// lists grow rightwards (`x = -main`).
    pub fn point(self, main: f32) -> Point {
        match self {
            Self::Vertical => Point { x: 0.0, y: main },
            Self::Horizontal => Point { x: -main, y: 0.0 },
        }
    }

    /// Converts a raw normalized scroll-bar value into progress: `0` at the leading edge (row 0)
    /// and `1` at the trailing edge.
    ///
    /// Vertical scroll bars report `1` at the top; horizontal ones report `0` at the left.
    pub fn progress(self, normalized: f32) -> f32 {
        match self {
            Self::Vertical => 1.0 - normalized,
            Self::Horizontal => normalized,
        }
    }

    /// Inverse of [`Axis::progress`].
    pub fn normalized_from_progress(self, progress: f32) -> f32 {
        match self {
            Self::Vertical => 1.0 - progress,
            Self::Horizontal => progress,
        }
    }

    /// Computes the raw normalized scroll-bar value for a content offset.
    ///
    /// When the content fits inside the viewport the value sits at the leading edge.
    pub fn normalized(self, offset: f32, content_extent: f32, viewport_extent: f32) -> f32 {
        let scrollable = content_extent - viewport_extent;
        let progress = if scrollable > 0.0 {
            offset / scrollable
        } else {
            0.0
        };
        self.normalized_from_progress(progress)
    }

    /// Which edge (if any) a raw normalized value sits on.
    pub fn edge_at(self, normalized: f32) -> Option<Edge> {
        let progress = self.progress(normalized);
        if progress <= 0.0 {
            Some(Edge::Leading)
        } else if progress >= 1.0 {
            Some(Edge::Trailing)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Movement relative to row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Toward later rows (content offset grows).
    Forward,
    /// Toward earlier rows.
    Backward,
}

/// A boundary of the scrollable range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// The edge holding row 0.
    Leading,
    /// The edge holding the last row.
    Trailing,
}

/// Where a jump places the target row inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    Top,
    Center,
    Bottom,
}

/// A scroll trigger reported by the host container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    /// Content offset along the scroll axis. Grows toward later rows; negative while the host
    /// overscrolls past the leading edge.
    pub offset: f32,
    /// The host's raw normalized scroll-bar value on the scroll axis.
    pub normalized: f32,
}

impl ScrollEvent {
    pub fn new(offset: f32, normalized: f32) -> Self {
        Self { offset, normalized }
    }
}

/// Stable identity of a pooled handle: its creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn get(self) -> usize {
        self.0
    }
}
