use crate::{Axis, Error};

/// Number of spare handles kept beyond the visible count.
pub const DEFAULT_POOL_SLACK: usize = 5;

/// Configuration for [`crate::RecyclingView`].
///
/// Read once at construction; the item size comes from the prototype and the viewport size from
/// the container, so neither appears here.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecyclerOptions {
    pub axis: Axis,
    /// Space between items.
    pub spacing: f32,
    /// Padding before the first item.
    pub top_margin: f32,
    /// Padding after the last item.
    pub bottom_margin: f32,
    /// Spare handles allocated beyond the visible count.
    pub pool_slack: usize,
}

impl Default for RecyclerOptions {
    fn default() -> Self {
        Self::new(Axis::Vertical)
    }
}

impl RecyclerOptions {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            spacing: 0.0,
            top_margin: 0.0,
            bottom_margin: 0.0,
            pool_slack: DEFAULT_POOL_SLACK,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_margins(mut self, top_margin: f32, bottom_margin: f32) -> Self {
        self.top_margin = top_margin;
        self.bottom_margin = bottom_margin;
        self
    }

    pub fn with_pool_slack(mut self, pool_slack: usize) -> Self {
        self.pool_slack = pool_slack;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("spacing", self.spacing),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOptions { field, value });
            }
        }
        Ok(())
    }
}
