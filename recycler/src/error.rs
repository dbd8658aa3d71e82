use core::fmt;

/// Errors reported by [`crate::RecyclingView`].
///
/// None of these are transient: they signal a bad argument or a configuration that cannot work,
/// so callers should not retry.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A jump target outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// The pool was asked to grow past its capacity bound.
    PoolExhausted { capacity: usize },
    /// The item prototype reported an unusable size along the scroll axis.
    InvalidItemExtent { extent: f32 },
    /// The container reported an unusable viewport size along the scroll axis.
    InvalidViewport { extent: f32 },
    /// A spacing or margin option is negative or not finite.
    InvalidOptions { field: &'static str, value: f32 },
    /// The view has been disposed.
    Disposed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} rows")
            }
            Self::PoolExhausted { capacity } => {
                write!(f, "item pool is full (capacity {capacity})")
            }
            Self::InvalidItemExtent { extent } => {
                write!(f, "item prototype extent must be finite and > 0 (got {extent})")
            }
            Self::InvalidViewport { extent } => {
                write!(f, "viewport extent must be finite and > 0 (got {extent})")
            }
            Self::InvalidOptions { field, value } => {
                write!(f, "option `{field}` must be finite and >= 0 (got {value})")
            }
            Self::Disposed => f.write_str("recycling view has been disposed"),
        }
    }
}

impl core::error::Error for Error {}
