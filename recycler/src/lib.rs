//! A headless recycling list view: a bounded pool of item handles reused as the container
//! scrolls.
//!
//! For a ready-made scroll container and a frame-driven controller, see the `recycler-adapter`
//! crate.
//!
//! The engine keeps only a few more handles than fit in the viewport. When the content scrolls,
//! the handles that leave one end are relabeled with new rows and moved to the other end; the
//! host is told which handles need fresh content through an [`Event`] queue. Rows are uniform in
//! size, so every position is plain arithmetic (see [`Layout`]).
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a [`ScrollContainer`] (viewport size in, content size and offset out)
//! - an [`ItemView`] prototype (item size, placement and visibility of pooled visuals)
//! - scroll notifications via [`RecyclingView::on_scroll`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod error;
mod events;
mod handle;
mod jump;
mod layout;
mod options;
mod pool;
mod recycle;
mod state;
mod types;
mod view;


pub use container::ScrollContainer;
pub use error::Error;
pub use events::{Event, EventQueue};
pub use handle::{ItemHandle, ItemView};
pub use layout::Layout;
pub use options::{DEFAULT_POOL_SLACK, RecyclerOptions};
pub use state::{FrameState, HandleState};
pub use types::{Alignment, Axis, Edge, Point, ScrollDirection, ScrollEvent, SlotId};
pub use view::RecyclingView;
