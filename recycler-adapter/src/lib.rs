//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and only talks to a host through the `ScrollContainer`
//! and `ItemView` traits. This crate provides small, framework-neutral pieces commonly needed
//! by adapters:
//!
//! - [`ScrollRect`], a headless scroll container with clamped offsets and scroll-bar values
//! - [`Controller`], which moves the container and feeds the resulting scroll triggers and
//!   bind requests through a `RecyclingView`
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod scroll_rect;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use scroll_rect::ScrollRect;
