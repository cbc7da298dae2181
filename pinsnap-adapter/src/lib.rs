//! Adapter utilities for the `pinsnap` crate.
//!
//! The `pinsnap` crate is UI-agnostic and focuses on the snap math. This crate provides the
//! small, framework-neutral stateful pieces an application wires around it:
//!
//! - A snap coordinator that owns the single active rule and rebuilds it on route entry, resize
//!   and refresh (debounced, cancelable)
//! - An in-memory animation registry with scoped per-section contexts
//! - A tween-based smooth-scroll driver that snaps once when scrolling settles
//! - A runtime that owns one of each for the lifetime of the application
//!
//! Nothing here owns a clock or an event loop: adapters pass `now_ms` into every time-dependent
//! call.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coordinator;
mod options;
mod registry;
mod runtime;
mod scroller;
mod timer;
mod tween;


pub use coordinator::{Recompute, SnapCoordinator};
pub use options::{CoordinatorOptions, ScrollerOptions};
pub use registry::{AnimationContext, AnimationRegistry, ContextId, Registry};
pub use runtime::{FrameReport, ScrollRuntime};
pub use scroller::{Motion, SmoothScroller};
pub use timer::{DebounceTimer, Scheduled};
pub use tween::Tween;
