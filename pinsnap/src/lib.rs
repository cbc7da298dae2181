//! Headless scroll-snap targets for pinned (sticky) scroll sections.
//!
//! For tick-driven coordination (route lifecycle, debounced recompute, a smooth-scroll driver),
//! see the `pinsnap-adapter` crate.
//!
//! A pinned region holds the viewport fixed while a scroll-linked animation plays across a span
//! of scroll distance. This crate derives normalized snap targets from those regions and decides
//! where scrolling should come to rest:
//! - positions inside (or within a tolerance of) a pinned region settle at the nearest region
//!   center
//! - positions in free space between regions are left untouched
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the pinned regions currently registered (absolute scroll offsets)
//! - the document's maximum scroll extent
//! - the normalized resting position whenever scrolling settles
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod easing;
mod key;
mod options;
mod rule;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use easing::Easing;
pub use key::RegionKey;
pub use options::{DEFAULT_TOLERANCE, FULL_SETTLE_DISTANCE, SettleDuration, SnapOptions};
pub use rule::{SnapRule, nearest_target};
pub use state::{CoordinatorState, PendingRecompute, SnapSnapshot};
pub use types::{PinnedRegion, RegionId, SnapTarget, Trigger};
