use alloc::vec::Vec;

use crate::{SnapTarget, Trigger};

/// Whether a snap rule is currently installed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinatorState {
    #[default]
    Idle,
    Active,
}

/// A recompute that has been scheduled but has not fired yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRecompute {
    pub trigger: Trigger,
    pub due_ms: u64,
}

/// A lightweight, serializable snapshot of a coordinator.
///
/// Useful for debug overlays and for asserting coordinator state in tests without holding a
/// borrow of the coordinator.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapSnapshot {
    pub state: CoordinatorState,
    pub targets: Vec<SnapTarget>,
    pub pending: Option<PendingRecompute>,
}
