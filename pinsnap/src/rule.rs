use alloc::vec::Vec;

use crate::key::RegionKey;
use crate::types::distance;
use crate::{Easing, PinnedRegion, SettleDuration, SnapOptions, SnapTarget};

/// The snapping policy a scroll driver consults when scrolling settles.
///
/// A rule is an immutable snapshot: it is derived from the pinned regions registered at one point
/// in time and never observes later registrations. Build a new rule to pick up changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapRule {
    targets: Vec<SnapTarget>,
    options: SnapOptions,
}

impl SnapRule {
    /// Derives a rule from the currently registered pinned regions.
    ///
    /// Returns `None` when there is nothing to snap to: `regions` is empty or `max_scroll` is
    /// zero. Regions are ordered by `start_offset`, then by `id`, so the result does not depend on
    /// the order they were registered in. Inverted regions (`end_offset < start_offset`) are
    /// clamped to zero width.
    pub fn from_regions<K: RegionKey>(
        regions: &[PinnedRegion<K>],
        max_scroll: u64,
        options: SnapOptions,
    ) -> Option<Self> {
        if max_scroll == 0 || regions.is_empty() {
            sdebug!(
                regions = regions.len(),
                max_scroll,
                "SnapRule::from_regions: nothing to snap to"
            );
            return None;
        }

        let mut sorted: Vec<&PinnedRegion<K>> = regions.iter().collect();
        sorted.sort_by(|a, b| {
            a.start_offset
                .cmp(&b.start_offset)
                .then_with(|| a.id.cmp(&b.id))
        });

        let targets = sorted
            .into_iter()
            .map(|region| {
                if region.is_inverted() {
                    swarn!(
                        start_offset = region.start_offset,
                        end_offset = ?region.end_offset,
                        "SnapRule::from_regions: inverted region clamped to zero width"
                    );
                }
                SnapTarget::from_region(region, max_scroll)
            })
            .collect();

        Some(Self { targets, options })
    }

    /// Builds a rule from already-normalized targets, kept in the given order.
    ///
    /// Order decides which target wins a distance tie.
    pub fn from_targets(targets: Vec<SnapTarget>, options: SnapOptions) -> Self {
        debug_assert!(
            targets
                .iter()
                .all(|t| 0.0 <= t.start && t.start <= t.center && t.center <= t.end && t.end <= 1.0),
            "SnapRule::from_targets: targets must satisfy 0 <= start <= center <= end <= 1"
        );
        Self { targets, options }
    }

    pub fn targets(&self) -> &[SnapTarget] {
        &self.targets
    }

    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    pub fn tolerance(&self) -> f64 {
        self.options.tolerance
    }

    pub fn settle(&self) -> SettleDuration {
        self.options.settle
    }

    pub fn easing(&self) -> Easing {
        self.options.easing
    }

    pub fn delay_ms(&self) -> u64 {
        self.options.delay_ms
    }

    /// Returns `true` when `value` falls inside any target's tolerance band.
    pub fn is_in_band(&self, value: f64) -> bool {
        let tolerance = self.options.tolerance;
        self.targets.iter().any(|t| t.contains(value, tolerance))
    }

    /// The target a settle at `value` snaps to, if any.
    ///
    /// `None` means `value` lies in free space between pinned regions.
    pub fn nearest(&self, value: f64) -> Option<&SnapTarget> {
        if !self.is_in_band(value) {
            return None;
        }
        nearest_target(&self.targets, value)
    }

    /// Maps a normalized resting position to the position scrolling should settle at.
    ///
    /// Positions in free space are returned unchanged; positions inside (or within `tolerance`
    /// of) any pinned region resolve to the nearest target center.
    pub fn snap_to(&self, value: f64) -> f64 {
        let snapped = self.nearest(value).map_or(value, |t| t.center);
        strace!(value, snapped, "SnapRule::snap_to");
        snapped
    }

    /// Duration of the correction from `from` to `to` (both normalized).
    pub fn settle_duration_ms(&self, from: f64, to: f64) -> u64 {
        self.options.settle.for_distance(distance(from, to))
    }
}

/// Returns the target whose center is closest to `value`.
///
/// Ties go to the earliest target in `targets`.
pub fn nearest_target(targets: &[SnapTarget], value: f64) -> Option<&SnapTarget> {
    let (first, rest) = targets.split_first()?;
    Some(rest.iter().fold(first, |best, t| {
        if t.distance_to_center(value) < best.distance_to_center(value) {
            t
        } else {
            best
        }
    }))
}
