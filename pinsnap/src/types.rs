pub type RegionId = u64;

/// A section of the document that holds the viewport fixed while its internal animation plays.
///
/// Offsets are absolute scroll distances (e.g. pixels from the top of the document).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinnedRegion<K = RegionId> {
    pub id: K,
    /// Scroll offset at which the pin engages.
    pub start_offset: u64,
    /// Scroll offset at which the pin releases. `None` is a zero-width pin.
    pub end_offset: Option<u64>,
}

impl<K> PinnedRegion<K> {
    pub fn new(id: K, start_offset: u64, end_offset: u64) -> Self {
        Self {
            id,
            start_offset,
            end_offset: Some(end_offset),
        }
    }

    /// A zero-width pin at `offset`.
    pub fn point(id: K, offset: u64) -> Self {
        Self {
            id,
            start_offset: offset,
            end_offset: None,
        }
    }

    /// The release offset, clamped so it never precedes `start_offset`.
    pub fn end(&self) -> u64 {
        self.end_offset
            .unwrap_or(self.start_offset)
            .max(self.start_offset)
    }

    /// Scroll distance the pin holds the viewport for.
    pub fn span(&self) -> u64 {
        self.end() - self.start_offset
    }

    /// Returns `true` when the registered end offset precedes the start offset.
    pub fn is_inverted(&self) -> bool {
        matches!(self.end_offset, Some(end) if end < self.start_offset)
    }
}

/// A normalized resting position derived from a [`PinnedRegion`].
///
/// All fields are fractions of the document's maximum scroll extent and satisfy
/// `0 <= start <= center <= end <= 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTarget {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl SnapTarget {
    /// Normalizes `region` against `max_scroll`.
    ///
    /// `max_scroll` must be non-zero. Offsets past `max_scroll` are clamped to `1.0`.
    pub fn from_region<K>(region: &PinnedRegion<K>, max_scroll: u64) -> Self {
        debug_assert!(max_scroll > 0, "SnapTarget::from_region: zero max_scroll");
        let max = max_scroll.max(1) as f64;
        let start = (region.start_offset as f64 / max).clamp(0.0, 1.0);
        let end = (region.end() as f64 / max).clamp(start, 1.0);
        Self {
            start,
            end,
            center: start + (end - start) * 0.5,
        }
    }

    /// Returns `true` when `value` lies within `[start - tolerance, end + tolerance]`.
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        value >= self.start - tolerance && value <= self.end + tolerance
    }

    pub fn distance_to_center(&self, value: f64) -> f64 {
        distance(self.center, value)
    }
}

pub(crate) fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}

/// What asked the coordinator to recompute its snap rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// The debounced settle after a route mounted.
    RouteEnter,
    /// An explicit refresh (including resize).
    ManualRefresh,
}
